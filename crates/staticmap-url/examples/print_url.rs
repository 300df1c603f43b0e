//! Prints the URLs for a few sample maps.

use staticmap_url::{
    AnchorPosition, EncodeOptions, MapStyle, MapType, MarkerSize, RequestBuilder,
    encode_request, encode_request_with_options,
};

fn main() {
    let samples = vec![
        (
            "Greenwich",
            RequestBuilder::new("YOUR_KEY", (400, 300))
                .center((51.477222, 0.0))
                .zoom(14)
                .map_type(MapType::Terrain)
                .build(),
        ),
        (
            "Alaska markers",
            RequestBuilder::new("YOUR_KEY", (400, 400))
                .marker(|m| m
                    .size(MarkerSize::Small)
                    .color("blue")
                    .label("B")
                    .location((64.05, -145.36))
                )
                .marker(|m| m
                    .anchor(AnchorPosition::Bottom)
                    .icon("https://goo.gl/5y3S82")
                    .location("Delta Junction, AK")
                )
                .build(),
        ),
        (
            "Styled Brooklyn",
            RequestBuilder::new("YOUR_KEY", (400, 300))
                .center("Brooklyn")
                .zoom(15)
                .style(MapStyle::new().element("labels").with("visibility", "off"))
                .style(MapStyle::new().feature("water").with("color", "0x1994bf").with("lightness", 43))
                .build(),
        ),
        (
            "Manhattan path",
            RequestBuilder::new("YOUR_KEY", (400, 300))
                .path(|p| p
                    .weight(5)
                    .color("0x0000ff")
                    .point((40.737102, -73.990318))
                    .point((40.755823, -73.986397))
                )
                .build(),
        ),
    ];

    for (name, request) in &samples {
        println!("=== {} ===", name);
        match encode_request(request) {
            Ok(url) => println!("{}", url),
            Err(e) => println!("error: {}", e),
        }
    }

    // The first-generation policy does not count paths as framing.
    let legacy = EncodeOptions::markers_only();
    let (name, request) = &samples[3];
    println!("\n=== {} (markers-only policy) ===", name);
    match encode_request_with_options(request, &legacy) {
        Ok(url) => println!("{}", url),
        Err(e) => println!("error: {}", e),
    }
}
