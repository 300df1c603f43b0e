//! Command-line front end: reads a JSON map request, prints the URL.
//!
//! The JSON uses the same property names as the map component props
//! (`apiKey`, `center`, `zoom`, `size`, `markers`, `mapStyles`, `paths`, ...).

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, event};
use tracing_subscriber::EnvFilter;

use staticmap_url::{EncodeOptions, ImageSource, StaticMapRequest, ValidationPolicy, image_request_with_options};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON request file; reads stdin when omitted or `-`
    input: Option<PathBuf>,

    /// Overlays that waive the center/zoom requirement: `markers` or `markers-or-paths`
    #[arg(short, long, default_value_t = ValidationPolicy::MarkersOrPaths)]
    policy: ValidationPolicy,

    /// Alternative endpoint, e.g. a signing proxy
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Override the API key from the request
    #[arg(short, long, env = "STATICMAP_API_KEY")]
    key: Option<String>,

    /// Print `{"uri": ...}` instead of the bare URL
    #[arg(long)]
    json: bool,
}

fn read_input(input: Option<&PathBuf>) -> anyhow::Result<String> {
    match input {
        Some(path) if path.as_os_str() != "-" => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    let args = Args::parse();

    let mut options = EncodeOptions::new().with_policy(args.policy);
    if let Some(endpoint) = &args.endpoint {
        options = options.with_endpoint(endpoint)?;
    }

    let raw = read_input(args.input.as_ref())?;
    let mut request: StaticMapRequest =
        serde_json::from_str(&raw).context("invalid map request JSON")?;
    if let Some(key) = args.key {
        request.key = key;
    }

    event!(
        Level::DEBUG,
        "Encoding request with [{}] markers, [{}] paths under the [{}] policy",
        request.markers.len(),
        request.paths.len(),
        options.policy
    );

    let image = image_request_with_options(&request, (), &options)?;
    let (source, ()) = image.into_parts();

    if args.json {
        println!("{}", serde_json::to_string(&source)?);
    } else {
        let ImageSource { uri } = source;
        println!("{}", uri);
    }

    Ok(())
}
