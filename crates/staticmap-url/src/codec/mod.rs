//! Query-string encoding for static map requests.
//!
//! Field formatters produce unencoded parameter values; the query module
//! validates, assembles, sorts and percent-encodes them.

pub mod fields;
pub mod primitives;
pub mod query;

pub use fields::{
    format_anchor, format_location, format_marker, format_marker_with, format_path, format_point,
    format_style, format_visible,
};
pub use primitives::{QueryWriter, encode_component, format_number, round_half_up};
pub use query::{
    EncodeOptions, MAP_ENDPOINT, ParamValue, QueryParams, build_params, encode_request,
    encode_request_with_options, format_size,
};
