//! Data model types for static map requests.
//!
//! This module contains the value types a request is built from:
//! - Locations (addresses or coordinates)
//! - Markers and anchors
//! - Paths
//! - Style rules
//! - The root request and its builder

/// Declares a closed enum whose variants map one-to-one onto wire tokens.
///
/// Generates `as_str`, `ALL`, `Display` and `FromStr`, plus serde renames
/// so JSON input uses the same tokens as the URL.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident as $kind:literal {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $token:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[cfg_attr(feature = "serde", serde(rename = $token))]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the token used on the wire.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $token,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($token => Ok($name::$variant),)+
                    _ => Err($crate::error::ParseError::UnknownVariant {
                        kind: $kind,
                        value: s.to_string(),
                    }),
                }
            }
        }
    };
}

pub mod builder;
pub mod location;
pub mod marker;
pub mod path;
pub mod request;
pub mod style;

pub use builder::{MarkerBuilder, PathBuilder, RequestBuilder};
pub use location::{GeoPoint, Location};
pub use marker::{Anchor, AnchorPosition, Marker, MarkerScale, MarkerSize};
pub use path::Path;
pub use request::{ImageFormat, MapType, Scale, Size, StaticMapRequest};
pub use style::{MapStyle, StyleValue};
