//! Primitive formatting for the query string.
//!
//! Implements number rendering, pixel rounding and percent-encoding.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

// =============================================================================
// PERCENT-ENCODING
// =============================================================================

/// Characters escaped in query keys and values.
///
/// Everything but the RFC 3986 unreserved set (`A-Z a-z 0-9 - _ . ~`).
/// This is `encodeURIComponent` with `! ' ( ) *` escaped as well.
pub const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encodes one query component (uppercase hex, UTF-8 bytes).
pub fn encode_component(input: &str) -> String {
    utf8_percent_encode(input, QUERY_COMPONENT).to_string()
}

/// Writer for building a query string.
///
/// Pairs are separated by `&`; keys and values are encoded on write.
#[derive(Debug, Clone, Default)]
pub struct QueryWriter {
    buf: String,
    pairs: usize,
}

impl QueryWriter {
    /// Creates a new writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a writer that appends to an existing prefix (e.g. `endpoint?`).
    pub fn with_prefix(prefix: &str, capacity: usize) -> Self {
        let mut buf = String::with_capacity(prefix.len() + capacity);
        buf.push_str(prefix);
        Self { buf, pairs: 0 }
    }

    /// Returns the written string.
    pub fn into_string(self) -> String {
        self.buf
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Returns the number of pairs written.
    pub fn pairs(&self) -> usize {
        self.pairs
    }

    /// Writes one `name=value` pair.
    pub fn write_pair(&mut self, name: &str, value: &str) {
        if self.pairs > 0 {
            self.buf.push('&');
        }
        self.buf.extend(utf8_percent_encode(name, QUERY_COMPONENT));
        self.buf.push('=');
        self.buf.extend(utf8_percent_encode(value, QUERY_COMPONENT));
        self.pairs += 1;
    }
}

// =============================================================================
// NUMBERS
// =============================================================================

/// Renders a number in its shortest natural decimal form.
///
/// Integral values carry no fractional part (`0`, `14`, `-69`), negative
/// zero renders as `0`, and non-finite values use `NaN` / `Infinity`.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}

/// Rounds to the nearest integer, with halves rounding toward +∞.
///
/// `2.5` becomes `3` and `-2.5` becomes `-2`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}
