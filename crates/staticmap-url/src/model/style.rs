//! Map style rules.
//!
//! A style rule is an open-ended bag of directives (`feature`, `element`,
//! `color`, `lightness`, `visibility`, ...). Keys keep the order they were
//! inserted in; `feature` and `element` are pulled to the front only when
//! the rule is serialized.

use std::fmt;

use crate::codec::primitives::format_number;

/// Scalar value of a style directive.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum StyleValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl StyleValue {
    /// Returns whether the value counts as set for the pinned `feature` and
    /// `element` directives: non-empty text, a non-zero number, or `true`.
    pub fn is_truthy(&self) -> bool {
        match self {
            StyleValue::Bool(b) => *b,
            StyleValue::Number(n) => *n != 0.0 && !n.is_nan(),
            StyleValue::Text(s) => !s.is_empty(),
        }
    }
}

impl fmt::Display for StyleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleValue::Bool(b) => write!(f, "{}", b),
            StyleValue::Number(n) => f.write_str(&format_number(*n)),
            StyleValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<bool> for StyleValue {
    fn from(v: bool) -> Self {
        StyleValue::Bool(v)
    }
}

impl From<f64> for StyleValue {
    fn from(v: f64) -> Self {
        StyleValue::Number(v)
    }
}

impl From<i32> for StyleValue {
    fn from(v: i32) -> Self {
        StyleValue::Number(v as f64)
    }
}

impl From<&str> for StyleValue {
    fn from(v: &str) -> Self {
        StyleValue::Text(v.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(v: String) -> Self {
        StyleValue::Text(v)
    }
}

/// One style rule, serialized as a single `style` parameter.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapStyle {
    entries: Vec<(String, StyleValue)>,
}

impl MapStyle {
    pub const FEATURE: &'static str = "feature";
    pub const ELEMENT: &'static str = "element";

    /// Creates an empty rule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `feature` selector.
    pub fn feature(self, feature: impl Into<String>) -> Self {
        self.with(Self::FEATURE, feature.into())
    }

    /// Sets the `element` selector.
    pub fn element(self, element: impl Into<String>) -> Self {
        self.with(Self::ELEMENT, element.into())
    }

    /// Sets a directive, consuming and returning the rule.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a directive.
    ///
    /// Overwriting an existing key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<StyleValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for a key, if set.
    pub fn get(&self, key: &str) -> Option<&StyleValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterates over all directives in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterates over every directive other than `feature` and `element`.
    pub fn rules(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.iter()
            .filter(|(k, _)| *k != Self::FEATURE && *k != Self::ELEMENT)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MapStyle
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut style = MapStyle::new();
        for (k, v) in iter {
            style.set(k, v);
        }
        style
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use super::{MapStyle, StyleValue};

    impl Serialize for MapStyle {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut map = serializer.serialize_map(Some(self.entries.len()))?;
            for (k, v) in &self.entries {
                map.serialize_entry(k, v)?;
            }
            map.end()
        }
    }

    struct MapStyleVisitor;

    impl<'de> Visitor<'de> for MapStyleVisitor {
        type Value = MapStyle;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of style directives to strings, numbers or booleans")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<MapStyle, A::Error> {
            let mut style = MapStyle::new();
            while let Some((key, value)) = access.next_entry::<String, StyleValue>()? {
                style.set(key, value);
            }
            Ok(style)
        }
    }

    impl<'de> Deserialize<'de> for MapStyle {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(MapStyleVisitor)
        }
    }
}
