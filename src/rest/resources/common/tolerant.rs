//! Decoders for fields whose JSON shape varies between API versions and
//! order ages.
//!
//! - Line-item `properties` may be absent, `null`, a single object, or an
//!   array of objects. It always decodes to a `Vec<NoteAttribute>`.
//! - Shipping-line `requested_fulfillment_service_id` may be `null`, a
//!   number or a string. It always decodes to a `String`.
//!
//! Both are wired into the record types with `deserialize_with`, so callers
//! only ever see the canonical form.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A `name`/`value` pair, used for order note attributes and line-item
/// properties. `value` is kept as raw JSON since storefronts send strings,
/// numbers and booleans.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct NoteAttribute {
    /// Attribute name.
    #[serde(default)]
    pub name: String,

    /// Attribute value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl NoteAttribute {
    /// Creates a pair with a string value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(Value::String(value.into())),
        }
    }

    /// `true` when both name and value are missing.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.value.is_none()
    }

    /// The value as text: strings unquoted, other JSON as written.
    #[must_use]
    pub fn value_text(&self) -> Option<String> {
        self.value.as_ref().map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// The shapes a line item's `properties` field arrives in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyList {
    /// Absent, `null`, or an object with neither name nor value.
    Empty,
    /// A bare object.
    Single(NoteAttribute),
    /// An array of objects.
    Many(Vec<NoteAttribute>),
}

impl PropertyList {
    /// Classifies a raw `properties` value.
    ///
    /// # Errors
    ///
    /// Fails when an array element or the single value is not a property
    /// object, e.g. `"properties": 42`.
    pub fn classify(raw: Option<Value>) -> Result<Self, serde_json::Error> {
        match raw {
            None | Some(Value::Null) => Ok(Self::Empty),
            Some(array @ Value::Array(_)) => serde_json::from_value(array).map(Self::Many),
            Some(other) => {
                let single: NoteAttribute = serde_json::from_value(other)?;
                if single.is_blank() {
                    Ok(Self::Empty)
                } else {
                    Ok(Self::Single(single))
                }
            }
        }
    }

    /// Collapses to the canonical sequence.
    #[must_use]
    pub fn into_vec(self) -> Vec<NoteAttribute> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(single) => vec![single],
            Self::Many(many) => many,
        }
    }
}

impl<'de> Deserialize<'de> for PropertyList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<Value>::deserialize(deserializer)?;
        Self::classify(raw).map_err(de::Error::custom)
    }
}

/// `deserialize_with` target for `properties`. Pair it with
/// `#[serde(default)]` so an absent field also yields an empty vec.
///
/// # Errors
///
/// See [`PropertyList::classify`].
pub fn deserialize_properties<'de, D>(deserializer: D) -> Result<Vec<NoteAttribute>, D::Error>
where
    D: Deserializer<'de>,
{
    PropertyList::deserialize(deserializer).map(PropertyList::into_vec)
}

/// Renders a scalar identifier as text. `null` and absent become `""`.
///
/// # Errors
///
/// Arrays and objects are rejected.
pub fn scalar_text(raw: Option<Value>) -> Result<String, String> {
    match raw {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(number_text(&n)),
        Some(Value::Bool(b)) => Ok(b.to_string()),
        Some(other @ (Value::Array(_) | Value::Object(_))) => Err(format!(
            "expected null, a number or a string for an identifier, found {other}"
        )),
    }
}

/// Integral floats below `1e21` print without a fraction, so `42.0` and `42`
/// name the same service.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// `deserialize_with` target for `requested_fulfillment_service_id`. Pair it
/// with `#[serde(default)]`.
///
/// # Errors
///
/// See [`scalar_text`].
pub fn deserialize_scalar_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    scalar_text(raw).map_err(de::Error::custom)
}
