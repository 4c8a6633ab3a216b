//! Opaque dynamic values carried through to the identity store API.
//!
//! The API accepts arbitrary JSON for a unique attribute's value. Values supplied by the
//! caller are held as-is and only encoded when the request is serialized; values coming
//! back from the service may arrive as already-encoded JSON text and are decoded on demand.

use crate::error::FlexResult;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;

/// An untyped document value.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    /// A caller-supplied value, encoded lazily at serialization time.
    Lazy(Value),
    /// JSON text produced by the remote side.
    Encoded(String),
}

impl Document {
    /// Wrap a value for deferred encoding.
    pub fn lazy(value: impl Into<Value>) -> Self {
        Self::Lazy(value.into())
    }

    /// Wrap JSON text without parsing it.
    pub fn encoded(text: impl Into<String>) -> Self {
        Self::Encoded(text.into())
    }

    /// Whether the value has not been encoded yet.
    pub fn is_lazy(&self) -> bool {
        matches!(self, Self::Lazy(_))
    }

    /// Decode the document into a JSON value.
    pub fn decode(&self) -> FlexResult<Value> {
        match self {
            Self::Lazy(value) => Ok(value.clone()),
            Self::Encoded(text) => Ok(serde_json::from_str(text)?),
        }
    }

    /// Encode the document as JSON text.
    pub fn encode(&self) -> FlexResult<String> {
        match self {
            Self::Lazy(value) => Ok(serde_json::to_string(value)?),
            Self::Encoded(text) => Ok(text.clone()),
        }
    }

    /// The string content, when the document holds a JSON string.
    ///
    /// Encoded text is decoded first; text that is not valid JSON yields `None`.
    pub fn as_str(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Lazy(Value::String(s)) => Some(Cow::Borrowed(s.as_str())),
            Self::Lazy(_) => None,
            Self::Encoded(text) => match serde_json::from_str(text) {
                Ok(Value::String(s)) => Some(Cow::Owned(s)),
                _ => None,
            },
        }
    }
}

impl From<Value> for Document {
    fn from(value: Value) -> Self {
        Self::Lazy(value)
    }
}

impl From<String> for Document {
    fn from(value: String) -> Self {
        Self::Lazy(Value::String(value))
    }
}

impl From<&str> for Document {
    fn from(value: &str) -> Self {
        Self::Lazy(Value::String(value.to_string()))
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lazy(value) => write!(f, "{}", value),
            Self::Encoded(text) => write!(f, "{}", text),
        }
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Lazy(value) => value.serialize(serializer),
            Self::Encoded(text) => {
                let value: Value =
                    serde_json::from_str(text).map_err(serde::ser::Error::custom)?;
                value.serialize(serializer)
            }
        }
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Self::Lazy)
    }
}
