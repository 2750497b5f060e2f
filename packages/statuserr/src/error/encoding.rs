//! Structured encoding for transport to clients
//!
//! The encoded form has exactly two string fields:
//!
//! ```json
//! {"code":"404","error":"missing"}
//! ```
//!
//! `code` is the base-10 text of the status code, never a JSON number.
//! Existing consumers rely on that.

use std::collections::BTreeMap;

use serde::de::{self, Deserializer};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use super::types::{DecodeError, StackError, StatusError};

/// Key holding the message.
pub const ERROR_KEY: &str = "error";
/// Key holding the status code as text.
pub const CODE_KEY: &str = "code";

impl StatusError {
    /// The two-field mapping `{ "error": message, "code": "<code>" }`.
    #[must_use]
    pub fn encode(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (ERROR_KEY.to_string(), self.message.clone()),
            (CODE_KEY.to_string(), self.code.to_string()),
        ])
    }

    /// JSON text of [`StatusError::encode`].
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Parse the JSON form back into an error. Nothing is logged.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

impl Serialize for StatusError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Sorted key order, same bytes as encoding `encode()` as a map.
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry(CODE_KEY, &self.code.to_string())?;
        map.serialize_entry(ERROR_KEY, &self.message)?;
        map.end()
    }
}

#[derive(Deserialize)]
struct Wire {
    error: String,
    code: String,
}

impl TryFrom<Wire> for StatusError {
    type Error = DecodeError;

    fn try_from(wire: Wire) -> Result<Self, Self::Error> {
        let code = wire
            .code
            .parse::<i32>()
            .map_err(|_| DecodeError::InvalidCode(wire.code.clone()))?;
        Ok(Self::from_parts(code, wire.error))
    }
}

impl<'de> Deserialize<'de> for StatusError {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::deserialize(deserializer)?;
        Self::try_from(wire).map_err(de::Error::custom)
    }
}

impl Serialize for StackError {
    /// Encodes as the inner error; the stack stays server side.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.serialize(serializer)
    }
}
