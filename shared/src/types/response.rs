//! Wire-format response types
//!
//! Every error leaves the service as `{"errors": <string|object>}` with an
//! appropriate 4xx/5xx status. Success bodies are endpoint specific.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Error envelope used by every non-2xx response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Either a plain message string or a `{field: message}` object
    pub errors: Value,
}

impl ErrorBody {
    /// Build an envelope around a plain message
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            errors: Value::String(message.into()),
        }
    }

    /// Build an envelope around a `{field: message}` map
    pub fn fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = fields
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        Self {
            errors: Value::Object(map),
        }
    }
}
