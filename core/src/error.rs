//! Error types for the Skyscanner client.
//!
//! # Design
//! Every runtime variant names the operation it came from, and remote
//! rejections keep the raw envelope, so a failure can be diagnosed from the
//! error value alone. `MissingCredential` is raised before any request is
//! sent.

use thiserror::Error;

/// Errors returned by `SkyscannerClient` and `Invoker`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No explicit key was passed and the key environment variable is unset
    /// or empty.
    #[error(
        "a RapidAPI key is required: pass one explicitly or set the `{env_var}` environment \
         variable (get a free key at https://rapidapi.com/rpi4gx/api/skyscanner-api)"
    )]
    MissingCredential { env_var: String },

    /// The response envelope carried a status the operation does not accept,
    /// or the server answered non-2xx with a JSON body.
    #[error("{operation}: remote status {} rejected: {envelope}", .status.as_deref().unwrap_or("<none>"))]
    RemoteStatus {
        operation: &'static str,
        status: Option<String>,
        envelope: String,
    },

    /// The transport failed before a response was received.
    #[error("{operation}: transport failure: {source}")]
    Transport {
        operation: &'static str,
        #[source]
        source: TransportError,
    },

    /// The server answered non-2xx and the body was not a JSON envelope.
    #[error("{operation}: HTTP {status}: {body}")]
    HttpError {
        operation: &'static str,
        status: u16,
        body: String,
    },

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The response body could not be deserialized into the expected type.
    #[error("{operation}: deserialization failed: {message}")]
    Deserialization {
        operation: &'static str,
        message: String,
    },
}

/// Failure reported by a `Transport` implementation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_message_has_guidance() {
        let err = ApiError::MissingCredential {
            env_var: "RAPIDAPI_KEY".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("RAPIDAPI_KEY"));
        assert!(msg.contains("https://rapidapi.com"));
    }

    #[test]
    fn remote_status_message_names_operation_and_envelope() {
        let err = ApiError::RemoteStatus {
            operation: "locales",
            status: Some("RESULT_STATUS_FAILED".to_string()),
            envelope: r#"{"status":"RESULT_STATUS_FAILED"}"#.to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("locales:"));
        assert!(msg.contains("RESULT_STATUS_FAILED"));
        assert!(msg.contains(r#"{"status":"RESULT_STATUS_FAILED"}"#));
    }

    #[test]
    fn remote_status_without_status_field() {
        let err = ApiError::RemoteStatus {
            operation: "flight_async_poll_search",
            status: None,
            envelope: r#"{"message":"session not found"}"#.to_string(),
        };
        assert!(err.to_string().contains("<none>"));
    }
}
