// top-level error for the public API

#[derive(serde::Serialize, Debug, thiserror::Error)]
pub enum ProbeError {
    /// Rejected before anything touches the network: a value handed to the
    /// probe (today only the extraction config) is not usable as JSON.
    #[error("invalid {field}: {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    /// Socket-level failure underneath HTTP: refused connection, DNS,
    /// reset, broken pipe.
    #[error("I/O error: {0}")]
    #[serde(serialize_with = "std_io_error_to_string")]
    Io(#[from] std::io::Error),

    /// Any other way the request can die without producing a response,
    /// e.g. a timeout or a URI the transport refuses to parse.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("serialization error: {0}")]
    #[serde(serialize_with = "std_io_error_to_string")]
    Serde(#[from] serde_json::Error),
}

pub type ProbeResult<T> = std::result::Result<T, ProbeError>;

impl ProbeError {
    pub fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

pub(crate) fn std_io_error_to_string<S>(e: &impl std::fmt::Display, s: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    s.serialize_str(&e.to_string())
}
