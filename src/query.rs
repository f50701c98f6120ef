//! The query-parameter mapping one extraction request is made of.

use serde::Serialize;

use crate::error::ProbeResult;

/// Extraction type applied when the caller does not pick one.
pub const DEFAULT_REQUEST_TYPE: &str = "default";

/// Parameters for a single extraction request.
///
/// Field order here is wire order: `filename`, `clientid`, `type`, then the
/// optionals. Unset optionals are absent from both the encoded query string
/// and the serialized diagnostic, never sent as empty strings.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractQuery {
    /// Spreadsheet filename as stored by the service.
    pub filename: String,
    /// Client id (app key) the service validates before anything else.
    pub clientid: String,
    /// Free-form extraction strategy tag; the service interprets it, the
    /// probe only forwards it.
    #[serde(rename = "type")]
    pub request_type: String,
    /// Folder the file lives under. The service falls back to its root
    /// folder when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// Extraction rules, already collapsed to their JSON string form.
    /// Only meaningful to the service alongside `type=custom`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
}

impl ExtractQuery {
    pub fn new(filename: impl Into<String>, clientid: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            clientid: clientid.into(),
            request_type: DEFAULT_REQUEST_TYPE.to_string(),
            folder: None,
            config: None,
        }
    }

    pub fn request_type(mut self, tag: impl Into<String>) -> Self {
        self.request_type = tag.into();
        self
    }

    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.folder = Some(folder.into());
        self
    }

    /// Serializes `value` to its JSON string form and attaches it under
    /// `config`. The shape of `value` is the service's business; anything
    /// serde can turn into JSON is accepted.
    pub fn config<T: Serialize + ?Sized>(mut self, value: &T) -> ProbeResult<Self> {
        self.config = Some(serde_json::to_string(value)?);
        Ok(self)
    }

    /// Key/value pairs in wire order, ready for query-string encoding.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = vec![
            ("filename", self.filename.as_str()),
            ("clientid", self.clientid.as_str()),
            ("type", self.request_type.as_str()),
        ];
        if let Some(folder) = &self.folder {
            pairs.push(("folder", folder));
        }
        if let Some(config) = &self.config {
            pairs.push(("config", config));
        }
        pairs
    }

    /// The whole mapping as one JSON object, for the request diagnostic.
    pub fn params_json(&self) -> String {
        // Plain string fields cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}
