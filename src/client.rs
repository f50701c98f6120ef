//! Worker HTTP Client
//! ====================================
//!
//! Thin wrapper around [`ureq`] that performs the probe's single blocking
//! GET and hands back whatever the worker said.
//!
//! Failure semantics are deliberately lopsided: an HTTP error status is a
//! *reply* (the agent is configured to surface non-2xx responses as
//! ordinary responses so their bodies can be reported), while anything
//! that prevents a response from existing at all maps to [`ProbeError`].

use std::io::Read;

use ureq::Agent;

use crate::{
    error::{ProbeError, ProbeResult},
    query::ExtractQuery,
};

/// Blocking GET client bound to one worker endpoint.
///
/// Cloning is not offered on purpose: the probe sends one request per
/// invocation (two in demo mode) and a single agent covers that.
#[derive(Debug)]
pub struct WorkerClient {
    /// Underlying *ureq* connection-pool and HTTP state-machine.
    agent: Agent,
    /// Full endpoint URL; parameters ride the query string, never the path.
    base_url: String,
}

impl WorkerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let agent = Agent::new_with_config(
            Agent::config_builder()
                .http_status_as_error(false) // non-2xx responses come back as Ok with their bodies
                .build(),
        );
        Self {
            agent,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs the GET with `query` encoded as the query string and maps
    /// *ureq* errors to our unified [`ProbeError`] enum.
    ///
    /// Any status code at all is an `Ok` from this layer's point of view.
    pub fn fetch(&self, query: &ExtractQuery) -> ProbeResult<WorkerReply> {
        let mut request = self.agent.get(&self.base_url);
        for (key, value) in query.pairs() {
            request = request.query(key, value);
        }

        tracing::debug!(url = %self.base_url, "sending extraction request");

        match request.call() {
            Ok(response) => {
                let status = response.status().as_u16();
                let mut bytes = Vec::new();
                response.into_body().into_reader().read_to_end(&mut bytes)?;
                // The worker replies UTF-8; anything else still prints.
                let body = String::from_utf8_lossy(&bytes).into_owned();
                tracing::debug!(status, bytes = body.len(), "reply received");
                Ok(WorkerReply { status, body })
            }

            Err(ureq::Error::Io(e)) => Err(ProbeError::Io(e)),

            Err(ureq::Error::Timeout(_)) => {
                Err(ProbeError::Transport("request timed out".to_string()))
            }

            Err(ureq::Error::BadUri(u)) => Err(ProbeError::Transport(format!("bad URI: {u}"))),

            Err(other) => Err(ProbeError::Transport(other.to_string())),
        }
    }
}

/// What came back: the status code plus the body as opaque text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReply {
    pub status: u16,
    pub body: String,
}

impl WorkerReply {
    /// Best-effort JSON view of the body; `None` when it does not parse.
    pub fn as_json(&self) -> Option<serde_json::Value> {
        serde_json::from_str(&self.body).ok()
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use serial_test::serial;

    use super::*;

    #[test]
    fn ok_reply_carries_status_and_body() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"ok":true}"#)
            .create();

        let client = WorkerClient::new(server.url());
        let reply = client
            .fetch(&ExtractQuery::new("test.xlsx", "key"))
            .unwrap();

        assert_eq!(reply.status, 200);
        assert_eq!(reply.as_json(), Some(serde_json::json!({"ok": true})));
    }

    #[test]
    fn http_error_statuses_are_replies_not_errors() {
        let mut server = mockito::Server::new();
        let _mock = server
            .mock("GET", "/")
            .match_query(Matcher::Any)
            .with_status(500)
            .with_body("Internal error while extracting")
            .create();

        let client = WorkerClient::new(server.url());
        let reply = client
            .fetch(&ExtractQuery::new("test.xlsx", "key"))
            .unwrap();

        assert_eq!(reply.status, 500);
        assert_eq!(reply.body, "Internal error while extracting");
        assert_eq!(reply.as_json(), None);
    }

    #[test]
    fn every_pair_reaches_the_server_url_encoded() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("filename".into(), "Offerta N.1.xlsx".into()),
                Matcher::UrlEncoded("clientid".into(), "key-1".into()),
                Matcher::UrlEncoded("type".into(), "custom".into()),
                Matcher::UrlEncoded("folder".into(), "Invoices/2026".into()),
                Matcher::UrlEncoded("config".into(), r#"[{"key":"x"}]"#.into()),
            ]))
            .with_status(200)
            .with_body("{}")
            .expect(1)
            .create();

        let query = ExtractQuery::new("Offerta N.1.xlsx", "key-1")
            .request_type("custom")
            .folder("Invoices/2026")
            .config(&serde_json::json!([{ "key": "x" }]))
            .unwrap();

        WorkerClient::new(server.url()).fetch(&query).unwrap();
        mock.assert();
    }

    #[test]
    #[serial]
    fn refused_connection_is_an_error_not_a_reply() {
        // Grab a free port, then release it: nobody is listening there.
        let listener = std::net::TcpListener::bind(("127.0.0.1", 0)).unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let client = WorkerClient::new(format!("http://127.0.0.1:{port}"));
        let err = client
            .fetch(&ExtractQuery::new("test.xlsx", "key"))
            .unwrap_err();

        assert!(
            matches!(err, ProbeError::Io(_) | ProbeError::Transport(_)),
            "got {err:?}"
        );
    }
}
