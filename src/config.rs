//! Process-wide defaults for the probe.
//!
//! The endpoint and client id ship as constants so a bare invocation needs
//! no setup. `EXTRACT_PROBE_URL` / `EXTRACT_PROBE_KEY` override them for
//! local worker instances (`wrangler dev` on `127.0.0.1:8787` and the
//! like), and explicit `--url` / `--key` flags override everything.

/// Production worker endpoint queried when no override is given.
pub const DEFAULT_WORKER_URL: &str =
    "https://cloudflare-dropbox-worker.kong-smartway.workers.dev";

/// App key the worker checks the `clientid` parameter against.
pub const DEFAULT_CLIENT_ID: &str = "7t18hxy1q3fj3tv";

/// Environment override for [`DEFAULT_WORKER_URL`].
pub const URL_ENV_VAR: &str = "EXTRACT_PROBE_URL";

/// Environment override for [`DEFAULT_CLIENT_ID`].
pub const KEY_ENV_VAR: &str = "EXTRACT_PROBE_KEY";

/// Endpoint and client id resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub url: String,
    pub client_id: String,
}

impl Defaults {
    /// Environment first, built-in constants second. Flag values are
    /// applied on top by the CLI and never flow through here.
    pub fn resolve() -> Self {
        Self {
            url: std::env::var(URL_ENV_VAR).unwrap_or_else(|_| DEFAULT_WORKER_URL.to_string()),
            client_id: std::env::var(KEY_ENV_VAR)
                .unwrap_or_else(|_| DEFAULT_CLIENT_ID.to_string()),
        }
    }
}
