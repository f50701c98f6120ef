//! extract-probe – one-shot probe for the spreadsheet-extraction worker
//! ====================================================================
//!
//! ## What it does
//! - **Builds the query** – `filename`, `clientid`, `type`, plus optional
//!   `folder` and a JSON-string `config`, via [`ExtractQuery`].
//! - **Sends one blocking GET** – [`WorkerClient`] wraps [`ureq`]; HTTP
//!   error statuses come back as replies, not errors.
//! - **Prints what happened** – pretty JSON for a 200, the raw body behind
//!   an `Error:` prefix otherwise, a `Connection Error:` line when the
//!   transport gives up.
//!
//! ---
//!
//! ```rust,no_run
//! use extract_probe::*;
//!
//! fn main() -> ProbeResult<()> {
//!     let client = WorkerClient::new(config::DEFAULT_WORKER_URL);
//!     let query = ExtractQuery::new("report.xlsx", config::DEFAULT_CLIENT_ID)
//!         .folder("Invoices/2026")
//!         .request_type("custom")
//!         .config(&serde_json::json!([
//!             { "key": "grand_total", "keywords": ["Total"], "colIndex": 3 }
//!         ]))?;
//!
//!     runner::run_request(&client, &query);
//!     Ok(())
//! }
//! ```
//!
//! ---
//!
//! ## How It Works
//!
//! ```text
//! extract-probe (CLI)
//!       │
//!       ├─→ ExtractQuery     (parameter mapping, wire order)
//!       │         ↓
//!       ├─→ WorkerClient     (one GET, query-string encoded)
//!       │         ↓
//!       └─→ report / runner  (status-branched stdout contract)
//! ```
//!
//! The `extract-probe` binary adds a flag-per-parameter CLI on top, plus a
//! zero-argument demo mode that fires two canned requests at the default
//! endpoint. See `src/bin/extract-probe.rs`.

#[allow(unused_imports)]
use tracing::{Level, debug, error, info, span, trace, warn};

pub mod client;
pub mod config;
pub mod demo;
pub mod error;
pub mod filename;
pub mod logging;
pub mod query;
pub mod report;
pub mod runner;

pub use client::{WorkerClient, WorkerReply};
pub use config::Defaults;
pub use error::{ProbeError, ProbeResult};
pub use filename::clean_filename;
pub use query::{DEFAULT_REQUEST_TYPE, ExtractQuery};
