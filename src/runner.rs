//! Build, send, report. The probe's whole request lifecycle in one place.

use crate::{client::WorkerClient, query::ExtractQuery, report};

/// Runs one probe request and prints the outcome to stdout.
///
/// Transport failures are reported, not propagated: a refused connection
/// is a result the caller asked to see, the same as any HTTP reply. The
/// process exit code stays untouched either way.
pub fn run_request(client: &WorkerClient, query: &ExtractQuery) {
    println!("\n{}", report::request_details(client.base_url(), query));

    match client.fetch(query) {
        Ok(reply) => println!("\n{}", report::response_report(&reply)),
        Err(err) => {
            tracing::debug!(error = %err, "request did not complete");
            println!("{}", report::connection_error(&err));
        }
    }
}
