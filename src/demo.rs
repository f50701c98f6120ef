//! Zero-argument demonstration mode.
//!
//! Two canned calls against the resolved default endpoint: the stock
//! extraction first, then a custom one carrying a small sample rule set.
//! Useful as a smoke test that the worker is up and answering.

use serde_json::{Value, json};

use crate::{
    client::WorkerClient, config::Defaults, error::ProbeResult, query::ExtractQuery,
    runner::run_request,
};

/// Filename both demonstration calls ask the service to extract.
pub const DEMO_FILENAME: &str = "test.xlsx";

/// The sample rule set sent by the custom-extraction call.
pub fn demo_rules() -> Value {
    json!([
        { "key": "demo_total", "keywords": ["Total", "总计"], "colIndex": 3 }
    ])
}

/// Runs both demonstration calls in order. A failed request is printed by
/// the runner and does not stop the second call from going out.
pub fn run(defaults: &Defaults) -> ProbeResult<()> {
    println!("No arguments provided. Running demo mode...");
    println!("Target: {}", defaults.url);

    let client = WorkerClient::new(defaults.url.as_str());

    println!("\n=== Demo 1: Default Extraction ===");
    run_request(
        &client,
        &ExtractQuery::new(DEMO_FILENAME, defaults.client_id.as_str()),
    );

    println!("\n=== Demo 2: Custom Extraction ===");
    let custom = ExtractQuery::new(DEMO_FILENAME, defaults.client_id.as_str())
        .request_type("custom")
        .config(&demo_rules())?;
    run_request(&client, &custom);

    Ok(())
}
