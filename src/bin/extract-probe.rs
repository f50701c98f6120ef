//! Extract Probe – Binary crate entry-point
//! ========================================
//!
//! Command-line wrapper around the `extract_probe` library. Its job is to
//! **build** the worker's query-parameter mapping from flags, **send** one
//! blocking GET, and **print** whatever came back, then exit. There is no
//! state between invocations.
//!
//! ## Typical usage
//! ```text
//! # Stock extraction of a file in the worker's root folder
//! $ extract-probe --file "Offerta N.S5388v1.xlsx"
//!
//! # Scope to a folder, against a local worker instance
//! $ extract-probe --url http://127.0.0.1:8787 --file test.xlsx --folder Docs
//!
//! # Custom rules; the JSON is validated before anything is sent
//! $ extract-probe --file test.xlsx --type custom \
//!       --config '[{"key":"grand_total","keywords":["Total"],"colIndex":3}]'
//!
//! # No arguments at all: two built-in demo calls against the default endpoint
//! $ extract-probe
//! ```
//!
//! ## Exit codes
//! * `0` – request completed, including reported HTTP error statuses and
//!   connection failures
//! * `1` – `--config` was not valid JSON (nothing was sent)
//! * `2` – flag parsing error (from **clap**)

use clap::Parser;
use extract_probe::*;

#[derive(Debug, Parser)]
#[command(name = "extract-probe", version)]
struct Cli {
    /// Worker endpoint to probe
    #[arg(long, value_name = "URL", default_value_t = Defaults::resolve().url)]
    url: String,

    /// Client id (app key) the worker validates
    #[arg(long, value_name = "KEY", default_value_t = Defaults::resolve().client_id)]
    key: String,

    /// Filename to extract, as stored by the service
    #[arg(long, value_name = "FILE")]
    file: String,

    /// Folder the file lives under (the worker falls back to its root)
    #[arg(long, value_name = "FOLDER")]
    folder: Option<String>,

    /// Extraction type tag (`default`, `custom`, `raw`, …); forwarded
    /// verbatim and interpreted by the worker
    #[arg(long = "type", value_name = "TYPE", default_value = DEFAULT_REQUEST_TYPE)]
    request_type: String,

    /// Extraction rules as a JSON string; only meaningful together with
    /// `--type custom`
    #[arg(long, value_name = "JSON")]
    config: Option<String>,

    /// Normalize --file the way the worker's storage does: strip copy
    /// markers and upload timestamps, lowercase the rest
    #[arg(long)]
    clean_name: bool,
}

fn main() {
    logging::init();

    // A bare invocation runs the demo instead of flag parsing, so --file
    // can stay required for every real call.
    if std::env::args().len() == 1 {
        exit_on_error(demo::run(&Defaults::resolve()));
        return;
    }

    exit_on_error(run(Cli::parse()));
}

fn run(cli: Cli) -> ProbeResult<()> {
    // Reject a malformed --config before anything touches the network.
    let config = cli
        .config
        .map(|raw| {
            serde_json::from_str::<serde_json::Value>(&raw).map_err(|e| {
                ProbeError::invalid_config("--config", format!("must be a valid JSON string ({e})"))
            })
        })
        .transpose()?;

    let filename = if cli.clean_name {
        clean_filename(&cli.file)
    } else {
        cli.file
    };

    let mut query = ExtractQuery::new(filename, cli.key).request_type(cli.request_type);
    if let Some(folder) = cli.folder {
        query = query.folder(folder);
    }
    if let Some(value) = &config {
        query = query.config(value)?;
    }

    runner::run_request(&WorkerClient::new(cli.url), &query);
    Ok(())
}

fn exit_on_error(result: ProbeResult<()>) {
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
