//! Rendering of the probe's stdout contract.
//!
//! Pure string builders, kept apart from the I/O so the exact text can be
//! unit-tested. The section formats are shared with the worker team's
//! other smoke clients and should not drift.

use crate::{client::WorkerReply, error::ProbeError, query::ExtractQuery};

/// The pre-flight diagnostic: target URL plus the parameter mapping,
/// exactly as it is about to be encoded.
pub fn request_details(url: &str, query: &ExtractQuery) -> String {
    format!(
        "--- Request Details ---\nURL: {url}\nParams: {}",
        query.params_json()
    )
}

/// The status-branched response report.
///
/// * 200 with a JSON body – pretty-printed, two-space indent, non-ASCII
///   kept literal.
/// * 200 with anything else – flagged as not JSON, body verbatim.
/// * any other status – body verbatim behind an `Error:` prefix.
pub fn response_report(reply: &WorkerReply) -> String {
    let mut out = format!("--- Response ({}) ---\n", reply.status);
    if reply.status == 200 {
        match reply.as_json() {
            Some(value) => out.push_str(&pretty(&value)),
            None => {
                out.push_str("Response is not JSON:\n");
                out.push_str(&reply.body);
            }
        }
    } else {
        out.push_str("Error: ");
        out.push_str(&reply.body);
    }
    out
}

/// The transport-failure line. Always carries the cause.
pub fn connection_error(err: &ProbeError) -> String {
    format!("Connection Error: {err}")
}

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_details_lists_url_and_params() {
        let query = ExtractQuery::new("test.xlsx", "key");
        assert_eq!(
            request_details("http://127.0.0.1:8787", &query),
            "--- Request Details ---\n\
             URL: http://127.0.0.1:8787\n\
             Params: {\"filename\":\"test.xlsx\",\"clientid\":\"key\",\"type\":\"default\"}"
        );
    }

    #[test]
    fn ok_json_is_pretty_printed_with_two_space_indent() {
        let reply = WorkerReply {
            status: 200,
            body: r#"{"ok": true}"#.to_string(),
        };
        assert_eq!(
            response_report(&reply),
            "--- Response (200) ---\n{\n  \"ok\": true\n}"
        );
    }

    #[test]
    fn non_ascii_stays_literal() {
        let reply = WorkerReply {
            status: 200,
            body: r#"{"label":"总计"}"#.to_string(),
        };
        let report = response_report(&reply);
        assert!(report.contains("总计"), "got {report}");
        assert!(!report.contains("\\u"), "got {report}");
    }

    #[test]
    fn ok_non_json_is_flagged_with_the_body_verbatim() {
        let reply = WorkerReply {
            status: 200,
            body: "plain text".to_string(),
        };
        assert_eq!(
            response_report(&reply),
            "--- Response (200) ---\nResponse is not JSON:\nplain text"
        );
    }

    // A bare JSON string is valid JSON, so it takes the pretty branch.
    #[test]
    fn quoted_string_body_counts_as_json() {
        let reply = WorkerReply {
            status: 200,
            body: "\"alone\"".to_string(),
        };
        assert_eq!(response_report(&reply), "--- Response (200) ---\n\"alone\"");
    }

    #[test]
    fn other_statuses_report_the_body_as_error() {
        let reply = WorkerReply {
            status: 500,
            body: "Internal error while extracting".to_string(),
        };
        assert_eq!(
            response_report(&reply),
            "--- Response (500) ---\nError: Internal error while extracting"
        );
    }

    #[test]
    fn connection_error_includes_the_cause() {
        let err = ProbeError::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "connection refused",
        ));
        assert_eq!(
            connection_error(&err),
            "Connection Error: I/O error: connection refused"
        );
    }
}
