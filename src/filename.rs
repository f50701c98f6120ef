//! Filename normalization matching the worker's storage layer.
//!
//! The worker dedupes uploads under a canonical name: copy markers such as
//! ` (1)` and trailing `-YYYYMMDDHHMMSS` upload timestamps are stripped and
//! the remainder lowercased. `--clean-name` applies the same rule locally
//! so a probe can target the stored name without guessing it.

use std::sync::LazyLock;

use regex::Regex;

/// ` (1)`, `(2)`, … copy markers, along with any whitespace before them.
static COPY_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s*\(\d+\)").unwrap());

/// `-YYYYMMDDHHMMSS` upload timestamps, exactly fourteen digits.
static UPLOAD_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-\d{14}").unwrap());

/// Canonical form of `name` under the worker's dedup rule.
pub fn clean_filename(name: &str) -> String {
    let name = COPY_MARKER.replace_all(name, "");
    let name = UPLOAD_TIMESTAMP.replace_all(&name, "");
    name.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_upload_timestamp() {
        assert_eq!(
            clean_filename("Offerta N.S5388v1 Alex Lodi-20260214153349.xlsx"),
            "offerta n.s5388v1 alex lodi.xlsx"
        );
    }

    #[test]
    fn plain_name_is_only_lowercased() {
        assert_eq!(
            clean_filename("Offerta N.S5388v1 Alex Lodi.xlsx"),
            "offerta n.s5388v1 alex lodi.xlsx"
        );
    }

    #[test]
    fn strips_copy_marker_and_timestamp_together() {
        assert_eq!(clean_filename("File (1)-20260214153349.xlsx"), "file.xlsx");
    }

    #[test]
    fn short_digit_runs_survive() {
        assert_eq!(clean_filename("NoTimestamp.xlsx"), "notimestamp.xlsx");
        assert_eq!(clean_filename("Report-2026.xlsx"), "report-2026.xlsx");
    }
}
