// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Character sanitization for Prometheus identifiers
//!
//! Two separate sanitizers, one per identifier kind:
//!
//! - **Label names**: allowed set `[a-zA-Z0-9_]`. Every disallowed character
//!   is replaced with `_` one-for-one, so adjacent replacements are never
//!   merged.
//! - **Metric names**: allowed set `[a-zA-Z0-9_:]` (colons are valid in
//!   metric names, e.g. recording rules). A maximal run of disallowed
//!   characters collapses to a single `_`.
//!
//! The two must stay distinct; labels and metric names disagree both on the
//! allowed set and on run handling.

use once_cell::sync::Lazy;
use regex::Regex;

static LABEL_INVALID_CHARS_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-zA-Z0-9_]").unwrap());

/// Replaces every character outside `[a-zA-Z0-9_]` with an underscore.
///
/// Replacement is per character: `"字符"` becomes `"__"`, and runs of
/// invalid characters keep their length.
pub(crate) fn sanitize_label_chars(raw: &str) -> String {
    LABEL_INVALID_CHARS_PATTERN.replace_all(raw, "_").into_owned()
}

fn is_valid_metric_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == ':'
}

/// Collapses every maximal run of characters outside `[a-zA-Z0-9_:]` to a
/// single underscore.
///
/// Invalid runs act as token separators: the name is split on them and the
/// surviving tokens are rejoined with `_`. Valid underscores already in the
/// input are part of their token and are kept as-is, so `"error_rate_£_€_¥"`
/// sanitizes to `"error_rate_____"`. Input with no valid characters at all
/// sanitizes to the empty string.
pub(crate) fn sanitize_metric_chars(raw: &str) -> String {
    raw.split(|c: char| !is_valid_metric_char(c))
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("already_valid_1", "already_valid_1")]
    #[case("label:with:colons", "label_with_colons")]
    #[case("label.with.dots", "label_with_dots")]
    #[case("a..b", "a__b")]
    #[case("label_with_foreign_characters_字符", "label_with_foreign_characters___")]
    #[case("...", "___")]
    fn test_sanitize_label_chars(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_label_chars(input), expected);
    }

    #[rstest]
    #[case("", "")]
    #[case("already_valid_1", "already_valid_1")]
    #[case("app:request:latency", "app:request:latency")]
    #[case("a..b", "a_b")]
    #[case("api..//request--time", "api_request_time")]
    #[case("api   response   time", "api_response_time")]
    #[case("error_rate_£_€_¥", "error_rate_____")]
    #[case("@#$%", "")]
    fn test_sanitize_metric_chars(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(sanitize_metric_chars(input), expected);
    }

    #[test]
    fn test_label_replacement_never_collapses() {
        // One underscore per invalid character, so the length in characters
        // is preserved.
        let raw = "a£€¥b  c";
        let sanitized = sanitize_label_chars(raw);
        assert_eq!(sanitized, "a___b__c");
        assert_eq!(sanitized.chars().count(), raw.chars().count());
    }
}
