// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Prometheus label name normalization
//!
//! Label names are stricter than metric names: no colons, and names starting
//! with `__` are reserved for Prometheus internal use. Labels reaching this
//! module come from uncontrolled instrumentation, so normalization never
//! fails; it rewrites instead.

use crate::sanitize::sanitize_label_chars;

/// Normalizes a label to follow the Prometheus label name standard.
///
/// See rules at <https://prometheus.io/docs/concepts/data_model/#metric-names-and-labels>.
///
/// Labels starting with a digit are prefixed with `key_`, and labels starting
/// with exactly one underscore are prefixed with `key`. Double-underscore
/// labels pass through untouched: that form is reserved, and callers rely on
/// round-tripping it.
pub fn normalize_label(label: &str) -> String {
    if label.is_empty() {
        return String::new();
    }

    let label = sanitize_label_name(label);

    if label.starts_with(|c: char| c.is_ascii_digit()) {
        format!("key_{label}")
    } else if label.starts_with('_') && !label.starts_with("__") {
        format!("key{label}")
    } else {
        label
    }
}

/// Replaces anything outside `[a-zA-Z0-9_]` with an underscore, without the
/// leading-character fix-up of [`normalize_label`].
///
/// The result may still start with a digit, so this should only be used when
/// the label is prefixed with a known valid string.
pub fn sanitize_label_name(name: &str) -> String {
    sanitize_label_chars(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("label:with:colons", "label_with_colons")]
    #[case("LabelWithCapitalLetters", "LabelWithCapitalLetters")]
    #[case("label!with&special$chars)", "label_with_special_chars_")]
    #[case("label_with_foreign_characters_字符", "label_with_foreign_characters___")]
    #[case("label.with.dots", "label_with_dots")]
    #[case("123label", "key_123label")]
    #[case("_label_starting_with_underscore", "key_label_starting_with_underscore")]
    #[case("__label_starting_with_2underscores", "__label_starting_with_2underscores")]
    fn test_normalize_label(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_label(input), expected);
    }

    #[rstest]
    // A sanitized-to-underscore first character still gets the `key` prefix.
    #[case("%percent", "key_percent")]
    // Digits produced by sanitization alone never appear first, but raw
    // digit-leading labels do.
    #[case("0", "key_0")]
    #[case("__", "__")]
    fn test_normalize_label_leading_chars(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(normalize_label(input), expected);
    }

    #[test]
    fn test_sanitize_label_name_skips_fixup() {
        assert_eq!(sanitize_label_name("123label"), "123label");
        assert_eq!(sanitize_label_name("_single"), "_single");
        assert_eq!(sanitize_label_name("label.with.dots"), "label_with_dots");
    }
}
