// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Prometheus metric name assembly
//!
//! Combines a metric name, a unit annotation and the metric type into one
//! name following Prometheus naming conventions: unit words first, then the
//! type word (`_total` for monotonic counters, `_ratio` for dimensionless
//! gauges). Suffixes already present on the name are never applied twice, so
//! re-normalizing a finished name is a no-op.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::sanitize::sanitize_metric_chars;
use crate::unit::build_unit_suffixes;

/// Metric type as reported by the instrumentation model.
///
/// Only monotonic counters and the dimensionless-unit handling are
/// type-sensitive; histograms and summaries run through the same suffix
/// logic as gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricType {
    Gauge,
    MonotonicCounter,
    NonMonotonicCounter,
    Histogram,
    Summary,
}

/// Appends the missing tail of `suffix_words` to `name`, joined with `_`.
///
/// A leading portion of the chain that is already sitting at the end of the
/// name is treated as applied, so `x_bytes` with chain `[bytes, per_second,
/// total]` gains only `_per_second_total` and a fully-suffixed name gains
/// nothing.
fn append_missing_suffixes(name: &str, suffix_words: &[&str]) -> String {
    for present in (1..=suffix_words.len()).rev() {
        let applied = format!("_{}", suffix_words[..present].join("_"));
        if name.ends_with(&applied) {
            let missing = suffix_words[present..].join("_");
            return if missing.is_empty() {
                name.to_string()
            } else {
                format!("{name}_{missing}")
            };
        }
    }

    if suffix_words.is_empty() {
        name.to_string()
    } else {
        format!("{name}_{}", suffix_words.join("_"))
    }
}

/// Builds a metric name with unit and type suffixes, without sanitizing it.
///
/// The name is taken as given: dots, non-ASCII text and other characters
/// invalid in the exposition format pass through untouched. Use
/// [`build_compliant_metric_name`] for the full normalization.
///
/// With `add_metric_suffixes` unset the name is returned unchanged and unit
/// and type are ignored entirely.
pub fn build_metric_name(
    name: &str,
    unit: &str,
    metric_type: MetricType,
    add_metric_suffixes: bool,
) -> String {
    if !add_metric_suffixes {
        return name.to_string();
    }

    let (main_suffix, per_suffix) = build_unit_suffixes(unit);

    let mut suffix_words: Vec<&str> = Vec::new();
    if unit == "1" && metric_type != MetricType::MonotonicCounter {
        // Dimensionless "1" on anything but a monotonic counter is a ratio
        // measurement; on a monotonic counter it is a plain count.
        suffix_words.push("ratio");
    } else {
        if !main_suffix.is_empty() {
            suffix_words.push(&main_suffix);
        }
        if !per_suffix.is_empty() {
            suffix_words.push(&per_suffix);
        }
    }
    if metric_type == MetricType::MonotonicCounter {
        suffix_words.push("total");
    }

    append_missing_suffixes(name, &suffix_words)
}

/// Builds a Prometheus-compliant metric name.
///
/// See rules at <https://prometheus.io/docs/concepts/data_model/#metric-names-and-labels>
/// and <https://prometheus.io/docs/practices/naming/#metric-and-label-naming>.
///
/// The name is sanitized to `[a-zA-Z0-9_:]`, given a leading `_` if it starts
/// with a digit, and — when `add_metric_suffixes` is set — run through
/// [`build_metric_name`]. A name with no valid characters left after
/// sanitization comes back empty; callers own rejecting or renaming it.
pub fn build_compliant_metric_name(
    name: &str,
    unit: &str,
    metric_type: MetricType,
    add_metric_suffixes: bool,
) -> String {
    let name = sanitize_metric_chars(name);
    if name.is_empty() {
        return name;
    }

    let name = if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{name}")
    } else {
        name
    };

    if !add_metric_suffixes {
        return name;
    }

    build_metric_name(&name, unit, metric_type, true)
}

/// Sanitizes an operator-supplied metric name prefix.
///
/// Unlike the translation entry points, a prefix that sanitizes to nothing
/// usable is an error: a silently empty prefix would change every exported
/// name.
pub fn sanitize_metric_prefix(raw: &str) -> Result<String> {
    if raw.is_empty() {
        return Err(anyhow::anyhow!(
            "cannot sanitize empty string into a valid metric prefix"
        ));
    }

    let mut sanitized = sanitize_metric_chars(raw);
    if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
        sanitized = format!("_{sanitized}");
    }

    // Empty or all-underscore results carry no information from the input.
    if sanitized.chars().all(|c| c == '_') {
        return Err(anyhow::anyhow!(
            "input {raw:?} contains only invalid characters and cannot be sanitized into a valid metric prefix"
        ));
    }

    Ok(sanitized)
}
