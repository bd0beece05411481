// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Prometheus naming translator for OpenTelemetry-style metrics
//!
//! Exporters translating metrics from a vendor-neutral instrumentation model
//! into the Prometheus exposition format use this crate to turn raw metric
//! names, label names and UCUM-style unit annotations into compliant
//! identifiers:
//!
//! - [`build_compliant_metric_name`] — sanitize a metric name and append
//!   unit- and type-derived suffixes (`_seconds`, `_total`, `_ratio`, ...).
//! - [`build_metric_name`] — suffixing only, for names the caller has
//!   already made compliant.
//! - [`normalize_label`] / [`sanitize_label_name`] — label name
//!   normalization.
//! - [`build_unit_suffixes`] — resolve a compound unit annotation such as
//!   `KiBy/m` into its suffix words.
//!
//! ## Key Differences: Metric Names vs Label Names
//!
//! **Metric names**: Allow colons and `__` anywhere; invalid runs collapse
//! to one `_`. **Label names**: No colons, no `__` prefix (reserved for
//! Prometheus internal use); invalid characters are replaced one-for-one.
//!
//! Every operation is a pure function over static tables: no I/O, no shared
//! mutable state, and no failure path — adversarial input degrades to a
//! sanitized best-effort name instead of aborting an export pipeline.
//! Uniqueness and collision handling across a metric set stay with the
//! caller.

pub mod config;
pub mod labels;
pub mod metric_name;
mod sanitize;
pub mod unit;

pub use config::TranslatorConfig;
pub use labels::{normalize_label, sanitize_label_name};
pub use metric_name::{
    MetricType, build_compliant_metric_name, build_metric_name, sanitize_metric_prefix,
};
pub use unit::build_unit_suffixes;
