// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! Translator configuration
//!
//! Read from the environment with the `PROMTRANS_` prefix:
//!
//! - `PROMTRANS_ADD_METRIC_SUFFIXES` — append unit and type suffixes to
//!   metric names (default `true`).
//! - `PROMTRANS_METRIC_PREFIX` — optional prefix prepended to every metric
//!   name. Sanitized on load; unusable values are dropped with a warning.

use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

use crate::metric_name::{MetricType, build_compliant_metric_name, sanitize_metric_prefix};

/// Environment variable prefix for all translator settings.
pub const ENV_PREFIX: &str = "PROMTRANS_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Append unit and type suffixes (`_seconds`, `_total`, `_ratio`, ...)
    /// to translated metric names.
    pub add_metric_suffixes: bool,

    /// Prefix prepended to every translated metric name, e.g. an
    /// application or namespace identifier.
    pub metric_prefix: Option<String>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        TranslatorConfig {
            add_metric_suffixes: true,
            metric_prefix: None,
        }
    }
}

impl TranslatorConfig {
    /// Instantiates and reads translator configuration from the environment.
    /// Panics on invalid configuration.
    pub fn from_settings() -> Self {
        // All calls should be global and thread safe.
        let mut config: Self = Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .unwrap(); // safety: Called on startup, so panic is reasonable

        if let Some(prefix) = config.metric_prefix.take() {
            match sanitize_metric_prefix(&prefix) {
                Ok(sanitized) => config.metric_prefix = Some(sanitized),
                Err(err) => {
                    tracing::warn!("ignoring configured metric prefix {prefix:?}: {err}");
                }
            }
        }

        tracing::debug!("loaded translator config: {config:?}");
        config
    }

    /// Translates a metric name under this configuration, prepending the
    /// configured prefix before normalization.
    pub fn metric_name(&self, name: &str, unit: &str, metric_type: MetricType) -> String {
        let name = match self.metric_prefix.as_deref() {
            Some(prefix) => format!("{prefix}_{name}"),
            None => name.to_string(),
        };
        build_compliant_metric_name(&name, unit, metric_type, self.add_metric_suffixes)
    }
}
