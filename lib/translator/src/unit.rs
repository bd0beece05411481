// SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
// SPDX-License-Identifier: Apache-2.0

//! UCUM-style unit annotation resolution
//!
//! OpenTelemetry instrumentation annotates metrics with compact UCUM-like
//! units (`By`, `ms`, `KiBy/m`, `{request}/s`). Prometheus spells units out
//! as lower-case English words embedded in the metric name. This module maps
//! a unit annotation to a pair of suffix words: the main quantity and an
//! optional `per_<time>` rate word.
//!
//! Unrecognized units are passed through literally rather than rejected;
//! upstream telemetry is uncontrolled and must never abort an export.

/// IEC and SI byte quantities.
fn byte_unit_word(unit: &str) -> Option<&'static str> {
    match unit {
        "By" => Some("bytes"),
        "KiBy" => Some("kibibytes"),
        "MiBy" => Some("mebibytes"),
        "GiBy" => Some("gibibytes"),
        "TiBy" => Some("tebibytes"),
        "KBy" => Some("kilobytes"),
        "MBy" => Some("megabytes"),
        "GBy" => Some("gigabytes"),
        "TBy" => Some("terabytes"),
        _ => None,
    }
}

/// Time quantities. `m` is read as minutes; meters do not occur as a
/// standalone metric unit in the instrumentation model.
fn time_unit_word(unit: &str) -> Option<&'static str> {
    match unit {
        "s" => Some("seconds"),
        "ms" => Some("milliseconds"),
        "us" => Some("microseconds"),
        "ns" => Some("nanoseconds"),
        "m" | "min" => Some("minutes"),
        "h" => Some("hours"),
        "d" => Some("days"),
        _ => None,
    }
}

/// Remaining SI and non-SI units. The dimensionless unit `1` maps to no
/// suffix word at all; whether it becomes `_ratio` depends on the metric
/// type and is decided by the name builder, not here.
fn misc_unit_word(unit: &str) -> Option<&'static str> {
    match unit {
        "1" => Some(""),
        "%" => Some("percent"),
        "Cel" => Some("celsius"),
        "Hz" => Some("hertz"),
        "V" => Some("volts"),
        "A" => Some("amperes"),
        "J" => Some("joules"),
        "W" => Some("watts"),
        "g" => Some("grams"),
        _ => None,
    }
}

/// Time words for the denominator of a rate unit.
fn per_unit_word(unit: &str) -> Option<&'static str> {
    match unit {
        "s" => Some("second"),
        "m" => Some("minute"),
        "h" => Some("hour"),
        "d" => Some("day"),
        "w" => Some("week"),
        "mo" => Some("month"),
        "y" => Some("year"),
        _ => None,
    }
}

/// Resolves a unit annotation into `(main_suffix, per_suffix)`, either or
/// both possibly empty.
///
/// The unit is split at the first `/` only; everything after it is the
/// literal denominator (`By/s/h` keeps `s/h` as its denominator). Curly-brace
/// annotations (`{request}`) are opaque custom terms and contribute no main
/// suffix. Anything else not found in the tables is passed through unchanged,
/// so `invalid` resolves to `invalid` and `{x}/q` to `per_q`.
pub fn build_unit_suffixes(unit: &str) -> (String, String) {
    let unit = unit.trim();
    if unit.is_empty() {
        return (String::new(), String::new());
    }

    let (main_part, remainder) = match unit.split_once('/') {
        Some((main_part, remainder)) => (main_part.trim(), Some(remainder.trim())),
        None => (unit, None),
    };

    let main_suffix = if main_part.starts_with('{') && main_part.ends_with('}') {
        String::new()
    } else {
        match byte_unit_word(main_part)
            .or_else(|| time_unit_word(main_part))
            .or_else(|| misc_unit_word(main_part))
        {
            Some(word) => word.to_string(),
            None => {
                if !main_part.is_empty() {
                    tracing::trace!("passing through unrecognized unit {main_part:?}");
                }
                main_part.to_string()
            }
        }
    };

    let per_suffix = match remainder {
        Some(remainder) if !remainder.is_empty() => match per_unit_word(remainder) {
            Some(word) => format!("per_{word}"),
            None => format!("per_{remainder}"),
        },
        _ => String::new(),
    };

    (main_suffix, per_suffix)
}
