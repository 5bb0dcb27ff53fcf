// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-BitpartPlots-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of bitpart-plots and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DurationParseError {
    Malformed { text: String },
    UnknownUnit { text: String, unit: String },
}

impl fmt::Display for DurationParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { text } => write!(
                f,
                "malformed duration {text:?} (expected '<digits>.<digits> <unit>s')"
            ),
            Self::UnknownUnit { text, unit } => {
                write!(f, "unknown duration unit {unit:?}s in {text:?}")
            }
        }
    }
}

impl std::error::Error for DurationParseError {}

fn duration_regex() -> &'static Regex {
    static DURATION: OnceLock<Regex> = OnceLock::new();
    DURATION.get_or_init(|| Regex::new(r"^(\d+\.\d+)\s(.)?s").expect("valid duration regex"))
}

/// Converts a Criterion duration such as `1.2345 s`, `12.5 ms` or `812.3 µs` to milliseconds.
pub fn parse_duration_ms(text: &str) -> Result<f64, DurationParseError> {
    let malformed = || DurationParseError::Malformed {
        text: text.to_owned(),
    };

    let caps = duration_regex().captures(text).ok_or_else(malformed)?;
    let value = caps
        .get(1)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .ok_or_else(malformed)?;

    match caps.get(2).map(|m| m.as_str()) {
        None => Ok(value * 1000.0),
        Some("m") => Ok(value),
        // Criterion prints MICRO SIGN; GREEK SMALL LETTER MU shows up after copy/paste.
        Some("µ") | Some("μ") => Ok(value / 1000.0),
        Some("n") => Ok(value / 1_000_000.0),
        Some(unit) => Err(DurationParseError::UnknownUnit {
            text: text.to_owned(),
            unit: unit.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_duration_ms, DurationParseError};

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    #[case::seconds("1.5000 s", 1500.0)]
    #[case::milliseconds("24.601 ms", 24.601)]
    #[case::microseconds("812.50 µs", 0.8125)]
    #[case::greek_mu("812.50 μs", 0.8125)]
    #[case::nanoseconds("250.00 ns", 0.00025)]
    fn converts_units_to_milliseconds(#[case] text: &str, #[case] expected: f64) {
        assert_close(parse_duration_ms(text).expect("duration"), expected);
    }

    #[test]
    fn ignores_trailing_text_after_unit() {
        assert_close(parse_duration_ms("3.25 ms]").expect("duration"), 3.25);
    }

    #[rstest]
    #[case::no_decimal_point("12 ms")]
    #[case::no_space("1.0ms")]
    #[case::empty("")]
    #[case::leading_text("time 1.0 ms")]
    fn rejects_malformed_values(#[case] text: &str) {
        assert_eq!(
            parse_duration_ms(text),
            Err(DurationParseError::Malformed {
                text: text.to_owned()
            })
        );
    }

    #[test]
    fn rejects_unknown_units() {
        let err = parse_duration_ms("1.0 ks").expect_err("unknown unit");
        assert_eq!(
            err,
            DurationParseError::UnknownUnit {
                text: "1.0 ks".to_owned(),
                unit: "k".to_owned(),
            }
        );
        assert!(err.to_string().contains("\"k\"s"));
    }
}
