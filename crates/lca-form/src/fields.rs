//! Static description of the prediction form.
//!
//! Each entry pairs a choice control with its free-text fallback and says how
//! the raw text becomes a payload value. Order here is the order in which
//! fields are validated and errors are reported.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldKey {
    FullTimePosition,
    EmployerState,
    WorksiteState,
    SocCode,
    WageRate,
}

impl FieldKey {
    /// Key used in the JSON body.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FullTimePosition => "FULL_TIME_POSITION",
            Self::EmployerState => "EMPLOYER_STATE",
            Self::WorksiteState => "WORKSITE_STATE",
            Self::SocCode => "SOC_CODE",
            Self::WageRate => "WAGE_RATE",
        }
    }

    /// `FIELDS` is laid out in declaration order of the variants.
    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self as usize]
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Trim and upper-case.
    Upper,
    Trim,
    /// Parse as a number the way a browser's `Number()` does; unparsable text becomes NaN.
    Number,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl Transform {
    pub fn apply(self, raw: &str) -> FieldValue {
        let raw = raw.trim();
        match self {
            Self::Upper => FieldValue::Text(raw.to_uppercase()),
            Self::Trim => FieldValue::Text(raw.to_owned()),
            Self::Number => FieldValue::Number(parse_number(raw)),
        }
    }
}

/// Decimal and exponent forms, `Infinity`, and unsigned `0x`/`0o`/`0b` integers.
/// Rust-only spellings such as `inf` or `nan` give NaN.
fn parse_number(raw: &str) -> f64 {
    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in prefixed {
        if let Some(digits) = raw.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if unsigned == "Infinity" {
        return if raw.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return f64::NAN;
    }
    raw.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: FieldKey,
    /// Element id of the choice control.
    pub choice: &'static str,
    /// Element id of the free-text input used when `OTHER` is chosen.
    pub other: Option<&'static str>,
    pub transform: Transform,
    pub label: &'static str,
    pub numeric: bool,
}

pub static FIELDS: [FieldSpec; 5] = [
    FieldSpec {
        key: FieldKey::FullTimePosition,
        choice: "fullTimeSelect",
        other: Some("fullTimeOther"),
        transform: Transform::Upper,
        label: "Full-time position",
        numeric: false,
    },
    FieldSpec {
        key: FieldKey::EmployerState,
        choice: "employerStateSelect",
        other: Some("employerStateOther"),
        transform: Transform::Upper,
        label: "Employer state",
        numeric: false,
    },
    FieldSpec {
        key: FieldKey::WorksiteState,
        choice: "worksiteStateSelect",
        other: Some("worksiteStateOther"),
        transform: Transform::Upper,
        label: "Worksite state",
        numeric: false,
    },
    FieldSpec {
        key: FieldKey::SocCode,
        choice: "socSelect",
        other: Some("socOther"),
        transform: Transform::Trim,
        label: "Occupation code (SOC)",
        numeric: false,
    },
    FieldSpec {
        key: FieldKey::WageRate,
        choice: "wageSelect",
        other: Some("wageOther"),
        transform: Transform::Number,
        label: "Estimated annual wage",
        numeric: true,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_values_are_trimmed_and_upper_cased() {
        assert_eq!(
            Transform::Upper.apply("  ca "),
            FieldValue::Text("CA".to_owned())
        );
    }

    #[test]
    fn code_values_keep_their_case() {
        assert_eq!(
            Transform::Trim.apply(" 15-1252x "),
            FieldValue::Text("15-1252x".to_owned())
        );
    }

    #[test]
    fn numbers_parse_or_become_nan() {
        assert_eq!(Transform::Number.apply(" 85000.5 "), FieldValue::Number(85000.5));
        assert_eq!(Transform::Number.apply("-5"), FieldValue::Number(-5.0));
        match Transform::Number.apply("lots") {
            FieldValue::Number(n) => assert!(n.is_nan()),
            other => panic!("expected number, got {other:?}"),
        }
    }

    #[test]
    fn numbers_accept_browser_number_syntax() {
        let parsed = |raw: &str| match Transform::Number.apply(raw) {
            FieldValue::Number(n) => n,
            other => panic!("expected number, got {other:?}"),
        };
        assert_eq!(parsed("0x10"), 16.0);
        assert_eq!(parsed("0o17"), 15.0);
        assert_eq!(parsed("0b101"), 5.0);
        assert_eq!(parsed("1e5"), 100000.0);
        assert_eq!(parsed(".5"), 0.5);
        assert_eq!(parsed("+42"), 42.0);
        assert_eq!(parsed("Infinity"), f64::INFINITY);
        assert_eq!(parsed("-Infinity"), f64::NEG_INFINITY);
        for raw in ["-0x10", "0x", "0xZ", "inf", "infinity", "nan", "NaN", "1,000"] {
            assert!(parsed(raw).is_nan(), "raw {raw:?}");
        }
    }

    #[test]
    fn field_table_is_in_wire_order() {
        let keys: Vec<&str> = FIELDS.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(
            keys,
            [
                "FULL_TIME_POSITION",
                "EMPLOYER_STATE",
                "WORKSITE_STATE",
                "SOC_CODE",
                "WAGE_RATE"
            ]
        );
        assert_eq!(FIELDS.iter().filter(|f| f.numeric).count(), 1);
        for field in &FIELDS {
            assert_eq!(field.key.spec().key, field.key);
        }
        assert!(FieldKey::WageRate.spec().numeric);
    }
}
