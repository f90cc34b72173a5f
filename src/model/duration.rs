use std::fmt;

use serde::Serialize;

/// How the raw value behind a duration was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Unit {
    #[serde(rename = "microseconds")]
    Microseconds,
    #[serde(rename = "seconds")]
    Seconds,
    #[serde(rename = "mm:ss or sec[*mult]")]
    TaExpression,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Microseconds => "microseconds",
            Unit::Seconds => "seconds",
            Unit::TaExpression => "mm:ss or sec[*mult]",
        }
    }

    /// Recovers the unit from a provenance label produced by the extractor.
    pub fn from_tag_label(label: &str) -> Option<Self> {
        match label {
            "(0019,105A)" => Some(Unit::Microseconds),
            "(0018,9073)" => Some(Unit::Seconds),
            "(0051,100A)" => Some(Unit::TaExpression),
            _ if label.starts_with("TA in") => Some(Unit::TaExpression),
            _ => None,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of running the duration rules over one record.
///
/// `tag_used` is empty exactly when `seconds` is `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DurationResult {
    pub seconds: Option<f64>,
    pub tag_used: String,
    pub raw_value: Option<String>,
}

impl DurationResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn found(seconds: f64, tag_used: &str, raw_value: String) -> Self {
        Self {
            seconds: Some(seconds),
            tag_used: tag_used.to_string(),
            raw_value: Some(raw_value),
        }
    }

    /// Encoding of the raw value, looked up from `tag_used`.
    pub fn unit(&self) -> Option<Unit> {
        Unit::from_tag_label(&self.tag_used)
    }

    pub fn is_found(&self) -> bool {
        self.seconds.is_some()
    }
}
