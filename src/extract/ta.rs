//! Parser for the free-text `TA` duration expressions Siemens writes into
//! private tags and series or protocol names.
//!
//! Two forms are understood, `TA 01:08*2` (minutes and seconds) and
//! `TA 50.12*2` (seconds, fraction dropped). The optional `*n` suffix
//! multiplies the base duration.

use regex::Regex;

// ASCII digits only: `str::parse` rejects other scripts' digits.
const CLOCK_PATTERN: &str = r"(?i)\bTA\s*:?\s*([0-9]{1,2}):([0-9]{2})(?:\s*\*\s*([0-9]+))?\b";
const SECONDS_PATTERN: &str =
    r"(?i)\bTA\s*:?\s*([0-9]+(?:[.,][0-9]+)?)(?:\s*\*\s*([0-9]+))?\b";

/// Compiled `TA` patterns. Build once and share.
#[derive(Debug, Clone)]
pub struct TaGrammar {
    clock: Regex,
    seconds: Regex,
}

impl TaGrammar {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            clock: Regex::new(CLOCK_PATTERN)?,
            seconds: Regex::new(SECONDS_PATTERN)?,
        })
    }

    /// Seconds described by the first `TA` expression in `text`.
    ///
    /// The `mm:ss` form wins whenever it occurs anywhere in the text; the
    /// plain seconds form is only tried otherwise.
    pub fn parse(&self, text: &str) -> Option<f64> {
        if text.is_empty() {
            return None;
        }

        if let Some(caps) = self.clock.captures(text) {
            let minutes: u64 = caps[1].parse().ok()?;
            let seconds: u64 = caps[2].parse().ok()?;
            let multiplier = multiplier(caps.get(3).map(|m| m.as_str()))?;
            return Some((minutes * 60 + seconds) as f64 * multiplier);
        }

        let caps = self.seconds.captures(text)?;
        let base: f64 = caps[1].replace(',', ".").parse().ok()?;
        let multiplier = multiplier(caps.get(2).map(|m| m.as_str()))?;
        Some(base.trunc() * multiplier)
    }
}

fn multiplier(digits: Option<&str>) -> Option<f64> {
    match digits {
        Some(digits) => digits.parse().ok(),
        None => Some(1.0),
    }
}
