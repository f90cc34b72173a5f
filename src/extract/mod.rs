//! Scan duration extraction from a single record.

pub mod rules;
pub mod ta;

pub use rules::{Field, Rule, VendorScope, GE_ACQUISITION_DURATION, RULES, SIEMENS_TA};
pub use ta::TaGrammar;

use crate::model::{DurationResult, MetadataRecord, Unit, Vendor};

/// Runs the rule cascade over records.
#[derive(Debug, Clone)]
pub struct DurationExtractor {
    grammar: TaGrammar,
    rules: &'static [Rule],
}

impl DurationExtractor {
    pub fn new(grammar: TaGrammar) -> Self {
        Self {
            grammar,
            rules: RULES,
        }
    }

    pub fn extract<R: MetadataRecord + ?Sized>(&self, record: &R) -> DurationResult {
        let vendor = Vendor::detect(record);
        self.extract_for(record, &vendor)
    }

    /// First field, in rule order, that is present and decodes to a
    /// non-negative number of seconds.
    pub fn extract_for<R: MetadataRecord + ?Sized>(
        &self,
        record: &R,
        vendor: &Vendor,
    ) -> DurationResult {
        for rule in self.rules.iter().filter(|rule| rule.scope.admits(vendor)) {
            for field in rule.fields {
                let Some(raw) = record.text(field.tag) else {
                    continue;
                };
                match self.decode(rule.unit, &raw) {
                    Some(seconds) => {
                        log::trace!("{vendor}: rule {} matched {} = {raw:?}", rule.name, field.label);
                        return DurationResult::found(seconds, field.label, raw);
                    }
                    None => {
                        log::trace!(
                            "{vendor}: rule {} could not decode {} = {raw:?}",
                            rule.name,
                            field.label
                        );
                    }
                }
            }
        }
        DurationResult::none()
    }

    fn decode(&self, unit: Unit, raw: &str) -> Option<f64> {
        let seconds = match unit {
            Unit::Microseconds => parse_decimal(raw).map(|us| us / 1_000_000.0),
            Unit::Seconds => parse_decimal(raw),
            Unit::TaExpression => self.grammar.parse(raw),
        };
        seconds.filter(|value| value.is_finite() && *value >= 0.0)
    }
}

fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}
