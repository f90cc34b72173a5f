use dicom::core::Tag;
use dicom::dictionary_std::tags;

use crate::model::{Unit, Vendor};

/// GE private acquisition duration, in microseconds.
pub const GE_ACQUISITION_DURATION: Tag = Tag(0x0019, 0x105A);
/// Siemens private `TA` text.
pub const SIEMENS_TA: Tag = Tag(0x0051, 0x100A);

/// Vendors a rule is evaluated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorScope {
    Any,
    Ge,
    Siemens,
}

impl VendorScope {
    pub fn admits(self, vendor: &Vendor) -> bool {
        match self {
            VendorScope::Any => true,
            VendorScope::Ge => *vendor == Vendor::Ge,
            VendorScope::Siemens => *vendor == Vendor::Siemens,
        }
    }
}

/// A candidate field and the provenance label reported when it wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub tag: Tag,
    pub label: &'static str,
}

/// One step of the cascade. Fields are tried in order; the unit decides
/// how their text is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub name: &'static str,
    pub scope: VendorScope,
    pub fields: &'static [Field],
    pub unit: Unit,
}

/// Duration rules in evaluation order. The GE private field is consulted
/// before the standard AcquisitionDuration, so GE files carrying both report
/// the private one.
pub const RULES: &[Rule] = &[
    Rule {
        name: "ge-private-duration",
        scope: VendorScope::Ge,
        fields: &[Field {
            tag: GE_ACQUISITION_DURATION,
            label: "(0019,105A)",
        }],
        unit: Unit::Microseconds,
    },
    Rule {
        name: "acquisition-duration",
        scope: VendorScope::Any,
        fields: &[Field {
            tag: tags::ACQUISITION_DURATION,
            label: "(0018,9073)",
        }],
        unit: Unit::Seconds,
    },
    Rule {
        name: "siemens-private-ta",
        scope: VendorScope::Siemens,
        fields: &[Field {
            tag: SIEMENS_TA,
            label: "(0051,100A)",
        }],
        unit: Unit::TaExpression,
    },
    Rule {
        name: "siemens-ta-in-names",
        scope: VendorScope::Siemens,
        fields: &[
            Field {
                tag: tags::SERIES_DESCRIPTION,
                label: "TA in SeriesDescription",
            },
            Field {
                tag: tags::PROTOCOL_NAME,
                label: "TA in ProtocolName",
            },
        ],
        unit: Unit::TaExpression,
    },
];
