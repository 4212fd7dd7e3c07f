use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Jurisdiction {
    India,
    Usa,
}

impl Jurisdiction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::India => "INDIA",
            Self::Usa => "USA",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "INDIA" => Some(Self::India),
            "USA" => Some(Self::Usa),
            _ => None,
        }
    }
}

/// Indian tax regime. The two regimes have different slab tables and
/// deduction eligibility; itemized deductions apply only under `Old`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaxRegime {
    New,
    Old,
}

impl TaxRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Old => "OLD",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NEW" => Some(Self::New),
            "OLD" => Some(Self::Old),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilingStatus {
    Single,
    MarriedJoint,
    HeadOfHousehold,
}

impl FilingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "S",
            Self::MarriedJoint => "MFJ",
            Self::HeadOfHousehold => "HOH",
        }
    }

    pub fn status_name(&self) -> &'static str {
        match self {
            Self::Single => "Single",
            Self::MarriedJoint => "Married Filing Jointly",
            Self::HeadOfHousehold => "Head of Household",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "S" => Some(Self::Single),
            "MFJ" => Some(Self::MarriedJoint),
            "HOH" => Some(Self::HeadOfHousehold),
            _ => None,
        }
    }
}
