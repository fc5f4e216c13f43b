//! Deposit and compounding frequencies

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How often a fixed deposit is added to the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DepositFrequency {
    #[default]
    Monthly,
    Weekly,
}

impl DepositFrequency {
    /// Number of deposits made in one year
    pub fn periods_per_year(self) -> u32 {
        match self {
            DepositFrequency::Monthly => 12,
            DepositFrequency::Weekly => 52,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DepositFrequency::Monthly => "monthly",
            DepositFrequency::Weekly => "weekly",
        }
    }
}

impl fmt::Display for DepositFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DepositFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "monthly" => Ok(DepositFrequency::Monthly),
            "weekly" => Ok(DepositFrequency::Weekly),
            other => Err(format!("Unknown deposit frequency: {}", other)),
        }
    }
}

/// How often accrued interest is added to principal
///
/// Deserializing an unrecognized label yields `Annually`, matching
/// [`CompoundingFrequency::from_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", from = "String")]
pub enum CompoundingFrequency {
    #[default]
    Annually,
    SemiAnnually,
    Quarterly,
    Monthly,
    Weekly,
    Daily,
}

impl CompoundingFrequency {
    pub const ALL: [CompoundingFrequency; 6] = [
        CompoundingFrequency::Annually,
        CompoundingFrequency::SemiAnnually,
        CompoundingFrequency::Quarterly,
        CompoundingFrequency::Monthly,
        CompoundingFrequency::Weekly,
        CompoundingFrequency::Daily,
    ];

    /// Number of compounding steps applied in one year
    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundingFrequency::Annually => 1,
            CompoundingFrequency::SemiAnnually => 2,
            CompoundingFrequency::Quarterly => 4,
            CompoundingFrequency::Monthly => 12,
            CompoundingFrequency::Weekly => 52,
            CompoundingFrequency::Daily => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompoundingFrequency::Annually => "annually",
            CompoundingFrequency::SemiAnnually => "semi-annually",
            CompoundingFrequency::Quarterly => "quarterly",
            CompoundingFrequency::Monthly => "monthly",
            CompoundingFrequency::Weekly => "weekly",
            CompoundingFrequency::Daily => "daily",
        }
    }

    /// Parse a form label, falling back to annual compounding for anything unrecognized
    pub fn from_label(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|freq| freq.label() == normalized)
            .unwrap_or_else(|| {
                log::warn!(
                    "Unrecognized compounding frequency {:?}, compounding annually",
                    label
                );
                CompoundingFrequency::Annually
            })
    }
}

impl From<String> for CompoundingFrequency {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<&str> for CompoundingFrequency {
    fn from(label: &str) -> Self {
        Self::from_label(label)
    }
}

impl fmt::Display for CompoundingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
