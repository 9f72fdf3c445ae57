//! Campaign and prospect inputs to the outreach pipeline.
//!
//! Only `product_description`, `target_industry`, `outreach_goal` and
//! `brand_voice` feed the prompt templates. The remaining campaign fields are
//! stored and displayed but never reach the model.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Company size bracket chosen at campaign setup:
/// startup (1-50), sme (51-200), mid_market (201-1000), enterprise (1000+).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Startup,
    Sme,
    MidMarket,
    Enterprise,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Sme => "sme",
            CompanySize::MidMarket => "mid_market",
            CompanySize::Enterprise => "enterprise",
        }
    }
}

impl FromStr for CompanySize {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "startup" => Ok(CompanySize::Startup),
            "sme" => Ok(CompanySize::Sme),
            "mid_market" => Ok(CompanySize::MidMarket),
            "enterprise" => Ok(CompanySize::Enterprise),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    India,
    UnitedStates,
    Europe,
    AsiaPacific,
    Global,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::India => "india",
            Region::UnitedStates => "united_states",
            Region::Europe => "europe",
            Region::AsiaPacific => "asia_pacific",
            Region::Global => "global",
        }
    }
}

impl FromStr for Region {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "india" => Ok(Region::India),
            "united_states" => Ok(Region::UnitedStates),
            "europe" => Ok(Region::Europe),
            "asia_pacific" => Ok(Region::AsiaPacific),
            "global" => Ok(Region::Global),
            other => Err(UnknownVariant(other.to_string())),
        }
    }
}

/// A stored enum column held a value this build does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVariant(pub String);

impl fmt::Display for UnknownVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant '{}'", self.0)
    }
}

impl std::error::Error for UnknownVariant {}

/// Campaign configuration captured at setup. Immutable once stored.
///
/// The four prompt fields are required: a request body that omits one fails
/// to deserialize. Empty strings are accepted and passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignConfig {
    pub name: String,
    pub product_description: String,
    pub target_industry: String,
    pub outreach_goal: String,
    pub brand_voice: String,
    pub target_roles: Option<String>,
    pub company_size: Option<CompanySize>,
    pub region: Option<Region>,
    pub triggers: Option<String>,
}

/// The person a message set is generated for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProspectProfile {
    pub name: String,
    pub title: String,
    pub company: String,
    pub industry: String,
    pub profile_summary: String,
    #[serde(default)]
    pub recent_activity: String,
}
