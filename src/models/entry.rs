//! Daily entry model
//!
//! A `DailyEntry` holds every metric tracked for one calendar day. Numeric
//! fields are absent when left blank; `morning_juice` is always present.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::field::Field;
use super::quantity::Quantity;

/// Whether the morning juice habit was completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MorningJuice {
    Yes,
    #[default]
    No,
}

impl MorningJuice {
    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
        }
    }
}

impl fmt::Display for MorningJuice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MorningJuice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yes" | "y" => Ok(Self::Yes),
            "no" | "n" | "" => Ok(Self::No),
            other => Err(format!("Morning Juice must be Yes or No, got '{}'", other)),
        }
    }
}

/// Metrics recorded for a single day
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DailyEntry {
    #[serde(default)]
    pub morning_juice: MorningJuice,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub water_intake: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub self_improvement_time: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub education_time: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_commits: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_posts: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin_engagement: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_posts: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook_engagement: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_posts: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram_engagement: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_earned: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub money_spent: Option<Quantity>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl DailyEntry {
    /// Create an empty entry (juice "No", everything else blank)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a numeric field; `None` for blank or non-numeric fields
    pub fn quantity(&self, field: Field) -> Option<Quantity> {
        match field {
            Field::WaterIntake => self.water_intake,
            Field::SleepHours => self.sleep_hours,
            Field::SelfImprovementTime => self.self_improvement_time,
            Field::EducationTime => self.education_time,
            Field::GithubCommits => self.github_commits,
            Field::LinkedinPosts => self.linkedin_posts,
            Field::LinkedinEngagement => self.linkedin_engagement,
            Field::FacebookPosts => self.facebook_posts,
            Field::FacebookEngagement => self.facebook_engagement,
            Field::InstagramPosts => self.instagram_posts,
            Field::InstagramEngagement => self.instagram_engagement,
            Field::MoneyEarned => self.money_earned,
            Field::MoneySpent => self.money_spent,
            Field::MorningJuice | Field::Notes => None,
        }
    }

    /// Numeric field value, counting blank as zero
    pub fn quantity_or_zero(&self, field: Field) -> Quantity {
        self.quantity(field).unwrap_or_default()
    }

    /// Set a numeric field; ignored for non-numeric fields
    pub fn set_quantity(&mut self, field: Field, value: Option<Quantity>) {
        let slot = match field {
            Field::WaterIntake => &mut self.water_intake,
            Field::SleepHours => &mut self.sleep_hours,
            Field::SelfImprovementTime => &mut self.self_improvement_time,
            Field::EducationTime => &mut self.education_time,
            Field::GithubCommits => &mut self.github_commits,
            Field::LinkedinPosts => &mut self.linkedin_posts,
            Field::LinkedinEngagement => &mut self.linkedin_engagement,
            Field::FacebookPosts => &mut self.facebook_posts,
            Field::FacebookEngagement => &mut self.facebook_engagement,
            Field::InstagramPosts => &mut self.instagram_posts,
            Field::InstagramEngagement => &mut self.instagram_engagement,
            Field::MoneyEarned => &mut self.money_earned,
            Field::MoneySpent => &mut self.money_spent,
            Field::MorningJuice | Field::Notes => return,
        };
        *slot = value;
    }

    /// Whether nothing but the default juice flag is recorded
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }

    /// Text shown for a field, empty when blank
    pub fn display_value(&self, field: Field) -> String {
        match field {
            Field::MorningJuice => self.morning_juice.to_string(),
            Field::Notes => self.notes.clone().unwrap_or_default(),
            _ => self
                .quantity(field)
                .map(|q| q.to_string())
                .unwrap_or_default(),
        }
    }
}
