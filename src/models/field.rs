//! Tracked fields of a daily entry
//!
//! Names each field once so validation messages, display and export agree on
//! storage keys, labels and ordering.

use std::fmt;

/// What kind of value a field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Yes/No habit flag
    Choice,
    /// Optional non-negative number
    Number,
    /// Optional free text
    Text,
}

/// Every field recorded for a day, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    MorningJuice,
    WaterIntake,
    SleepHours,
    SelfImprovementTime,
    EducationTime,
    GithubCommits,
    LinkedinPosts,
    LinkedinEngagement,
    FacebookPosts,
    FacebookEngagement,
    InstagramPosts,
    InstagramEngagement,
    MoneyEarned,
    MoneySpent,
    Notes,
}

impl Field {
    pub const ALL: [Field; 15] = [
        Field::MorningJuice,
        Field::WaterIntake,
        Field::SleepHours,
        Field::SelfImprovementTime,
        Field::EducationTime,
        Field::GithubCommits,
        Field::LinkedinPosts,
        Field::LinkedinEngagement,
        Field::FacebookPosts,
        Field::FacebookEngagement,
        Field::InstagramPosts,
        Field::InstagramEngagement,
        Field::MoneyEarned,
        Field::MoneySpent,
        Field::Notes,
    ];

    /// Key used in year files
    pub fn key(&self) -> &'static str {
        match self {
            Field::MorningJuice => "morning_juice",
            Field::WaterIntake => "water_intake",
            Field::SleepHours => "sleep_hours",
            Field::SelfImprovementTime => "self_improvement_time",
            Field::EducationTime => "education_time",
            Field::GithubCommits => "github_commits",
            Field::LinkedinPosts => "linkedin_posts",
            Field::LinkedinEngagement => "linkedin_engagement",
            Field::FacebookPosts => "facebook_posts",
            Field::FacebookEngagement => "facebook_engagement",
            Field::InstagramPosts => "instagram_posts",
            Field::InstagramEngagement => "instagram_engagement",
            Field::MoneyEarned => "money_earned",
            Field::MoneySpent => "money_spent",
            Field::Notes => "notes",
        }
    }

    /// Label used in messages: the key with words spaced and capitalised
    pub fn label(&self) -> &'static str {
        match self {
            Field::MorningJuice => "Morning Juice",
            Field::WaterIntake => "Water Intake",
            Field::SleepHours => "Sleep Hours",
            Field::SelfImprovementTime => "Self Improvement Time",
            Field::EducationTime => "Education Time",
            Field::GithubCommits => "Github Commits",
            Field::LinkedinPosts => "Linkedin Posts",
            Field::LinkedinEngagement => "Linkedin Engagement",
            Field::FacebookPosts => "Facebook Posts",
            Field::FacebookEngagement => "Facebook Engagement",
            Field::InstagramPosts => "Instagram Posts",
            Field::InstagramEngagement => "Instagram Engagement",
            Field::MoneyEarned => "Money Earned",
            Field::MoneySpent => "Money Spent",
            Field::Notes => "Notes",
        }
    }

    /// Unit shown next to the value, if any
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            Field::WaterIntake => Some("L"),
            Field::SleepHours => Some("h"),
            Field::SelfImprovementTime
            | Field::EducationTime
            | Field::LinkedinEngagement
            | Field::FacebookEngagement
            | Field::InstagramEngagement => Some("min"),
            _ => None,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::MorningJuice => FieldKind::Choice,
            Field::Notes => FieldKind::Text,
            _ => FieldKind::Number,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
