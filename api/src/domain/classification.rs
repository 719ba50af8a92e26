//! Canonical stage, sector and activity values used by the project view-model.
//!
//! Submitted startups describe their stage in whatever words the founder chose
//! ("Series A", "pre-seed", "MVP"). The UI only knows a closed set of stages and
//! sectors, so every lookup here is total: unknown input maps to a fixed default.

use serde::{Deserialize, Serialize};

/// Canonical lifecycle stage of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStage {
    Idea,
    Prototype,
    Mvp,
    #[default]
    EarlyUsers,
    Traction,
    Fundraising,
    Growth,
    Scaling,
    Acquired,
}

impl ProjectStage {
    pub const ALL: [ProjectStage; 9] = [
        ProjectStage::Idea,
        ProjectStage::Prototype,
        ProjectStage::Mvp,
        ProjectStage::EarlyUsers,
        ProjectStage::Traction,
        ProjectStage::Fundraising,
        ProjectStage::Growth,
        ProjectStage::Scaling,
        ProjectStage::Acquired,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStage::Idea => "idea",
            ProjectStage::Prototype => "prototype",
            ProjectStage::Mvp => "mvp",
            ProjectStage::EarlyUsers => "early_users",
            ProjectStage::Traction => "traction",
            ProjectStage::Fundraising => "fundraising",
            ProjectStage::Growth => "growth",
            ProjectStage::Scaling => "scaling",
            ProjectStage::Acquired => "acquired",
        }
    }

    /// Maps a free-text stage label to its canonical stage.
    ///
    /// The label is trimmed, lower-cased and has runs of spaces or hyphens
    /// replaced by `_` before lookup, so "Series A", "series-a" and "SERIES_A"
    /// are the same key.
    pub fn from_label(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        match normalize_label(raw).as_str() {
            "pre_seed" => ProjectStage::Prototype,
            "seed" => ProjectStage::Traction,
            "series_a" => ProjectStage::Fundraising,
            "series_b" => ProjectStage::Growth,
            "series_c" => ProjectStage::Scaling,
            key => Self::ALL
                .into_iter()
                .find(|stage| stage.as_str() == key)
                .unwrap_or_default(),
        }
    }
}

fn normalize_label(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '-' || c == '_')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Market sector shown on project cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sector {
    Ai,
    Fintech,
    Healthtech,
    Edtech,
    Climate,
    Consumer,
    Saas,
    Web3,
    Other,
}

impl Sector {
    /// Sector for a startup category: Web2 listings are shown as SaaS, Web3 as Web3,
    /// anything else (including a missing category) as Other. Case-sensitive, like the
    /// values the submission endpoint accepts.
    pub fn from_category(category: Option<&str>) -> Self {
        match category {
            Some("Web2") => Sector::Saas,
            Some("Web3") => Sector::Web3,
            _ => Sector::Other,
        }
    }
}

/// Coarse community activity indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    Low,
    Medium,
    High,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_funding_round_labels() {
        assert_eq!(ProjectStage::from_label(Some("Series A")), ProjectStage::Fundraising);
        assert_eq!(ProjectStage::from_label(Some("series-b")), ProjectStage::Growth);
        assert_eq!(ProjectStage::from_label(Some("SERIES  C")), ProjectStage::Scaling);
        assert_eq!(ProjectStage::from_label(Some("Seed")), ProjectStage::Traction);
        assert_eq!(ProjectStage::from_label(Some("Pre-Seed")), ProjectStage::Prototype);
        assert_eq!(ProjectStage::from_label(Some("MVP")), ProjectStage::Mvp);
        assert_eq!(ProjectStage::from_label(Some("growth")), ProjectStage::Growth);
    }

    #[test]
    fn canonical_values_map_to_themselves() {
        for stage in ProjectStage::ALL {
            assert_eq!(ProjectStage::from_label(Some(stage.as_str())), stage);
        }
        assert_eq!(ProjectStage::from_label(Some("Early Users")), ProjectStage::EarlyUsers);
    }

    #[test]
    fn unknown_or_missing_stage_defaults_to_early_users() {
        assert_eq!(ProjectStage::from_label(Some("unknown-value")), ProjectStage::EarlyUsers);
        assert_eq!(ProjectStage::from_label(Some("")), ProjectStage::EarlyUsers);
        assert_eq!(ProjectStage::from_label(None), ProjectStage::EarlyUsers);
    }

    #[test]
    fn serializes_stage_as_snake_case() {
        let json = serde_json::to_string(&ProjectStage::EarlyUsers).unwrap();
        assert_eq!(json, "\"early_users\"");
    }

    #[test]
    fn maps_categories_to_sectors() {
        assert_eq!(Sector::from_category(Some("Web2")), Sector::Saas);
        assert_eq!(Sector::from_category(Some("Web3")), Sector::Web3);
        assert_eq!(Sector::from_category(Some("web3")), Sector::Other);
        assert_eq!(Sector::from_category(Some("AI")), Sector::Other);
        assert_eq!(Sector::from_category(None), Sector::Other);
    }
}
