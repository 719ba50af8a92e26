//! Startup to project view-model adapter
//!
//! `Project` is the shape the front-end pages render. It is rebuilt from the
//! stored startup row on every request and never written back.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::classification::{ActivityLevel, ProjectStage, Sector};
use crate::entity::startups;

/// Funding ask shown when a startup did not state one (or stated zero)
pub const DEFAULT_FUNDING_ASK: u64 = 50_000;

/// Tagline length when it has to be cut from the description
pub const TAGLINE_MAX_CHARS: usize = 120;

/// Usage figures extracted from the free-text startup fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ProjectMetrics {
    pub users: u64,
    pub growth: u64,
    pub revenue: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectTeamMember {
    pub name: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageChange {
    pub stage: ProjectStage,
    pub date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub vision: String,
    pub stage: ProjectStage,
    pub sector: Sector,
    pub funding_ask: u64,
    /// Always 0. Nothing records raised amounts yet; the field only reserves its
    /// place in the view-model.
    pub funding_raised: u64,
    pub metrics: ProjectMetrics,
    /// Left empty here; team data is served by `/startups/{id}/team`
    pub team: Vec<ProjectTeamMember>,
    /// Left empty here; no stage transitions are recorded
    pub stage_history: Vec<StageChange>,
    /// Placeholder, not computed from any activity data
    pub community_activity: ActivityLevel,
    pub website: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Integer made of every ASCII digit in `raw`, in order; `0` if there are none.
///
/// This is an approximation: `"$50,000"` gives 50000 but `"50K+"` gives 50 and
/// `"1.5M"` gives 15. Values too large for `u64` saturate.
pub fn extract_number(raw: Option<&str>) -> u64 {
    raw.unwrap_or_default()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit))
        })
}

/// Converts a stored startup into a project, using the current time for missing timestamps
pub fn to_project(record: &startups::Model) -> Project {
    to_project_at(record, Utc::now())
}

/// Converts a stored startup into a project; `now` stands in for missing timestamps
pub fn to_project_at(record: &startups::Model, now: DateTime<Utc>) -> Project {
    let tagline = non_blank(record.tagline.as_deref())
        .map(str::to_string)
        .unwrap_or_else(|| record.description.chars().take(TAGLINE_MAX_CHARS).collect());

    let vision = non_blank(record.vision.as_deref())
        .unwrap_or(record.description.as_str())
        .to_string();

    let funding_ask = match extract_number(record.funding.as_deref()) {
        0 => DEFAULT_FUNDING_ASK,
        ask => ask,
    };

    Project {
        id: record.id.to_string(),
        name: record.name.clone(),
        tagline,
        description: record.description.clone(),
        vision,
        stage: ProjectStage::from_label(record.stage.as_deref()),
        sector: Sector::from_category(Some(record.category.as_str())),
        funding_ask,
        funding_raised: 0,
        metrics: ProjectMetrics {
            users: extract_number(record.users.as_deref()),
            growth: extract_number(record.growth.as_deref()),
            revenue: extract_number(record.revenue.as_deref()),
        },
        team: Vec::new(),
        stage_history: Vec::new(),
        community_activity: ActivityLevel::Medium,
        website: record.website.clone(),
        logo_url: record.logo_url.clone(),
        created_at: record.created_at.unwrap_or(now),
        updated_at: record.updated_at.unwrap_or(now),
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record() -> startups::Model {
        startups::Model {
            id: 42,
            name: "LedgerLoop".to_string(),
            description: "Self-custodial payroll for remote teams.".to_string(),
            category: "Web3".to_string(),
            stage: None,
            users: None,
            growth: None,
            tagline: None,
            vision: None,
            funding: None,
            revenue: None,
            founder_name: None,
            founder_email: None,
            website: None,
            logo_url: None,
            twitter: None,
            linkedin: None,
            github: None,
            submitted_by: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn extracts_digits_from_decorated_values() {
        assert_eq!(extract_number(Some("$50,000")), 50_000);
        assert_eq!(extract_number(Some("+245%")), 245);
        assert_eq!(extract_number(Some("50K+")), 50);
        assert_eq!(extract_number(Some("1.5M")), 15);
        assert_eq!(extract_number(Some("1200")), 1200);
        assert_eq!(extract_number(Some("none yet")), 0);
        assert_eq!(extract_number(Some("")), 0);
        assert_eq!(extract_number(None), 0);
    }

    #[test]
    fn extraction_saturates_on_overflow() {
        assert_eq!(extract_number(Some("99999999999999999999999")), u64::MAX);
    }

    #[test]
    fn maps_identity_and_text_fields() {
        let project = to_project_at(&record(), now());

        assert_eq!(project.id, "42");
        assert_eq!(project.name, "LedgerLoop");
        assert_eq!(project.tagline, "Self-custodial payroll for remote teams.");
        assert_eq!(project.vision, "Self-custodial payroll for remote teams.");
    }

    #[test]
    fn prefers_explicit_tagline_and_vision() {
        let mut startup = record();
        startup.tagline = Some("Payroll, on-chain".to_string());
        startup.vision = Some("Every team paid instantly".to_string());

        let project = to_project_at(&startup, now());

        assert_eq!(project.tagline, "Payroll, on-chain");
        assert_eq!(project.vision, "Every team paid instantly");
    }

    #[test]
    fn long_description_is_cut_to_tagline_length_by_characters() {
        let mut startup = record();
        startup.description = "é".repeat(200);

        let project = to_project_at(&startup, now());

        assert_eq!(project.tagline.chars().count(), TAGLINE_MAX_CHARS);
        assert_eq!(project.description.chars().count(), 200);
    }

    #[test]
    fn empty_description_gives_empty_text() {
        let mut startup = record();
        startup.description = String::new();

        let project = to_project_at(&startup, now());

        assert_eq!(project.tagline, "");
        assert_eq!(project.vision, "");
    }

    #[test]
    fn maps_stage_and_sector() {
        let mut startup = record();
        startup.stage = Some("Series A".to_string());
        let project = to_project_at(&startup, now());
        assert_eq!(project.stage, ProjectStage::Fundraising);
        assert_eq!(project.sector, Sector::Web3);

        startup.stage = Some("unknown-value".to_string());
        startup.category = "Web2".to_string();
        let project = to_project_at(&startup, now());
        assert_eq!(project.stage, ProjectStage::EarlyUsers);
        assert_eq!(project.sector, Sector::Saas);

        startup.category = String::new();
        assert_eq!(to_project_at(&startup, now()).sector, Sector::Other);
    }

    #[test]
    fn zero_funding_falls_back_to_default_ask() {
        let mut startup = record();
        startup.funding = Some("$0".to_string());
        assert_eq!(to_project_at(&startup, now()).funding_ask, DEFAULT_FUNDING_ASK);

        startup.funding = None;
        assert_eq!(to_project_at(&startup, now()).funding_ask, 50_000);

        startup.funding = Some("$250,000".to_string());
        assert_eq!(to_project_at(&startup, now()).funding_ask, 250_000);
    }

    #[test]
    fn extracts_metrics() {
        let mut startup = record();
        startup.users = Some("50K+".to_string());
        startup.growth = Some("+245%".to_string());
        startup.revenue = Some("$12,500/mo".to_string());

        let metrics = to_project_at(&startup, now()).metrics;

        assert_eq!(metrics.users, 50);
        assert_eq!(metrics.growth, 245);
        assert_eq!(metrics.revenue, 12_500);
    }

    #[test]
    fn placeholders_are_fixed() {
        let mut startup = record();
        startup.funding = Some("$1,000,000".to_string());

        let project = to_project_at(&startup, now());

        assert_eq!(project.funding_raised, 0);
        assert!(project.team.is_empty());
        assert!(project.stage_history.is_empty());
        assert_eq!(project.community_activity, ActivityLevel::Medium);
    }

    #[test]
    fn timestamps_pass_through_or_default_to_now() {
        let created = Utc.with_ymd_and_hms(2024, 11, 5, 8, 30, 0).unwrap();
        let mut startup = record();
        startup.created_at = Some(created);

        let project = to_project_at(&startup, now());

        assert_eq!(project.created_at, created);
        assert_eq!(project.updated_at, now());
    }

    #[test]
    fn serializes_in_camel_case() {
        let json = serde_json::to_value(to_project_at(&record(), now())).unwrap();

        assert_eq!(json["fundingAsk"], 50_000);
        assert_eq!(json["fundingRaised"], 0);
        assert_eq!(json["stage"], "early_users");
        assert_eq!(json["sector"], "web3");
        assert_eq!(json["communityActivity"], "medium");
        assert!(json["stageHistory"].as_array().unwrap().is_empty());
    }
}
