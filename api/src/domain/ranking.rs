//! Leaderboard ranking
//!
//! Startups are ranked by the numeric value of their free-text `growth` field
//! (`"+245%"`, `"-12%"`, ...). Persisted growth strings are never validated, so
//! anything that does not parse counts as zero growth instead of failing the
//! whole leaderboard.

use serde::Serialize;

use crate::entity::startups;

/// Growth rate reported for startups that never filled in the field
pub const DEFAULT_GROWTH_RATE: &str = "+0%";

/// One ranked row of the leaderboard. Derived on every read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position after sorting
    pub rank: usize,
    /// The growth string as submitted, or [`DEFAULT_GROWTH_RATE`]
    pub growth_rate: String,
    pub startup: startups::Model,
}

/// Numeric growth of a percentage string: one trailing `%` is stripped and the
/// rest parsed as a float. Missing, unparsable and non-finite values are `0`.
pub fn parse_growth(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };

    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();

    match number.parse::<f64>() {
        // Adding +0.0 folds -0.0 into 0.0 so "-0%" ties with "+0%"
        Ok(value) if value.is_finite() => value + 0.0,
        _ => 0.0,
    }
}

/// Ranks startups by descending growth.
///
/// The sort is stable: startups with equal growth keep their input order, so
/// callers that pass records in id order get reproducible ranks.
pub fn compute_leaderboard<I>(records: I) -> Vec<LeaderboardEntry>
where
    I: IntoIterator<Item = startups::Model>,
{
    let mut scored: Vec<(f64, startups::Model)> = records
        .into_iter()
        .map(|startup| (parse_growth(startup.growth.as_deref()), startup))
        .collect();

    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));

    scored
        .into_iter()
        .enumerate()
        .map(|(index, (_, startup))| LeaderboardEntry {
            rank: index + 1,
            growth_rate: growth_rate_label(startup.growth.as_deref()),
            startup,
        })
        .collect()
}

fn growth_rate_label(raw: Option<&str>) -> String {
    match raw {
        Some(growth) if !growth.trim().is_empty() => growth.to_string(),
        _ => DEFAULT_GROWTH_RATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn startup(id: i32, growth: Option<&str>) -> startups::Model {
        startups::Model {
            id,
            name: format!("Startup {}", id),
            description: "A startup".to_string(),
            category: "Web2".to_string(),
            stage: None,
            users: None,
            growth: growth.map(str::to_string),
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

    fn ids(entries: &[LeaderboardEntry]) -> Vec<i32> {
        entries.iter().map(|e| e.startup.id).collect()
    }

    #[test]
    fn parses_percentage_strings() {
        assert_eq!(parse_growth(Some("+245%")), 245.0);
        assert_eq!(parse_growth(Some("-12%")), -12.0);
        assert_eq!(parse_growth(Some("37.5%")), 37.5);
        assert_eq!(parse_growth(Some(" +8% ")), 8.0);
        assert_eq!(parse_growth(Some("15")), 15.0);
    }

    #[test]
    fn unparsable_growth_is_zero() {
        assert_eq!(parse_growth(None), 0.0);
        assert_eq!(parse_growth(Some("")), 0.0);
        assert_eq!(parse_growth(Some("n/a")), 0.0);
        assert_eq!(parse_growth(Some("%")), 0.0);
        assert_eq!(parse_growth(Some("10%%")), 0.0);
        assert_eq!(parse_growth(Some("NaN%")), 0.0);
        assert_eq!(parse_growth(Some("inf%")), 0.0);
    }

    #[test]
    fn negative_zero_is_zero() {
        let value = parse_growth(Some("-0%"));
        assert_eq!(value, 0.0);
        assert!(value.is_sign_positive());
    }

    #[test]
    fn empty_input_gives_empty_leaderboard() {
        assert!(compute_leaderboard(Vec::new()).is_empty());
    }

    #[test]
    fn ranks_by_growth_with_defaults_keeping_input_order() {
        let records = vec![
            startup(1, Some("+0%")),
            startup(2, None),
            startup(3, Some("+245%")),
            startup(4, Some("n/a")),
        ];

        let leaderboard = compute_leaderboard(records);

        assert_eq!(ids(&leaderboard), vec![3, 1, 2, 4]);
        let growth_rates: Vec<&str> = leaderboard.iter().map(|e| e.growth_rate.as_str()).collect();
        assert_eq!(growth_rates, vec!["+245%", "+0%", "+0%", "n/a"]);
    }

    #[test]
    fn ranks_are_contiguous_from_one() {
        let records: Vec<_> = ["+5%", "+50%", "-3%", "+50%", "x", "+0.5%"]
            .iter()
            .enumerate()
            .map(|(i, g)| startup(i as i32 + 1, Some(*g)))
            .collect();

        let leaderboard = compute_leaderboard(records);

        assert_eq!(leaderboard.len(), 6);
        let ranks: Vec<usize> = leaderboard.iter().map(|e| e.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sorts_descending_and_stable_on_ties() {
        let records = vec![
            startup(10, Some("+20%")),
            startup(11, Some("-5%")),
            startup(12, Some("+20.0%")),
            startup(13, Some("+100%")),
            startup(14, Some("20%")),
        ];

        let leaderboard = compute_leaderboard(records);

        assert_eq!(ids(&leaderboard), vec![13, 10, 12, 14, 11]);
        let values: Vec<f64> = leaderboard
            .iter()
            .map(|e| parse_growth(e.startup.growth.as_deref()))
            .collect();
        assert!(values.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn negative_growth_ranks_below_missing_growth() {
        let leaderboard = compute_leaderboard(vec![startup(1, Some("-40%")), startup(2, None)]);
        assert_eq!(ids(&leaderboard), vec![2, 1]);
    }

    #[test]
    fn keeps_records_unchanged_and_is_deterministic() {
        let records = vec![
            startup(1, Some("+3%")),
            startup(2, Some("  ")),
            startup(3, Some("+9%")),
        ];

        let first = compute_leaderboard(records.clone());
        let second = compute_leaderboard(records.clone());

        assert_eq!(first, second);
        assert_eq!(first[0].startup, records[2]);
        // Blank growth is reported with the default label but the record is untouched
        assert_eq!(first[2].growth_rate, DEFAULT_GROWTH_RATE);
        assert_eq!(first[2].startup.growth.as_deref(), Some("  "));
    }
}
