//! Dashboard filters: competition, tipster, outcome and single exact date.

use serde::{Deserialize, Serialize};

use crate::types::{BetRecord, OutcomeKind, UnknownOutcome};

/// Sentinel the selectors use for "no filter".
pub const ALL: &str = "all";

/// Current filter selection. `None` means unfiltered for that clause.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub competition: Option<String>,
    pub tipster: Option<String>,
    pub result: Option<OutcomeKind>,
    /// `YYYY-MM-DD`, as produced by a date picker.
    pub date: Option<String>,
}

impl FilterState {
    /// Build from raw selector values where `"all"` (and, for the date, an
    /// empty string) disables the clause.
    pub fn from_selection(competition: &str, tipster: &str, result: &str, date: &str) -> Result<Self, UnknownOutcome> {
        let select = |v: &str| (v != ALL).then(|| v.to_string());

        let result = if result == ALL { None } else { Some(result.parse()?) };
        let date = (!date.is_empty() && date != ALL).then(|| date.to_string());

        Ok(Self {
            competition: select(competition),
            tipster: select(tipster),
            result,
            date,
        })
    }

    /// All clauses AND-ed; `None` clauses always pass.
    pub fn matches(&self, record: &BetRecord) -> bool {
        if self.competition.as_ref().is_some_and(|c| *c != record.competition) {
            return false;
        }
        if self.tipster.as_ref().is_some_and(|t| *t != record.tipster) {
            return false;
        }
        if self.result.is_some_and(|r| r != record.result) {
            return false;
        }
        if let Some(ref date) = self.date
            && normalize_date(&record.date) != *date
        {
            return false;
        }
        true
    }
}

/// Apply `filters`, preserving the original order.
pub fn filter_records(records: &[BetRecord], filters: &FilterState) -> Vec<BetRecord> {
    records.iter().filter(|r| filters.matches(r)).cloned().collect()
}

/// Bring a sheet date into `YYYY-MM-DD` for comparison with the picker value.
///
/// - ISO timestamps keep the part before the first `T`.
/// - Slash dates are read as `DD/MM/YYYY`; day and month are zero-padded and
///   a 2-digit year gets a `20` prefix (so `1/2/23` → `2023-02-01`).
/// - Anything else is returned trimmed but otherwise unchanged.
pub fn normalize_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Some((day_part, _)) = raw.split_once('T') {
        return day_part.to_string();
    }

    if raw.contains('/') {
        let parts: Vec<&str> = raw.split('/').map(str::trim).collect();
        if let [day, month, year] = parts.as_slice() {
            let year = if year.len() == 2 {
                format!("20{}", year)
            } else {
                year.to_string()
            };
            return format!("{}-{:0>2}-{:0>2}", year, month, day);
        }
    }

    raw.to_string()
}

/// Distinct, non-empty, sorted values of one label column (selector options).
pub fn distinct_labels<F>(records: &[BetRecord], label: F) -> Vec<String>
where
    F: Fn(&BetRecord) -> &str,
{
    let set: std::collections::BTreeSet<&str> = records.iter().map(label).filter(|l| !l.is_empty()).collect();
    set.into_iter().map(str::to_string).collect()
}

/// Competition selector options.
pub fn competition_options(records: &[BetRecord]) -> Vec<String> {
    distinct_labels(records, |r| r.competition.as_str())
}

/// Tipster selector options.
pub fn tipster_options(records: &[BetRecord]) -> Vec<String> {
    distinct_labels(records, |r| r.tipster.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bet(id: &str, date: &str, competition: &str, tipster: &str, result: OutcomeKind) -> BetRecord {
        BetRecord {
            id: id.into(),
            date: date.into(),
            competition: competition.into(),
            tipster: tipster.into(),
            home: "A".into(),
            away: "B".into(),
            market: "Over 2.5 Goals".into(),
            units: 1.0,
            odds: 2.0,
            result,
            profit_units: 0.0,
            profit_percent: 0.0,
        }
    }

    fn sample() -> Vec<BetRecord> {
        vec![
            bet("1", "2023-10-25T12:00:00", "La Liga", "Pedro", OutcomeKind::Win),
            bet("2", "25/10/2023", "NBA", "Bot", OutcomeKind::Loss),
            bet("3", "1/2/23", "La Liga", "Bot", OutcomeKind::Void),
            bet("4", "2023-02-01", "Premier League", "Pedro", OutcomeKind::Win),
        ]
    }

    fn ids(records: &[BetRecord]) -> Vec<&str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn normalizes_iso_timestamp() {
        assert_eq!(normalize_date("2023-10-25T12:00:00"), "2023-10-25");
    }

    #[test]
    fn normalizes_short_slash_date() {
        assert_eq!(normalize_date("1/2/23"), "2023-02-01");
        assert_eq!(normalize_date(" 25/10/2023 "), "2023-10-25");
    }

    #[test]
    fn two_digit_years_always_land_in_2000s() {
        assert_eq!(normalize_date("31/12/99"), "2099-12-31");
    }

    #[test]
    fn other_formats_pass_through() {
        assert_eq!(normalize_date("2023-02-01"), "2023-02-01");
        assert_eq!(normalize_date("Oct 25"), "Oct 25");
        assert_eq!(normalize_date("1/2"), "1/2");
    }

    #[test]
    fn all_clauses_off_returns_everything_in_order() {
        let records = sample();
        let filtered = filter_records(&records, &FilterState::default());
        assert_eq!(filtered, records);

        let from_ui = FilterState::from_selection("all", "all", "all", "").unwrap();
        assert_eq!(from_ui, FilterState::default());
        assert_eq!(filter_records(&records, &from_ui), records);
    }

    #[test]
    fn clauses_are_anded() {
        let records = sample();
        let filters = FilterState::from_selection("La Liga", "Bot", "all", "all").unwrap();
        assert_eq!(ids(&filter_records(&records, &filters)), vec!["3"]);
    }

    #[test]
    fn result_clause() {
        let records = sample();
        let filters = FilterState::from_selection("all", "all", "WIN", "").unwrap();
        assert_eq!(ids(&filter_records(&records, &filters)), vec!["1", "4"]);
    }

    #[test]
    fn date_clause_matches_across_formats() {
        let records = sample();
        let filters = FilterState::from_selection("all", "all", "all", "2023-02-01").unwrap();
        assert_eq!(ids(&filter_records(&records, &filters)), vec!["3", "4"]);

        let filters = FilterState::from_selection("all", "all", "all", "2023-10-25").unwrap();
        assert_eq!(ids(&filter_records(&records, &filters)), vec!["1", "2"]);
    }

    #[test]
    fn competition_match_is_exact() {
        let records = sample();
        let filters = FilterState::from_selection("la liga", "all", "all", "").unwrap();
        assert!(filter_records(&records, &filters).is_empty());
    }

    #[test]
    fn unknown_result_selection_is_rejected() {
        assert!(FilterState::from_selection("all", "all", "GREEN", "").is_err());
    }

    #[test]
    fn selector_options_are_distinct_sorted_and_non_empty() {
        let mut records = sample();
        records.push(bet("5", "2023-01-01", "", "", OutcomeKind::Pending));

        assert_eq!(competition_options(&records), vec!["La Liga", "NBA", "Premier League"]);
        assert_eq!(tipster_options(&records), vec!["Bot", "Pedro"]);
    }
}
