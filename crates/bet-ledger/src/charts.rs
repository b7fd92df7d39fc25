//! Chart series derived from a record collection.

use serde::Serialize;

use crate::filter::normalize_date;
use crate::metrics::round2;
use crate::types::{BetRecord, OutcomeKind};

/// One point of the cumulative profit curve.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitPoint {
    pub index: usize,
    pub date: String,
    /// Running total after this bet, rounded to 2dp.
    pub cumulative_profit: f64,
}

/// One slice of the outcome breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeSlice {
    pub label: &'static str,
    pub kind: OutcomeKind,
    pub count: usize,
}

/// Cumulative profit in date order.
///
/// Records are ordered by their normalized date string (stable, so same-day
/// bets keep sheet order); dates that don't normalize to ISO sort by raw text.
pub fn cumulative_profit(records: &[BetRecord]) -> Vec<ProfitPoint> {
    let mut keyed: Vec<(String, &BetRecord)> = records.iter().map(|r| (normalize_date(&r.date), r)).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));

    let mut sum = 0.0_f64;
    keyed
        .into_iter()
        .enumerate()
        .map(|(index, (_, record))| {
            sum += record.profit_units;
            ProfitPoint {
                index,
                date: record.date.clone(),
                cumulative_profit: round2(sum),
            }
        })
        .collect()
}

/// Win / loss / void counts, omitting empty slices. Pending bets are not charted.
pub fn outcome_breakdown(records: &[BetRecord]) -> Vec<OutcomeSlice> {
    let count = |kind: OutcomeKind| records.iter().filter(|r| r.result == kind).count();

    [
        ("Green (Win)", OutcomeKind::Win),
        ("Red (Loss)", OutcomeKind::Loss),
        ("Void", OutcomeKind::Void),
    ]
    .into_iter()
    .map(|(label, kind)| OutcomeSlice {
        label,
        kind,
        count: count(kind),
    })
    .filter(|s| s.count > 0)
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bet(date: &str, profit: f64, result: OutcomeKind) -> BetRecord {
        BetRecord {
            id: date.into(),
            date: date.into(),
            competition: "NBA".into(),
            tipster: "Bot".into(),
            home: "A".into(),
            away: "B".into(),
            market: "Over".into(),
            units: 1.0,
            odds: 2.0,
            result,
            profit_units: profit,
            profit_percent: profit * 100.0,
        }
    }

    #[test]
    fn curve_is_sorted_by_date_and_accumulates() {
        let records = vec![
            bet("03/01/2023", -1.0, OutcomeKind::Loss),
            bet("2023-01-01", 0.9, OutcomeKind::Win),
            bet("2023-01-02T18:00:00", 1.1, OutcomeKind::Win),
        ];
        let points = cumulative_profit(&records);

        let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-01-01", "2023-01-02T18:00:00", "03/01/2023"]);
        let totals: Vec<f64> = points.iter().map(|p| p.cumulative_profit).collect();
        assert_eq!(totals, vec![0.9, 2.0, 1.0]);
        assert_eq!(points[2].index, 2);
    }

    #[test]
    fn same_day_keeps_sheet_order() {
        let mut a = bet("2023-01-01", 1.0, OutcomeKind::Win);
        a.id = "a".into();
        let mut b = bet("2023-01-01", -1.0, OutcomeKind::Loss);
        b.id = "b".into();
        let points = cumulative_profit(&[a, b]);
        assert_eq!(points[0].cumulative_profit, 1.0);
        assert_eq!(points[1].cumulative_profit, 0.0);
    }

    #[test]
    fn breakdown_skips_empty_slices() {
        let records = vec![
            bet("2023-01-01", 1.0, OutcomeKind::Win),
            bet("2023-01-02", 1.0, OutcomeKind::Win),
            bet("2023-01-03", 0.0, OutcomeKind::Void),
            bet("2023-01-04", 0.0, OutcomeKind::Pending),
        ];
        let slices = outcome_breakdown(&records);

        assert_eq!(slices.len(), 2);
        assert_eq!((slices[0].kind, slices[0].count), (OutcomeKind::Win, 2));
        assert_eq!((slices[1].kind, slices[1].count), (OutcomeKind::Void, 1));
    }

    #[test]
    fn empty_input() {
        assert!(cumulative_profit(&[]).is_empty());
        assert!(outcome_breakdown(&[]).is_empty());
    }
}
