//! KPI aggregation over a record collection.

use crate::types::{BetRecord, KpiMetrics, OutcomeKind};

/// Fixed display multiplier for `current_bankroll_growth` (1u ≈ 5% of bankroll).
pub const BANKROLL_GROWTH_MULTIPLIER: f64 = 5.0;

/// Round to 2 decimal places, folding `-0.0` into `0.0` for display.
pub fn round2(value: f64) -> f64 {
    normalize_zero((value * 100.0).round() / 100.0)
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Compute the KPI snapshot for `records`. Empty input → all zeros.
///
/// Win rate only counts resolved bets (WIN + LOSS); average odds include
/// every record, VOID and PENDING too.
pub fn calculate_kpis(records: &[BetRecord]) -> KpiMetrics {
    let total_bets = records.len();
    if total_bets == 0 {
        return KpiMetrics::default();
    }

    let total_profit: f64 = records.iter().map(|r| r.profit_units).sum();
    let total_staked: f64 = records.iter().map(|r| r.units).sum();

    let wins = records.iter().filter(|r| r.result == OutcomeKind::Win).count();
    let resolved = records
        .iter()
        .filter(|r| matches!(r.result, OutcomeKind::Win | OutcomeKind::Loss))
        .count();
    let win_rate = if resolved > 0 {
        wins as f64 / resolved as f64 * 100.0
    } else {
        0.0
    };

    let avg_odds = records.iter().map(|r| r.odds).sum::<f64>() / total_bets as f64;

    let roi = if total_staked > 0.0 {
        total_profit / total_staked * 100.0
    } else {
        0.0
    };

    KpiMetrics {
        total_profit: round2(total_profit),
        total_bets,
        win_rate: round2(win_rate),
        avg_odds: round2(avg_odds),
        roi: round2(roi),
        current_bankroll_growth: round2(total_profit * BANKROLL_GROWTH_MULTIPLIER),
    }
}
