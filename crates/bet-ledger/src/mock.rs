//! Synthetic records for demo mode (no sheet connected).

use chrono::{Days, NaiveDate};
use rand::Rng;

use crate::metrics::round2;
use crate::types::{BetRecord, OutcomeKind};

pub const MOCK_RECORD_COUNT: usize = 150;

const TIPSTERS: [&str; 3] = ["Analista Pedro", "Machine Learning Bot", "Estrategia Corners"];
const COMPETITIONS: [&str; 5] = [
    "Premier League",
    "Brasileirão Série A",
    "La Liga",
    "NBA",
    "Champions League",
];
const MARKETS: [&str; 5] = [
    "Over 2.5 Goals",
    "Home Win",
    "Asian Handicap -0.5",
    "BTTS Yes",
    "Corner Over 9.5",
];

/// Roughly a 55% hit rate.
const WIN_PROBABILITY: f64 = 0.55;
/// Applied after win/loss is drawn; overrides it.
const VOID_PROBABILITY: f64 = 0.1;

fn pick<'a, R: Rng>(rng: &mut R, options: &[&'a str]) -> &'a str {
    options[rng.gen_range(0..options.len())]
}

/// Generate one day-by-day run of flat-stake bets starting 2023-01-01.
pub fn generate_mock_records<R: Rng>(rng: &mut R) -> Vec<BetRecord> {
    let base = NaiveDate::from_ymd_opt(2023, 1, 1).expect("valid base date");
    let units = 1.0;

    (0..MOCK_RECORD_COUNT)
        .map(|i| {
            let is_win = rng.gen_bool(WIN_PROBABILITY);
            let is_void = rng.gen_bool(VOID_PROBABILITY);
            let result = match (is_void, is_win) {
                (true, _) => OutcomeKind::Void,
                (false, true) => OutcomeKind::Win,
                (false, false) => OutcomeKind::Loss,
            };

            let odds = round2(1.5 + rng.gen_range(0.0..2.0));
            let profit = match result {
                OutcomeKind::Win => odds * units - units,
                OutcomeKind::Loss => -units,
                OutcomeKind::Void | OutcomeKind::Pending => 0.0,
            };

            let date = base + Days::new(i as u64);

            BetRecord {
                id: format!("bet-{}", i),
                date: date.format("%Y-%m-%d").to_string(),
                competition: pick(rng, &COMPETITIONS).to_string(),
                tipster: pick(rng, &TIPSTERS).to_string(),
                home: "Team A".into(),
                away: "Team B".into(),
                market: pick(rng, &MARKETS).to_string(),
                units,
                odds,
                result,
                profit_units: round2(profit),
                profit_percent: round2(profit * 100.0),
            }
        })
        .collect()
}

/// Demo data from the thread-local RNG.
pub fn generate_demo_records() -> Vec<BetRecord> {
    generate_mock_records(&mut rand::thread_rng())
}
