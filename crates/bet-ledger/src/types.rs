//! Core record types shared by the parser, metrics and filter layers.
//!
//! JSON field names are camelCase: the dashboard frontend reads this exact
//! shape (`profitUnits`, `winRate`, ...).

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ── Outcome ─────────────────────────────────────────────────────────────────

/// Closed set of bet outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OutcomeKind {
    Win,
    Loss,
    Void,
    Pending,
}

impl std::fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Win => write!(f, "WIN"),
            Self::Loss => write!(f, "LOSS"),
            Self::Void => write!(f, "VOID"),
            Self::Pending => write!(f, "PENDING"),
        }
    }
}

/// Returned when a filter selection names something outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown outcome kind: {0}")]
pub struct UnknownOutcome(pub String);

impl FromStr for OutcomeKind {
    type Err = UnknownOutcome;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WIN" => Ok(Self::Win),
            "LOSS" => Ok(Self::Loss),
            "VOID" => Ok(Self::Void),
            "PENDING" => Ok(Self::Pending),
            _ => Err(UnknownOutcome(s.to_string())),
        }
    }
}

// ── Records ─────────────────────────────────────────────────────────────────

/// One parsed wagering event.
///
/// `date` is kept exactly as it appeared in the sheet (ISO, `DD/MM/YYYY`, ...);
/// normalization happens only when a date filter is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetRecord {
    pub id: String,
    pub date: String,
    pub competition: String,
    pub tipster: String,
    pub home: String,
    pub away: String,
    pub market: String,
    pub units: f64,
    pub odds: f64,
    pub result: OutcomeKind,
    pub profit_units: f64,
    pub profit_percent: f64,
}

// ── Derived metrics ─────────────────────────────────────────────────────────

/// Summary statistics over one record collection. All percentages are 0-100.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KpiMetrics {
    pub total_profit: f64,
    pub total_bets: usize,
    pub win_rate: f64,
    pub avg_odds: f64,
    pub roi: f64,
    /// Display figure only: profit scaled by a fixed multiplier.
    pub current_bankroll_growth: f64,
}

impl KpiMetrics {
    /// One-line portfolio context handed to the analysis collaborator.
    pub fn context_line(&self) -> String {
        format!(
            "Total Profit: {}, ROI: {}%, WinRate: {}%",
            self.total_profit, self.roi, self.win_rate
        )
    }
}

// ── Analysis brief ──────────────────────────────────────────────────────────

/// Structured fields for the external text-generation call on a single bet.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisBrief {
    pub competition: String,
    pub home: String,
    pub away: String,
    pub market: String,
    pub date: String,
    pub odds: f64,
    pub units: f64,
    pub result: OutcomeKind,
    pub profit_units: f64,
    pub portfolio_context: String,
}

impl AnalysisBrief {
    pub fn new(record: &BetRecord, kpis: &KpiMetrics) -> Self {
        Self {
            competition: record.competition.clone(),
            home: record.home.clone(),
            away: record.away.clone(),
            market: record.market.clone(),
            date: record.date.clone(),
            odds: record.odds,
            units: record.units,
            result: record.result,
            profit_units: record.profit_units,
            portfolio_context: kpis.context_line(),
        }
    }
}
