//! Report output (console summary, record table, CSV export)

use anyhow::{Context, Result};
use bet_ledger::charts::{cumulative_profit, outcome_breakdown};
use bet_ledger::pager::{self, PAGE_SIZE};
use bet_ledger::{BetRecord, FilterState, KpiMetrics, Snapshot};
use csv::Writer;
use std::io;
use std::path::Path;

use crate::constants;

/// Header of exported CSV files. Column order matches the sheet layout the
/// parser reads, so an export can be loaded back with `--csv`.
const EXPORT_HEADER: [&str; 12] = [
    "Date",
    "Competition",
    "Tipster",
    "Home",
    "Away",
    "Market",
    "Units",
    "Odds",
    "Result",
    "Profit",
    "Profit_%",
    "Id",
];

/// One-line description of the active filters
pub fn describe_filters(filters: &FilterState) -> String {
    let mut parts = Vec::new();
    if let Some(ref competition) = filters.competition {
        parts.push(format!("competition={}", competition));
    }
    if let Some(ref tipster) = filters.tipster {
        parts.push(format!("tipster={}", tipster));
    }
    if let Some(result) = filters.result {
        parts.push(format!("result={}", result));
    }
    if let Some(ref date) = filters.date {
        parts.push(format!("date={}", date));
    }

    if parts.is_empty() {
        "none".to_string()
    } else {
        parts.join(", ")
    }
}

// =============================================================================
// Console summary
// =============================================================================

/// Print the KPI block, outcome breakdown and profit curve extremes for `view`
pub fn write_summary<W: io::Write>(
    out: &mut W,
    snapshot: &Snapshot,
    filters: &FilterState,
    view: &[BetRecord],
    kpis: &KpiMetrics,
) -> io::Result<()> {
    let rule = "=".repeat(constants::BANNER_WIDTH);

    writeln!(out, "\n{}", rule)?;
    writeln!(out, "                 BETTING PERFORMANCE SUMMARY")?;
    writeln!(out, "{}\n", rule)?;

    writeln!(out, "Source:            {}", snapshot.source)?;
    if let Some(loaded_at) = snapshot.loaded_at {
        writeln!(out, "Loaded at:         {}", loaded_at.format("%Y-%m-%d %H:%M:%S UTC"))?;
    }
    writeln!(out, "Filters:           {}", describe_filters(filters))?;
    writeln!(out, "Bets:              {} of {}", view.len(), snapshot.records.len())?;

    writeln!(out, "\nPERFORMANCE")?;
    writeln!(out, "  Total Profit:      {:>10.2} u", kpis.total_profit)?;
    writeln!(out, "  ROI:               {:>10.2} %", kpis.roi)?;
    writeln!(out, "  Win Rate:          {:>10.2} %", kpis.win_rate)?;
    writeln!(out, "  Average Odds:      {:>10.2}", kpis.avg_odds)?;
    writeln!(out, "  Bankroll Growth:   {:>10.2} %", kpis.current_bankroll_growth)?;

    let slices = outcome_breakdown(view);
    if !slices.is_empty() {
        writeln!(out, "\nOUTCOMES")?;
        for slice in &slices {
            writeln!(out, "  {:<18} {:>6}", slice.label, slice.count)?;
        }
    }

    let curve = cumulative_profit(view);
    let peak = curve.iter().max_by(|a, b| a.cumulative_profit.total_cmp(&b.cumulative_profit));
    let low = curve.iter().min_by(|a, b| a.cumulative_profit.total_cmp(&b.cumulative_profit));
    if let (Some(peak), Some(low), Some(last)) = (peak, low, curve.last()) {
        writeln!(out, "\nPROFIT CURVE")?;
        writeln!(out, "  Peak:    {:>10.2} u  ({})", peak.cumulative_profit, peak.date)?;
        writeln!(out, "  Low:     {:>10.2} u  ({})", low.cumulative_profit, low.date)?;
        writeln!(out, "  Final:   {:>10.2} u  ({})", last.cumulative_profit, last.date)?;
    }

    writeln!(out, "\n{}", rule)?;
    Ok(())
}

// =============================================================================
// Record table
// =============================================================================

fn fit(label: &str, width: usize) -> String {
    if label.chars().count() <= width {
        return label.to_string();
    }
    let mut cut: String = label.chars().take(width.saturating_sub(1)).collect();
    cut.push('…');
    cut
}

/// Print one page of `view`; out-of-range page numbers are clamped.
///
/// Returns the page actually shown.
pub fn write_page<W: io::Write>(out: &mut W, view: &[BetRecord], requested: usize) -> io::Result<usize> {
    let total = pager::total_pages(view.len());
    let current = pager::clamp_page(requested, total);

    if view.is_empty() {
        writeln!(out, "No bets match the current filters.")?;
        return Ok(current);
    }

    let width = constants::LABEL_COLUMN_WIDTH;
    writeln!(
        out,
        "{:<10}  {:<width$}  {:<width$}  {:<28}  {:<20}  {:>5}  {:>5}  {:<7}  {:>7}",
        "Date", "Competition", "Tipster", "Match", "Market", "Units", "Odds", "Result", "Profit",
    )?;

    for record in pager::page(view, current) {
        let fixture = format!("{} x {}", record.home, record.away);
        writeln!(
            out,
            "{:<10}  {:<width$}  {:<width$}  {:<28}  {:<20}  {:>5.2}  {:>5.2}  {:<7}  {:>+7.2}",
            fit(&record.date, 10),
            fit(&record.competition, width),
            fit(&record.tipster, width),
            fit(&fixture, 28),
            fit(&record.market, 20),
            record.units,
            record.odds,
            record.result.to_string(),
            record.profit_units,
        )?;
    }

    let first = (current - 1) * PAGE_SIZE + 1;
    let last = (current * PAGE_SIZE).min(view.len());
    writeln!(
        out,
        "\nPage {} of {} (bets {}-{} of {})",
        current,
        total,
        first,
        last,
        view.len()
    )?;
    Ok(current)
}

// =============================================================================
// CSV export
// =============================================================================

/// Write `records` as CSV in sheet column order
pub fn write_records_csv<W: io::Write>(writer: W, records: &[BetRecord]) -> Result<()> {
    let mut wtr = Writer::from_writer(writer);

    wtr.write_record(EXPORT_HEADER)?;

    for record in records {
        wtr.write_record([
            record.date.as_str(),
            &record.competition,
            &record.tipster,
            &record.home,
            &record.away,
            &record.market,
            &record.units.to_string(),
            &record.odds.to_string(),
            &record.result.to_string(),
            &record.profit_units.to_string(),
            &format!("{}%", record.profit_percent),
            &record.id,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Export `records` to a CSV file at `path`
pub fn export_records(path: &Path, records: &[BetRecord]) -> Result<()> {
    let file =
        std::fs::File::create(path).with_context(|| format!("Failed to create export file: {}", path.display()))?;
    write_records_csv(file, records).with_context(|| format!("Failed to write export file: {}", path.display()))?;

    println!("  Generated: {} ({} bets)", path.display(), records.len());
    Ok(())
}
