//! `watch`: reload the ledger on a fixed interval and print the KPI line
//! after each load. Uses a plain tokio::time::interval; Ctrl-C stops it.

use anyhow::Result;
use bet_ledger::http::HttpSource;
use bet_ledger::{FilterState, LedgerStore, calculate_kpis, filter_records};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, warn};

use crate::config::Config;

/// Reload immediately, then every `config.watch_interval` until Ctrl-C.
pub async fn run(store: &LedgerStore, http: &HttpSource, config: &Config, filters: &FilterState) -> Result<()> {
    info!(
        "Reloading every {} minute(s); press Ctrl-C to stop",
        config.watch_interval.as_secs() / 60
    );

    let mut interval = tokio::time::interval(config.watch_interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = interval.tick() => run_once(store, http, config, filters).await,
            _ = tokio::signal::ctrl_c() => {
                info!("Stopping watch");
                return Ok(());
            }
        }
    }
}

async fn run_once(store: &LedgerStore, http: &HttpSource, config: &Config, filters: &FilterState) {
    match crate::load(store, http, &config.input).await {
        Ok(true) => {
            let snapshot = store.snapshot();
            let view = filter_records(&snapshot.records, filters);
            let kpis = calculate_kpis(&view);
            let at = snapshot
                .loaded_at
                .map(|t| t.format("%H:%M:%S").to_string())
                .unwrap_or_default();
            println!("[{}] {} bets | {}", at, view.len(), kpis.context_line());
        }
        Ok(false) => warn!("Reload superseded by a newer one"),
        Err(e) => error!(
            "Reload failed, keeping previous data ({} bets): {:#}",
            store.snapshot().records.len(),
            e
        ),
    }
}
