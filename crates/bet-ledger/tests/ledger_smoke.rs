//! Smoke test: run the full ledger pipeline against an in-memory sheet export.

use std::time::Duration;

use bet_ledger::charts::{cumulative_profit, outcome_breakdown};
use bet_ledger::filter::{competition_options, tipster_options};
use bet_ledger::http::CsvSource;
use bet_ledger::ingestion::load_sheet;
use bet_ledger::pager::{PAGE_SIZE, page, total_pages};
use bet_ledger::{
    AnalysisBrief, DataSource, FilterState, LedgerStore, LoadError, OutcomeKind, calculate_kpis, filter_records,
};

/// A messy export in the shape people actually share: quoted labels, comma
/// decimals, emoji results, a ragged trailing row and blank lines.
const EXPORT: &str = r#"Data,Competição,Tipster,Casa,Fora,Mercado,Unidades,Odd,Resultado,Lucro,Lucro %
2023-10-25T12:00:00,Premier League,Analista Pedro,Arsenal,Chelsea,Home Win,1,"1,85",Green ✅,"0,85",85%
25/10/2023,La Liga,Machine Learning Bot,Sevilla,Betis,"Over 2.5 Goals",2,2.10,❌,-2,-100%

1/11/23,"Premier League","Analista Pedro",Liverpool,Everton,BTTS Yes,1,1.95,push,0,0%
2023-11-02,NBA,Machine Learning Bot,Lakers,Celtics,"Handicap -3,5",1,1.90,,0.9,90%
2023-11-03,NBA,Analista Pedro,Heat
"#;

/// Serves `EXPORT` for any URL after an optional delay.
struct SlowSheet {
    delay: Duration,
    body: &'static str,
}

impl CsvSource for SlowSheet {
    async fn fetch_csv(&self, _url: &str) -> Result<String, LoadError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.body.to_string())
    }
}

const LINK: &str = "https://docs.google.com/spreadsheets/d/smoke-sheet/edit#gid=0";

#[tokio::test]
async fn full_pipeline_over_a_messy_export() {
    let store = LedgerStore::new();
    let sheet = SlowSheet {
        delay: Duration::ZERO,
        body: EXPORT,
    };

    assert!(load_sheet(&store, &sheet, LINK).await.expect("load should succeed"));

    let snapshot = store.snapshot();
    let records = &snapshot.records;

    // Ragged "Heat" row is dropped; blank line does not count.
    assert_eq!(records.len(), 4);
    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["row-1", "row-2", "row-3", "row-4"]);

    let results: Vec<OutcomeKind> = records.iter().map(|r| r.result).collect();
    assert_eq!(
        results,
        vec![OutcomeKind::Win, OutcomeKind::Loss, OutcomeKind::Void, OutcomeKind::Win]
    );
    assert_eq!(records[0].odds, 1.85);
    assert_eq!(records[3].market, "Handicap -3,5");

    // KPIs over everything.
    let kpis = calculate_kpis(records);
    assert_eq!(kpis.total_bets, 4);
    assert_eq!(kpis.total_profit, -0.25);
    assert_eq!(kpis.win_rate, 66.67);
    assert_eq!(kpis.avg_odds, 1.95);
    assert_eq!(kpis.roi, -5.0);
    assert_eq!(kpis.current_bankroll_growth, -1.25);

    // Filtered view: one competition, then one exact date across formats.
    let premier = FilterState::from_selection("Premier League", "all", "all", "").unwrap();
    let view = filter_records(records, &premier);
    assert_eq!(view.len(), 2);
    assert_eq!(calculate_kpis(&view).total_profit, 0.85);

    let by_date = FilterState::from_selection("all", "all", "all", "2023-11-01").unwrap();
    let view = filter_records(records, &by_date);
    assert_eq!(view.len(), 1);
    assert_eq!(view[0].home, "Liverpool");

    // Selector options and charts.
    assert_eq!(competition_options(records), vec!["La Liga", "NBA", "Premier League"]);
    assert_eq!(tipster_options(records), vec!["Analista Pedro", "Machine Learning Bot"]);

    let curve = cumulative_profit(records);
    assert_eq!(curve.last().map(|p| p.cumulative_profit), Some(-0.25));
    assert_eq!(outcome_breakdown(records).len(), 3);

    // Paging.
    assert_eq!(total_pages(records.len()), 1);
    assert_eq!(page(records, 1).len(), 4);
    assert!(PAGE_SIZE >= records.len());

    // Brief for the analysis collaborator.
    let brief = AnalysisBrief::new(&records[1], &kpis);
    let json = serde_json::to_value(&brief).unwrap();
    assert_eq!(json["competition"], "La Liga");
    assert_eq!(json["result"], "LOSS");
    assert_eq!(json["profitUnits"], -2.0);
    assert_eq!(
        json["portfolioContext"],
        "Total Profit: -0.25, ROI: -5%, WinRate: 66.67%"
    );
}

#[tokio::test]
async fn slow_earlier_refresh_does_not_overwrite_newer_one() {
    let store = LedgerStore::new();
    let slow = SlowSheet {
        delay: Duration::from_millis(80),
        body: EXPORT,
    };
    let fast = SlowSheet {
        delay: Duration::from_millis(5),
        body: "h\n2024-01-01,NBA,Bot,A,B,Over,1,2,win,1,100%\n",
    };
    let newer_link = "https://docs.google.com/spreadsheets/d/newer-sheet/edit";

    let (older, newer) = futures::join!(
        load_sheet(&store, &slow, LINK),
        load_sheet(&store, &fast, newer_link),
    );

    assert!(!older.unwrap(), "older load should be discarded as stale");
    assert!(newer.unwrap());

    let snapshot = store.snapshot();
    assert_eq!(snapshot.source, DataSource::Sheet(newer_link.to_string()));
    assert_eq!(snapshot.records.len(), 1);
    assert_eq!(snapshot.generation, 2);
}
