//! Ingestion and metrics core for a sports-betting performance dashboard.
//!
//! Raw sheet text flows through [`tokenizer`] → [`parser`] (which calls
//! [`outcome`]) into an immutable [`ingestion::Snapshot`]. Everything the
//! dashboard shows is a pure function over that snapshot: [`filter`],
//! [`metrics`], [`pager`] and [`charts`].

pub mod charts;
pub mod error;
pub mod filter;
pub mod http;
pub mod ingestion;
pub mod metrics;
pub mod mock;
pub mod outcome;
pub mod pager;
pub mod parser;
pub mod sheet;
pub mod tokenizer;
pub mod types;

pub use error::LoadError;
pub use filter::{FilterState, filter_records};
pub use ingestion::{DataSource, LedgerStore, Snapshot};
pub use metrics::calculate_kpis;
pub use parser::parse_csv_data;
pub use types::{AnalysisBrief, BetRecord, KpiMetrics, OutcomeKind};
