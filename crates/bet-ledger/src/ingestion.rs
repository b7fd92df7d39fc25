//! Data ingestion: fetch + parse a sheet (or generate demo data) and swap the
//! result in as the current snapshot.
//!
//! Every load takes a generation ticket before it starts. Only the most
//! recently issued ticket may commit, so a slow response from an earlier
//! refresh can never overwrite a newer one.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::error::LoadError;
use crate::http::CsvSource;
use crate::mock::generate_demo_records;
use crate::parser::parse_csv_data;
use crate::sheet::SheetRef;
use crate::types::BetRecord;

// ── Snapshot ────────────────────────────────────────────────────────────────

/// Where the current records came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Nothing loaded yet.
    Empty,
    /// Shared spreadsheet link (as the user gave it).
    Sheet(String),
    /// Local CSV file.
    File(String),
    /// Generated demo data.
    Demo,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty"),
            Self::Sheet(url) => write!(f, "sheet {}", url),
            Self::File(path) => write!(f, "file {}", path),
            Self::Demo => write!(f, "demo data"),
        }
    }
}

/// Immutable record collection from one load. Replaced wholesale, never edited.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub records: Vec<BetRecord>,
    pub source: DataSource,
    pub generation: u64,
    pub loaded_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            source: DataSource::Empty,
            generation: 0,
            loaded_at: None,
        }
    }
}

/// Proof that a load was started; carries its generation number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

// ── Store ───────────────────────────────────────────────────────────────────

/// Holder of the current snapshot. Many readers, one committed writer at a time.
#[derive(Debug)]
pub struct LedgerStore {
    current: RwLock<Arc<Snapshot>>,
    issued: AtomicU64,
}

impl Default for LedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore {
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Snapshot::empty())),
            issued: AtomicU64::new(0),
        }
    }

    /// Current snapshot (cheap `Arc` clone).
    pub fn snapshot(&self) -> Arc<Snapshot> {
        self.current.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Issue the next generation ticket. Any earlier ticket becomes stale.
    pub fn begin_load(&self) -> LoadTicket {
        LoadTicket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Replace the snapshot if `ticket` is still the newest one issued.
    ///
    /// Returns `false` (and leaves the store untouched) for a stale ticket.
    pub fn commit(&self, ticket: LoadTicket, source: DataSource, records: Vec<BetRecord>) -> bool {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);

        let latest = self.issued.load(Ordering::SeqCst);
        if ticket.0 != latest || ticket.0 <= current.generation {
            warn!(
                "Discarding stale load #{} from {} (latest #{})",
                ticket.0, source, latest
            );
            return false;
        }

        info!("Loaded {} record(s) from {} (#{})", records.len(), source, ticket.0);
        *current = Arc::new(Snapshot {
            records,
            source,
            generation: ticket.0,
            loaded_at: Some(Utc::now()),
        });
        true
    }
}

// ── Loads ───────────────────────────────────────────────────────────────────

/// Parse already-fetched CSV text; zero records is a `VacantSource` failure.
pub fn records_from_csv(text: &str) -> Result<Vec<BetRecord>, LoadError> {
    let records = parse_csv_data(text);
    if records.is_empty() {
        return Err(LoadError::VacantSource);
    }
    Ok(records)
}

/// Run one sheet load: resolve the link, fetch the export, parse, commit.
///
/// Returns `Ok(true)` if the snapshot was replaced, `Ok(false)` if a newer
/// load superseded this one while it was in flight. An unresolvable link fails
/// before any request is made. On error the previous snapshot stays.
pub async fn load_sheet<S: CsvSource>(store: &LedgerStore, source: &S, url: &str) -> Result<bool, LoadError> {
    let sheet = SheetRef::parse(url)?;
    let ticket = store.begin_load();

    let text = source.fetch_csv(&sheet.export_url()).await?;
    let records = records_from_csv(&text)?;

    Ok(store.commit(ticket, DataSource::Sheet(url.to_string()), records))
}

/// Load a local CSV export (offline counterpart of [`load_sheet`]).
pub fn load_file_text(store: &LedgerStore, path: &str, text: &str) -> Result<bool, LoadError> {
    let ticket = store.begin_load();
    let records = records_from_csv(text)?;
    Ok(store.commit(ticket, DataSource::File(path.to_string()), records))
}

/// Replace the snapshot with freshly generated demo records.
pub fn load_demo(store: &LedgerStore) -> bool {
    let ticket = store.begin_load();
    store.commit(ticket, DataSource::Demo, generate_demo_records())
}
