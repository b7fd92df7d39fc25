//! Ingestion-time failures surfaced to the caller.
//!
//! Row-level problems (short rows, unreadable numbers) never show up here;
//! the parser absorbs them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    /// The link has no `/d/<id>` segment; no request was made.
    #[error("Spreadsheet id not found in \"{url}\". Make sure you are using a valid Google Sheets link.")]
    UnresolvableIdentifier { url: String },

    /// The export request failed or came back with a non-success status.
    #[error(
        "Could not access the spreadsheet ({reason}). Check that it is shared as \"Anyone with the link\" or published."
    )]
    Transport { status: Option<u16>, reason: String },

    /// The export parsed to zero records.
    #[error("Spreadsheet empty or invalid format.")]
    VacantSource,
}

impl LoadError {
    pub fn transport_status(status: u16) -> Self {
        Self::Transport {
            status: Some(status),
            reason: format!("HTTP {}", status),
        }
    }
}
