//! Share link → CSV export endpoint.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::LoadError;

/// Sheet loaded when nothing else is configured.
pub const DEFAULT_SHEET_URL: &str =
    "https://docs.google.com/spreadsheets/d/1LleQLKL5oAoBPAITP_JcGkN4EBYLtLAbsJW8L8tSwaI/edit?gid=2017842059#gid=2017842059";

const EXPORT_BASE: &str = "https://docs.google.com/spreadsheets/d/";

static DOC_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"/d/([a-zA-Z0-9_-]+)").expect("valid regex"));
static TAB_GID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[#&]gid=([0-9]+)").expect("valid regex"));

/// Identifiers pulled out of a share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRef {
    pub document_id: String,
    pub gid: Option<String>,
}

impl SheetRef {
    /// Extract the document id (required) and tab gid (optional) from `url`.
    pub fn parse(url: &str) -> Result<Self, LoadError> {
        let document_id = DOC_ID
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .ok_or_else(|| LoadError::UnresolvableIdentifier { url: url.to_string() })?;

        let gid = TAB_GID
            .captures(url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string());

        Ok(Self { document_id, gid })
    }

    /// CSV export endpoint for this document (and tab, when known).
    pub fn export_url(&self) -> String {
        let mut url = format!("{}{}/export?format=csv", EXPORT_BASE, self.document_id);
        if let Some(ref gid) = self.gid {
            url.push_str("&gid=");
            url.push_str(gid);
        }
        url
    }
}
