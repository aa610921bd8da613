//! Label parsing
//!
//! Labels are typed by the user as one `;`-delimited string.

use crate::{LABEL_DELIMITER, LABEL_JOIN_SEPARATOR};
use crate::models::{Account, LabelItem};
use crate::storage::KeyValueStorage;
use super::store::AccountStore;

/// Split raw label input into labels
///
/// Pieces are trimmed and empty pieces are dropped, so `"a; b ;;c"` gives
/// `a`, `b`, `c`. Blank input gives no labels.
pub fn parse_labels(raw: &str) -> Vec<LabelItem> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    raw.split(LABEL_DELIMITER)
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(LabelItem::new)
        .collect()
}

/// Render labels back into raw input form
pub fn format_labels(labels: &[LabelItem]) -> String {
    labels
        .iter()
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join(LABEL_JOIN_SEPARATOR)
}

impl<S: KeyValueStorage> AccountStore<S> {
    /// Split raw label input into labels. Does not touch the store.
    pub fn parse_labels(&self, raw: &str) -> Vec<LabelItem> {
        parse_labels(raw)
    }

    /// Accounts carrying the given label, in list order
    pub fn accounts_with_label(&self, text: &str) -> Vec<&Account> {
        self.accounts().iter().filter(|a| a.has_label(text)).collect()
    }
}
