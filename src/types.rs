//! Common types used throughout trade-pager
//!
//! Pages, the items they carry, and the request that identifies a page.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// One batch of items returned by a single fetch
pub type Page = Vec<PageItem>;

/// Query parameter carrying the cursor
pub const CURSOR_PARAM: &str = "tid";

// ============================================================================
// Page Items
// ============================================================================

/// A single trade record
///
/// Only `tid` is interpreted. Every other field is kept as-is and written
/// back out unchanged when the item is serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageItem {
    /// Transaction id, the cursor-bearing field (0 when absent or not a number)
    #[serde(default, deserialize_with = "lenient_tid")]
    pub tid: u64,

    /// Remaining fields, passed through unexamined
    #[serde(flatten)]
    pub fields: JsonObject,
}

impl PageItem {
    /// Create an item with only a transaction id
    pub fn new(tid: u64) -> Self {
        Self {
            tid,
            fields: JsonObject::new(),
        }
    }

    /// Add a pass-through field
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<JsonValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Get a pass-through field
    pub fn field(&self, key: &str) -> Option<&JsonValue> {
        self.fields.get(key)
    }
}

/// Decode a fetched JSON body into a page
///
/// Never fails: a body that is not an array yields an empty page, and an
/// element that is not an object becomes an item with `tid` 0. Either way
/// the page carries no cursor and the feed ends there.
pub fn decode_page(body: JsonValue) -> Page {
    let JsonValue::Array(items) = body else {
        warn!("Expected a JSON array of trades, got {}", json_kind(&body));
        return Page::new();
    };

    items
        .into_iter()
        .map(|item| {
            serde_json::from_value(item).unwrap_or_else(|e| {
                warn!("Unreadable trade record: {e}");
                PageItem::new(0)
            })
        })
        .collect()
}

/// Cursor carried by a page: the `tid` of its last item, or 0 when empty
pub fn last_cursor(page: &[PageItem]) -> u64 {
    page.last().map_or(0, |item| item.tid)
}

fn lenient_tid<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<JsonValue>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(JsonValue::as_u64).unwrap_or(0))
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

// ============================================================================
// Page Request
// ============================================================================

/// Identifies one page of the feed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Feed URL without the cursor parameter
    pub base_url: String,
    /// Transaction id after which the page starts (0 = no cursor yet)
    pub cursor: u64,
}

impl PageRequest {
    /// Create a new page request
    pub fn new(base_url: impl Into<String>, cursor: u64) -> Self {
        Self {
            base_url: base_url.into(),
            cursor,
        }
    }

    /// Concrete URL for this page: `<base_url>?tid=<cursor>`
    ///
    /// Uses `&` instead of `?` when the base URL already has a query string.
    pub fn url(&self) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}{CURSOR_PARAM}={}",
            self.base_url, self.cursor
        )
    }

    /// Request for the page following `cursor`, on the same feed
    #[must_use]
    pub fn advance(&self, cursor: u64) -> Self {
        Self {
            base_url: self.base_url.clone(),
            cursor,
        }
    }
}
