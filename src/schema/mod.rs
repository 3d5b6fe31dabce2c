//! Record catalog and value model for the Transana interchange format.
//!
//! Everything the export engine knows about the nine record kinds lives
//! here: which table backs each kind, which columns are read, which XML
//! elements they map to, and how individual values are admitted and
//! rendered. The engine itself contains no per-kind code.

mod catalog;
pub mod doctype;

pub use catalog::CATALOG;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// A single cell surfaced by the database layer.
///
/// The access layer collapses every backend type into these four variants;
/// presence predicates and render rules are defined over them only.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Integer(i64),
    Text(String),
    Date(NaiveDate),
}

/// One fetched row, in SELECT column order.
pub type Row = Vec<FieldValue>;

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

/// The nine exportable record kinds, in document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    Series,
    Episode,
    CoreData,
    Collection,
    Clip,
    Transcript,
    Keyword,
    ClipKeyword,
    Note,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Series => "Series",
            RecordKind::Episode => "Episode",
            RecordKind::CoreData => "CoreData",
            RecordKind::Collection => "Collection",
            RecordKind::Clip => "Clip",
            RecordKind::Transcript => "Transcript",
            RecordKind::Keyword => "Keyword",
            RecordKind::ClipKeyword => "ClipKeyword",
            RecordKind::Note => "Note",
        };
        write!(f, "{}", name)
    }
}

/// Decides whether a field element is emitted for a given value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPresence {
    /// Emitted unconditionally.
    Always,
    /// Skipped when null or the empty string.
    NonEmpty,
    /// Skipped when null.
    NonNull,
    /// Skipped when null or integer zero (zero-as-absent foreign keys).
    NonZero,
}

impl FieldPresence {
    pub fn admits(&self, value: &FieldValue) -> bool {
        match self {
            FieldPresence::Always => true,
            FieldPresence::NonEmpty => match value {
                FieldValue::Null => false,
                FieldValue::Text(text) => !text.is_empty(),
                _ => true,
            },
            FieldPresence::NonNull => !value.is_null(),
            FieldPresence::NonZero => match value {
                FieldValue::Null => false,
                FieldValue::Integer(n) => *n != 0,
                _ => true,
            },
        }
    }
}

/// Maps an admitted value to its text form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRender {
    /// Integers in decimal, dates in ISO `YYYY-MM-DD`, text verbatim.
    Text,
    /// Dates as `month/day/year` with no zero padding.
    MonthDayYear,
    /// Embedded verbatim with no escaping (RTF payloads).
    Raw,
}

impl FieldRender {
    /// Renders `value`, or `None` when the value cannot satisfy the rule
    /// (a non-date under [`FieldRender::MonthDayYear`]).
    pub fn render(&self, value: &FieldValue) -> Option<String> {
        match self {
            FieldRender::Text | FieldRender::Raw => Some(match value {
                FieldValue::Null => String::new(),
                FieldValue::Integer(n) => n.to_string(),
                FieldValue::Text(text) => text.clone(),
                FieldValue::Date(date) => date.to_string(),
            }),
            FieldRender::MonthDayYear => {
                let date = match value {
                    FieldValue::Date(date) => *date,
                    FieldValue::Text(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()?,
                    _ => return None,
                };
                Some(format!("{}/{}/{}", date.month(), date.day(), date.year()))
            }
        }
    }
}

/// One exported column: element name, source column, and its rules.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub element: &'static str,
    pub column: &'static str,
    pub presence: FieldPresence,
    pub render: FieldRender,
}

/// Everything the engine needs to export one record kind.
#[derive(Debug, Clone, Copy)]
pub struct RecordSpec {
    pub kind: RecordKind,
    pub table: &'static str,
    pub collection_element: &'static str,
    pub record_element: &'static str,
    pub milestone: &'static str,
    pub fields: &'static [FieldSpec],
}

impl RecordSpec {
    /// The SELECT issued for this kind, columns in field order.
    pub fn select_sql(&self) -> String {
        let columns: Vec<&str> = self.fields.iter().map(|field| field.column).collect();
        format!("SELECT {} FROM {}", columns.join(", "), self.table)
    }
}
