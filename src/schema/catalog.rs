//! The nine record descriptors, in document order.
//!
//! Element names, column lists, and field order reproduce the Transana
//! interchange layout exactly; the presence and render rules implement the
//! omission conventions of the format (empty-string optionals, zero-as-absent
//! foreign keys, month/day/year dates).

use super::FieldPresence::{Always, NonEmpty, NonNull, NonZero};
use super::FieldRender::{MonthDayYear, Raw, Text};
use super::{FieldPresence, FieldRender, FieldSpec, RecordKind, RecordSpec};

const fn field(
    element: &'static str,
    column: &'static str,
    presence: FieldPresence,
    render: FieldRender,
) -> FieldSpec {
    FieldSpec {
        element,
        column,
        presence,
        render,
    }
}

const SERIES_FIELDS: &[FieldSpec] = &[
    field("Num", "SeriesNum", Always, Text),
    field("ID", "SeriesID", Always, Text),
    field("Comment", "SeriesComment", NonEmpty, Text),
    field("Owner", "SeriesOwner", NonEmpty, Text),
    field("DefaultKeywordGroup", "DefaultKeywordGroup", NonEmpty, Text),
];

const EPISODE_FIELDS: &[FieldSpec] = &[
    field("Num", "EpisodeNum", Always, Text),
    field("ID", "EpisodeID", Always, Text),
    field("SeriesNum", "SeriesNum", Always, Text),
    field("Date", "TapingDate", NonNull, MonthDayYear),
    field("MediaFile", "MediaFile", Always, Text),
    field("Length", "EpLength", NonEmpty, Text),
    field("Comment", "EpComment", NonEmpty, Text),
];

const CORE_DATA_FIELDS: &[FieldSpec] = &[
    field("Num", "CoreDataNum", Always, Text),
    field("ID", "Identifier", Always, Text),
    field("Title", "Title", NonEmpty, Text),
    field("Creator", "Creator", NonEmpty, Text),
    field("Subject", "Subject", NonEmpty, Text),
    field("Description", "Description", NonEmpty, Text),
    field("Publisher", "Publisher", NonEmpty, Text),
    field("Contributor", "Contributor", NonEmpty, Text),
    field("Date", "DCDate", NonNull, MonthDayYear),
    field("Type", "DCType", NonEmpty, Text),
    field("Format", "Format", NonEmpty, Text),
    field("Source", "Source", NonEmpty, Text),
    field("Language", "Language", NonEmpty, Text),
    field("Relation", "Relation", NonEmpty, Text),
    field("Coverage", "Coverage", NonEmpty, Text),
    field("Rights", "Rights", NonEmpty, Text),
];

const COLLECTION_FIELDS: &[FieldSpec] = &[
    field("Num", "CollectNum", Always, Text),
    field("ID", "CollectID", Always, Text),
    // Zero marks a root collection, not a reference.
    field("ParentCollectNum", "ParentCollectNum", NonZero, Text),
    field("Comment", "CollectComment", NonEmpty, Text),
    field("Owner", "CollectOwner", NonEmpty, Text),
    field("DefaultKeywordGroup", "DefaultKeywordGroup", NonEmpty, Text),
];

const CLIP_FIELDS: &[FieldSpec] = &[
    field("Num", "ClipNum", Always, Text),
    field("ID", "ClipID", Always, Text),
    field("CollectNum", "CollectNum", NonNull, Text),
    field("EpisodeNum", "EpisodeNum", NonNull, Text),
    field("TranscriptNum", "TranscriptNum", NonNull, Text),
    field("MediaFile", "MediaFile", Always, Text),
    field("ClipStart", "ClipStart", Always, Text),
    field("ClipStop", "ClipStop", Always, Text),
    field("Comment", "ClipComment", NonEmpty, Text),
    // Zero is a legitimate sort position.
    field("SortOrder", "SortOrder", NonNull, Text),
];

const TRANSCRIPT_FIELDS: &[FieldSpec] = &[
    field("Num", "TranscriptNum", Always, Text),
    field("ID", "TranscriptID", Always, Text),
    field("EpisodeNum", "EpisodeNum", NonZero, Text),
    field("ClipNum", "ClipNum", NonZero, Text),
    field("Transcriber", "Transcriber", NonEmpty, Text),
    field("Comment", "Comment", NonEmpty, Text),
    field("RTFText", "RTFText", NonEmpty, Raw),
];

const KEYWORD_FIELDS: &[FieldSpec] = &[
    field("KeywordGroup", "KeywordGroup", Always, Text),
    field("Keyword", "Keyword", Always, Text),
    field("Definition", "Definition", NonEmpty, Text),
];

const CLIP_KEYWORD_FIELDS: &[FieldSpec] = &[
    field("EpisodeNum", "EpisodeNum", NonZero, Text),
    field("ClipNum", "ClipNum", NonZero, Text),
    field("KeywordGroup", "KeywordGroup", Always, Text),
    field("Keyword", "Keyword", Always, Text),
    field("Example", "Example", NonEmpty, Text),
];

const NOTE_FIELDS: &[FieldSpec] = &[
    field("Num", "NoteNum", Always, Text),
    field("ID", "NoteID", Always, Text),
    field("SeriesNum", "SeriesNum", NonZero, Text),
    field("EpisodeNum", "EpisodeNum", NonZero, Text),
    field("CollectNum", "CollectNum", NonZero, Text),
    field("ClipNum", "ClipNum", NonZero, Text),
    field("TranscriptNum", "TranscriptNum", NonZero, Text),
    field("NoteTaker", "NoteTaker", NonEmpty, Text),
    field("NoteText", "NoteText", NonEmpty, Text),
];

/// Every exportable record kind, in the order the document emits them.
pub const CATALOG: &[RecordSpec] = &[
    RecordSpec {
        kind: RecordKind::Series,
        table: "Series2",
        collection_element: "SeriesFile",
        record_element: "Series",
        milestone: "Writing Series Records",
        fields: SERIES_FIELDS,
    },
    RecordSpec {
        kind: RecordKind::Episode,
        table: "Episodes2",
        collection_element: "EpisodeFile",
        record_element: "Episode",
        milestone: "Writing Episode Records",
        fields: EPISODE_FIELDS,
    },
    RecordSpec {
        kind: RecordKind::CoreData,
        table: "CoreData2",
        collection_element: "CoreDataFile",
        record_element: "CoreData",
        milestone: "Writing Core Data Records",
        fields: CORE_DATA_FIELDS,
    },
    RecordSpec {
        kind: RecordKind::Collection,
        table: "Collections2",
        collection_element: "CollectionFile",
        record_element: "Collection",
        milestone: "Writing Collection Records",
        fields: COLLECTION_FIELDS,
    },
    RecordSpec {
        kind: RecordKind::Clip,
        table: "Clips2",
        collection_element: "ClipFile",
        record_element: "Clip",
        milestone: "Writing Clip Records",
        fields: CLIP_FIELDS,
    },
    RecordSpec {
        kind: RecordKind::Transcript,
        table: "Transcripts2",
        collection_element: "TranscriptFile",
        record_element: "Transcript",
        milestone: "Writing Transcript Records",
        fields: TRANSCRIPT_FIELDS,
    },
    RecordSpec {
        kind: RecordKind::Keyword,
        table: "Keywords2",
        collection_element: "KeywordFile",
        record_element: "KeywordRec",
        milestone: "Writing Keyword Records",
        fields: KEYWORD_FIELDS,
    },
    RecordSpec {
        kind: RecordKind::ClipKeyword,
        table: "ClipKeywords2",
        collection_element: "ClipKeywordFile",
        record_element: "ClipKeyword",
        milestone: "Writing Clip Keyword Records",
        fields: CLIP_KEYWORD_FIELDS,
    },
    RecordSpec {
        kind: RecordKind::Note,
        table: "Notes2",
        collection_element: "NoteFile",
        record_element: "Note",
        milestone: "Writing Note Records",
        fields: NOTE_FIELDS,
    },
];
