//! Table layout for the archive source.
//!
//! The nine interchange tables, named and shaped the way Transana's second
//! schema generation named them (the `2` suffix is the schema generation).
//! Zero-as-absent foreign keys are NOT NULL DEFAULT 0 where the original
//! schema stored zeros; true optionals are nullable.

/// Archive table layout helper
pub struct ArchiveSchema;

impl ArchiveSchema {
    /// Get the table creation SQL (idempotent).
    pub fn create_tables_sql() -> &'static str {
        r#"
-- Series: the top-level grouping of episodes
CREATE TABLE IF NOT EXISTS Series2 (
    SeriesNum INTEGER PRIMARY KEY,
    SeriesID TEXT NOT NULL,
    SeriesComment TEXT,
    SeriesOwner TEXT,
    DefaultKeywordGroup TEXT
);

-- Episodes: one media recording within a series
CREATE TABLE IF NOT EXISTS Episodes2 (
    EpisodeNum INTEGER PRIMARY KEY,
    EpisodeID TEXT NOT NULL,
    SeriesNum INTEGER NOT NULL,
    TapingDate DATE,
    MediaFile TEXT NOT NULL,
    EpLength TEXT,
    EpComment TEXT
);

-- Dublin Core metadata for media files
CREATE TABLE IF NOT EXISTS CoreData2 (
    CoreDataNum INTEGER PRIMARY KEY,
    Identifier TEXT NOT NULL,
    Title TEXT,
    Creator TEXT,
    Subject TEXT,
    Description TEXT,
    Publisher TEXT,
    Contributor TEXT,
    DCDate DATE,
    DCType TEXT,
    Format TEXT,
    Source TEXT,
    Language TEXT,
    Relation TEXT,
    Coverage TEXT,
    Rights TEXT
);

-- Collections: nested groupings of clips (ParentCollectNum 0 = root)
CREATE TABLE IF NOT EXISTS Collections2 (
    CollectNum INTEGER PRIMARY KEY,
    CollectID TEXT NOT NULL,
    ParentCollectNum INTEGER NOT NULL DEFAULT 0,
    CollectComment TEXT,
    CollectOwner TEXT,
    DefaultKeywordGroup TEXT
);

-- Clips: analytically interesting segments of episodes
CREATE TABLE IF NOT EXISTS Clips2 (
    ClipNum INTEGER PRIMARY KEY,
    ClipID TEXT NOT NULL,
    CollectNum INTEGER,
    EpisodeNum INTEGER,
    TranscriptNum INTEGER,
    MediaFile TEXT NOT NULL,
    ClipStart INTEGER NOT NULL,
    ClipStop INTEGER NOT NULL,
    ClipComment TEXT,
    SortOrder INTEGER
);

-- Transcripts: episode or clip transcripts with the RTF payload
CREATE TABLE IF NOT EXISTS Transcripts2 (
    TranscriptNum INTEGER PRIMARY KEY,
    TranscriptID TEXT NOT NULL,
    EpisodeNum INTEGER NOT NULL DEFAULT 0,
    ClipNum INTEGER NOT NULL DEFAULT 0,
    Transcriber TEXT,
    Comment TEXT,
    RTFText TEXT
);

-- Keywords: two-level coding vocabulary
CREATE TABLE IF NOT EXISTS Keywords2 (
    KeywordGroup TEXT NOT NULL,
    Keyword TEXT NOT NULL,
    Definition TEXT,
    PRIMARY KEY (KeywordGroup, Keyword)
);

-- Keyword applications to episodes or clips
CREATE TABLE IF NOT EXISTS ClipKeywords2 (
    EpisodeNum INTEGER NOT NULL DEFAULT 0,
    ClipNum INTEGER NOT NULL DEFAULT 0,
    KeywordGroup TEXT NOT NULL,
    Keyword TEXT NOT NULL,
    Example TEXT
);

-- Notes attached to any of the other record kinds
CREATE TABLE IF NOT EXISTS Notes2 (
    NoteNum INTEGER PRIMARY KEY,
    NoteID TEXT NOT NULL,
    SeriesNum INTEGER NOT NULL DEFAULT 0,
    EpisodeNum INTEGER NOT NULL DEFAULT 0,
    CollectNum INTEGER NOT NULL DEFAULT 0,
    ClipNum INTEGER NOT NULL DEFAULT 0,
    TranscriptNum INTEGER NOT NULL DEFAULT 0,
    NoteTaker TEXT,
    NoteText TEXT
);
"#
    }

    /// Drop every interchange table (test teardown and re-init).
    pub fn drop_tables_sql() -> &'static str {
        r#"
DROP TABLE IF EXISTS Notes2;
DROP TABLE IF EXISTS ClipKeywords2;
DROP TABLE IF EXISTS Keywords2;
DROP TABLE IF EXISTS Transcripts2;
DROP TABLE IF EXISTS Clips2;
DROP TABLE IF EXISTS Collections2;
DROP TABLE IF EXISTS CoreData2;
DROP TABLE IF EXISTS Episodes2;
DROP TABLE IF EXISTS Series2;
"#
    }
}
