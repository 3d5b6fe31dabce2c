//! Byte-exact document preamble for the Transana interchange format.
//!
//! The DOCTYPE reproduces the historical interchange DTD exactly, including
//! its quirks (the `Comment` element is declared twice, the `Clip` content
//! model omits `MediaFile` and `EpisodeNum`, and `TranscriptFile` is declared
//! before `CollectionFile` although documents emit collections first).
//! Consumers of these files compare bytes, so nothing here may be normalized.

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\"?>\n";

pub const DOCTYPE: &str = r#"<!DOCTYPE TransanaData [
  <!ELEMENT TransanaXMLVersion (#PCDATA)>
  <!ELEMENT SeriesFile (Series)*>

  <!ELEMENT Num (#PCDATA)>
  <!ELEMENT ID (#PCDATA)>
  <!ELEMENT Comment (#PCDATA)>
  <!ELEMENT Owner (#PCDATA)>
  <!ELEMENT DefaultKeywordGroup (#PCDATA)>

  <!ELEMENT Series (#PCDATA|Num|ID|Comment|Owner|DefaultKeywordGroup)*>

  <!ELEMENT EpisodeFile (Episode)*>

  <!ELEMENT SeriesNum (#PCDATA)>
  <!ELEMENT Date (#PCDATA)>
  <!ELEMENT MediaFile (#PCDATA)>
  <!ELEMENT Length (#PCDATA)>
  <!ELEMENT Comment (#PCDATA)>

  <!ELEMENT Episode (#PCDATA|Num|ID|SeriesNum|Date|MediaFile|Length|Comment)*>

  <!ELEMENT CoreDataFile (CoreData)*>

  <!ELEMENT Title (#PCDATA)>
  <!ELEMENT Creator (#PCDATA)>
  <!ELEMENT Subject (#PCDATA)>
  <!ELEMENT Description (#PCDATA)>
  <!ELEMENT Publisher (#PCDATA)>
  <!ELEMENT Contributor (#PCDATA)>
  <!ELEMENT Type (#PCDATA)>
  <!ELEMENT Format (#PCDATA)>
  <!ELEMENT Source (#PCDATA)>
  <!ELEMENT Language (#PCDATA)>
  <!ELEMENT Relation (#PCDATA)>
  <!ELEMENT Coverage (#PCDATA)>
  <!ELEMENT Rights (#PCDATA)>

  <!ELEMENT CoreData (#PCDATA|Num|ID|Title|Creator|Subject|Description|Publisher|Contributor|Date|Type|Format|Source|Language|Relation|Coverage|Rights)*>

  <!ELEMENT TranscriptFile (Transcript)*>

  <!ELEMENT EpisodeNum (#PCDATA)>
  <!ELEMENT ClipNum (#PCDATA)>
  <!ELEMENT Transcriber (#PCDATA)>
  <!ELEMENT RTFText (#PCDATA)>

  <!ELEMENT Transcript (#PCDATA|Num|ID|EpisodeNum|ClipNum|Transcriber|Comment|RTFText)*>

  <!ELEMENT CollectionFile (Collection)*>

  <!ELEMENT ParentCollectNum (#PCDATA)>

  <!ELEMENT Collection (#PCDATA|Num|ID|ParentCollectNum|Comment|Owner|DefaultKeywordGroup)*>

  <!ELEMENT ClipFile (Clip)*>

  <!ELEMENT CollectNum (#PCDATA)>
  <!ELEMENT TranscriptNum (#PCDATA)>
  <!ELEMENT ClipStart (#PCDATA)>
  <!ELEMENT ClipStop (#PCDATA)>
  <!ELEMENT SortOrder (#PCDATA)>

  <!ELEMENT Clip (#PCDATA|Num|ID|CollectNum|TranscriptNum|ClipStart|ClipStop|Comment|SortOrder)*>

  <!ELEMENT KeywordFile (KeywordRec)*>

  <!ELEMENT KeywordGroup (#PCDATA)>
  <!ELEMENT Keyword (#PCDATA)>
  <!ELEMENT Definition (#PCDATA)>

  <!ELEMENT KeywordRec (#PCDATA|KeywordGroup|Keyword|Definition)*>

  <!ELEMENT ClipKeywordFile (ClipKeyword)*>

  <!ELEMENT Example (#PCDATA)>

  <!ELEMENT ClipKeyword (#PCDATA|EpisodeNum|ClipNum|KeywordGroup|Keyword|Example)*>

  <!ELEMENT NoteFile (Note)*>

  <!ELEMENT NoteTaker (#PCDATA)>
  <!ELEMENT NoteText (#PCDATA)>

  <!ELEMENT Note (#PCDATA|Num|ID|SeriesNum|EpisodeNum|CollectNum|ClipNum|TranscriptNum|NoteTaker|NoteText)*>

  <!ELEMENT Transana (#PCDATA|SeriesFile|EpisodeFile|CoreDataFile|TranscriptFile|CollectionFile|ClipFile|KeywordFile|ClipKeywordFile|NoteFile)*>
]>
"#;

pub const ROOT_OPEN: &str = "<Transana>\n";
pub const ROOT_CLOSE: &str = "</Transana>\n";

/// Interchange format version carried by every document.
pub const XML_VERSION: &str = "1.0";

pub const VERSION_ELEMENT: &str = "  <TransanaXMLVersion>\n    1.0\n  </TransanaXMLVersion>\n";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_doctype_brackets_are_balanced() {
        assert!(DOCTYPE.starts_with("<!DOCTYPE TransanaData [\n"));
        assert!(DOCTYPE.ends_with("]>\n"));
    }

    #[test]
    fn test_declaration_count_matches_the_historical_subset() {
        // 59 declarations, one of them (Comment) repeated.
        assert_eq!(DOCTYPE.matches("<!ELEMENT ").count(), 59);
        assert_eq!(DOCTYPE.matches("<!ELEMENT Comment (#PCDATA)>").count(), 2);
    }

    #[test]
    fn test_version_element_carries_the_format_version() {
        assert!(VERSION_ELEMENT.contains(XML_VERSION));
        assert!(VERSION_ELEMENT.starts_with("  <TransanaXMLVersion>\n"));
        assert!(VERSION_ELEMENT.ends_with("  </TransanaXMLVersion>\n"));
    }
}
