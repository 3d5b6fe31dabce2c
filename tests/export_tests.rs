//! Export engine tests against a scripted database source.
//!
//! A scripted source stands in for a real database so every failure mode
//! and document rule can be exercised deterministically.

use std::collections::HashMap;

use chrono::NaiveDate;
use tempfile::TempDir;
use transana_archive::database::{DatabaseBackend, DatabaseError, DatabaseResult};
use transana_archive::export::{
    ExportError, ExportOutcome, FailureSink, HomeFallbackPolicy, KindCount, ProgressSink,
    XmlExporter,
};
use transana_archive::schema::{FieldValue, RecordKind, Row, doctype};

/// Fixed rows per table, an optional scripted failure point, and a verb
/// log for transaction assertions.
#[derive(Default)]
struct ScriptedSource {
    tables: HashMap<String, Vec<Row>>,
    fail_on: Option<String>,
    calls: Vec<String>,
}

impl ScriptedSource {
    fn empty() -> Self {
        Self::default()
    }

    fn with_table(mut self, table: &str, rows: Vec<Row>) -> Self {
        self.tables.insert(table.to_string(), rows);
        self
    }

    /// Fail when the named table is read, or at "BEGIN".
    fn failing_on(mut self, step: &str) -> Self {
        self.fail_on = Some(step.to_string());
        self
    }
}

fn table_name(sql: &str) -> String {
    sql.rsplit(" FROM ").next().unwrap_or(sql).trim().to_string()
}

impl DatabaseBackend for ScriptedSource {
    fn begin(&mut self) -> DatabaseResult<()> {
        self.calls.push("BEGIN".to_string());
        if self.fail_on.as_deref() == Some("BEGIN") {
            return Err(DatabaseError::TransactionFailed(
                "scripted begin failure".to_string(),
            ));
        }
        Ok(())
    }

    fn commit(&mut self) -> DatabaseResult<()> {
        self.calls.push("COMMIT".to_string());
        Ok(())
    }

    fn rollback(&mut self) -> DatabaseResult<()> {
        self.calls.push("ROLLBACK".to_string());
        Ok(())
    }

    fn fetch_all(&mut self, sql: &str) -> DatabaseResult<Vec<Row>> {
        let table = table_name(sql);
        self.calls.push(format!("FETCH {}", table));
        if self.fail_on.as_deref() == Some(table.as_str()) {
            return Err(DatabaseError::QueryFailed(format!(
                "scripted failure reading {}",
                table
            )));
        }
        Ok(self.tables.get(&table).cloned().unwrap_or_default())
    }

    fn execute_batch(&mut self, _sql: &str) -> DatabaseResult<()> {
        Ok(())
    }
}

#[derive(Default)]
struct RecordingProgress {
    events: Vec<(u8, String)>,
}

impl ProgressSink for RecordingProgress {
    fn update(&mut self, percent: u8, message: &str) {
        self.events.push((percent, message.to_string()));
    }
}

#[derive(Default)]
struct RecordingFailure {
    reports: Vec<String>,
}

impl FailureSink for RecordingFailure {
    fn report(&mut self, error: &ExportError) {
        self.reports.push(error.to_string());
    }
}

struct ExportRun {
    outcome: ExportOutcome,
    progress: Vec<(u8, String)>,
    reports: Vec<String>,
}

fn run_export(source: &mut ScriptedSource, destination: &str) -> ExportRun {
    let mut progress = RecordingProgress::default();
    let mut failures = RecordingFailure::default();
    let outcome = XmlExporter::new(source, &mut progress, &mut failures).export(destination);
    ExportRun {
        outcome,
        progress: progress.events,
        reports: failures.reports,
    }
}

fn dest(dir: &TempDir, name: &str) -> String {
    dir.path().join(name).to_string_lossy().into_owned()
}

fn read_document(dir: &TempDir, file: &str) -> String {
    std::fs::read_to_string(dir.path().join(file)).unwrap()
}

fn series_row(num: i64, id: &str) -> Row {
    vec![
        FieldValue::Integer(num),
        id.into(),
        FieldValue::Text(String::new()),
        FieldValue::Null,
        FieldValue::Null,
    ]
}

fn episode_row(num: i64, id: &str, taping: Option<NaiveDate>) -> Row {
    vec![
        FieldValue::Integer(num),
        id.into(),
        FieldValue::Integer(1),
        taping.map(FieldValue::Date).unwrap_or(FieldValue::Null),
        "video.mpg".into(),
        FieldValue::Null,
        FieldValue::Null,
    ]
}

fn collection_row(num: i64, id: &str, parent: i64) -> Row {
    vec![
        FieldValue::Integer(num),
        id.into(),
        FieldValue::Integer(parent),
        FieldValue::Null,
        FieldValue::Null,
        FieldValue::Null,
    ]
}

fn clip_row(num: i64, id: &str, sort_order: FieldValue) -> Row {
    vec![
        FieldValue::Integer(num),
        id.into(),
        FieldValue::Integer(1),
        FieldValue::Integer(1),
        FieldValue::Integer(1),
        "video.mpg".into(),
        FieldValue::Integer(0),
        FieldValue::Integer(5000),
        FieldValue::Null,
        sort_order,
    ]
}

fn transcript_row(num: i64, id: &str, rtf: &str) -> Row {
    vec![
        FieldValue::Integer(num),
        id.into(),
        FieldValue::Integer(2),
        FieldValue::Integer(0),
        FieldValue::Null,
        FieldValue::Null,
        rtf.into(),
    ]
}

fn keyword_row(group: &str, keyword: &str) -> Row {
    vec![group.into(), keyword.into(), FieldValue::Null]
}

fn note_row(num: i64, id: &str, series_num: i64, episode_num: i64) -> Row {
    vec![
        FieldValue::Integer(num),
        id.into(),
        FieldValue::Integer(series_num),
        FieldValue::Integer(episode_num),
        FieldValue::Integer(0),
        FieldValue::Integer(0),
        FieldValue::Integer(0),
        FieldValue::Null,
        "note body".into(),
    ]
}

mod document_shape_tests {
    use super::*;

    #[test]
    fn test_empty_database_is_preamble_only() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty();

        let run = run_export(&mut source, &dest(&dir, "empty"));

        assert!(run.outcome.is_completed());
        let content = read_document(&dir, "empty.xml");
        let expected = format!(
            "{}{}\n{}{}{}",
            doctype::XML_DECLARATION,
            doctype::DOCTYPE,
            doctype::ROOT_OPEN,
            doctype::VERSION_ELEMENT,
            doctype::ROOT_CLOSE
        );
        assert_eq!(content, expected);
    }

    #[test]
    fn test_collection_elements_only_when_rows_exist() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty()
            .with_table("Series2", vec![series_row(1, "Interviews")])
            .with_table("Keywords2", vec![keyword_row("Theme", "identity")]);

        let run = run_export(&mut source, &dest(&dir, "sparse"));

        assert!(run.outcome.is_completed());
        let content = read_document(&dir, "sparse.xml");
        assert!(content.contains("  <SeriesFile>\n"));
        assert!(content.contains("  </SeriesFile>\n"));
        assert!(content.contains("  <KeywordFile>\n"));
        assert!(!content.contains("<EpisodeFile>"));
        assert!(!content.contains("<CollectionFile>"));
        assert!(!content.contains("<NoteFile>"));
    }

    #[test]
    fn test_record_kinds_appear_in_document_order() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty()
            .with_table("Series2", vec![series_row(1, "Interviews")])
            .with_table("Collections2", vec![collection_row(1, "Themes", 0)])
            .with_table("Notes2", vec![note_row(1, "n1", 1, 0)]);

        let run = run_export(&mut source, &dest(&dir, "ordered"));

        assert!(run.outcome.is_completed());
        let content = read_document(&dir, "ordered.xml");
        let series_pos = content.find("<SeriesFile>").unwrap();
        let collection_pos = content.find("<CollectionFile>").unwrap();
        let note_pos = content.find("<NoteFile>").unwrap();
        assert!(series_pos < collection_pos);
        assert!(collection_pos < note_pos);
    }

    #[test]
    fn test_version_element_is_literal() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty();

        let run = run_export(&mut source, &dest(&dir, "version"));

        assert!(run.outcome.is_completed());
        let content = read_document(&dir, "version.xml");
        assert!(content.contains("  <TransanaXMLVersion>\n    1.0\n  </TransanaXMLVersion>\n"));
    }

    #[test]
    fn test_document_parses_from_root_element() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty()
            .with_table("Series2", vec![series_row(1, "Q&A <analysis>")])
            .with_table(
                "Episodes2",
                vec![episode_row(
                    1,
                    "ep1",
                    Some(NaiveDate::from_ymd_opt(2004, 3, 5).unwrap()),
                )],
            )
            .with_table(
                "Transcripts2",
                vec![transcript_row(1, "t1", "{\\rtf1\\ansi Interview transcript.}")],
            )
            .with_table("Keywords2", vec![keyword_row("Theme", "identity")])
            .with_table("Notes2", vec![note_row(1, "n1", 1, 0)]);

        let run = run_export(&mut source, &dest(&dir, "parsed"));

        assert!(run.outcome.is_completed());
        let content = read_document(&dir, "parsed.xml");
        let root = content.find("<Transana>").unwrap();

        let mut reader = quick_xml::Reader::from_str(&content[root..]);
        reader.config_mut().trim_text(true);
        loop {
            match reader.read_event() {
                Ok(quick_xml::events::Event::Eof) => break,
                Ok(_) => continue,
                Err(e) => panic!("document is not well formed: {}", e),
            }
        }
    }
}

mod field_rule_tests {
    use super::*;

    #[test]
    fn test_optional_text_fields_are_omitted() {
        let dir = TempDir::new().unwrap();
        // Empty comment, null owner and keyword group
        let mut source =
            ScriptedSource::empty().with_table("Series2", vec![series_row(1, "Interviews")]);

        let run = run_export(&mut source, &dest(&dir, "optional"));

        assert!(run.outcome.is_completed());
        let content = read_document(&dir, "optional.xml");
        assert!(content.contains("      <Num>\n        1\n      </Num>\n"));
        assert!(content.contains("      <ID>\n        Interviews\n      </ID>\n"));
        assert!(!content.contains("<Comment>"));
        assert!(!content.contains("<Owner>"));
        assert!(!content.contains("<DefaultKeywordGroup>"));
    }

    #[test]
    fn test_zero_foreign_keys_are_omitted() {
        let dir = TempDir::new().unwrap();
        let mut source =
            ScriptedSource::empty().with_table("Notes2", vec![note_row(10, "n1", 3, 0)]);

        let run = run_export(&mut source, &dest(&dir, "zeros"));

        assert!(run.outcome.is_completed());
        let content = read_document(&dir, "zeros.xml");
        assert!(content.contains("      <SeriesNum>\n        3\n      </SeriesNum>\n"));
        assert!(!content.contains("<EpisodeNum>"));
        assert!(!content.contains("<CollectNum>"));
        assert!(!content.contains("<ClipNum>"));
        assert!(!content.contains("<TranscriptNum>"));
    }

    #[test]
    fn test_null_and_zero_sort_orders_differ() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty().with_table(
            "Clips2",
            vec![
                clip_row(1, "c1", FieldValue::Null),
                clip_row(2, "c2", FieldValue::Integer(0)),
            ],
        );

        let run = run_export(&mut source, &dest(&dir, "sort"));

        assert!(run.outcome.is_completed());
        let content = read_document(&dir, "sort.xml");
        // Null is omitted, zero is a legitimate sort position
        assert_eq!(content.matches("<SortOrder>").count(), 1);
        assert!(content.contains("      <SortOrder>\n        0\n      </SortOrder>\n"));
        // ClipStart is unconditional, so its zero appears twice
        assert_eq!(content.matches("<ClipStart>").count(), 2);
    }

    #[test]
    fn test_dates_render_month_day_year() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty().with_table(
            "Episodes2",
            vec![
                episode_row(1, "ep1", Some(NaiveDate::from_ymd_opt(2004, 3, 5).unwrap())),
                episode_row(
                    2,
                    "ep2",
                    Some(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()),
                ),
                episode_row(3, "ep3", None),
            ],
        );

        let run = run_export(&mut source, &dest(&dir, "dates"));

        assert!(run.outcome.is_completed());
        let content = read_document(&dir, "dates.xml");
        assert!(content.contains("      <Date>\n        3/5/2004\n      </Date>\n"));
        assert!(content.contains("      <Date>\n        12/31/1999\n      </Date>\n"));
        // The undated episode carries no Date element
        assert_eq!(content.matches("<Date>").count(), 2);
        // Three episode rows, three record elements, and no wrapper for
        // the empty series table
        assert_eq!(content.matches("<Episode>").count(), 3);
        assert!(!content.contains("<SeriesFile>"));
    }
}

mod milestone_tests {
    use super::*;

    #[test]
    fn test_milestones_run_zero_to_one_hundred() {
        let dir = TempDir::new().unwrap();
        let mut source =
            ScriptedSource::empty().with_table("Series2", vec![series_row(1, "Interviews")]);

        let run = run_export(&mut source, &dest(&dir, "milestones"));

        assert!(run.outcome.is_completed());
        let got: Vec<(u8, &str)> = run
            .progress
            .iter()
            .map(|(percent, message)| (*percent, message.as_str()))
            .collect();
        assert_eq!(
            got,
            vec![
                (0, "Writing Headers"),
                (10, "Writing Series Records"),
                (20, "Writing Episode Records"),
                (30, "Writing Core Data Records"),
                (40, "Writing Collection Records"),
                (50, "Writing Clip Records"),
                (60, "Writing Transcript Records"),
                (70, "Writing Keyword Records"),
                (80, "Writing Clip Keyword Records"),
                (90, "Writing Note Records"),
                (100, "Export complete"),
            ]
        );
    }

    #[test]
    fn test_failed_export_stops_at_failing_milestone() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty().failing_on("Collections2");

        let run = run_export(&mut source, &dest(&dir, "stopped"));

        assert!(!run.outcome.is_completed());
        assert_eq!(
            run.progress.last().map(|(percent, message)| (*percent, message.as_str())),
            Some((40, "Writing Collection Records"))
        );
    }
}

mod transaction_tests {
    use super::*;

    #[test]
    fn test_success_brackets_reads_in_one_transaction() {
        let dir = TempDir::new().unwrap();
        let mut source =
            ScriptedSource::empty().with_table("Series2", vec![series_row(1, "Interviews")]);

        let run = run_export(&mut source, &dest(&dir, "commit"));

        assert!(run.outcome.is_completed());
        assert!(run.reports.is_empty());
        assert_eq!(source.calls.first().map(String::as_str), Some("BEGIN"));
        assert_eq!(source.calls.last().map(String::as_str), Some("COMMIT"));
        assert!(!source.calls.iter().any(|call| call == "ROLLBACK"));

        let fetches: Vec<&str> = source
            .calls
            .iter()
            .filter(|call| call.starts_with("FETCH"))
            .map(String::as_str)
            .collect();
        assert_eq!(fetches.len(), 9);
        assert_eq!(fetches.first(), Some(&"FETCH Series2"));
        assert_eq!(fetches.last(), Some(&"FETCH Notes2"));
    }

    #[test]
    fn test_failed_read_reports_once_and_rolls_back() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty()
            .with_table("Series2", vec![series_row(1, "Interviews")])
            .failing_on("Collections2");

        let run = run_export(&mut source, &dest(&dir, "failed"));

        assert!(!run.outcome.is_completed());
        assert_eq!(run.reports.len(), 1);
        assert!(run.reports[0].contains("Collections2"));
        assert!(source.calls.iter().any(|call| call == "ROLLBACK"));
        assert!(!source.calls.iter().any(|call| call == "COMMIT"));
        assert_eq!(source.calls.last().map(String::as_str), Some("ROLLBACK"));

        // The partial document stays on disk, cut off where the read failed
        let partial = read_document(&dir, "failed.xml");
        assert!(partial.contains("<SeriesFile>"));
        assert!(!partial.contains("<CollectionFile>"));
        assert!(!partial.contains("</Transana>"));
    }

    #[test]
    fn test_begin_failure_reports_without_rollback_or_file() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty().failing_on("BEGIN");

        let run = run_export(&mut source, &dest(&dir, "never"));

        assert!(!run.outcome.is_completed());
        assert_eq!(run.reports.len(), 1);
        assert_eq!(source.calls, vec!["BEGIN".to_string()]);
        assert!(run.progress.is_empty());
        assert!(!dir.path().join("never.xml").exists());
    }
}

mod destination_tests {
    use super::*;

    #[test]
    fn test_xml_suffix_is_appended() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty();

        let run = run_export(&mut source, &dest(&dir, "archive"));

        match run.outcome {
            ExportOutcome::Completed(summary) => {
                assert_eq!(summary.destination, dir.path().join("archive.xml"));
            }
            ExportOutcome::Failed(e) => panic!("export failed: {}", e),
        }
        assert!(dir.path().join("archive.xml").exists());
    }

    #[test]
    fn test_existing_suffix_is_kept() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty();

        let run = run_export(&mut source, &dest(&dir, "archive.xml"));

        assert!(run.outcome.is_completed());
        assert!(dir.path().join("archive.xml").exists());
        assert!(!dir.path().join("archive.xml.xml").exists());
    }

    #[test]
    fn test_home_fallback_policy_routes_bare_names() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty();
        let mut progress = RecordingProgress::default();
        let mut failures = RecordingFailure::default();
        let policy = HomeFallbackPolicy::with_home(dir.path());

        let outcome = XmlExporter::new(&mut source, &mut progress, &mut failures)
            .with_destination_policy(&policy)
            .export("session");

        assert!(outcome.is_completed());
        assert!(dir.path().join("session.xml").exists());
    }
}

mod summary_tests {
    use super::*;

    #[test]
    fn test_summary_counts_every_kind() {
        let dir = TempDir::new().unwrap();
        let mut source = ScriptedSource::empty()
            .with_table(
                "Series2",
                vec![series_row(1, "Interviews"), series_row(2, "Lectures")],
            )
            .with_table(
                "Keywords2",
                vec![
                    keyword_row("Theme", "identity"),
                    keyword_row("Theme", "memory"),
                    keyword_row("Method", "probe"),
                ],
            );

        let run = run_export(&mut source, &dest(&dir, "counted"));

        match run.outcome {
            ExportOutcome::Completed(summary) => {
                assert_eq!(summary.counts.len(), 9);
                assert_eq!(
                    summary.counts[0],
                    KindCount {
                        kind: RecordKind::Series,
                        rows: 2
                    }
                );
                assert_eq!(summary.counts[6].rows, 3);
                assert_eq!(summary.total_records(), 5);
            }
            ExportOutcome::Failed(e) => panic!("export failed: {}", e),
        }
    }
}
