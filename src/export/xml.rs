//! The XML export engine.
//!
//! One call reads the nine record kinds inside a single transaction and
//! writes one interchange document. The record loop is entirely driven by
//! [`CATALOG`]; nothing in here knows any kind by name.
//!
//! Failure contract: any error after `BEGIN` is reported once through the
//! failure sink, the transaction is rolled back, and the outcome is
//! returned. Nothing is re-raised, and a partially written file is left on
//! disk exactly as far as it got.

use std::fs::File;
use std::io::{BufWriter, Write};

use quick_xml::escape::partial_escape;

use super::destination::{CurrentDirPolicy, DestinationPolicy, ensure_xml_extension};
use super::progress::{FailureSink, ProgressSink};
use super::{ExportError, ExportOutcome, ExportSummary, KindCount};
use crate::database::DatabaseBackend;
use crate::schema::{CATALOG, FieldRender, RecordSpec, Row, doctype};

const HEADERS_MILESTONE: &str = "Writing Headers";
const COMPLETE_MILESTONE: &str = "Export complete";

/// Serializes one archive database into one interchange document.
pub struct XmlExporter<'a> {
    source: &'a mut dyn DatabaseBackend,
    progress: &'a mut dyn ProgressSink,
    failures: &'a mut dyn FailureSink,
    destination_policy: &'a dyn DestinationPolicy,
}

impl<'a> XmlExporter<'a> {
    /// Create an exporter over `source`, reporting through the given sinks.
    ///
    /// Destination names resolve against the working directory unless a
    /// policy is supplied with [`XmlExporter::with_destination_policy`].
    pub fn new(
        source: &'a mut dyn DatabaseBackend,
        progress: &'a mut dyn ProgressSink,
        failures: &'a mut dyn FailureSink,
    ) -> Self {
        Self {
            source,
            progress,
            failures,
            destination_policy: &CurrentDirPolicy,
        }
    }

    /// Replace the destination policy.
    pub fn with_destination_policy(mut self, policy: &'a dyn DestinationPolicy) -> Self {
        self.destination_policy = policy;
        self
    }

    /// Export the whole database to `destination`.
    ///
    /// The name gets `.xml` appended unless it already ends with it
    /// (case-insensitively), then resolves through the destination policy.
    pub fn export(&mut self, destination: &str) -> ExportOutcome {
        if let Err(error) = self.source.begin() {
            let error = ExportError::from(error);
            self.failures.report(&error);
            return ExportOutcome::Failed(error);
        }

        match self.write_document(destination) {
            Ok(summary) => {
                self.progress.update(100, COMPLETE_MILESTONE);
                ExportOutcome::Completed(summary)
            }
            Err(error) => {
                self.failures.report(&error);
                if let Err(rollback_error) = self.source.rollback() {
                    tracing::warn!(
                        "Rollback after failed export also failed: {}",
                        rollback_error
                    );
                }
                ExportOutcome::Failed(error)
            }
        }
    }

    /// Steps 2 through 5: open the file, write preamble, records, and root
    /// close, then flush and commit. The file handle is scoped here so it is
    /// closed on every exit path.
    fn write_document(&mut self, destination: &str) -> Result<ExportSummary, ExportError> {
        let file_name = ensure_xml_extension(destination);
        let path = self.destination_policy.resolve(&file_name);
        let mut out = BufWriter::new(File::create(&path)?);

        self.progress.update(0, HEADERS_MILESTONE);
        out.write_all(doctype::XML_DECLARATION.as_bytes())?;
        out.write_all(doctype::DOCTYPE.as_bytes())?;
        out.write_all(b"\n")?;
        out.write_all(doctype::ROOT_OPEN.as_bytes())?;
        out.write_all(doctype::VERSION_ELEMENT.as_bytes())?;

        let mut counts = Vec::with_capacity(CATALOG.len());
        for (index, spec) in CATALOG.iter().enumerate() {
            let percent = ((index + 1) * 10) as u8;
            self.progress.update(percent, spec.milestone);

            let rows = self.source.fetch_all(&spec.select_sql())?;
            tracing::debug!("{}: {} rows", spec.table, rows.len());

            if !rows.is_empty() {
                writeln!(out, "  <{}>", spec.collection_element)?;
                for row in &rows {
                    write_record(&mut out, spec, row)?;
                }
                writeln!(out, "  </{}>", spec.collection_element)?;
            }
            counts.push(KindCount {
                kind: spec.kind,
                rows: rows.len(),
            });
        }

        out.write_all(doctype::ROOT_CLOSE.as_bytes())?;
        out.flush()?;
        self.source.commit()?;

        Ok(ExportSummary {
            destination: path,
            counts,
        })
    }
}

/// Write one record element, one child element per admitted field.
fn write_record(
    out: &mut impl Write,
    spec: &RecordSpec,
    row: &Row,
) -> Result<(), ExportError> {
    if row.len() != spec.fields.len() {
        return Err(ExportError::Serialization(format!(
            "{} row has {} values, descriptor expects {}",
            spec.table,
            row.len(),
            spec.fields.len()
        )));
    }

    writeln!(out, "    <{}>", spec.record_element)?;
    for (field, value) in spec.fields.iter().zip(row) {
        if !field.presence.admits(value) {
            continue;
        }
        let text = field.render.render(value).ok_or_else(|| {
            ExportError::Serialization(format!(
                "column {} of {} cannot be rendered as a date",
                field.column, spec.table
            ))
        })?;

        writeln!(out, "      <{}>", field.element)?;
        if field.render == FieldRender::Raw {
            // Verbatim, no escaping and no added newline
            out.write_all(text.as_bytes())?;
        } else {
            writeln!(out, "        {}", partial_escape(text.as_str()))?;
        }
        writeln!(out, "      </{}>", field.element)?;
    }
    writeln!(out, "    </{}>", spec.record_element)?;
    Ok(())
}
