//! Settings report — serialize a snapshot as plain text, and read it back.
//!
//! ```text
//! ------------------------------------------------------------ (rule)
//! ## General settings
//! isDirectedGraph: true
//! edgeCount: 12
//! ...
//! ------------------------------------------------------------
//! ## Filter settings
//! # filter 0: Degree Range
//! ```
//!
//! Every entry is one `key: value` line. Line breaks inside keys or values
//! are written as spaces. Within a key, `\` and `:` are escaped as `\\` and
//! `\:`, so the first unescaped `": "` on a line always ends the key.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{error, info};

use crate::model::SnapshotDocument;
use crate::{Error, Result};

const TITLE_PREFIX: &str = "## ";
const ENTRY_SEPARATOR: &str = ": ";

/// Writes a [`SnapshotDocument`] in report format.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    rule: String,
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::new(120)
    }
}

impl ReportWriter {
    pub fn new(rule_width: usize) -> Self {
        Self { rule: "-".repeat(rule_width.max(1)) }
    }

    /// Write every section, in document order, to `writer`.
    pub fn write(&self, document: &SnapshotDocument, writer: &mut dyn Write) -> std::io::Result<()> {
        for section in document.sections() {
            writeln!(writer, "{}", self.rule)?;
            writeln!(writer, "{TITLE_PREFIX}{}", section.title())?;
            for (key, value) in section.iter() {
                writeln!(writer, "{}{ENTRY_SEPARATOR}{}", escape_key(key), single_line(value))?;
            }
        }
        writer.flush()
    }

    /// Create `path` and write the report into it.
    ///
    /// The file handle is closed before this returns, on success and on error.
    pub fn write_file(&self, document: &SnapshotDocument, path: &Path) -> Result<()> {
        info!(path = %path.display(), "writing settings report");
        match self.write_to(document, path) {
            Ok(()) => {
                info!(path = %path.display(), "settings report written");
                Ok(())
            }
            Err(source) => {
                error!(path = %path.display(), error = %source, "settings report not written");
                Err(Error::IoWrite { path: path.to_path_buf(), source })
            }
        }
    }

    fn write_to(&self, document: &SnapshotDocument, path: &Path) -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        self.write(document, &mut writer)?;
        writer.into_inner().map_err(|e| e.into_error())?.sync_all()
    }
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for c in key.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            ':' => escaped.push_str("\\:"),
            '\r' | '\n' => escaped.push(' '),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Split an entry line at the first unescaped `": "`, unescaping the key.
fn split_entry(line: &str) -> Option<(String, &str)> {
    let mut key = String::new();
    let mut chars = line.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '\\' => key.push(chars.next()?.1),
            ':' if line[i + 1..].starts_with(' ') => return Some((key, &line[i + ENTRY_SEPARATOR.len()..])),
            c => key.push(c),
        }
    }
    None
}

// ============================================================================
// Reading reports back
// ============================================================================

/// One section of a parsed report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedSection {
    pub title: String,
    pub entries: Vec<(String, String)>,
}

/// Parse a report into its sections, in file order.
///
/// Keys end at the first unescaped `": "`; everything after it is the value.
pub fn parse_report(text: &str) -> Result<Vec<ParsedSection>> {
    let mut sections: Vec<ParsedSection> = Vec::new();
    let mut lines = text.lines().enumerate();

    while let Some((n, line)) = lines.next() {
        if is_rule(line) {
            let title = match lines.next() {
                Some((_, title_line)) => title_line.strip_prefix(TITLE_PREFIX).ok_or_else(|| {
                    malformed(n + 2, "expected a section title after the rule")
                })?,
                None => return Err(malformed(n + 1, "rule at end of report")),
            };
            sections.push(ParsedSection { title: title.to_string(), entries: Vec::new() });
            continue;
        }

        let section = sections.last_mut().ok_or_else(|| malformed(n + 1, "entry before any section"))?;
        let (key, value) = split_entry(line)
            .ok_or_else(|| malformed(n + 1, "entry without ': ' separator"))?;
        section.entries.push((key, value.to_string()));
    }

    Ok(sections)
}

fn is_rule(line: &str) -> bool {
    !line.is_empty() && line.bytes().all(|b| b == b'-')
}

fn malformed(line: usize, message: &str) -> Error {
    Error::MalformedReport { line, message: message.to_string() }
}
