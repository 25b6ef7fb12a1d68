//! CSV Ranking Exporter
//!
//! Writes a ranking as `Alternative,Score` rows in rank order. Scores use
//! Rust's shortest round-trip float formatting, so parsing the text back
//! yields bit-identical values.

use crate::domain::analysis::{RankedAlternative, RankingResult};
use crate::ports::{ExportError, ExportFormat, RankingExporter};

/// Header row of the exported file.
pub const CSV_HEADER: &str = "Alternative,Score";

const DEFAULT_FILE_NAME: &str = "ranking_results.csv";

/// Comma-separated ranking export.
#[derive(Debug, Clone)]
pub struct CsvRankingExporter {
    file_name: String,
}

impl CsvRankingExporter {
    pub fn new() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Uses a custom download file name.
    pub fn with_file_name(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }
}

impl Default for CsvRankingExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl RankingExporter for CsvRankingExporter {
    fn export(&self, ranking: &RankingResult) -> Result<String, ExportError> {
        if ranking.is_empty() {
            return Err(ExportError::EmptyRanking);
        }

        let mut out = String::from(CSV_HEADER);
        out.push('\n');

        for entry in ranking.iter() {
            out.push_str(&format!("{},{}\n", csv_escape(&entry.alternative), entry.score));
        }

        Ok(out)
    }

    fn parse(&self, text: &str) -> Result<Vec<RankedAlternative>, ExportError> {
        let mut records = split_records(text)?.into_iter();

        let (_, header) = records
            .next()
            .ok_or_else(|| ExportError::InvalidHeader("empty input".to_string()))?;
        if header.join(",") != CSV_HEADER {
            return Err(ExportError::InvalidHeader(header.join(",")));
        }

        records
            .enumerate()
            .map(|(i, (line, fields))| match fields.as_slice() {
                [label, score] => {
                    let score: f64 = score
                        .trim()
                        .parse()
                        .map_err(|_| ExportError::malformed(line, format!("invalid score '{}'", score)))?;
                    Ok(RankedAlternative::new(i + 1, label.clone(), score))
                }
                other => Err(ExportError::malformed(
                    line,
                    format!("expected 2 fields, got {}", other.len()),
                )),
            })
            .collect()
    }

    fn content_type(&self) -> &'static str {
        "text/csv; charset=utf-8"
    }

    fn file_name(&self) -> &str {
        &self.file_name
    }

    fn format(&self) -> ExportFormat {
        ExportFormat::Csv
    }
}

/// Escape a CSV field value (quote if contains comma, quote, or newline).
fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// A parsed record and the physical line it starts on.
type Record = (usize, Vec<String>);

/// Splits CSV text into records of unescaped fields. Blank lines are skipped.
///
/// A `\r` outside quotes is dropped so CRLF input parses like LF input. Inside
/// quotes every character is kept as written, including a lone `\r`, and each
/// quoted `\n` advances the line counter.
fn split_records(text: &str) -> Result<Vec<Record>, ExportError> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut start = line;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match (c, in_quotes) {
            ('"', true) if chars.peek() == Some(&'"') => {
                chars.next();
                field.push('"');
            }
            ('"', true) => in_quotes = false,
            ('"', false) if field.is_empty() => in_quotes = true,
            ('"', false) => {
                return Err(ExportError::malformed(line, "unexpected quote inside field"));
            }
            (',', false) => fields.push(std::mem::take(&mut field)),
            ('\r', false) => {}
            ('\n', false) => {
                fields.push(std::mem::take(&mut field));
                if !(fields.len() == 1 && fields[0].is_empty()) {
                    records.push((start, std::mem::take(&mut fields)));
                } else {
                    fields.clear();
                }
                line += 1;
                start = line;
            }
            (other, _) => {
                if other == '\n' {
                    line += 1;
                }
                field.push(other);
            }
        }
    }

    if in_quotes {
        return Err(ExportError::malformed(start, "unterminated quoted field"));
    }
    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push((start, fields));
    }

    Ok(records)
}
