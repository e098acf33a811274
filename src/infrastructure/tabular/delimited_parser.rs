// ============================================================
// DELIMITED TEXT PARSER
// ============================================================
// Turn uploaded CSV/TXT content into a Dataset

use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::UTF_8;
use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::tabular::{Dataset, FileFormat, TabularRow};

/// Delimiters tried when sniffing CSV content, in tie-break order
const CSV_DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Parser for uploaded tabular files
pub struct DelimitedParser {
    /// Lines sampled when sniffing the CSV delimiter
    sniff_lines: usize,
}

impl Default for DelimitedParser {
    fn default() -> Self {
        Self { sniff_lines: 10 }
    }
}

impl DelimitedParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode raw upload bytes as UTF-8, dropping a leading BOM
    pub fn decode(bytes: &[u8]) -> Result<String> {
        let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
        if had_errors {
            return Err(AppError::ReadError(
                "File is not valid UTF-8 text".to_string(),
            ));
        }
        Ok(text.into_owned())
    }

    /// Decode and parse an uploaded file
    pub fn parse_bytes(&self, file_name: &str, bytes: &[u8]) -> Result<Dataset> {
        let content = Self::decode(bytes)?;
        self.parse_content(file_name, &content)
    }

    /// Parse decoded content; the extension of `file_name` picks the dialect
    pub fn parse_content(&self, file_name: &str, content: &str) -> Result<Dataset> {
        match FileFormat::from_file_name(file_name) {
            FileFormat::Txt => self.parse_text(file_name, content),
            FileFormat::Csv => self.parse_csv(file_name, content),
        }
    }

    /// Quoting-aware parse through the csv crate
    fn parse_csv(&self, file_name: &str, content: &str) -> Result<Dataset> {
        let delimiter = self.detect_delimiter(content);

        if let Some(line) = find_unterminated_quote(content, delimiter) {
            return Err(AppError::ParseError(format!(
                "Unterminated quoted field starting on line {}",
                line
            )));
        }

        let mut reader = ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .trim(Trim::None)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut records: Vec<StringRecord> = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;

            if record.iter().all(|cell| cell.trim().is_empty()) {
                continue;
            }
            records.push(record);
        }

        let mut records = records.into_iter();
        let headers: Vec<String> = records
            .next()
            .ok_or_else(|| AppError::ParseError("File contains no data".to_string()))?
            .iter()
            .map(str::to_string)
            .collect();

        let rows: Vec<TabularRow> = records
            .enumerate()
            .map(|(id, record)| {
                let cells: Vec<&str> = record.iter().collect();
                TabularRow::from_cells(id, &headers, &cells)
            })
            .collect();

        debug!(
            file_name,
            delimiter = %(delimiter as char).escape_default(),
            rows = rows.len(),
            "Parsed CSV content"
        );

        Ok(Dataset::new(file_name, FileFormat::Csv, delimiter, headers, rows))
    }

    /// Naive split of plain text on a delimiter sniffed from the first line
    fn parse_text(&self, file_name: &str, content: &str) -> Result<Dataset> {
        let mut lines = content.lines().filter(|line| !line.trim().is_empty());

        let header_line = lines
            .next()
            .ok_or_else(|| AppError::ParseError("File contains no data".to_string()))?;
        let delimiter = Self::sniff_text_delimiter(header_line);
        let separator = delimiter as char;

        let headers: Vec<String> = header_line.split(separator).map(str::to_string).collect();

        let rows: Vec<TabularRow> = lines
            .enumerate()
            .map(|(id, line)| {
                let cells: Vec<&str> = line.split(separator).collect();
                TabularRow::from_cells(id, &headers, &cells)
            })
            .collect();

        debug!(
            file_name,
            delimiter = %separator.escape_default(),
            rows = rows.len(),
            "Parsed TXT content"
        );

        Ok(Dataset::new(file_name, FileFormat::Txt, delimiter, headers, rows))
    }

    /// Tab if the line has one, else semicolon if present, else comma
    pub fn sniff_text_delimiter(first_line: &str) -> u8 {
        if first_line.contains('\t') {
            b'\t'
        } else if first_line.contains(';') {
            b';'
        } else {
            b','
        }
    }

    /// Pick the CSV delimiter that appears most consistently across the
    /// leading lines (comma, semicolon, tab, pipe). Delimiters inside quotes
    /// are not counted; a quoted field spanning lines still skews its lines.
    pub fn detect_delimiter(&self, content: &str) -> u8 {
        let sample: Vec<&str> = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .take(self.sniff_lines)
            .collect();

        if sample.is_empty() {
            return b',';
        }

        CSV_DELIMITER_CANDIDATES
            .iter()
            .map(|&delimiter| {
                let counts: Vec<f32> = sample
                    .iter()
                    .map(|line| count_unquoted(line, delimiter) as f32)
                    .collect();
                (delimiter, consistency_score(&counts))
            })
            .fold((b',', 0.0f32), |best, candidate| {
                if candidate.1 > best.1 {
                    candidate
                } else {
                    best
                }
            })
            .0
    }
}

/// Occurrences of `delimiter` outside double-quoted sections of one line
fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for b in line.bytes() {
        if b == b'"' {
            in_quotes = !in_quotes;
        } else if b == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

/// Mean count damped by its spread: frequent and steady scores high
fn consistency_score(counts: &[f32]) -> f32 {
    let n = counts.len() as f32;
    let mean = counts.iter().sum::<f32>() / n;
    let variance = counts.iter().map(|c| (c - mean).powi(2)).sum::<f32>() / n;
    mean / (1.0 + variance.sqrt())
}

/// Line (1-based) of a quoted field that never closes, if any
fn find_unterminated_quote(content: &str, delimiter: u8) -> Option<usize> {
    let bytes = content.as_bytes();
    let mut line = 1;
    let mut quote_line = 0;
    let mut in_quotes = false;
    let mut at_field_start = true;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];
        if in_quotes {
            if b == b'"' {
                if bytes.get(i + 1) == Some(&b'"') {
                    i += 1;
                } else {
                    in_quotes = false;
                }
            } else if b == b'\n' {
                line += 1;
            }
        } else if b == b'"' && at_field_start {
            in_quotes = true;
            quote_line = line;
            at_field_start = false;
        } else if b == delimiter {
            at_field_start = true;
        } else if b == b'\n' {
            line += 1;
            at_field_start = true;
        } else if b != b'\r' {
            at_field_start = false;
        }
        i += 1;
    }

    in_quotes.then_some(quote_line)
}
