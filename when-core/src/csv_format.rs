//! Plain comma-separated encoding of the entry table.
//!
//! File layout:
//!   date,day,time,task,alertness,energy
//!   2025-08-15,Friday,09:30,Read,5,6
//!
//! Fields holding a comma, a double quote or a line break are wrapped in
//! double quotes, with inner quotes doubled.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{NaiveDate, NaiveTime, Weekday};
use std::borrow::Cow;

use crate::entry::Entry;
use crate::validate::{SCORE_MAX, SCORE_MIN};

/// Column names, in file order.
pub const COLUMNS: [&str; 6] = ["date", "day", "time", "task", "alertness", "energy"];

/// One parsed line of the file, before it is turned into an [`Entry`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// 1-based line on which the record starts.
    pub line: usize,
    pub fields: Vec<String>,
}

/// `date,day,time,task,alertness,energy`
pub fn header_line() -> String {
    COLUMNS.join(",")
}

/// Renders a single entry as one line, without the trailing newline.
pub fn format_record(entry: &Entry) -> String {
    let date = entry.date_label();
    let time = entry.time_label();
    let alertness = entry.alertness.to_string();
    let energy = entry.energy.to_string();
    let fields = [
        date.as_str(),
        entry.day_label(),
        time.as_str(),
        entry.task.as_str(),
        alertness.as_str(),
        energy.as_str(),
    ];
    fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// Renders the header and every entry, one per line.
pub fn format_table(entries: &[Entry]) -> String {
    let mut out = header_line();
    out.push('\n');
    for entry in entries {
        out.push_str(&format_record(entry));
        out.push('\n');
    }
    out
}

fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Splits file content into records. Blank lines are skipped; quoted fields
/// may span several lines.
pub fn split_records(content: &str) -> Result<Vec<RawRecord>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1;
    let mut record_line = 1;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                '"' if chars.peek() == Some(&'"') => {
                    chars.next();
                    field.push('"');
                }
                '"' => {
                    in_quotes = false;
                    if !matches!(chars.peek(), None | Some(',' | '\n' | '\r')) {
                        bail!("line {line}: unexpected text after closing quote");
                    }
                }
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                push_record(&mut records, record_line, std::mem::take(&mut fields));
                line += 1;
                record_line = line;
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        bail!("line {record_line}: unterminated quoted field");
    }
    if !fields.is_empty() || !field.is_empty() {
        fields.push(field);
        push_record(&mut records, record_line, fields);
    }
    Ok(records)
}

fn push_record(records: &mut Vec<RawRecord>, line: usize, fields: Vec<String>) {
    let blank = fields.len() == 1 && fields[0].trim().is_empty();
    if !blank {
        records.push(RawRecord { line, fields });
    }
}

/// `true` when the record is the column header (case and padding insensitive).
pub fn is_header(record: &RawRecord) -> bool {
    record.fields.len() == COLUMNS.len()
        && record
            .fields
            .iter()
            .zip(COLUMNS)
            .all(|(f, c)| f.trim().eq_ignore_ascii_case(c))
}

/// Parses the whole file: header first, then one entry per record.
///
/// Any malformed record fails the whole parse. Nothing is skipped or coerced.
pub fn parse_table(content: &str) -> Result<Vec<Entry>> {
    let records = split_records(content)?;
    let mut iter = records.iter();
    match iter.next() {
        None => return Ok(Vec::new()),
        Some(first) if is_header(first) => {}
        Some(first) => bail!(
            "line {}: expected header `{}`",
            first.line,
            header_line()
        ),
    }
    iter.map(parse_record).collect()
}

/// Turns a record into an [`Entry`], checking every column.
pub fn parse_record(record: &RawRecord) -> Result<Entry> {
    let line = record.line;
    let [date, day, time, task, alertness, energy] = record.fields.as_slice() else {
        bail!(
            "line {line}: expected {} columns, found {}",
            COLUMNS.len(),
            record.fields.len()
        );
    };

    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .with_context(|| format!("line {line}: column `date` is not a YYYY-MM-DD date: {date:?}"))?;
    let day = day
        .trim()
        .parse::<Weekday>()
        .map_err(|_| anyhow!("line {line}: column `day` is not a weekday: {day:?}"))?;
    let time = NaiveTime::parse_from_str(time.trim(), "%H:%M")
        .with_context(|| format!("line {line}: column `time` is not an HH:MM time: {time:?}"))?;
    if task.is_empty() {
        bail!("line {line}: column `task` is empty");
    }
    let alertness = parse_score(line, "alertness", alertness)?;
    let energy = parse_score(line, "energy", energy)?;

    Ok(Entry {
        date,
        day,
        time,
        task: task.clone(),
        alertness,
        energy,
    })
}

fn parse_score(line: usize, column: &str, value: &str) -> Result<u8> {
    let score: i64 = value
        .trim()
        .parse()
        .with_context(|| format!("line {line}: column `{column}` is not an integer: {value:?}"))?;
    if !(i64::from(SCORE_MIN)..=i64::from(SCORE_MAX)).contains(&score) {
        bail!("line {line}: column `{column}` must be between {SCORE_MIN} and {SCORE_MAX}, got {score}");
    }
    Ok(score as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::entry_at;

    #[test]
    fn record_is_plain_when_nothing_needs_quoting() {
        let e = entry_at("2025-08-15", "09:30", "Read", 5, 6);
        assert_eq!(format_record(&e), "2025-08-15,Friday,09:30,Read,5,6");
    }

    #[test]
    fn record_quotes_commas_and_quotes() {
        let e = entry_at("2025-08-15", "09:30", "Read \"Dune\", chapter 2", 5, 6);
        assert_eq!(
            format_record(&e),
            "2025-08-15,Friday,09:30,\"Read \"\"Dune\"\", chapter 2\",5,6"
        );
    }

    #[test]
    fn table_starts_with_header() {
        let s = format_table(&[]);
        assert_eq!(s, "date,day,time,task,alertness,energy\n");
    }

    #[test]
    fn split_handles_quotes_crlf_and_blank_lines() {
        let content = "a,b\r\n\r\n\"x, y\",\"multi\nline\"\nlast,\"\"\"q\"\"\"";
        let records = split_records(content).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].fields, ["a", "b"]);
        assert_eq!(records[1].line, 3);
        assert_eq!(records[1].fields, ["x, y", "multi\nline"]);
        assert_eq!(records[2].line, 5);
        assert_eq!(records[2].fields, ["last", "\"q\""]);
    }

    #[test]
    fn split_rejects_unterminated_quote() {
        let err = split_records("a,\"open\n").unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    #[test]
    fn split_rejects_text_after_closing_quote() {
        let err = split_records("date,task\n2025-08-15,\"abc\"def\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.starts_with("line 2:"), "{msg}");
        assert!(msg.contains("after closing quote"), "{msg}");
    }

    #[test]
    fn header_with_padding_is_recognised() {
        let entries = parse_table("date, day, time, task, alertness, energy").unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn empty_content_is_an_empty_table() {
        assert!(parse_table("").unwrap().is_empty());
    }

    #[test]
    fn missing_header_is_an_error() {
        let err = parse_table("2025-08-15,Friday,09:30,Read,5,6\n").unwrap_err();
        assert!(err.to_string().contains("expected header"));
    }

    #[test]
    fn non_numeric_score_is_an_error() {
        let content = "date,day,time,task,alertness,energy\n2025-08-15,Friday,09:30,Read,five,6\n";
        let err = parse_table(content).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("line 2"), "{msg}");
        assert!(msg.contains("alertness"), "{msg}");
    }

    #[test]
    fn out_of_range_score_is_an_error() {
        let content = "date,day,time,task,alertness,energy\n2025-08-15,Friday,09:30,Read,5,11\n";
        let err = parse_table(content).unwrap_err();
        assert!(err.to_string().contains("energy"));
    }

    #[test]
    fn wrong_column_count_is_an_error() {
        let content = "date,day,time,task,alertness,energy\n2025-08-15,Friday,09:30,5,6\n";
        let err = parse_table(content).unwrap_err();
        assert!(err.to_string().contains("expected 6 columns, found 5"));
    }

    #[test]
    fn bad_date_is_an_error() {
        let content = "date,day,time,task,alertness,energy\n15/08/2025,Friday,09:30,Read,5,6\n";
        assert!(parse_table(content).is_err());
    }

    #[test]
    fn parses_rows_in_file_order() {
        let content = "date,day,time,task,alertness,energy\n\
                       2025-08-15,Friday,09:30,Read,5,6\n\
                       2025-08-14,Thursday,22:00,\"Walk, then tea\",3,2\n";
        let entries = parse_table(content).unwrap();
        assert_eq!(
            entries,
            vec![
                entry_at("2025-08-15", "09:30", "Read", 5, 6),
                entry_at("2025-08-14", "22:00", "Walk, then tea", 3, 2),
            ]
        );
    }
}
