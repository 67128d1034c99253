//! Delimiter separated export of table data.
//!
//! The export projects the raw cell text: no trimming, wrapping or padding is
//! applied, and the line number column never appears. Fields containing the
//! delimiter, a double quote or a line break are quoted, with inner quotes
//! doubled. Records are terminated by `\n`.

use std::borrow::Cow;

use crate::table::Table;
use crate::text::Txt;

/// Export configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvOptions {
    /// Field separator.
    pub delimiter: char,
    /// Emit the column headers as the first record.
    pub include_header: bool,
    /// Emit hidden columns too.
    pub include_hidden: bool,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            include_header: true,
            include_hidden: false,
        }
    }
}

impl CsvOptions {
    /// Comma separated, with header, without hidden columns.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field separator.
    #[must_use]
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Emit the header record.
    #[must_use]
    pub fn include_header(mut self, include: bool) -> Self {
        self.include_header = include;
        self
    }

    /// Emit hidden columns.
    #[must_use]
    pub fn include_hidden(mut self, include: bool) -> Self {
        self.include_hidden = include;
        self
    }
}

/// Export `table` as delimiter separated text.
#[must_use]
pub fn to_csv(table: &Table, options: &CsvOptions) -> String {
    let columns: Vec<usize> = table
        .columns()
        .iter()
        .enumerate()
        .filter(|(_, c)| options.include_hidden || !c.width.is_hidden())
        .map(|(i, _)| i)
        .collect();
    if columns.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    if options.include_header {
        let headers = table.columns();
        write_record(
            &mut out,
            columns.iter().map(|&i| headers[i].header.as_ref().map_or("", Txt::text)),
            options.delimiter,
        );
    }
    for row in table.rows() {
        write_record(
            &mut out,
            columns.iter().map(|&i| row.get(i).map_or("", Txt::text)),
            options.delimiter,
        );
    }
    out
}

fn write_record<'a>(out: &mut String, fields: impl Iterator<Item = &'a str>, delimiter: char) {
    for (i, field) in fields.enumerate() {
        if i > 0 {
            out.push(delimiter);
        }
        out.push_str(&quote(field, delimiter));
    }
    out.push('\n');
}

fn quote(field: &str, delimiter: char) -> Cow<'_, str> {
    let needs_quotes = field.contains(|c: char| c == delimiter || matches!(c, '"' | '\n' | '\r'));
    if needs_quotes {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}
