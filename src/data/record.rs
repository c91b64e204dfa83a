//! Records parsed from the published spreadsheet.
//!
//! Parsing is deliberately lenient: a short row keeps its missing fields as
//! empty strings and a non-numeric net worth reads as zero. Rows are never
//! dropped, so the panel count always equals the data row count.

/// One row of the source sheet
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    pub name: String,
    pub role: String,
    pub company: String,
    pub networth: u64,
}

impl Record {
    /// Build a record from one CSV row, defaulting anything absent
    pub fn from_row(row: &str) -> Self {
        let mut cols = row.split(',');
        let mut text = || cols.next().unwrap_or_default().to_string();

        let name = text();
        let role = text();
        let company = text();
        let networth = parse_leading_int(&text());

        Record {
            name,
            role,
            company,
            networth,
        }
    }
}

/// Parse a CSV document whose first line is a header
///
/// Every line after the header becomes a record. The empty remainder after a
/// trailing newline is not a row.
pub fn parse_csv(data: &str) -> Vec<Record> {
    let body = data.strip_suffix('\n').unwrap_or(data);

    body.split('\n')
        .skip(1)
        .map(|row| Record::from_row(row.strip_suffix('\r').unwrap_or(row)))
        .collect()
}

/// Read the integer prefix of `s`: leading whitespace, an optional sign, then
/// decimal digits, or hex digits after a `0x` prefix. Anything unparseable,
/// and anything negative, reads as 0.
fn parse_leading_int(s: &str) -> u64 {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    let digits = &rest[..end];

    if negative || digits.is_empty() {
        return 0;
    }

    // Saturate instead of failing on absurdly long numbers
    u64::from_str_radix(digits, radix).unwrap_or(u64::MAX)
}
