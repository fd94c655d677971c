//! Display helpers for bills: dates, statuses, file names and form numbers.

use chrono::{Datelike, NaiveDate};
use std::fmt;

use crate::BillStatus;

/// Receipt extensions accepted by the upload form
pub const ALLOWED_RECEIPT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// Raised when a bill date is not an ISO-like `YYYY-MM-DD` value
#[derive(Debug, Clone, PartialEq)]
pub struct DateFormatError {
    pub value: String,
}

impl fmt::Display for DateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid bill date: {:?}", self.value)
    }
}

impl std::error::Error for DateFormatError {}

/// Format a bill date for the bills table, e.g. `2004-04-04` becomes `4 Avr. 04`.
///
/// A time part after `T` is ignored.
pub fn format_date(raw: &str) -> Result<String, DateFormatError> {
    let date_part = raw.split('T').next().unwrap_or_default().trim();
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").map_err(|_| DateFormatError {
        value: raw.to_string(),
    })?;

    let month = MONTH_ABBREVIATIONS[date.month0() as usize];
    Ok(format!(
        "{} {}. {:02}",
        date.day(),
        month,
        date.year().rem_euclid(100)
    ))
}

/// Label shown to employees for a bill status
pub fn format_status(status: BillStatus) -> &'static str {
    match status {
        BillStatus::Pending => "En attente",
        BillStatus::Accepted => "Accepté",
        BillStatus::Refused => "Refused",
    }
}

/// Lower-cased text after the last `.` of a file name.
///
/// A name without a dot is returned whole, lower-cased.
pub fn extract_file_extension(file_name: &str) -> String {
    file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Whether a receipt file name carries an image extension the store accepts
pub fn is_allowed_receipt(file_name: &str) -> bool {
    let extension = extract_file_extension(file_name);
    ALLOWED_RECEIPT_EXTENSIONS.contains(&extension.as_str())
}

/// Base-10 integer parsing with the leniency of browser form handling:
/// leading whitespace is skipped, an optional sign is accepted, and parsing
/// stops at the first non-digit. Returns `None` when no digit was read.
/// Digit runs too long for an `i64` saturate instead of failing.
pub fn parse_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let value = digits[..end].bytes().fold(0i64, |value, digit| {
        value
            .saturating_mul(10)
            .saturating_add(i64::from(digit - b'0'))
    });
    Some(if negative { -value } else { value })
}

/// Order items newest first by their raw ISO-like date. Equal dates keep their order.
pub fn sort_anti_chrono<T, F>(items: &mut [T], date: F)
where
    F: Fn(&T) -> &str,
{
    items.sort_by(|a, b| date(b).cmp(date(a)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bill;

    fn bill_dated(date: &str) -> Bill {
        Bill {
            id: None,
            email: "a@a".to_string(),
            expense_type: "Transports".to_string(),
            name: date.to_string(),
            amount: Some(100),
            date: date.to_string(),
            vat: "20".to_string(),
            pct: 20,
            commentary: String::new(),
            comment_admin: None,
            file_url: None,
            file_name: None,
            status: BillStatus::Pending,
        }
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2001-01-01").unwrap(), "1 Jan. 01");
        assert_eq!(format_date("2003-03-03").unwrap(), "3 Mar. 03");
        assert_eq!(format_date("2002-02-02").unwrap(), "2 Fév. 02");
        assert_eq!(format_date("2021-08-15").unwrap(), "15 Aoû. 21");
        assert_eq!(format_date("2022-12-31").unwrap(), "31 Déc. 22");
        assert_eq!(format_date("2023-07-09T10:00:00Z").unwrap(), "9 Jui. 23");
    }

    #[test]
    fn test_format_date_rejects_garbage() {
        let err = format_date("not a date").unwrap_err();
        assert_eq!(err.value, "not a date");
        assert!(format_date("").is_err());
        assert!(format_date("2004-13-01").is_err());
        assert!(format_date("04/04/2004").is_err());
    }

    #[test]
    fn test_format_status() {
        assert_eq!(format_status(BillStatus::Pending), "En attente");
        assert_eq!(format_status(BillStatus::Accepted), "Accepté");
        assert_eq!(format_status(BillStatus::Refused), "Refused");
    }

    #[test]
    fn test_extract_file_extension() {
        assert_eq!(extract_file_extension("example.png"), "png");
        assert_eq!(extract_file_extension("example.PNG"), "png");
        assert_eq!(extract_file_extension("archive.tar.GZ"), "gz");
        assert_eq!(extract_file_extension("README"), "readme");
        assert_eq!(extract_file_extension("trailing."), "");
    }

    #[test]
    fn test_is_allowed_receipt() {
        assert!(is_allowed_receipt("file.png"));
        assert!(is_allowed_receipt("photo.JPEG"));
        assert!(is_allowed_receipt("scan.Jpg"));
        assert!(!is_allowed_receipt("chucknorris.pdf"));
        assert!(!is_allowed_receipt("png"));
        assert!(!is_allowed_receipt("image.png.exe"));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("348"), Some(348));
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("-7"), Some(-7));
        assert_eq!(parse_int("+9"), Some(9));
        assert_eq!(parse_int("3.7"), Some(3));
        assert_eq!(parse_int("12abc"), Some(12));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
    }

    #[test]
    fn test_parse_int_saturates_long_numbers() {
        assert_eq!(parse_int("99999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_int("-99999999999999999999"), Some(-i64::MAX));
        assert_eq!(parse_int("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int("00042"), Some(42));
    }

    #[test]
    fn test_sort_anti_chrono() {
        let mut bills = vec![
            bill_dated("2004-04-04"),
            bill_dated("2001-01-01"),
            bill_dated("2003-03-03"),
            bill_dated("2002-02-02"),
        ];

        sort_anti_chrono(&mut bills, |bill| bill.date.as_str());

        let dates: Vec<&str> = bills.iter().map(|b| b.date.as_str()).collect();
        assert_eq!(dates, ["2004-04-04", "2003-03-03", "2002-02-02", "2001-01-01"]);
        assert!(bills.windows(2).all(|pair| pair[0].date >= pair[1].date));
    }

    #[test]
    fn test_sort_anti_chrono_empty() {
        let mut bills: Vec<Bill> = Vec::new();
        sort_anti_chrono(&mut bills, |bill| bill.date.as_str());
        assert!(bills.is_empty());
    }
}
