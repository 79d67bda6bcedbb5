//! Month/year conversions between the stored `YYYY-MM` form and display text.

use crate::models::resume::ResumeRecord;

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const FULL_MONTHS: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

/// `"2023-03"` → `"Mar 2023"`.
///
/// Empty input stays empty; input without a year and month part is returned
/// unchanged.
pub fn format_month_year(iso: &str) -> String {
    if iso.is_empty() {
        return String::new();
    }
    let mut parts = iso.splitn(2, '-');
    let (Some(year), Some(month)) = (parts.next(), parts.next()) else {
        return iso.to_string();
    };
    if year.is_empty() || month.is_empty() {
        return iso.to_string();
    }
    match month.parse::<usize>() {
        Ok(m) if (1..=12).contains(&m) => format!("{} {year}", MONTHS[m - 1]),
        _ => iso.to_string(),
    }
}

fn is_digits(s: &str, len: usize) -> bool {
    s.len() == len && s.chars().all(|c| c.is_ascii_digit())
}

/// `"Mar 2023"` / `"March 2023"` / `"2023-03"` → `"2023-03"`.
pub fn parse_month_year(display: &str) -> Option<String> {
    if let Some((year, month)) = display.split_once('-') {
        if is_digits(year, 4) && is_digits(month, 2) {
            return Some(display.to_string());
        }
    }

    let parts: Vec<&str> = display.split_whitespace().collect();
    let [month, year] = parts.as_slice() else {
        return None;
    };
    if !is_digits(year, 4) {
        return None;
    }

    let index = MONTHS
        .iter()
        .position(|m| m.eq_ignore_ascii_case(month))
        .or_else(|| FULL_MONTHS.iter().position(|m| m.eq_ignore_ascii_case(month)))?;

    Some(format!("{year}-{:02}", index + 1))
}

/// Rewrites every recognizable month/year field of `record` to `YYYY-MM`.
///
/// Values that do not parse ("Present", free text) are left as typed.
pub fn normalize_dates(record: &mut ResumeRecord) {
    let fields = record
        .experience
        .iter_mut()
        .flat_map(|e| [&mut e.start_date, &mut e.end_date])
        .chain(record.education.iter_mut().map(|e| &mut e.graduation_date))
        .chain(
            record
                .certifications
                .iter_mut()
                .flat_map(|c| [&mut c.date, &mut c.expiration]),
        )
        .chain(
            record
                .clearances
                .iter_mut()
                .flat_map(|c| [&mut c.investigation_date, &mut c.expiration_date]),
        );

    for field in fields {
        if let Some(iso) = parse_month_year(field) {
            *field = iso;
        }
    }
}
