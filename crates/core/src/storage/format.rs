use chrono::{NaiveDate, NaiveDateTime};

/// Date layouts accepted in dataset cells, tried in order.
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y"];

/// Datetime layouts produced by spreadsheet exports (date part is kept).
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Reduce a column header to a lookup key.
///
/// Lower-cases ASCII letters and digits, turns `%` into `pct` and drops
/// everything else, so `"Gain/Loss %"` becomes `"gainlosspct"` and
/// `"Current Price (₹)"` becomes `"currentprice"`.
pub fn normalize_header(header: &str) -> String {
    let mut key = String::with_capacity(header.len());
    for c in header.chars() {
        if c.is_ascii_alphanumeric() {
            key.push(c.to_ascii_lowercase());
        } else if c == '%' {
            key.push_str("pct");
        }
    }
    key
}

/// Currency markers allowed before or after the amount. Longer markers
/// come first so `"Rs."` wins over `"Rs"`.
const CURRENCY_MARKERS: [&str; 5] = ["₹", "$", "Rs.", "Rs", "INR"];

/// Parse a numeric cell.
///
/// Accepts a leading sign, one currency marker on either side, thousands
/// separators and surrounding whitespace. A trailing `%` divides by 100
/// (`"12.5%"` -> 0.125). Returns `None` for blank cells and for anything
/// else left over after those are removed (`"12abc"`, `"(12.5)"`).
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let (body, is_percent) = match trimmed.strip_suffix('%') {
        Some(rest) => (rest.trim_end(), true),
        None => (trimmed, false),
    };

    let (sign, body) = match body.chars().next() {
        Some(c @ ('-' | '+')) => (Some(c), body[1..].trim_start()),
        _ => (None, body),
    };
    let body = strip_currency(body);

    let mut cleaned = String::with_capacity(body.len() + 1);
    cleaned.extend(sign);
    for c in body.chars().filter(|c| *c != ',' && !c.is_whitespace()) {
        if !(c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E')) {
            return None;
        }
        cleaned.push(c);
    }

    let value: f64 = cleaned.parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(if is_percent { value / 100.0 } else { value })
}

fn strip_currency(body: &str) -> &str {
    let body = CURRENCY_MARKERS
        .iter()
        .find_map(|m| body.strip_prefix(m))
        .unwrap_or(body)
        .trim_start();
    CURRENCY_MARKERS
        .iter()
        .find_map(|m| body.strip_suffix(m))
        .unwrap_or(body)
        .trim_end()
}

/// Parse a share count. Integral decimals such as `"10.0"` are accepted.
pub fn parse_quantity(raw: &str) -> Option<i64> {
    let trimmed = raw.trim().replace(',', "");
    if let Ok(q) = trimmed.parse::<i64>() {
        return Some(q);
    }
    let value: f64 = trimmed.parse().ok()?;
    if value.is_finite() && value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|f| NaiveDate::parse_from_str(trimmed, f).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(trimmed, f).ok())
                .map(|dt| dt.date())
        })
}
