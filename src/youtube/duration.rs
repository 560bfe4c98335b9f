use crate::error::{Error, Result};

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;
const WEEK: u64 = 7 * DAY;

/// Parses an ISO-8601 duration (`P[nW][nD][T[nH][nM][n[.f]S]]`) into whole
/// seconds. Fractional seconds are truncated. Years and months have no fixed
/// length and are rejected.
pub fn parse_seconds(raw: &str) -> Result<u64> {
    let invalid = || Error::Duration(raw.to_owned());

    let rest = raw.strip_prefix('P').ok_or_else(invalid)?;
    let (date, time) = match rest.split_once('T') {
        Some((_, "")) => return Err(invalid()),
        Some((date, time)) => (date, Some(time)),
        None => (rest, None),
    };

    let mut total = 0u64;
    let mut components = 0;

    for (value, designator) in components_of(date, &['W', 'D']).ok_or_else(invalid)? {
        let unit = match designator {
            'W' => WEEK,
            'D' => DAY,
            _ => return Err(invalid()),
        };
        total = add(total, whole(value).ok_or_else(invalid)?, unit).ok_or_else(invalid)?;
        components += 1;
    }

    if let Some(time) = time {
        for (value, designator) in components_of(time, &['H', 'M', 'S']).ok_or_else(invalid)? {
            let (value, unit) = match designator {
                'H' => (whole(value), HOUR),
                'M' => (whole(value), MINUTE),
                'S' => (seconds(value), 1),
                _ => return Err(invalid()),
            };
            total = add(total, value.ok_or_else(invalid)?, unit).ok_or_else(invalid)?;
            components += 1;
        }
    }

    if components == 0 {
        return Err(invalid());
    }
    Ok(total)
}

/// Splits `1H2M3S` into `[("1", 'H'), ("2", 'M'), ("3", 'S')]`. Designators
/// must come from `order`, each at most once and in that order.
fn components_of<'a>(part: &'a str, order: &[char]) -> Option<Vec<(&'a str, char)>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut next_unit = 0;

    for (i, c) in part.char_indices() {
        if c.is_ascii_digit() || c == '.' {
            continue;
        }
        if i == start {
            return None;
        }
        let unit = order.iter().position(|&d| d == c)?;
        if unit < next_unit {
            return None;
        }
        next_unit = unit + 1;
        out.push((&part[start..i], c));
        start = i + c.len_utf8();
    }

    (start == part.len()).then_some(out)
}

fn whole(value: &str) -> Option<u64> {
    if value.contains('.') {
        return None;
    }
    value.parse().ok()
}

fn seconds(value: &str) -> Option<u64> {
    match value.split_once('.') {
        Some((int, frac)) if !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()) => {
            if int.is_empty() {
                Some(0)
            } else {
                whole(int)
            }
        }
        Some(_) => None,
        None => whole(value),
    }
}

fn add(total: u64, value: u64, unit: u64) -> Option<u64> {
    value.checked_mul(unit).and_then(|v| total.checked_add(v))
}
