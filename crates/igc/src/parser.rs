//! IGC text parser.
//!
//! Only the records needed to summarise a flight are decoded: the `A`
//! record (which also identifies the content as IGC), the `HFDTE`, `HFPLT`,
//! `HFGTY` and `HFGID` headers, and `B` fix records. Everything else is
//! skipped.

use chrono::{NaiveDate, NaiveTime};

use crate::error::IgcError;
use crate::model::{Fix, ParsedTrack};

/* --------------------------------------------------------------------------
Record layout
-------------------------------------------------------------------------- */

/// Minimum length of a `B` record (fields up to and including GNSS altitude).
const B_RECORD_LEN: usize = 35;

/// Header subtype: flight date.
const H_DATE: &str = "DTE";
/// Header subtype: pilot in charge.
const H_PILOT: &str = "PLT";
/// Header subtype: glider type.
const H_GLIDER_TYPE: &str = "GTY";
/// Header subtype: glider registration / competition id.
const H_GLIDER_ID: &str = "GID";

/* --------------------------------------------------------------------------
Parsing
-------------------------------------------------------------------------- */

/// Parse the full text of an IGC file.
pub fn parse(text: &str) -> Result<ParsedTrack, IgcError> {
    let mut records = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let manufacturer = match records.next() {
        Some((_, first)) if first.starts_with('A') => {
            let serial = first[1..].trim();
            (!serial.is_empty()).then(|| serial.to_string())
        }
        _ => return Err(IgcError::NotIgc),
    };

    let mut date = None;
    let mut pilot = String::new();
    let mut glider_type = String::new();
    let mut glider_id = String::new();
    let mut fixes = Vec::new();

    for (line_no, line) in records {
        if line.starts_with('B') {
            fixes.push(parse_fix(line_no, line)?);
        } else if line.starts_with('H') {
            // Source byte (F/O/P) at index 1, three-letter subtype after it.
            let Some(subtype) = line.get(2..5) else {
                continue;
            };
            let value = header_value(line);
            match subtype {
                H_DATE => date = Some(parse_date(line_no, value)?),
                H_PILOT => pilot = value.to_string(),
                H_GLIDER_TYPE => glider_type = value.to_string(),
                H_GLIDER_ID => glider_id = value.to_string(),
                _ => {}
            }
        }
    }

    Ok(ParsedTrack {
        date: date.ok_or(IgcError::MissingDate)?,
        pilot,
        glider_type,
        glider_id,
        manufacturer,
        fixes,
    })
}

/// Value of an `H` record: text after the first `:`, or after the subtype
/// for the short form (`HFDTE190216`).
fn header_value(line: &str) -> &str {
    match line.split_once(':') {
        Some((_, value)) => value.trim(),
        None => line.get(5..).unwrap_or_default().trim(),
    }
}

/// Decode a `ddmmyy` date, ignoring any trailing flight number (`,01`).
fn parse_date(line_no: usize, value: &str) -> Result<NaiveDate, IgcError> {
    let invalid = |reason: &str| IgcError::InvalidRecord {
        line: line_no,
        reason: reason.to_string(),
    };

    let digits = value
        .get(..6)
        .filter(|d| d.bytes().all(|b| b.is_ascii_digit()))
        .ok_or_else(|| invalid("flight date must be ddmmyy"))?;

    let day: u32 = digits[0..2].parse().map_err(|_| invalid("bad day"))?;
    let month: u32 = digits[2..4].parse().map_err(|_| invalid("bad month"))?;
    let yy: i32 = digits[4..6].parse().map_err(|_| invalid("bad year"))?;
    let year = if yy < 80 { 2000 + yy } else { 1900 + yy };

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| invalid("flight date out of range"))
}

/// Decode a `B` record:
///
/// ```text
/// B HHMMSS DDMMmmmN DDDMMmmmE V PPPPP GGGGG
/// B 110135 5206343N 00006198W A 00587 00558
/// ```
fn parse_fix(line_no: usize, line: &str) -> Result<Fix, IgcError> {
    let invalid = |reason: &str| IgcError::InvalidRecord {
        line: line_no,
        reason: reason.to_string(),
    };

    if !line.is_ascii() || line.len() < B_RECORD_LEN {
        return Err(invalid("B record is shorter than 35 characters"));
    }
    let bytes = line.as_bytes();

    let time = parse_time(&line[1..7]).ok_or_else(|| invalid("bad fix time"))?;
    let latitude = parse_angle(&line[7..14], 2, bytes[14], (b'N', b'S'))
        .filter(|lat| lat.abs() <= 90.0)
        .ok_or_else(|| invalid("bad latitude"))?;
    let longitude = parse_angle(&line[15..23], 3, bytes[23], (b'E', b'W'))
        .filter(|lon| lon.abs() <= 180.0)
        .ok_or_else(|| invalid("bad longitude"))?;
    let valid = match bytes[24] {
        b'A' => true,
        b'V' => false,
        _ => return Err(invalid("fix validity must be A or V")),
    };
    let pressure_altitude = line[25..30]
        .parse()
        .map_err(|_| invalid("bad pressure altitude"))?;
    let gps_altitude = line[30..35]
        .parse()
        .map_err(|_| invalid("bad GNSS altitude"))?;

    Ok(Fix {
        time,
        latitude,
        longitude,
        valid,
        pressure_altitude,
        gps_altitude,
    })
}

fn parse_time(hhmmss: &str) -> Option<NaiveTime> {
    let h = hhmmss.get(0..2)?.parse().ok()?;
    let m = hhmmss.get(2..4)?.parse().ok()?;
    let s = hhmmss.get(4..6)?.parse().ok()?;
    NaiveTime::from_hms_opt(h, m, s)
}

/// Decode `D..DMMmmm` plus hemisphere into signed decimal degrees.
///
/// `degree_digits` is 2 for latitude and 3 for longitude; the remaining five
/// digits are minutes with three implied decimals.
fn parse_angle(
    digits: &str,
    degree_digits: usize,
    hemisphere: u8,
    (pos, neg): (u8, u8),
) -> Option<f64> {
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let degrees: u32 = digits.get(..degree_digits)?.parse().ok()?;
    let thousandths: u32 = digits.get(degree_digits..)?.parse().ok()?;
    let minutes = f64::from(thousandths) / 1000.0;
    if minutes >= 60.0 {
        return None;
    }

    let value = f64::from(degrees) + minutes / 60.0;
    match hemisphere {
        h if h == pos => Some(value),
        h if h == neg => Some(-value),
        _ => None,
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
