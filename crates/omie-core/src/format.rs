//! # Casts and wire formatters
//!
//! Two families of best-effort transforms used by payload setters and
//! `import` factories:
//!
//! - **Casts** never fail. They normalize whatever they are given into the
//!   shape a field stores (uppercase text, digit strings, coerced
//!   numbers). Content correctness is enforced lazily at `assert` time,
//!   not here, so a payload can be built incrementally from partial or
//!   messy input and checked once at the end.
//! - **Formatters** insert the canonical punctuation the wire format
//!   expects (`00000-000` zipcodes, `000.000.000-00` CPFs, ...). Each
//!   formats only when the digit count matches the canonical length;
//!   otherwise it returns the stripped digits unchanged rather than
//!   guessing.
//!
//! The numeric coercions (`int_of`, `float_of`) are the deliberate,
//! tested home of behavior that is implicit in loosely-typed API clients:
//! non-numeric input becomes the zero value, with a `tracing::warn!` so
//! the fallback is observable.

use chrono::NaiveDate;

use crate::document::{route, strip_digits, DocumentKind};

/// Wire date format used by the Omie API (`25/12/2022`).
pub const WIRE_DATE_FORMAT: &str = "%d/%m/%Y";

// ---------------------------------------------------------------------------
// Casts
// ---------------------------------------------------------------------------

/// Uppercase a value.
pub fn upper(original: &str) -> String {
    original.to_uppercase()
}

/// Uppercase and cut to `max_length` characters.
///
/// A negative `max_length` is a sentinel meaning "do not cut".
pub fn upper_cut(original: &str, max_length: i64) -> String {
    cut(&original.to_uppercase(), max_length)
}

/// Keep only digit characters.
pub fn digits(original: &str) -> String {
    strip_digits(original)
}

/// Cut to `max_length` characters, counting characters rather than bytes.
///
/// A negative `max_length` is a sentinel meaning "do not cut".
pub fn cut(original: &str, max_length: i64) -> String {
    if max_length < 0 {
        return original.to_string();
    }
    original.chars().take(max_length as usize).collect()
}

/// Coerce a raw JSON value to a string.
///
/// Numbers and booleans render with their JSON text; strings pass
/// through; everything else (null, arrays, objects) becomes the empty
/// string.
pub fn string_of(raw: &serde_json::Value) -> String {
    match raw {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Coerce a raw JSON value to an integer, best-effort.
///
/// Numeric strings parse; floats truncate; anything else becomes `0`
/// (warned, not silent).
pub fn int_of(raw: &serde_json::Value) -> i64 {
    match raw {
        serde_json::Value::Number(n) => {
            n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)).unwrap_or(0)
        }
        serde_json::Value::String(s) => s.trim().parse::<i64>().unwrap_or_else(|_| {
            s.trim().parse::<f64>().map(|f| f as i64).unwrap_or_else(|_| {
                tracing::warn!(value = %s, "non-numeric input coerced to 0");
                0
            })
        }),
        serde_json::Value::Bool(b) => i64::from(*b),
        _ => 0,
    }
}

/// Coerce a raw JSON value to a float, best-effort.
///
/// Numeric strings parse; anything else becomes `0.0` (warned, not
/// silent).
pub fn float_of(raw: &serde_json::Value) -> f64 {
    match raw {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or_else(|_| {
            tracing::warn!(value = %s, "non-numeric input coerced to 0.0");
            0.0
        }),
        serde_json::Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    }
}

// ---------------------------------------------------------------------------
// Wire formatters
// ---------------------------------------------------------------------------

/// Format an 11-digit CPF as `000.000.000-00`.
pub fn cpf(value: &str) -> String {
    let d = strip_digits(value);
    if d.len() != 11 {
        return d;
    }
    format!("{}.{}.{}-{}", &d[..3], &d[3..6], &d[6..9], &d[9..])
}

/// Format a 14-digit CNPJ as `00.000.000/0000-00`.
pub fn cnpj(value: &str) -> String {
    let d = strip_digits(value);
    if d.len() != 14 {
        return d;
    }
    format!(
        "{}.{}.{}/{}-{}",
        &d[..2],
        &d[2..5],
        &d[5..8],
        &d[8..12],
        &d[12..]
    )
}

/// Format a document as CPF or CNPJ depending on its digit count.
///
/// Values that route to neither (or whose digit count does not match the
/// routed canonical length) come back as stripped digits only.
pub fn cpf_or_cnpj(value: &str) -> String {
    match route(value) {
        Ok(DocumentKind::Cpf) => cpf(value),
        Ok(DocumentKind::Cnpj) => cnpj(value),
        Err(_) => strip_digits(value),
    }
}

/// Format an 8-digit zipcode as `00000-000`.
pub fn zipcode(value: &str) -> String {
    let d = strip_digits(value);
    if d.len() != 8 {
        return d;
    }
    format!("{}-{}", &d[..5], &d[5..])
}

/// Format an 11-digit phone number as `(00) 00000-0000`.
pub fn phone(value: &str) -> String {
    let d = strip_digits(value);
    if d.len() != 11 {
        return d;
    }
    format!("({}) {}-{}", &d[..2], &d[2..7], &d[7..])
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Render a date in the `dd/mm/YYYY` wire format.
pub fn wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}

/// Parse a `dd/mm/YYYY` wire date.
pub fn parse_wire_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), WIRE_DATE_FORMAT).ok()
}

/// Today's date in UTC, the default for forecast/due-date fields.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
