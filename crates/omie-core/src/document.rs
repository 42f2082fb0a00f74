//! # CPF/CNPJ checksum validation
//!
//! Pure functions over the two Brazilian taxpayer identifiers:
//!
//! - **CPF** — individual taxpayer id, 11 digits, two check digits.
//! - **CNPJ** — company taxpayer id, 14 digits, two check digits.
//!
//! Both algorithms are public: a weighted digit sum reduced modulo 11
//! produces each check digit. Inputs are normalized first (strip every
//! non-digit character, left-pad with `'0'` to the canonical length), and
//! all-identical-digit sequences are rejected by definition even when the
//! arithmetic happens to hold (`"00000000000"` is checksum-consistent but
//! not a CPF).
//!
//! Fields that accept either document are routed by digit count: up to 11
//! digits go down the CPF path, 12–14 the CNPJ path, anything longer fits
//! neither.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which document algorithm applies to a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// CPF — Cadastro de Pessoas Físicas, 11 digits.
    Cpf,
    /// CNPJ — Cadastro Nacional da Pessoa Jurídica, 14 digits.
    Cnpj,
}

impl DocumentKind {
    /// Canonical digit length of the document.
    pub fn len(self) -> usize {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cpf => write!(f, "CPF"),
            Self::Cnpj => write!(f, "CNPJ"),
        }
    }
}

/// Digit count routed to neither document range (more than 14 digits).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnroutableLength {
    /// Digit count after stripping non-digits.
    pub digits: usize,
}

/// Strip every non-digit character.
///
/// This is the `fix` transform for document rules: idempotent, never
/// fails, and does **not** pad — padding is validation-time only.
pub fn strip_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Route a raw value to the document kind its digit count implies.
///
/// - 0–11 digits → [`DocumentKind::Cpf`]
/// - 12–14 digits → [`DocumentKind::Cnpj`]
/// - 15+ digits → [`UnroutableLength`]
pub fn route(value: &str) -> Result<DocumentKind, UnroutableLength> {
    let digits = strip_digits(value).len();
    match digits {
        0..=11 => Ok(DocumentKind::Cpf),
        12..=14 => Ok(DocumentKind::Cnpj),
        _ => Err(UnroutableLength { digits }),
    }
}

/// Normalize to canonical length: strip non-digits, left-pad with '0'.
///
/// Returns `None` when the input has no digits at all or has more digits
/// than the canonical length.
fn canonical(value: &str, kind: DocumentKind) -> Option<Vec<u8>> {
    let digits = strip_digits(value);
    if digits.is_empty() || digits.len() > kind.len() {
        return None;
    }

    let mut out = vec![0u8; kind.len() - digits.len()];
    out.extend(digits.bytes().map(|b| b - b'0'));
    Some(out)
}

/// True when every digit of the sequence is identical.
fn is_repdigit(digits: &[u8]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// Check whether a value is a valid CPF.
///
/// The value is stripped of non-digit characters and left-padded with
/// `'0'` to 11 digits before checking. Both check digits (positions 9 and
/// 10, zero-indexed) must satisfy:
///
/// ```text
/// sum = Σ digit[c] * (t + 1 - c)   for c in [0, t)
/// d   = ((10 * sum) mod 11) mod 10
/// digit[t] == d
/// ```
pub fn is_valid_cpf(value: &str) -> bool {
    let digits = match canonical(value, DocumentKind::Cpf) {
        Some(d) => d,
        None => return false,
    };

    if is_repdigit(&digits) {
        return false;
    }

    for t in 9..11 {
        let sum: u32 = digits[..t]
            .iter()
            .enumerate()
            .map(|(c, &d)| u32::from(d) * (t as u32 + 1 - c as u32))
            .sum();
        let expected = ((10 * sum) % 11) % 10;
        if u32::from(digits[t]) != expected {
            return false;
        }
    }

    true
}

/// Check whether a value is a valid CNPJ.
///
/// The value is stripped of non-digit characters and left-padded with
/// `'0'` to 14 digits before checking. The first check digit (position
/// 12) uses the weight cycle `5,4,3,2,9,8,7,6,5,4,3,2` over positions
/// 0–11; the second (position 13) uses the same cycle starting at 6 over
/// positions 0–12. Each expected digit is `0` when `sum mod 11 < 2`,
/// otherwise `11 - (sum mod 11)`.
pub fn is_valid_cnpj(value: &str) -> bool {
    let digits = match canonical(value, DocumentKind::Cnpj) {
        Some(d) => d,
        None => return false,
    };

    if is_repdigit(&digits) {
        return false;
    }

    check_cnpj_digit(&digits, 12, 5) && check_cnpj_digit(&digits, 13, 6)
}

/// Verify one CNPJ check digit at `position`, with the weight cycle
/// starting at `first_weight` and wrapping from 2 back to 9.
fn check_cnpj_digit(digits: &[u8], position: usize, first_weight: u32) -> bool {
    let mut weight = first_weight;
    let mut sum = 0u32;

    for &d in &digits[..position] {
        sum += u32::from(d) * weight;
        weight = if weight == 2 { 9 } else { weight - 1 };
    }

    let rest = sum % 11;
    let expected = if rest < 2 { 0 } else { 11 - rest };
    u32::from(digits[position]) == expected
}

/// Check whether a value is a valid document of either kind, routing by
/// digit count. Unroutable lengths are simply invalid here; rule-level
/// validation reports them as a distinct error.
pub fn is_valid_document(value: &str) -> bool {
    match route(value) {
        Ok(DocumentKind::Cpf) => is_valid_cpf(value),
        Ok(DocumentKind::Cnpj) => is_valid_cnpj(value),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // -- CPF --

    #[test]
    fn cpf_known_valid() {
        assert!(is_valid_cpf("11144477735"));
        assert!(is_valid_cpf("111.444.777-35")); // punctuation stripped
    }

    #[test]
    fn cpf_mutating_check_digits_invalidates() {
        // Any single-digit mutation in the last two positions must fail.
        let valid = "11144477735";
        for pos in [9, 10] {
            for d in b'0'..=b'9' {
                let mut bytes = valid.as_bytes().to_vec();
                if bytes[pos] == d {
                    continue;
                }
                bytes[pos] = d;
                let mutated = String::from_utf8(bytes).unwrap();
                assert!(!is_valid_cpf(&mutated), "accepted {mutated}");
            }
        }
    }

    #[test]
    fn cpf_repdigits_rejected() {
        for d in 0..10 {
            let rep: String = std::iter::repeat(char::from(b'0' + d)).take(11).collect();
            assert!(!is_valid_cpf(&rep), "accepted {rep}");
        }
    }

    #[test]
    fn cpf_short_inputs_are_left_padded() {
        // "11144477735" with leading zeros stripped still validates;
        // a document that pads to a repdigit does not.
        assert!(!is_valid_cpf("0"));
        assert!(!is_valid_cpf(""));
    }

    #[test]
    fn cpf_too_long_rejected() {
        assert!(!is_valid_cpf("111444777350"));
    }

    // -- CNPJ --

    #[test]
    fn cnpj_known_valid() {
        assert!(is_valid_cnpj("11222333000181"));
        assert!(is_valid_cnpj("11.222.333/0001-81"));
    }

    #[test]
    fn cnpj_wrong_final_length_rejected() {
        assert!(!is_valid_cnpj("112223330001810")); // 15 digits
        assert!(!is_valid_cnpj("011222333000181")); // leading zero makes 15
        assert!(!is_valid_cnpj(""));
    }

    #[test]
    fn cnpj_bad_check_digits_rejected() {
        assert!(!is_valid_cnpj("11222333000182"));
        assert!(!is_valid_cnpj("11222333000191"));
    }

    #[test]
    fn cnpj_repdigits_rejected() {
        assert!(!is_valid_cnpj("00000000000000"));
        assert!(!is_valid_cnpj("99999999999999"));
    }

    // -- Routing --

    #[test]
    fn route_by_digit_count() {
        assert_eq!(route("11144477735"), Ok(DocumentKind::Cpf));
        assert_eq!(route("123"), Ok(DocumentKind::Cpf));
        assert_eq!(route("112223330001"), Ok(DocumentKind::Cnpj));
        assert_eq!(route("11222333000181"), Ok(DocumentKind::Cnpj));
        assert_eq!(route("123456789012345"), Err(UnroutableLength { digits: 15 }));
    }

    #[test]
    fn either_dispatch() {
        assert!(is_valid_document("11144477735"));
        assert!(is_valid_document("11222333000181"));
        assert!(!is_valid_document("123456789012345"));
        assert!(!is_valid_document("not a document"));
    }

    // -- fix transform --

    #[test]
    fn strip_digits_keeps_only_digits() {
        assert_eq!(strip_digits("111.444.777-35"), "11144477735");
        assert_eq!(strip_digits("abc"), "");
    }

    proptest! {
        #[test]
        fn strip_digits_is_idempotent(s in ".*") {
            let once = strip_digits(&s);
            prop_assert_eq!(strip_digits(&once), once);
        }

        #[test]
        fn validators_never_panic(s in ".*") {
            let _ = is_valid_cpf(&s);
            let _ = is_valid_cnpj(&s);
            let _ = is_valid_document(&s);
        }

        #[test]
        fn valid_cpf_is_checksum_stable_under_formatting(
            prefix in "[0-9]{9}",
        ) {
            // Compute the two check digits and confirm the validator
            // accepts exactly the constructed number (unless repdigit).
            let digits: Vec<u32> = prefix.chars().map(|c| c.to_digit(10).unwrap()).collect();
            let mut full = digits.clone();
            for t in 9..11u32 {
                let sum: u32 = full[..t as usize]
                    .iter()
                    .enumerate()
                    .map(|(c, &d)| d * (t + 1 - c as u32))
                    .sum();
                full.push(((10 * sum) % 11) % 10);
            }
            let cpf: String = full.iter().map(|d| char::from(b'0' + *d as u8)).collect();
            let repdigit = full.windows(2).all(|w| w[0] == w[1]);
            prop_assert_eq!(is_valid_cpf(&cpf), !repdigit);
        }
    }
}
