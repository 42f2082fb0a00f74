//! # Email shape check
//!
//! A structural check, not an RFC 5322 parse: one `@`, a non-empty local
//! part, and a domain with at least one interior dot. The upstream API
//! does its own deliverability checks; this layer only rejects values
//! that cannot possibly be addresses.

/// Check whether a value has the structural shape of an email address.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = value.splitn(2, '@');
    let local = match parts.next() {
        Some(l) if !l.is_empty() => l,
        _ => return false,
    };
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };

    // A second '@' would end up inside the domain.
    if local.contains('@') || domain.contains('@') {
        return false;
    }

    // Domain needs at least one dot with labels on both sides.
    let mut labels = domain.split('.');
    let has_dot = domain.contains('.');
    has_dot && labels.all(|label| !label.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("financeiro@exemplo.com.br"));
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@example.com"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@nodot"));
    }

    #[test]
    fn rejects_malformed_domains() {
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@example."));
        assert!(!is_valid_email("user@exa mple.com"));
        assert!(!is_valid_email("user@@example.com"));
    }
}
