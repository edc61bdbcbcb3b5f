//! Stateless format rules

use once_cell::sync::Lazy;
use regex::Regex;

/// Practical email grammar: local part, `@`, dotted domain with a TLD
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*\.[A-Za-z]{2,63}$",
    )
    .expect("email pattern is valid")
});

/// Indonesian mobile numbers: `+62`, `62` or `0`, then `8`, an operator
/// code, then 5 to 11 digits (spaces allowed)
static MOBILE_ID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\+?62|0)8(1[1-9]|2[1238]|3[1238]|5[1235-9]|7[78]|9[5-9]|8[1-9])[\s0-9]{5,11}$")
        .expect("mobile pattern is valid")
});

/// Maximum email length (RFC 5321 path limit)
const EMAIL_MAX_LEN: usize = 254;

/// Format rule over a single field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Not empty after trimming
    Required,
    Email,
    /// Indonesian (id-ID) mobile phone number
    MobilePhoneId,
    /// At least this many characters
    MinLength(usize),
}

impl FormatRule {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FormatRule::Required => !value.trim().is_empty(),
            FormatRule::Email => value.len() <= EMAIL_MAX_LEN && EMAIL_RE.is_match(value),
            FormatRule::MobilePhoneId => MOBILE_ID_RE.is_match(value),
            FormatRule::MinLength(min) => value.chars().count() >= *min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        assert!(FormatRule::Required.accepts("Alice"));
        assert!(!FormatRule::Required.accepts(""));
        assert!(!FormatRule::Required.accepts("   "));
    }

    #[test]
    fn test_email_accepts() {
        for email in [
            "ruben@untar.ac.id",
            "first.last+tag@example.com",
            "a@b.co",
            "user_name@sub.domain-name.org",
        ] {
            assert!(FormatRule::Email.accepts(email), "should accept {}", email);
        }
    }

    #[test]
    fn test_email_rejects() {
        for email in [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@localhost",
            "user@exa mple.com",
            "user@-example.com",
            "user@example.c",
        ] {
            assert!(!FormatRule::Email.accepts(email), "should reject {}", email);
        }
    }

    #[test]
    fn test_email_length_limit() {
        let long = format!("{}@example.com", "a".repeat(250));
        assert!(!FormatRule::Email.accepts(&long));
    }

    #[test]
    fn test_mobile_accepts() {
        for phone in [
            "081234567890",
            "+6281234567890",
            "6281234567890",
            "0857 1234 5678",
            "08991234567",
            "0877123456",
        ] {
            assert!(FormatRule::MobilePhoneId.accepts(phone), "should accept {}", phone);
        }
    }

    #[test]
    fn test_mobile_rejects() {
        for phone in [
            "",
            "12345",
            "0211234567",     // landline
            "0810123456789",  // no such operator code
            "08123",          // too short
            "0812345678901234", // too long
            "+1 555 123 4567",
            "0812-3456-7890",
            "0812\u{663}\u{664}\u{665}\u{666}\u{667}\u{668}", // Arabic-Indic digits
            "0812345\u{ff16}\u{ff17}\u{ff18}",                 // fullwidth digits
        ] {
            assert!(!FormatRule::MobilePhoneId.accepts(phone), "should reject {}", phone);
        }
    }

    #[test]
    fn test_min_length_counts_characters() {
        assert!(FormatRule::MinLength(5).accepts("40115"));
        assert!(!FormatRule::MinLength(5).accepts("123"));
        // Multi-byte characters count once each
        assert!(!FormatRule::MinLength(5).accepts("éééé"));
        assert!(FormatRule::MinLength(0).accepts(""));
    }
}
