//! Record and form types for the three collections
//!
//! Each collection has a stored record type (with surrogate id and
//! timestamps) and a form type holding exactly what the user submitted.

pub mod address;
pub mod contact;
pub mod program_study;

pub use address::{Address, AddressForm};
pub use contact::{Contact, ContactForm};
pub use program_study::{ProgramStudy, ProgramStudyForm};

use uuid::Uuid;

/// Parse a surrogate id from a path segment or hidden form field
///
/// Anything that is not a UUID cannot match a record, so callers treat
/// `None` as not found.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()), Some(id));
        assert_eq!(parse_id(&format!(" {} ", id)), Some(id));
        assert_eq!(parse_id("not-an-id"), None);
        assert_eq!(parse_id(""), None);
    }
}
