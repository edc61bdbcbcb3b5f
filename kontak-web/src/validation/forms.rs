//! Rule sets for the three submission forms

use std::sync::Arc;
use uuid::Uuid;

use super::{FormatRule, NameLookup, Validator};
use crate::models::{AddressForm, ContactForm, ProgramStudyForm};

pub const MSG_NAME_REQUIRED: &str = "Name is required!";
pub const MSG_CONTACT_NAME_TAKEN: &str = "Contact name is already taken!";
pub const MSG_INVALID_EMAIL: &str = "Invalid email address!";
pub const MSG_INVALID_PHONE: &str = "Invalid mobile number!";
pub const MSG_PROGRAM_NAME_TAKEN: &str = "Study program name is already taken!";
pub const MSG_POSTAL_CODE_TOO_SHORT: &str = "Postal code must be at least 5 characters";

/// Minimum postal code length
pub const POSTAL_CODE_MIN_LEN: usize = 5;

fn contact_name(f: &ContactForm) -> &str {
    &f.name
}

fn contact_email(f: &ContactForm) -> &str {
    &f.email
}

fn contact_phone(f: &ContactForm) -> &str {
    &f.phone
}

fn contact_id(f: &ContactForm) -> Option<Uuid> {
    f.own_id()
}

fn program_name(f: &ProgramStudyForm) -> &str {
    &f.name
}

fn program_id(f: &ProgramStudyForm) -> Option<Uuid> {
    f.own_id()
}

fn address_postal_code(f: &AddressForm) -> &str {
    &f.postal_code
}

fn address_phone(f: &AddressForm) -> &str {
    &f.phone
}

/// Contact: required unique name, email, mobile phone
pub fn contact_validator(names: Arc<dyn NameLookup>) -> Validator<ContactForm> {
    Validator::new()
        .field("name", contact_name, FormatRule::Required, MSG_NAME_REQUIRED)
        .unique("name", contact_name, contact_id, names, MSG_CONTACT_NAME_TAKEN)
        .field("email", contact_email, FormatRule::Email, MSG_INVALID_EMAIL)
        .field("phone", contact_phone, FormatRule::MobilePhoneId, MSG_INVALID_PHONE)
}

/// Study program: required unique name
pub fn program_study_validator(names: Arc<dyn NameLookup>) -> Validator<ProgramStudyForm> {
    Validator::new()
        .field("name", program_name, FormatRule::Required, MSG_NAME_REQUIRED)
        .unique("name", program_name, program_id, names, MSG_PROGRAM_NAME_TAKEN)
}

/// Address: postal code length, mobile phone
pub fn address_validator() -> Validator<AddressForm> {
    Validator::new()
        .field(
            "postal_code",
            address_postal_code,
            FormatRule::MinLength(POSTAL_CODE_MIN_LEN),
            MSG_POSTAL_CODE_TOO_SHORT,
        )
        .field("phone", address_phone, FormatRule::MobilePhoneId, MSG_INVALID_PHONE)
}
