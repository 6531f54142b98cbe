mod proptest_translit;

use time::OffsetDateTime;

use crate::registration::{Answer, NewRegistration};

/// A form that passes validation, with the given name and age.
pub(super) fn sample_form(name: &str, surname: &str, age: Option<u32>) -> NewRegistration {
    NewRegistration {
        name: name.to_string(),
        surname: surname.to_string(),
        mobile_number: "9876543210".to_string(),
        alternate_mobile_number: None,
        emergency_contact_number: "9123456780".to_string(),
        aadhaar_number: "123456789012".to_string(),
        address: Some("Pithampur".to_string()),
        age,
        bp: None,
        hypertension: Some(Answer::No),
        sugar: Some(Answer::No),
        image_url: None,
    }
}

pub(super) fn epoch_plus(days: i64) -> OffsetDateTime {
    OffsetDateTime::UNIX_EPOCH + time::Duration::days(days)
}
