use serde::Serialize;

use super::formatter::{to_hindi_number, to_hindi_text};
use crate::registration::{Answer, Registration};
use crate::settings::BadgeSettings;

/// Everything printed on one badge, already in display form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeCard {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Emergency and alternate numbers joined with `/`, ASCII digits.
    pub mobile: String,
    pub age: String,
    /// Footer copy of `mobile` in Devanagari digits.
    pub emergency: String,
    pub flags: Vec<String>,
    pub photo_url: Option<String>,
    pub photo_alt: String,
}

impl BadgeCard {
    pub fn from_registration(reg: &Registration, labels: &BadgeSettings) -> Self {
        let full_name = reg.full_name();
        let placeholder = labels.placeholder.as_str();

        let mobile = [
            Some(reg.emergency_contact_number.as_str()),
            reg.alternate_mobile_number.as_deref(),
        ]
        .into_iter()
        .flatten()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

        let age = match reg.age {
            Some(age) => to_hindi_number(&age.to_string()),
            None => placeholder.to_string(),
        };

        let emergency = if mobile.is_empty() {
            to_hindi_number(placeholder)
        } else {
            to_hindi_number(&mobile)
        };

        let mut flags = Vec::new();
        if reg.hypertension == Some(Answer::Yes) {
            flags.push(labels.hypertension_flag.clone());
        }
        if reg.sugar == Some(Answer::Yes) {
            flags.push(labels.diabetes_flag.clone());
        }

        Self {
            id: reg.id.clone(),
            name: to_hindi_text(&full_name),
            address: to_hindi_text(
                reg.address
                    .as_deref()
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .unwrap_or(placeholder),
            ),
            mobile,
            age,
            emergency,
            flags,
            photo_url: reg.image_url.clone(),
            photo_alt: full_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::NewRegistration;
    use crate::settings::parse_settings_toml;
    use time::OffsetDateTime;

    fn labels() -> BadgeSettings {
        parse_settings_toml(crate::settings::DEFAULT_SETTINGS_TOML)
            .unwrap()
            .badge
    }

    fn reg(new: NewRegistration) -> Registration {
        Registration::from_new("r1".into(), new, OffsetDateTime::UNIX_EPOCH)
    }

    fn base() -> NewRegistration {
        NewRegistration {
            name: "Ram".into(),
            surname: "Singh".into(),
            mobile_number: "9876543210".into(),
            emergency_contact_number: "9123456780".into(),
            aadhaar_number: "123456789012".into(),
            ..Default::default()
        }
    }

    #[test]
    fn full_card() {
        let mut new = base();
        new.address = Some("Ward 12".into());
        new.age = Some(65);
        new.alternate_mobile_number = Some(" 9988776655 ".into());
        new.hypertension = Some(Answer::Yes);
        new.sugar = Some(Answer::Yes);
        new.image_url = Some("https://img.example.test/r1.jpg".into());

        let card = BadgeCard::from_registration(&reg(new), &labels());
        assert_eq!(card.name, "रम सिनघ");
        assert_eq!(card.address, "वरद १२");
        assert_eq!(card.mobile, "9123456780/9988776655");
        assert_eq!(card.emergency, "९१२३४५६७८०/९९८८७७६६५५");
        assert_eq!(card.age, "६५");
        assert_eq!(card.flags, ["हाइपर", "डायब"]);
        assert_eq!(card.photo_alt, "Ram Singh");
        assert_eq!(card.photo_url.as_deref(), Some("https://img.example.test/r1.jpg"));
    }

    #[test]
    fn missing_optionals_use_placeholder() {
        let card = BadgeCard::from_registration(&reg(base()), &labels());
        assert_eq!(card.address, "-");
        assert_eq!(card.age, "-");
        assert_eq!(card.mobile, "9123456780");
        assert!(card.flags.is_empty());
        assert_eq!(card.photo_url, None);
    }

    #[test]
    fn blank_address_uses_placeholder() {
        for address in ["", "   "] {
            let mut r = reg(base());
            r.address = Some(address.into());
            let card = BadgeCard::from_registration(&r, &labels());
            assert_eq!(card.address, "-", "address {address:?}");
        }
    }

    #[test]
    fn blank_numbers_fall_back_to_placeholder_in_footer() {
        let mut r = reg(base());
        r.emergency_contact_number = "  ".into();
        let card = BadgeCard::from_registration(&r, &labels());
        assert_eq!(card.mobile, "");
        assert_eq!(card.emergency, "-");
    }

    #[test]
    fn devanagari_name_kept() {
        let mut new = base();
        new.name = "राम".into();
        new.surname = "सिंह".into();
        let card = BadgeCard::from_registration(&reg(new), &labels());
        assert_eq!(card.name, "राम सिंह");
    }

    #[test]
    fn only_yes_raises_flags() {
        let mut new = base();
        new.hypertension = Some(Answer::No);
        new.sugar = Some(Answer::Yes);
        let card = BadgeCard::from_registration(&reg(new), &labels());
        assert_eq!(card.flags, ["डायब"]);
    }
}
