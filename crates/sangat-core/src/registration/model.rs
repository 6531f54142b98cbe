use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Yes/No answer to a health question, stored as `"Yes"` / `"No"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn as_str(self) -> &'static str {
        match self {
            Answer::Yes => "Yes",
            Answer::No => "No",
        }
    }
}

/// A stored registration. Field names match the `sangat_registrations`
/// collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub mobile_number: String,
    #[serde(default)]
    pub alternate_mobile_number: Option<String>,
    pub emergency_contact_number: String,
    pub aadhaar_number: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub bp: Option<String>,
    #[serde(default)]
    pub hypertension: Option<Answer>,
    #[serde(default)]
    pub sugar: Option<Answer>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl Registration {
    /// Assemble a stored record from validated form input.
    pub fn from_new(id: String, new: NewRegistration, created_at: OffsetDateTime) -> Self {
        Self {
            id,
            name: new.name,
            surname: new.surname,
            mobile_number: new.mobile_number,
            alternate_mobile_number: new.alternate_mobile_number,
            emergency_contact_number: new.emergency_contact_number,
            aadhaar_number: new.aadhaar_number,
            address: new.address,
            age: new.age,
            bp: new.bp,
            hypertension: new.hypertension,
            sugar: new.sugar,
            image_url: new.image_url,
            created_at,
        }
    }

    /// Overwrite the editable fields, keeping id and creation time. A form
    /// without a photo keeps the current one.
    pub fn apply(&mut self, mut changes: NewRegistration) {
        if changes.image_url.is_none() {
            changes.image_url = self.image_url.take();
        }
        *self = Self::from_new(std::mem::take(&mut self.id), changes, self.created_at);
    }

    /// "name surname", trimmed.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname).trim().to_string()
    }
}

/// Form input for creating or editing a registration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewRegistration {
    pub name: String,
    pub surname: String,
    pub mobile_number: String,
    #[serde(default)]
    pub alternate_mobile_number: Option<String>,
    pub emergency_contact_number: String,
    pub aadhaar_number: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub bp: Option<String>,
    #[serde(default)]
    pub hypertension: Option<Answer>,
    #[serde(default)]
    pub sugar: Option<Answer>,
    /// Left out of the body when absent, so a partial update keeps the
    /// stored photo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl NewRegistration {
    /// Trim text fields and turn blank optional fields into `None`.
    pub fn normalized(mut self) -> Self {
        fn opt(v: Option<String>) -> Option<String> {
            v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
        }
        self.name = self.name.trim().to_string();
        self.surname = self.surname.trim().to_string();
        self.mobile_number = self.mobile_number.trim().to_string();
        self.emergency_contact_number = self.emergency_contact_number.trim().to_string();
        self.aadhaar_number = self.aadhaar_number.trim().to_string();
        self.alternate_mobile_number = opt(self.alternate_mobile_number);
        self.address = opt(self.address);
        self.bp = opt(self.bp);
        self.image_url = opt(self.image_url);
        self
    }
}

impl From<&Registration> for NewRegistration {
    fn from(r: &Registration) -> Self {
        Self {
            name: r.name.clone(),
            surname: r.surname.clone(),
            mobile_number: r.mobile_number.clone(),
            alternate_mobile_number: r.alternate_mobile_number.clone(),
            emergency_contact_number: r.emergency_contact_number.clone(),
            aadhaar_number: r.aadhaar_number.clone(),
            address: r.address.clone(),
            age: r.age,
            bp: r.bp.clone(),
            hypertension: r.hypertension,
            sugar: r.sugar,
            image_url: r.image_url.clone(),
        }
    }
}
