use super::NewRegistration;

const MAX_NAME_CHARS: usize = 100;
const PHONE_DIGITS: usize = 10;
const AADHAAR_DIGITS: usize = 12;
/// Upper bound for a typed age. The registration form itself only requires an
/// integer.
const MAX_AGE: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be exactly {digits} digits")]
    Digits { field: &'static str, digits: usize },
    #[error("age must be between 1 and 150, got {0}")]
    Age(u32),
}

fn check_name(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(ValidationError::Required { field });
    }
    if value.chars().count() > MAX_NAME_CHARS {
        return Err(ValidationError::TooLong {
            field,
            max: MAX_NAME_CHARS,
        });
    }
    Ok(())
}

fn check_digits(field: &'static str, value: &str, digits: usize) -> Result<(), ValidationError> {
    if value.len() != digits || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::Digits { field, digits });
    }
    Ok(())
}

impl NewRegistration {
    /// Check the registration form rules. Reports the first failing field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_name("name", &self.name)?;
        check_name("surname", &self.surname)?;
        check_digits("mobile_number", self.mobile_number.trim(), PHONE_DIGITS)?;
        if let Some(alt) = self
            .alternate_mobile_number
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            check_digits("alternate_mobile_number", alt, PHONE_DIGITS)?;
        }
        check_digits(
            "emergency_contact_number",
            self.emergency_contact_number.trim(),
            PHONE_DIGITS,
        )?;
        check_digits("aadhaar_number", self.aadhaar_number.trim(), AADHAAR_DIGITS)?;
        if let Some(age) = self.age {
            if !(1..=MAX_AGE).contains(&age) {
                return Err(ValidationError::Age(age));
            }
        }
        Ok(())
    }
}
