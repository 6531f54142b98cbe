//! CSV export of registration listings.

use std::io::Write;

use time::format_description::well_known::Rfc3339;

use super::Registration;

const HEADER: [&str; 14] = [
    "id",
    "name",
    "surname",
    "mobile_number",
    "alternate_mobile_number",
    "emergency_contact_number",
    "aadhaar_number",
    "address",
    "age",
    "bp",
    "hypertension",
    "sugar",
    "image_url",
    "created_at",
];

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("timestamp format error: {0}")]
    Time(#[from] time::error::Format),
}

/// Write a header row and one row per record. Missing values are empty cells.
pub fn write_csv<W: Write>(writer: W, regs: &[Registration]) -> Result<(), ExportError> {
    let mut w = csv::Writer::from_writer(writer);
    w.write_record(HEADER)?;
    for r in regs {
        let age = r.age.map(|a| a.to_string()).unwrap_or_default();
        let created_at = r.created_at.format(&Rfc3339)?;
        w.write_record([
            r.id.as_str(),
            r.name.as_str(),
            r.surname.as_str(),
            r.mobile_number.as_str(),
            r.alternate_mobile_number.as_deref().unwrap_or(""),
            r.emergency_contact_number.as_str(),
            r.aadhaar_number.as_str(),
            r.address.as_deref().unwrap_or(""),
            age.as_str(),
            r.bp.as_deref().unwrap_or(""),
            r.hypertension.map(|a| a.as_str()).unwrap_or(""),
            r.sugar.map(|a| a.as_str()).unwrap_or(""),
            r.image_url.as_deref().unwrap_or(""),
            created_at.as_str(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::{Answer, NewRegistration};
    use time::OffsetDateTime;

    #[test]
    fn writes_header_and_rows() {
        let reg = Registration::from_new(
            "id-1".into(),
            NewRegistration {
                name: "Ram".into(),
                surname: "Singh".into(),
                mobile_number: "9876543210".into(),
                emergency_contact_number: "9123456780".into(),
                aadhaar_number: "123456789012".into(),
                address: Some("Ward 12, Pithampur".into()),
                age: Some(65),
                hypertension: Some(Answer::Yes),
                ..Default::default()
            },
            OffsetDateTime::UNIX_EPOCH,
        );

        let mut buf = Vec::new();
        write_csv(&mut buf, &[reg]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("id,name,surname,mobile_number"));
        assert_eq!(
            lines[1],
            "id-1,Ram,Singh,9876543210,,9123456780,123456789012,\"Ward 12, Pithampur\",65,,Yes,,,1970-01-01T00:00:00Z"
        );
    }

    #[test]
    fn empty_listing_has_only_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, &[]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
