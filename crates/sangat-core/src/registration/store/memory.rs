use time::OffsetDateTime;
use tracing::info;
use uuid::Uuid;

use super::{prepare, RegistrationStore, StoreError};
use crate::registration::{NewRegistration, Registration};

/// In-process store. Records are kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<Registration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<Registration>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Registration] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Store a record with a caller-chosen creation time.
    pub fn create_at(
        &mut self,
        new: NewRegistration,
        created_at: OffsetDateTime,
    ) -> Result<Registration, StoreError> {
        let new = prepare(new)?;
        let reg = Registration::from_new(Uuid::new_v4().to_string(), new, created_at);
        self.records.push(reg.clone());
        info!(id = %reg.id, "registration created");
        Ok(reg)
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }
}

impl RegistrationStore for MemoryStore {
    fn create(&mut self, new: NewRegistration) -> Result<Registration, StoreError> {
        self.create_at(new, OffsetDateTime::now_utc())
    }

    fn get(&self, id: &str) -> Result<Registration, StoreError> {
        let idx = self.position(id)?;
        Ok(self.records[idx].clone())
    }

    fn update(&mut self, id: &str, changes: NewRegistration) -> Result<Registration, StoreError> {
        let idx = self.position(id)?;
        let changes = prepare(changes)?;
        let reg = &mut self.records[idx];
        reg.apply(changes);
        info!(id, "registration updated");
        Ok(reg.clone())
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let idx = self.position(id)?;
        self.records.remove(idx);
        info!(id, "registration deleted");
        Ok(())
    }

    fn list(&self) -> Result<Vec<Registration>, StoreError> {
        // Reverse first so equal timestamps list the later insert first.
        let mut out: Vec<Registration> = self.records.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    fn form(name: &str) -> NewRegistration {
        NewRegistration {
            name: name.into(),
            surname: "Singh".into(),
            mobile_number: "9876543210".into(),
            emergency_contact_number: "9123456780".into(),
            aadhaar_number: "123456789012".into(),
            ..Default::default()
        }
    }

    #[test]
    fn create_assigns_id_and_normalizes() {
        let mut store = MemoryStore::new();
        let mut new = form("  Ram ");
        new.address = Some("  ".into());
        let reg = store.create(new).unwrap();
        assert!(!reg.id.is_empty());
        assert_eq!(reg.name, "Ram");
        assert_eq!(reg.address, None);
        assert_eq!(store.get(&reg.id).unwrap(), reg);
    }

    #[test]
    fn create_rejects_invalid() {
        let mut store = MemoryStore::new();
        let mut new = form("Ram");
        new.aadhaar_number = "12".into();
        let err = store.create(new).unwrap_err();
        assert!(matches!(err, StoreError::Invalid(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn list_is_newest_first() {
        let mut store = MemoryStore::new();
        let t0 = OffsetDateTime::UNIX_EPOCH;
        store.create_at(form("Old"), t0).unwrap();
        store.create_at(form("New"), t0 + Duration::days(2)).unwrap();
        store.create_at(form("Mid"), t0 + Duration::days(1)).unwrap();
        let names: Vec<String> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["New", "Mid", "Old"]);
    }

    #[test]
    fn equal_timestamps_list_later_insert_first() {
        let mut store = MemoryStore::new();
        let t0 = OffsetDateTime::UNIX_EPOCH;
        store.create_at(form("First"), t0).unwrap();
        store.create_at(form("Second"), t0).unwrap();
        let names: Vec<String> = store.list().unwrap().into_iter().map(|r| r.name).collect();
        assert_eq!(names, ["Second", "First"]);
    }

    #[test]
    fn update_and_delete() {
        let mut store = MemoryStore::new();
        let reg = store.create(form("Ram")).unwrap();

        let mut changes = NewRegistration::from(&reg);
        changes.age = Some(70);
        let updated = store.update(&reg.id, changes).unwrap();
        assert_eq!(updated.age, Some(70));
        assert_eq!(updated.created_at, reg.created_at);

        store.delete(&reg.id).unwrap();
        assert!(matches!(store.get(&reg.id), Err(StoreError::NotFound(_))));
        assert!(matches!(store.delete(&reg.id), Err(StoreError::NotFound(_))));
    }

    #[test]
    fn update_without_photo_keeps_stored_photo() {
        let mut store = MemoryStore::new();
        let mut new = form("Ram");
        new.image_url = Some("https://img.example.test/ram.jpg".into());
        let reg = store.create(new).unwrap();

        let mut changes = form("Ram");
        changes.address = Some("Ward 3".into());
        let updated = store.update(&reg.id, changes).unwrap();
        assert_eq!(updated.address.as_deref(), Some("Ward 3"));
        assert_eq!(updated.image_url.as_deref(), Some("https://img.example.test/ram.jpg"));
    }

    #[test]
    fn update_missing_is_not_found() {
        let mut store = MemoryStore::new();
        let err = store.update("nope", form("Ram")).unwrap_err();
        assert!(matches!(err, StoreError::NotFound(id) if id == "nope"));
    }
}
