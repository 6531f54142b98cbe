use std::time::Duration;

use tracing::{debug_span, info};

use super::{prepare, RegistrationStore, StoreError};
use crate::registration::{NewRegistration, Registration};

const TIMEOUT: Duration = Duration::from_secs(30);

/// Hosted PostgREST-style table. Rows are JSON objects keyed by field name;
/// the server assigns `id` and `created_at`.
pub struct RestStore {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl RestStore {
    pub fn new(base_url: &str, table: &str, api_key: String) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .build();
        Self {
            agent: ureq::Agent::new_with_config(config),
            endpoint: endpoint(base_url, table),
            api_key,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn authed<B>(&self, req: ureq::RequestBuilder<B>) -> ureq::RequestBuilder<B> {
        req.header("apikey", self.api_key.as_str())
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    fn fetch(&self, id: Option<&str>) -> Result<Vec<Registration>, StoreError> {
        let mut req = self
            .authed(self.agent.get(self.endpoint.as_str()))
            .query("select", "*");
        req = match id {
            Some(id) => req.query("id", format!("eq.{id}")),
            None => req.query("order", "created_at.desc"),
        };
        let body = req
            .call()
            .map_err(|e| http_err(&self.endpoint, e))?
            .into_body()
            .read_to_string()
            .map_err(|e| http_err(&self.endpoint, e))?;
        parse_rows(&body)
    }

    fn write(
        &self,
        req: ureq::RequestBuilder<ureq::typestate::WithBody>,
        new: &NewRegistration,
    ) -> Result<Vec<Registration>, StoreError> {
        let payload = serde_json::to_string(new).map_err(|e| StoreError::Decode(e.to_string()))?;
        let body = self
            .authed(req)
            .header("Content-Type", "application/json")
            .header("Prefer", "return=representation")
            .send(payload)
            .map_err(|e| http_err(&self.endpoint, e))?
            .into_body()
            .read_to_string()
            .map_err(|e| http_err(&self.endpoint, e))?;
        parse_rows(&body)
    }
}

impl RegistrationStore for RestStore {
    fn create(&mut self, new: NewRegistration) -> Result<Registration, StoreError> {
        let _span = debug_span!("RestStore::create").entered();
        let new = prepare(new)?;
        let rows = self.write(self.agent.post(self.endpoint.as_str()), &new)?;
        let reg = first_row(rows, "insert")?;
        info!(id = %reg.id, "registration created");
        Ok(reg)
    }

    fn get(&self, id: &str) -> Result<Registration, StoreError> {
        let _span = debug_span!("RestStore::get", id).entered();
        self.fetch(Some(id))?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn update(&mut self, id: &str, changes: NewRegistration) -> Result<Registration, StoreError> {
        let _span = debug_span!("RestStore::update", id).entered();
        let changes = prepare(changes)?;
        let req = self
            .agent
            .patch(self.endpoint.as_str())
            .query("id", format!("eq.{id}"));
        let reg = self
            .write(req, &changes)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;
        info!(id, "registration updated");
        Ok(reg)
    }

    fn delete(&mut self, id: &str) -> Result<(), StoreError> {
        let _span = debug_span!("RestStore::delete", id).entered();
        let body = self
            .authed(self.agent.delete(self.endpoint.as_str()))
            .query("id", format!("eq.{id}"))
            .header("Prefer", "return=representation")
            .call()
            .map_err(|e| http_err(&self.endpoint, e))?
            .into_body()
            .read_to_string()
            .map_err(|e| http_err(&self.endpoint, e))?;
        if parse_rows(&body)?.is_empty() {
            return Err(StoreError::NotFound(id.to_string()));
        }
        info!(id, "registration deleted");
        Ok(())
    }

    fn list(&self) -> Result<Vec<Registration>, StoreError> {
        let _span = debug_span!("RestStore::list").entered();
        let mut rows = self.fetch(None)?;
        // The server already orders; keep the guarantee when it doesn't.
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }
}

fn endpoint(base_url: &str, table: &str) -> String {
    format!("{}/rest/v1/{table}", base_url.trim_end_matches('/'))
}

fn http_err(endpoint: &str, e: ureq::Error) -> StoreError {
    StoreError::Http(format!("{endpoint}: {e}"))
}

fn first_row(rows: Vec<Registration>, what: &str) -> Result<Registration, StoreError> {
    rows.into_iter()
        .next()
        .ok_or_else(|| StoreError::Decode(format!("{what} returned no rows")))
}

/// Decode a JSON array of registration rows.
pub fn parse_rows(body: &str) -> Result<Vec<Registration>, StoreError> {
    serde_json::from_str::<Vec<Registration>>(body).map_err(|e| StoreError::Decode(e.to_string()))
}
