use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::{json, Map, Value};

use crate::models::collection::Collection;
use crate::models::entities::Entity;

use super::record::decode_records;
use super::{ApiError, ApiLocation, RawRecord, Record};

/// HTTP client for the five collections.
#[derive(Debug, Clone)]
pub struct LivingAppsClient {
    http: Client,
    location: ApiLocation,
}

impl LivingAppsClient {
    pub fn new(location: ApiLocation, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("kursverwaltung/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, location })
    }

    pub fn location(&self) -> &ApiLocation {
        &self.location
    }

    /// All records of a collection in backend order, fields untyped.
    pub async fn list_raw(&self, collection: Collection) -> Result<Vec<RawRecord>, ApiError> {
        let body = self.fetch_list(collection).await?;
        Ok(decode_records(body)?)
    }

    /// All records of an entity's collection, fields decoded into `E`.
    pub async fn list<E: Entity>(&self) -> Result<Vec<Record<E>>, ApiError> {
        let body = self.fetch_list(E::COLLECTION).await?;
        Ok(decode_records(body)?)
    }

    pub async fn create(
        &self,
        collection: Collection,
        fields: Map<String, Value>,
    ) -> Result<Value, ApiError> {
        let url = self.location.records_url(collection);
        log::debug!("POST {url}");
        let resp = self.http.post(&url).json(&json!({ "fields": fields })).send().await?;
        let resp = check_status(resp).await?;
        read_json(resp).await
    }

    /// Patch the given fields; fields not present are left alone.
    pub async fn update(
        &self,
        collection: Collection,
        record_id: &str,
        fields: Map<String, Value>,
    ) -> Result<(), ApiError> {
        let url = self.location.record_url(collection, record_id);
        log::debug!("PATCH {url}");
        let resp = self.http.patch(&url).json(&json!({ "fields": fields })).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    pub async fn delete(&self, collection: Collection, record_id: &str) -> Result<(), ApiError> {
        let url = self.location.record_url(collection, record_id);
        log::debug!("DELETE {url}");
        let resp = self.http.delete(&url).send().await?;
        check_status(resp).await?;
        Ok(())
    }

    async fn fetch_list(&self, collection: Collection) -> Result<Value, ApiError> {
        let url = self.location.records_url(collection);
        log::debug!("GET {url}");
        let resp = self.http.get(&url).send().await?;
        let resp = check_status(resp).await?;
        read_json(resp).await
    }
}

async fn check_status(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status { status, body })
}

/// Empty bodies read as `null`.
async fn read_json(resp: Response) -> Result<Value, ApiError> {
    let text = resp.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(&text)?)
}
