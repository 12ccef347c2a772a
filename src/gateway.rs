use std::fmt::Debug;
use std::marker::PhantomData;

use log::{debug, info};
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use reqwest::{Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::client::ApiClient;
use crate::error::{GatewayError, Result};
use crate::model::Identified;
use crate::query::QueryOptions;

pub const MERGE_PATCH_JSON: &str = "application/merge-patch+json";
pub const ALERT_HEADER: &str = "x-gatewaybos-alert";
pub const ERROR_HEADER: &str = "x-gatewaybos-error";

/// A record type exposed by the back-office API.
///
/// `Wire` is what actually crosses the network. Records without temporal
/// fields use themselves as their wire form.
pub trait Resource: Identified + Clone + Debug + Send + Sync + Sized + 'static {
    const ENTITY_NAME: &'static str;
    const RESOURCE_PATH: &'static str;

    type Wire: Serialize + DeserializeOwned + Send;

    fn with_id(self, id: Option<String>) -> Self;
    fn to_wire(&self) -> Self::Wire;
    fn from_wire(wire: Self::Wire) -> Result<Self>;
}

/// Remote CRUD for one record type.
///
/// Every call sends exactly one request and never retries.
#[derive(Debug, Clone)]
pub struct Gateway<T> {
    client: ApiClient,
    resource_url: Url,
    _record: PhantomData<fn() -> T>,
}

impl<T: Resource> Gateway<T> {
    pub fn new(client: ApiClient) -> Result<Self> {
        let resource_url = client.config().endpoint_for(T::RESOURCE_PATH)?;
        Ok(Self {
            client,
            resource_url,
            _record: PhantomData,
        })
    }

    pub fn resource_url(&self) -> &Url {
        &self.resource_url
    }

    /// Stores a new record. Any identifier on `record` is not sent.
    pub async fn create(&self, record: &T) -> Result<T> {
        debug!("Request to save {} : {:?}", T::ENTITY_NAME, record);

        let body = record.clone().with_id(None).to_wire();
        let response = self
            .client
            .http()
            .post(self.resource_url.clone())
            .json(&body)
            .send()
            .await?;

        read_record(response).await
    }

    /// Replaces the stored record with `record`.
    pub async fn update(&self, record: &T) -> Result<T> {
        let id = required_id(record)?;
        debug!("Request to update {} {} : {:?}", T::ENTITY_NAME, id, record);

        let response = self
            .client
            .http()
            .put(self.item_url(id)?)
            .json(&record.to_wire())
            .send()
            .await?;

        read_record(response).await
    }

    /// Changes only the fields present on `record`.
    pub async fn partial_update(&self, record: &T) -> Result<T> {
        let id = required_id(record)?;
        debug!("Request to partially update {} {} : {:?}", T::ENTITY_NAME, id, record);

        let body = serde_json::to_vec(&record.to_wire())?;
        let response = self
            .client
            .http()
            .patch(self.item_url(id)?)
            .header(CONTENT_TYPE, MERGE_PATCH_JSON)
            .body(body)
            .send()
            .await?;

        read_record(response).await
    }

    /// Fetches one record, `None` when the server doesn't know `id`.
    /// An empty `id` is rejected without contacting the server.
    pub async fn find(&self, id: &str) -> Result<Option<T>> {
        debug!("Request to get {} : {}", T::ENTITY_NAME, id);

        let response = self.client.http().get(self.item_url(id)?).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        read_record(response).await.map(Some)
    }

    pub async fn query(&self, options: &QueryOptions) -> Result<Vec<T>> {
        debug!("Request to get all {} with {:?}", T::ENTITY_NAME, options);

        let mut request = self.client.http().get(self.resource_url.clone());
        if !options.is_empty() {
            request = request.query(&options.to_pairs());
        }

        let response = ensure_success(request.send().await?).await?;
        let records: Vec<T::Wire> = response.json().await?;

        records.into_iter().map(T::from_wire).collect()
    }

    /// Returns `false` when there was nothing to delete.
    pub async fn delete(&self, id: &str) -> Result<bool> {
        debug!("Request to delete {} : {}", T::ENTITY_NAME, id);

        let response = self.client.http().delete(self.item_url(id)?).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }

        ensure_success(response).await?;
        Ok(true)
    }

    fn item_url(&self, id: &str) -> Result<Url> {
        if id.is_empty() {
            return Err(missing_identifier::<T>());
        }

        let mut url = self.resource_url.clone();
        url.path_segments_mut()
            .map_err(|_| GatewayError::Config(format!("{} can't take path segments", self.resource_url)))?
            .push(id);
        Ok(url)
    }
}

fn required_id<T: Resource>(record: &T) -> Result<&str> {
    record
        .id()
        .filter(|id| !id.is_empty())
        .ok_or_else(missing_identifier::<T>)
}

fn missing_identifier<T: Resource>() -> GatewayError {
    GatewayError::MissingIdentifier {
        entity: T::ENTITY_NAME,
    }
}

async fn read_record<T: Resource>(response: Response) -> Result<T> {
    let response = ensure_success(response).await?;
    let wire: T::Wire = response.json().await?;
    T::from_wire(wire)
}

async fn ensure_success(response: Response) -> Result<Response> {
    let status = response.status();
    if let Some(alert) = header_text(response.headers(), ALERT_HEADER) {
        info!("{alert}");
    }
    if status.is_success() {
        return Ok(response);
    }

    let message = match header_text(response.headers(), ERROR_HEADER) {
        Some(error) => error,
        None => match response.text().await {
            Ok(body) if !body.trim().is_empty() => body,
            _ => status.canonical_reason().unwrap_or("no reason given").to_string(),
        },
    };
    Err(GatewayError::Status { status, message })
}

fn header_text(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
