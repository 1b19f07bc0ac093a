//! PokeAPI HTTP client.

use async_trait::async_trait;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::{Gateway, LookupOutcome, Resource};
use crate::error::{GatewayError, Result};
use crate::models::{ItemDetail, PokemonPayload, ResourcePage};

/// Characters escaped inside a single URL path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// reqwest-backed [`Gateway`]; works natively and in the browser (fetch).
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| GatewayError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/{resource}?limit=L&offset=O`
    pub fn collection_url(&self, resource: Resource, limit: u32, offset: u32) -> String {
        format!(
            "{}/{}?limit={}&offset={}",
            self.base_url,
            resource.path(),
            limit,
            offset
        )
    }

    /// GET `url`. A non-success status comes back as `Ok(Err(status))`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>> {
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::debug!("{} answered {}", url, status);
            return Ok(Err(status));
        }

        let body = response.text().await?;
        decode_body(status, &body)
    }
}

/// Decoded body, or the status the API rejected the request with
type Fetched<T> = std::result::Result<T, StatusCode>;

fn decode_body<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Fetched<T>> {
    if !status.is_success() {
        return Ok(Err(status));
    }
    Ok(Ok(serde_json::from_str(body)?))
}

/// Collection responses: any rejection is an error carrying its status.
fn page_from_response(url: &str, fetched: Result<Fetched<ResourcePage>>) -> Result<ResourcePage> {
    match fetched? {
        Ok(page) => Ok(page),
        Err(status) => Err(GatewayError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        }),
    }
}

/// Lookup responses: a rejection means the name does not exist.
fn lookup_from_response(fetched: Result<Fetched<PokemonPayload>>) -> LookupOutcome<ItemDetail> {
    match fetched {
        Ok(Ok(payload)) => LookupOutcome::Found(payload.into()),
        Ok(Err(_)) => LookupOutcome::NotFound,
        Err(err) => LookupOutcome::Failed(err),
    }
}

#[async_trait(?Send)]
impl Gateway for PokeApiClient {
    async fn list(&self, resource: Resource, limit: u32, offset: u32) -> Result<ResourcePage> {
        let url = self.collection_url(resource, limit, offset);
        page_from_response(&url, self.get_json(&url).await)
    }

    async fn pokemon(&self, name: &str) -> LookupOutcome<ItemDetail> {
        let url = self.pokemon_url(name);
        let outcome = lookup_from_response(self.get_json(&url).await);
        if let LookupOutcome::Failed(err) = &outcome {
            tracing::warn!("Lookup of {:?} failed: {}", name, err);
        }
        outcome
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!(
            "{}/{}/{}",
            self.base_url,
            Resource::Pokemon.path(),
            utf8_percent_encode(name, PATH_SEGMENT)
        )
    }
}
