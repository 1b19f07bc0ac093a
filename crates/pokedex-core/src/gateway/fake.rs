//! In-memory gateway for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::oneshot;

use super::{Gateway, LookupOutcome, Resource};
use crate::error::{GatewayError, Result};
use crate::models::{ItemDetail, ListItem, ResourcePage};

pub(crate) const BASE: &str = "https://pokeapi.test/api/v2";

#[derive(Default)]
pub(crate) struct FakeGateway {
    lookups: HashMap<String, LookupOutcome<ItemDetail>>,
    deferred_lookups: RefCell<HashMap<String, oneshot::Receiver<LookupOutcome<ItemDetail>>>>,
    pages: HashMap<(Resource, u32), Result<ResourcePage>>,
    deferred_pages: RefCell<HashMap<(Resource, u32), oneshot::Receiver<Result<ResourcePage>>>>,
    calls: RefCell<Vec<String>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pokemon(mut self, detail: ItemDetail) -> Self {
        self.lookups
            .insert(detail.name.clone(), LookupOutcome::Found(detail));
        self
    }

    pub fn with_lookup_failure(mut self, name: &str) -> Self {
        self.lookups.insert(
            name.to_string(),
            LookupOutcome::Failed(GatewayError::Network("connection reset".to_string())),
        );
        self
    }

    pub fn with_page(mut self, resource: Resource, offset: u32, page: ResourcePage) -> Self {
        self.pages.insert((resource, offset), Ok(page));
        self
    }

    pub fn with_page_failure(mut self, resource: Resource, offset: u32) -> Self {
        self.pages.insert(
            (resource, offset),
            Err(GatewayError::Decode("expected value".to_string())),
        );
        self
    }

    /// The lookup for `name` stays pending until the returned sender fires.
    pub fn defer_lookup(&self, name: &str) -> oneshot::Sender<LookupOutcome<ItemDetail>> {
        let (tx, rx) = oneshot::channel();
        self.deferred_lookups.borrow_mut().insert(name.to_string(), rx);
        tx
    }

    pub fn defer_page(&self, resource: Resource, offset: u32) -> oneshot::Sender<Result<ResourcePage>> {
        let (tx, rx) = oneshot::channel();
        self.deferred_pages.borrow_mut().insert((resource, offset), rx);
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Gateway for FakeGateway {
    async fn list(&self, resource: Resource, limit: u32, offset: u32) -> Result<ResourcePage> {
        self.calls
            .borrow_mut()
            .push(format!("list {} {} {}", resource.path(), limit, offset));

        let deferred = self.deferred_pages.borrow_mut().remove(&(resource, offset));
        if let Some(rx) = deferred {
            return rx
                .await
                .unwrap_or_else(|_| Err(GatewayError::Network("dropped".to_string())));
        }

        self.pages
            .get(&(resource, offset))
            .cloned()
            .unwrap_or_else(|| {
                Err(GatewayError::Status {
                    status: 404,
                    url: format!("{}/{}", BASE, resource.path()),
                })
            })
    }

    async fn pokemon(&self, name: &str) -> LookupOutcome<ItemDetail> {
        self.calls.borrow_mut().push(format!("pokemon {}", name));

        let deferred = self.deferred_lookups.borrow_mut().remove(name);
        if let Some(rx) = deferred {
            return rx.await.unwrap_or_else(|_| {
                LookupOutcome::Failed(GatewayError::Network("dropped".to_string()))
            });
        }

        self.lookups
            .get(name)
            .cloned()
            .unwrap_or(LookupOutcome::NotFound)
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", BASE, name)
    }
}

pub(crate) fn detail(id: u32, name: &str, base_experience: u32) -> ItemDetail {
    ItemDetail {
        id,
        name: name.to_string(),
        height: 4,
        weight: 60,
        base_experience,
        sprite_url: Some(format!("https://img.test/{}.png", id)),
        types: vec!["electric".to_string()],
        abilities: vec!["static".to_string()],
    }
}

pub(crate) fn list_items(names: &[&str]) -> Vec<ListItem> {
    names
        .iter()
        .map(|name| ListItem::new(*name, format!("{}/pokemon/{}/", BASE, name)))
        .collect()
}
