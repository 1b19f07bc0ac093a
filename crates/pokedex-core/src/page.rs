//! Page Bootstrap
//!
//! Turns the page URL (`?page=N&name=x`) into the baseline the search
//! session is seeded with.

use percent_encoding::percent_decode_str;

use crate::gateway::{Gateway, LookupOutcome, Resource};
use crate::models::ListItem;
use crate::pagination::Pager;

/// What the URL asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based; missing, zero or unparsable values become 1
    pub page: u32,
    /// Trimmed, lowercased name filter; empty when absent
    pub name: String,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            name: String::new(),
        }
    }
}

impl PageRequest {
    /// Parse a query string, with or without the leading `?`.
    pub fn from_query(query: &str) -> Self {
        let mut request = Self::default();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, raw) = pair.split_once('=').unwrap_or((pair, ""));
            let value = decode_component(raw);
            match key {
                "page" => {
                    request.page = value.trim().parse::<u32>().ok().filter(|p| *p > 0).unwrap_or(1);
                }
                "name" => request.name = value.trim().to_lowercase(),
                _ => {}
            }
        }
        request
    }

    pub fn is_filtered(&self) -> bool {
        !self.name.is_empty()
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Items a page load starts from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Baseline {
    pub items: Vec<ListItem>,
    /// Collection size reported by the API (1 for a name hit)
    pub count: u32,
    pub page: u32,
    pub page_size: u32,
    /// Non-empty when the page was loaded with `?name=`
    pub filter_name: String,
}

impl Baseline {
    pub fn pager(&self) -> Pager {
        Pager::new(self.page, self.page_size, self.count)
    }
}

/// Fetch the baseline for `request`. Failures yield an empty baseline.
pub async fn load_baseline<G>(gateway: &G, request: &PageRequest, page_size: u32) -> Baseline
where
    G: Gateway + ?Sized,
{
    let mut baseline = Baseline {
        items: Vec::new(),
        count: 0,
        page: request.page,
        page_size,
        filter_name: request.name.clone(),
    };

    if request.is_filtered() {
        match gateway.pokemon(&request.name).await {
            LookupOutcome::Found(detail) => {
                let url = gateway.pokemon_url(&detail.name);
                baseline.items = vec![ListItem::new(detail.name, url)];
                baseline.count = 1;
            }
            LookupOutcome::NotFound => {
                tracing::info!("No Pokémon named {:?}", request.name);
            }
            LookupOutcome::Failed(err) => {
                tracing::warn!("Baseline lookup for {:?} failed: {}", request.name, err);
            }
        }
        return baseline;
    }

    let offset = baseline.pager().offset();
    match gateway.list(Resource::Pokemon, page_size, offset).await {
        Ok(page) => {
            tracing::info!("Loaded page {} ({} of {})", request.page, page.results.len(), page.count);
            baseline.items = page.results;
            baseline.count = page.count;
        }
        Err(err) => {
            tracing::warn!("Baseline page {} failed: {}", request.page, err);
        }
    }
    baseline
}
