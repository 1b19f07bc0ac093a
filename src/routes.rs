//! Page URLs
//!
//! The only navigation is a full page load with `?page=N` (or `?name=x`).

use pokedex_core::PageRequest;

/// Parse the current `window.location.search`.
pub fn current_request() -> PageRequest {
    let query = web_sys::window()
        .and_then(|window| window.location().search().ok())
        .unwrap_or_default();
    PageRequest::from_query(&query)
}

pub fn page_href(page: u32) -> String {
    format!("/?page={}", page)
}

/// Unfiltered first page
pub const HOME_HREF: &str = "/";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_href_round_trips() {
        let href = page_href(7);
        assert_eq!(href, "/?page=7");
        let query = href.trim_start_matches('/');
        assert_eq!(PageRequest::from_query(query).page, 7);
    }
}
