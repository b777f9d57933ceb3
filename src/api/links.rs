//! Hypermedia links rendered under `_links` in every resource body.

use serde::Serialize;
use std::collections::BTreeMap;
use url::Url;

use crate::domain::{Page, RatingId, TourId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub href: String,
}

/// Relation name to link, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<&'static str, Link>);

impl Links {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, rel: &'static str, href: String) -> Self {
        self.0.insert(rel, Link { href });
        self
    }

    #[must_use]
    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.0.get(rel)
    }
}

/// Builds absolute links from the configured public URL.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
    base: String,
}

impl LinkBuilder {
    #[must_use]
    pub fn new(public_url: &str) -> Self {
        Self {
            base: public_url.trim_end_matches('/').to_string(),
        }
    }

    #[must_use]
    pub fn href(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    #[must_use]
    pub fn rating(&self, id: RatingId) -> String {
        self.href(&format!("/ratings/{id}"))
    }

    #[must_use]
    pub fn tour(&self, id: TourId) -> String {
        self.href(&format!("/tours/{id}"))
    }

    #[must_use]
    pub fn tour_ratings(&self, id: TourId) -> String {
        self.href(&format!("/tours/{id}/ratings"))
    }

    #[must_use]
    pub fn package(&self, code: &str) -> String {
        self.href(&format!("/packages/{code}"))
    }

    /// `self`, `first` and `last` links for a page plus `prev`/`next` where
    /// they exist. `query` carries the filter and sort parameters that every
    /// page link must repeat.
    #[must_use]
    pub fn page_links<T>(&self, path: &str, query: &[(&str, String)], page: &Page<T>) -> Links {
        let at = |number: u64| self.page_href(path, query, number, page.size);

        let mut links = Links::new()
            .with("self", at(page.number))
            .with("first", at(0))
            .with("last", at(page.last_number()));

        if page.has_previous() {
            links = links.with("prev", at(page.number - 1));
        }
        if page.has_next() {
            links = links.with("next", at(page.number + 1));
        }

        links
    }

    fn page_href(&self, path: &str, query: &[(&str, String)], number: u64, size: u64) -> String {
        let href = self.href(path);
        let Ok(mut url) = Url::parse(&href) else {
            return href;
        };

        url.query_pairs_mut()
            .append_pair("page", &number.to_string())
            .append_pair("size", &size.to_string())
            .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())));

        url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u64, total_pages: u64) -> Page<()> {
        Page {
            content: vec![],
            number,
            size: 2,
            total_elements: total_pages * 2,
            total_pages,
        }
    }

    #[test]
    fn resource_links_use_public_url() {
        let links = LinkBuilder::new("http://localhost:8080/");
        assert_eq!(links.rating(RatingId::new(3)), "http://localhost:8080/ratings/3");
        assert_eq!(links.tour(TourId::new(1)), "http://localhost:8080/tours/1");
        assert_eq!(
            links.tour_ratings(TourId::new(1)),
            "http://localhost:8080/tours/1/ratings"
        );
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let builder = LinkBuilder::new("http://localhost:8080");
        let links = builder.page_links(
            "/tours/1/ratings",
            &[("sort", "score,desc".to_string())],
            &page(1, 3),
        );

        assert_eq!(
            links.get("self").map(|l| l.href.as_str()),
            Some("http://localhost:8080/tours/1/ratings?page=1&size=2&sort=score%2Cdesc")
        );
        assert!(links.get("prev").is_some());
        assert!(links.get("next").is_some());
        assert_eq!(
            links.get("last").map(|l| l.href.as_str()),
            Some("http://localhost:8080/tours/1/ratings?page=2&size=2&sort=score%2Cdesc")
        );
    }

    #[test]
    fn single_page_has_no_neighbours() {
        let builder = LinkBuilder::new("http://localhost:8080");
        let links = builder.page_links("/tours", &[], &page(0, 1));
        assert!(links.get("prev").is_none());
        assert!(links.get("next").is_none());
        assert!(links.get("first").is_some());
    }
}
