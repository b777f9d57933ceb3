use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::links::{LinkBuilder, Links};
use crate::domain::{Difficulty, Page, Region};
use crate::models::{Tour, TourPackage, TourRating};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingDto {
    pub score: i32,
    pub comment: String,
    pub customer_id: i32,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl RatingDto {
    #[must_use]
    pub fn from_rating(rating: TourRating, links: &LinkBuilder) -> Self {
        Self {
            links: Links::new()
                .with("self", links.rating(rating.id))
                .with("tour", links.tour(rating.tour_id)),
            score: rating.score,
            comment: rating.comment,
            customer_id: rating.customer_id.value(),
        }
    }
}

/// Body of the create, update and partial update rating calls.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRequest {
    pub score: Option<i32>,
    pub comment: Option<String>,
    pub customer_id: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct AverageDto {
    pub average: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub blurb: String,
    pub price: i32,
    pub duration: String,
    pub bullets: String,
    pub keywords: String,
    pub package_code: String,
    pub difficulty: Difficulty,
    pub region: Region,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl TourDto {
    #[must_use]
    pub fn from_tour(tour: Tour, links: &LinkBuilder) -> Self {
        Self {
            links: Links::new()
                .with("self", links.tour(tour.id))
                .with("ratings", links.tour_ratings(tour.id))
                .with("package", links.package(&tour.package_code)),
            id: tour.id.value(),
            title: tour.title,
            description: tour.description,
            blurb: tour.blurb,
            price: tour.price,
            duration: tour.duration,
            bullets: tour.bullets,
            keywords: tour.keywords,
            package_code: tour.package_code,
            difficulty: tour.difficulty,
            region: tour.region,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PackageDto {
    pub code: String,
    pub name: String,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl PackageDto {
    #[must_use]
    pub fn from_package(package: TourPackage, links: &LinkBuilder) -> Self {
        Self {
            links: Links::new().with("self", links.package(&package.code)),
            code: package.code,
            name: package.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
    pub total_pages: u64,
}

#[derive(Debug, Serialize)]
pub struct PagedDto<T> {
    pub content: Vec<T>,
    pub page: PageMetadata,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> PagedDto<T> {
    #[must_use]
    pub fn new(page: Page<T>, links: Links) -> Self {
        Self {
            page: PageMetadata {
                number: page.number,
                size: page.size,
                total_elements: page.total_elements,
                total_pages: page.total_pages,
            },
            content: page.content,
            links,
        }
    }
}

/// `{"_embedded": {"<rel>": [...]}, "_links": {...}}`
#[derive(Debug, Serialize)]
pub struct CollectionDto<T> {
    #[serde(rename = "_embedded")]
    pub embedded: BTreeMap<&'static str, Vec<T>>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> CollectionDto<T> {
    #[must_use]
    pub fn new(rel: &'static str, items: Vec<T>, self_href: String) -> Self {
        let mut embedded = BTreeMap::new();
        embedded.insert(rel, items);

        Self {
            embedded,
            links: Links::new().with("self", self_href),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthDto {
    pub status: &'static str,
    pub database: bool,
    pub uptime_seconds: u64,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CustomerId, RatingId, TourId};

    #[test]
    fn rating_dto_shape() {
        let links = LinkBuilder::new("http://localhost:8080");
        let dto = RatingDto::from_rating(
            TourRating {
                id: RatingId::new(9),
                tour_id: TourId::new(2),
                customer_id: CustomerId::new(100),
                score: 5,
                comment: "Great".to_string(),
            },
            &links,
        );

        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["score"], 5);
        assert_eq!(json["customerId"], 100);
        assert_eq!(json["comment"], "Great");
        assert_eq!(json["_links"]["self"]["href"], "http://localhost:8080/ratings/9");
        assert_eq!(json["_links"]["tour"]["href"], "http://localhost:8080/tours/2");
    }

    #[test]
    fn rating_request_accepts_partial_bodies() {
        let request: RatingRequest = serde_json::from_str(r#"{"customerId": 3}"#).unwrap();
        assert_eq!(request.customer_id, Some(3));
        assert!(request.score.is_none());
        assert!(request.comment.is_none());
    }

    #[test]
    fn average_renders_null_when_absent() {
        let json = serde_json::to_string(&AverageDto { average: None }).unwrap();
        assert_eq!(json, r#"{"average":null}"#);
    }
}
