use serde::Deserialize;
use std::str::FromStr;

use super::ApiError;
use super::validation::{validate_page, validate_page_size};
use crate::config::PagingConfig;
use crate::domain::{PageRequest, SortField, SortOrder};

/// `?page=0&size=20&sort=field,dir` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u64>,
    pub size: Option<u64>,
    pub sort: Option<String>,
}

impl PageParams {
    pub fn to_request<S>(&self, config: &PagingConfig) -> Result<PageRequest<S>, ApiError>
    where
        S: SortField,
    {
        let size = validate_page_size(
            self.size.unwrap_or(config.default_page_size),
            config.max_page_size,
        )?;
        let request = validate_page(PageRequest::new(self.page.unwrap_or(0), size))?;

        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(request),
            Some(raw) => {
                let (field, order) = parse_sort(raw)?;
                Ok(request.sorted_by(field, order))
            }
        }
    }

}

/// Sort parameter to repeat on page links, spelled canonically.
#[must_use]
pub fn sort_link_query<S: SortField>(request: &PageRequest<S>) -> Vec<(&'static str, String)> {
    request
        .sort_param()
        .map(|sort| ("sort", sort))
        .into_iter()
        .collect()
}

fn parse_sort<S>(raw: &str) -> Result<(S, SortOrder), ApiError>
where
    S: FromStr<Err = String>,
{
    let (field, direction) = raw.split_once(',').unwrap_or((raw, "asc"));

    let field = field.trim().parse::<S>().map_err(ApiError::validation)?;
    let order = SortOrder::parse(direction.trim()).ok_or_else(|| {
        ApiError::validation(format!("Invalid sort direction: '{}'", direction.trim()))
    })?;

    Ok((field, order))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RatingSort;

    fn params(page: Option<u64>, size: Option<u64>, sort: Option<&str>) -> PageParams {
        PageParams {
            page,
            size,
            sort: sort.map(str::to_string),
        }
    }

    #[test]
    fn defaults_come_from_config() {
        let request: PageRequest<RatingSort> = params(None, None, None)
            .to_request(&PagingConfig::default())
            .unwrap();
        assert_eq!(request.number, 0);
        assert_eq!(request.size, 20);
        assert_eq!(request.sort, None);
    }

    #[test]
    fn sort_with_direction() {
        let request: PageRequest<RatingSort> = params(Some(1), Some(3), Some("score,desc"))
            .to_request(&PagingConfig::default())
            .unwrap();
        assert_eq!(request.number, 1);
        assert_eq!(request.sort, Some((RatingSort::Score, SortOrder::Descending)));
    }

    #[test]
    fn sort_without_direction_is_ascending() {
        let request: PageRequest<RatingSort> = params(None, None, Some("customerId"))
            .to_request(&PagingConfig::default())
            .unwrap();
        assert_eq!(
            request.sort,
            Some((RatingSort::CustomerId, SortOrder::Ascending))
        );
    }

    #[test]
    fn rejects_unknown_sort_and_oversized_pages() {
        let config = PagingConfig::default();
        assert!(
            params(None, None, Some("tour"))
                .to_request::<RatingSort>(&config)
                .is_err()
        );
        assert!(
            params(None, None, Some("score,sideways"))
                .to_request::<RatingSort>(&config)
                .is_err()
        );
        assert!(
            params(None, Some(1000), None)
                .to_request::<RatingSort>(&config)
                .is_err()
        );
    }

    #[test]
    fn rejects_page_numbers_past_sql_offset_range() {
        let config = PagingConfig::default();
        assert!(
            params(Some(u64::MAX), None, None)
                .to_request::<RatingSort>(&config)
                .is_err()
        );
        assert!(
            params(Some(i64::MAX as u64), Some(2), None)
                .to_request::<RatingSort>(&config)
                .is_err()
        );
    }

    #[test]
    fn sort_links_are_normalized() {
        let request: PageRequest<RatingSort> = params(None, None, Some("customer_id"))
            .to_request(&PagingConfig::default())
            .unwrap();
        assert_eq!(
            sort_link_query(&request),
            vec![("sort", "customerId,asc".to_string())]
        );

        let request: PageRequest<RatingSort> = params(None, None, None)
            .to_request(&PagingConfig::default())
            .unwrap();
        assert!(sort_link_query(&request).is_empty());
    }
}
