use super::ApiError;
use crate::domain::{CustomerId, PageRequest};

pub const MIN_SCORE: i32 = 0;
pub const MAX_SCORE: i32 = 5;
pub const MAX_COMMENT_LENGTH: usize = 255;

pub fn validate_id(kind: &str, id: i32) -> Result<i32, ApiError> {
    if id <= 0 {
        return Err(ApiError::validation(format!(
            "Invalid {} ID: {}. ID must be a positive integer",
            kind, id
        )));
    }
    Ok(id)
}

pub fn validate_score(score: i32) -> Result<i32, ApiError> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(ApiError::validation(format!(
            "Invalid score: {}. Score must be between {} and {}",
            score, MIN_SCORE, MAX_SCORE
        )));
    }
    Ok(score)
}

pub fn validate_comment(comment: Option<String>) -> Result<Option<String>, ApiError> {
    if let Some(text) = &comment
        && text.chars().count() > MAX_COMMENT_LENGTH
    {
        return Err(ApiError::validation(format!(
            "Comment must be {} characters or less",
            MAX_COMMENT_LENGTH
        )));
    }
    Ok(comment)
}

pub fn require_score(score: Option<i32>) -> Result<i32, ApiError> {
    score
        .ok_or_else(|| ApiError::validation("Score is required"))
        .and_then(validate_score)
}

pub fn require_customer_id(customer_id: Option<i32>) -> Result<CustomerId, ApiError> {
    customer_id
        .ok_or_else(|| ApiError::validation("Customer ID is required"))
        .map(CustomerId::new)
}

/// Parses a comma separated list such as `100,101,102`.
pub fn parse_customer_ids(raw: &str) -> Result<Vec<CustomerId>, ApiError> {
    let ids = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i32>()
                .map(CustomerId::new)
                .map_err(|_| ApiError::validation(format!("Invalid customer ID: '{}'", s)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if ids.is_empty() {
        return Err(ApiError::validation("At least one customer is required"));
    }

    Ok(ids)
}

pub fn validate_page_size(size: u64, max: u64) -> Result<u64, ApiError> {
    if !(1..=max).contains(&size) {
        return Err(ApiError::validation(format!(
            "Invalid page size: {}. Size must be between 1 and {}",
            size, max
        )));
    }
    Ok(size)
}

pub fn validate_page<S>(request: PageRequest<S>) -> Result<PageRequest<S>, ApiError> {
    if request.offset().is_none() {
        return Err(ApiError::validation(format!(
            "Invalid page number: {}. Page is out of range for size {}",
            request.number, request.size
        )));
    }
    Ok(request)
}
