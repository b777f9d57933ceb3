use crate::domain::{CustomerId, RatingId, TourId};
use serde::Serialize;

/// A customer's score and comment for one tour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourRating {
    pub id: RatingId,
    pub tour_id: TourId,
    pub customer_id: CustomerId,
    pub score: i32,
    pub comment: String,
}

/// A rating that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRating {
    pub tour_id: TourId,
    pub customer_id: CustomerId,
    pub score: i32,
    pub comment: String,
}

impl NewRating {
    /// Builds a rating, falling back to [`default_comment`] when no comment
    /// is given.
    #[must_use]
    pub fn new(
        tour_id: TourId,
        customer_id: CustomerId,
        score: i32,
        comment: Option<String>,
    ) -> Self {
        Self {
            tour_id,
            customer_id,
            score,
            comment: comment.unwrap_or_else(|| default_comment(score)),
        }
    }
}

/// Label used as the comment when a customer leaves none.
#[must_use]
pub fn default_comment(score: i32) -> String {
    match score {
        1 => "Terrible".to_string(),
        2 => "Poor".to_string(),
        3 => "Fair".to_string(),
        4 => "Good".to_string(),
        5 => "Great".to_string(),
        other => other.to_string(),
    }
}

/// Arithmetic mean of the scores, `None` when there are none.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn average_score(scores: &[i32]) -> Option<f64> {
    if scores.is_empty() {
        return None;
    }
    let sum: i64 = scores.iter().map(|&s| i64::from(s)).sum();
    Some(sum as f64 / scores.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_comment_is_kept() {
        let rating = NewRating::new(
            TourId::new(1),
            CustomerId::new(1),
            1,
            Some("comment".to_string()),
        );
        assert_eq!(rating.comment, "comment");
    }

    #[test]
    fn missing_comment_defaults_from_score() {
        let rating = NewRating::new(TourId::new(1), CustomerId::new(1), 1, None);
        assert_eq!(rating.comment, "Terrible");
        assert_eq!(default_comment(3), "Fair");
        assert_eq!(default_comment(5), "Great");
        assert_eq!(default_comment(0), "0");
    }

    #[test]
    fn average_of_identical_scores() {
        assert_eq!(average_score(&[2, 2, 2, 2, 2]), Some(2.0));
    }

    #[test]
    fn average_is_floating_point() {
        assert_eq!(average_score(&[1, 2, 4]), Some(7.0 / 3.0));
        assert_eq!(average_score(&[4, 5]), Some(4.5));
    }

    #[test]
    fn average_of_nothing_is_none() {
        assert_eq!(average_score(&[]), None);
    }
}
