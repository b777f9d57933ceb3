pub mod rating;
pub mod tour;

pub use rating::{NewRating, TourRating, average_score, default_comment};
pub use tour::{NewTour, Tour, TourFilter, TourImportRecord, TourPackage};
