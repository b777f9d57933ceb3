pub mod rating;
pub mod tour;
pub mod tour_package;
