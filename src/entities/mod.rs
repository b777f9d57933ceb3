pub mod prelude;

pub mod tour_packages;
pub mod tour_ratings;
pub mod tours;
