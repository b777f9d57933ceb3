pub mod rating_service;
pub use rating_service::{RatingError, RatingService};

pub mod rating_service_impl;
pub use rating_service_impl::SeaOrmRatingService;

pub mod tour_service;
pub use tour_service::{TourError, TourService};

pub mod tour_service_impl;
pub use tour_service_impl::SeaOrmTourService;
