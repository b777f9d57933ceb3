pub use super::tour_packages::Entity as TourPackages;
pub use super::tour_ratings::Entity as TourRatings;
pub use super::tours::Entity as Tours;
