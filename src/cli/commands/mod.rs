mod import;
mod ratings;
mod tours;

pub use import::cmd_import;
pub use ratings::cmd_ratings;
pub use tours::{TourListOptions, cmd_list_packages, cmd_list_tours};
