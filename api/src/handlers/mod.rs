pub mod listings;
pub mod reports;
