pub mod food_listings;
