use derive_more::Display;
use food_donations::models::food_listings::{FoodType, MealType, ProviderType};
use food_donations::report::{Section, Visual};
use serde::Serialize;

/// The dashboard's navigation entries.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum View {
    #[display("Home")]
    Home,
    #[display("Query Results")]
    QueryResults,
    #[display("Visualizations")]
    Visualizations,
    #[display("Manage Listings")]
    ManageListings,
}

impl View {
    pub const ALL: [View; 4] = [
        View::Home,
        View::QueryResults,
        View::Visualizations,
        View::ManageListings,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            View::Home => "/",
            View::QueryResults => "/queries",
            View::Visualizations => "/visualizations",
            View::ManageListings => "/listings",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct NavEntry {
    pub label: String,
    pub path: &'static str,
}

impl From<View> for NavEntry {
    fn from(view: View) -> Self {
        Self {
            label: view.to_string(),
            path: view.path(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HomePage {
    pub title: &'static str,
    pub heading: &'static str,
    pub highlights: Vec<&'static str>,
    pub navigation: Vec<NavEntry>,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            title: "Local Food Wastage Management System",
            heading: "Welcome to the Food Wastage Management System",
            highlights: vec![
                "Food Providers list surplus food",
                "Receivers can claim food in need",
                "Analyze food wastage trends using SQL",
                "Visualize key insights from the data",
            ],
            navigation: View::ALL.into_iter().map(NavEntry::from).collect(),
        }
    }
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for the provider-contacts report. `selected` is the city the
/// report ran for, if any.
#[derive(Debug, Clone, Serialize)]
pub struct CitySelector {
    pub cities: Vec<String>,
    pub selected: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ReportPage {
    pub title: &'static str,
    pub city_selector: CitySelector,
    pub sections: Vec<Section>,
}

#[derive(Debug, Serialize)]
pub struct ListingFormOptions {
    pub provider_types: Vec<ProviderType>,
    pub food_types: Vec<FoodType>,
    pub meal_types: Vec<MealType>,
    pub min_quantity: i32,
    pub min_provider_id: i32,
    pub min_food_id: i32,
}

impl ListingFormOptions {
    pub fn new() -> Self {
        Self {
            provider_types: ProviderType::ALL.to_vec(),
            food_types: FoodType::ALL.to_vec(),
            meal_types: MealType::ALL.to_vec(),
            min_quantity: 1,
            min_provider_id: 1,
            min_food_id: 1,
        }
    }
}

impl Default for ListingFormOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Serialize)]
pub struct ManagePage {
    pub title: &'static str,
    pub listings: Visual,
    pub form: ListingFormOptions,
}

#[derive(Debug, Serialize)]
pub struct MutationOutcome {
    pub message: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_constructors() {
        let home = HomePage::default();
        assert_eq!(home.navigation.len(), View::ALL.len());
        assert_eq!(home.navigation[0].path, "/");

        let form = ListingFormOptions::default();
        assert_eq!(form.provider_types, ProviderType::ALL.to_vec());
        assert_eq!(form.meal_types.len(), 4);
        assert_eq!(form.min_quantity, 1);
    }
}
