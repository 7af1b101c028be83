//! The fixed set of read queries behind the dashboard.
//!
//! Every query is a row type with a `fetch` function. Queries whose table and
//! chart views show a different number of rows take an `Option<i64>` limit,
//! bound as `LIMIT $n` (`None` binds `NULL`, which Postgres reads as no limit).

mod claims;
mod listings;
mod participants;

use derive_more::Display;
use serde_json::Value;

pub use claims::{
    ClaimStatusShare, FoodItemClaims, MealTypeClaims, ProviderSuccessfulClaims,
    ReceiverAverageClaim, ReceiverClaimTotal,
};
pub use listings::{
    FoodTypeCount, LocationListings, ProviderDonation, ProviderDonationTotal,
    ProviderTypeContribution, TotalAvailable,
};
pub use participants::{CityParticipants, ProviderContact, provider_cities};

/// The thirteen reports, numbered the way the dashboard lists them.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportQuery {
    #[display("Food Providers and Receivers per City")]
    CityParticipants,
    #[display("Food Contribution by Provider Type")]
    ProviderTypeContribution,
    #[display("Contact Info of Food Providers in a Specific City")]
    ProviderContacts,
    #[display("Receivers Who Claimed the Most Food")]
    ReceiverClaimTotals,
    #[display("Total Quantity of Food Available from All Providers")]
    TotalAvailable,
    #[display("Location with the Highest Number of Food Listings")]
    TopLocation,
    #[display("Most Commonly Available Food Types")]
    FoodTypes,
    #[display("Number of Claims per Food Item")]
    ClaimsPerFoodItem,
    #[display("Provider with Highest Number of Successful Food Claims")]
    TopProviderByClaims,
    #[display("Percentage of Food Claims by Status")]
    ClaimStatusShare,
    #[display("Average Quantity of Food Claimed per Receiver")]
    ReceiverAverageClaims,
    #[display("Most Claimed Meal Type")]
    MealTypeClaims,
    #[display("Total Quantity of Food Donated by Each Provider")]
    ProviderDonations,
}

impl ReportQuery {
    pub const ALL: [ReportQuery; 13] = [
        ReportQuery::CityParticipants,
        ReportQuery::ProviderTypeContribution,
        ReportQuery::ProviderContacts,
        ReportQuery::ReceiverClaimTotals,
        ReportQuery::TotalAvailable,
        ReportQuery::TopLocation,
        ReportQuery::FoodTypes,
        ReportQuery::ClaimsPerFoodItem,
        ReportQuery::TopProviderByClaims,
        ReportQuery::ClaimStatusShare,
        ReportQuery::ReceiverAverageClaims,
        ReportQuery::MealTypeClaims,
        ReportQuery::ProviderDonations,
    ];

    pub fn number(&self) -> u8 {
        match self {
            ReportQuery::CityParticipants => 1,
            ReportQuery::ProviderTypeContribution => 2,
            ReportQuery::ProviderContacts => 3,
            ReportQuery::ReceiverClaimTotals => 4,
            ReportQuery::TotalAvailable => 5,
            ReportQuery::TopLocation => 6,
            ReportQuery::FoodTypes => 7,
            ReportQuery::ClaimsPerFoodItem => 8,
            ReportQuery::TopProviderByClaims => 9,
            ReportQuery::ClaimStatusShare => 10,
            ReportQuery::ReceiverAverageClaims => 11,
            ReportQuery::MealTypeClaims => 12,
            ReportQuery::ProviderDonations => 13,
        }
    }
}

/// A row that can be shown as a plain table.
pub trait Tabular {
    const COLUMNS: &'static [&'static str];

    /// One JSON cell per entry of `COLUMNS`, in the same order.
    fn cells(&self) -> Vec<Value>;
}
