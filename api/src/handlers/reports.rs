use food_donations::catalog::{
    CityParticipants, ClaimStatusShare, FoodItemClaims, FoodTypeCount, LocationListings,
    MealTypeClaims, ProviderContact, ProviderDonation, ProviderDonationTotal,
    ProviderSuccessfulClaims, ProviderTypeContribution, ReceiverAverageClaim, ReceiverClaimTotal,
    ReportQuery, TotalAvailable, provider_cities,
};
use food_donations::report::{Section, Visual, charts, table};
use food_donations::{DbError, QueryOutcome};
use sqlx::PgPool;

use crate::models::views::{CitySelector, ReportPage};

const NO_DATA: &str = "No data available for this query.";

/// Row caps used by the tabular view where it shows only the leader.
const TABLE_TOP_ONE: Option<i64> = Some(1);
/// Row caps used by the chart view.
const CHART_TOP_TEN: Option<i64> = Some(10);

async fn run<T>(
    query: ReportQuery,
    fetch: impl Future<Output = Result<Vec<T>, DbError>>,
) -> QueryOutcome<T> {
    QueryOutcome::classify(&query.to_string(), fetch.await)
}

/// Resolves which city the provider-contacts report runs for and fetches it.
/// An explicit choice wins; otherwise the first known city is used, the way a
/// select box defaults to its first option.
#[tracing::instrument(skip(db))]
async fn provider_contacts(
    db: &PgPool,
    requested: Option<String>,
) -> (CitySelector, QueryOutcome<ProviderContact>) {
    let (cities, lookup_failure) = match provider_cities(db).await {
        Ok(cities) => (cities, None),
        Err(e) => {
            tracing::error!(error = ?e, "failed to look up provider cities");
            (Vec::new(), Some(e.to_string()))
        }
    };

    let selected = requested
        .filter(|city| !city.trim().is_empty())
        .or_else(|| cities.first().cloned());

    let query = ReportQuery::ProviderContacts;
    let outcome = match (&selected, lookup_failure) {
        (Some(city), _) => run(query, ProviderContact::fetch(db, city)).await,
        (None, Some(reason)) => QueryOutcome::Failed(reason),
        (None, None) => QueryOutcome::Empty,
    };

    (CitySelector { cities, selected }, outcome)
}

/// Every report as a table. Each query runs on its own; a failing one becomes
/// an error section and the rest still run.
#[tracing::instrument(skip(db))]
pub async fn query_results(db: &PgPool, city: Option<String>) -> ReportPage {
    let mut sections = Vec::with_capacity(ReportQuery::ALL.len());

    let query = ReportQuery::CityParticipants;
    let outcome = run(query, CityParticipants::fetch(db)).await;
    sections.push(Section::new(query, table(outcome, NO_DATA)));

    let query = ReportQuery::ProviderTypeContribution;
    let outcome = run(query, ProviderTypeContribution::fetch(db)).await;
    sections.push(Section::new(query, table(outcome, NO_DATA)));

    let (city_selector, outcome) = provider_contacts(db, city).await;
    sections.push(Section::new(
        ReportQuery::ProviderContacts,
        table(outcome, "No providers found in the selected city."),
    ));

    let query = ReportQuery::ReceiverClaimTotals;
    let outcome = run(query, ReceiverClaimTotal::fetch(db)).await;
    sections.push(Section::new(query, table(outcome, NO_DATA)));

    let query = ReportQuery::TotalAvailable;
    let outcome = run(query, TotalAvailable::fetch(db)).await;
    sections.push(Section::new(
        query,
        table(outcome, "No food data available to display."),
    ));

    let query = ReportQuery::TopLocation;
    let outcome = run(query, LocationListings::fetch(db, TABLE_TOP_ONE)).await;
    sections.push(Section::new(query, table(outcome, NO_DATA)));

    let query = ReportQuery::FoodTypes;
    let outcome = run(query, FoodTypeCount::fetch(db)).await;
    sections.push(Section::new(query, table(outcome, NO_DATA)));

    let query = ReportQuery::ClaimsPerFoodItem;
    let outcome = run(query, FoodItemClaims::fetch(db)).await;
    sections.push(Section::new(query, table(outcome, NO_DATA)));

    let query = ReportQuery::TopProviderByClaims;
    let outcome = run(query, ProviderSuccessfulClaims::fetch(db, TABLE_TOP_ONE)).await;
    sections.push(Section::new(query, table(outcome, NO_DATA)));

    let query = ReportQuery::ClaimStatusShare;
    let outcome = run(query, ClaimStatusShare::fetch(db)).await;
    sections.push(Section::new(query, table(outcome, NO_DATA)));

    let query = ReportQuery::ReceiverAverageClaims;
    let outcome = run(query, ReceiverAverageClaim::fetch(db)).await;
    sections.push(Section::new(
        query,
        table(outcome, "No data found for completed claims."),
    ));

    let query = ReportQuery::MealTypeClaims;
    let outcome = run(query, MealTypeClaims::fetch(db)).await;
    sections.push(Section::new(
        query,
        table(outcome, "No data found for claimed meal types."),
    ));

    let query = ReportQuery::ProviderDonations;
    let outcome = run(query, ProviderDonation::fetch(db)).await;
    sections.push(Section::new(
        query,
        table(outcome, "No data found for food donations."),
    ));

    ReportPage {
        title: "SQL Query Results",
        city_selector,
        sections,
    }
}

/// Every report as a chart, with the same per-query isolation as
/// [`query_results`].
#[tracing::instrument(skip(db))]
pub async fn visualizations(db: &PgPool, city: Option<String>) -> ReportPage {
    let mut sections = Vec::with_capacity(ReportQuery::ALL.len());

    let query = ReportQuery::CityParticipants;
    let outcome = run(query, CityParticipants::fetch(db)).await;
    sections.push(Section::titled(
        query,
        "Top 20 Cities: Food Providers and Receivers",
        charts::city_participants(outcome),
    ));

    let query = ReportQuery::ProviderTypeContribution;
    let outcome = run(query, ProviderTypeContribution::fetch(db)).await;
    sections.push(Section::new(
        query,
        charts::provider_type_contribution(outcome),
    ));

    let (city_selector, outcome) = provider_contacts(db, city).await;
    let visual = match &city_selector.selected {
        Some(city) => charts::provider_distribution(outcome, city),
        None => Visual::from_outcome(outcome, "No provider cities available.", |_| {
            Visual::warning("No provider cities available.")
        }),
    };
    sections.push(Section::new(ReportQuery::ProviderContacts, visual));

    let query = ReportQuery::ReceiverClaimTotals;
    let outcome = run(query, ReceiverClaimTotal::fetch(db)).await;
    sections.push(Section::new(query, charts::receiver_claim_totals(outcome)));

    let query = ReportQuery::TotalAvailable;
    let outcome = run(query, TotalAvailable::fetch(db)).await;
    sections.push(Section::new(query, charts::total_available(outcome)));

    let query = ReportQuery::TopLocation;
    let outcome = run(query, LocationListings::fetch(db, CHART_TOP_TEN)).await;
    sections.push(Section::titled(
        query,
        "Top 10 Locations by Number of Food Listings",
        charts::location_listings(outcome),
    ));

    let query = ReportQuery::FoodTypes;
    let outcome = run(query, FoodTypeCount::fetch(db)).await;
    sections.push(Section::new(query, charts::food_types(outcome)));

    let query = ReportQuery::ClaimsPerFoodItem;
    let outcome = run(query, FoodItemClaims::fetch(db)).await;
    sections.push(Section::new(query, charts::claims_per_food_item(outcome)));

    let query = ReportQuery::TopProviderByClaims;
    let outcome = run(query, ProviderSuccessfulClaims::fetch(db, CHART_TOP_TEN)).await;
    sections.push(Section::titled(
        query,
        "Top 10 Providers with Most Successful Food Claims",
        charts::providers_by_successful_claims(outcome),
    ));

    let query = ReportQuery::ClaimStatusShare;
    let outcome = run(query, ClaimStatusShare::fetch(db)).await;
    sections.push(Section::new(query, charts::claim_status_share(outcome)));

    let query = ReportQuery::ReceiverAverageClaims;
    let outcome = run(query, ReceiverAverageClaim::fetch(db)).await;
    sections.push(Section::new(
        query,
        charts::receiver_average_claims(outcome),
    ));

    let query = ReportQuery::MealTypeClaims;
    let outcome = run(query, MealTypeClaims::fetch(db)).await;
    sections.push(Section::new(query, charts::meal_type_claims(outcome)));

    let query = ReportQuery::ProviderDonations;
    let outcome = run(query, ProviderDonationTotal::fetch(db, CHART_TOP_TEN)).await;
    sections.push(Section::new(query, charts::provider_donations(outcome)));

    ReportPage {
        title: "Visualizations",
        city_selector,
        sections,
    }
}
