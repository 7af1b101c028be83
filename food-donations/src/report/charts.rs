use super::{BarChart, Metric, PieChart, Slice, Visual};
use crate::catalog::{
    CityParticipants, ClaimStatusShare, FoodItemClaims, FoodTypeCount, LocationListings,
    MealTypeClaims, ProviderContact, ProviderDonationTotal, ProviderSuccessfulClaims,
    ProviderTypeContribution, ReceiverAverageClaim, ReceiverClaimTotal, TotalAvailable,
};
use crate::outcome::QueryOutcome;

pub const TOP_CITIES: usize = 20;
pub const TOP_RECEIVERS: usize = 10;
pub const TOP_LOCATIONS: usize = 10;
pub const TOP_FOOD_ITEMS: usize = 15;
pub const TOP_PROVIDERS: usize = 10;

/// Category label for a nullable text column.
pub const UNKNOWN_LABEL: &str = "Unknown";

fn label(value: &Option<String>) -> String {
    value.as_deref().unwrap_or(UNKNOWN_LABEL).to_string()
}

fn top<T>(mut rows: Vec<T>, n: usize) -> Vec<T> {
    rows.truncate(n);
    rows
}

fn single_series<T>(
    chart: BarChart,
    rows: &[T],
    series: &str,
    category: impl Fn(&T) -> String,
    value: impl Fn(&T) -> f64,
) -> BarChart {
    chart
        .with_categories(rows.iter().map(category).collect())
        .with_series(series, rows.iter().map(value).collect())
}

/// Top cities by providers plus receivers, as a grouped bar per city.
pub fn city_participants(outcome: QueryOutcome<CityParticipants>) -> Visual {
    Visual::from_outcome(outcome, "No data available for this query.", |mut rows| {
        // stable: equal totals keep their alphabetical order
        rows.sort_by(|a, b| b.total().cmp(&a.total()));
        let rows = top(rows, TOP_CITIES);

        let chart = BarChart::horizontal("Top 20 Cities: Providers and Receivers", "City", "Count")
            .with_categories(rows.iter().map(|row| label(&row.city)).collect())
            .with_series(
                "providers",
                rows.iter().map(|row| row.provider_count as f64).collect(),
            )
            .with_series(
                "receivers",
                rows.iter().map(|row| row.receiver_count as f64).collect(),
            );

        Visual::Bar(chart)
    })
}

pub fn provider_type_contribution(outcome: QueryOutcome<ProviderTypeContribution>) -> Visual {
    Visual::from_outcome(outcome, "No data available for this query.", |rows| {
        let chart = BarChart::horizontal(
            "Total Food Quantity Donated by Provider Type",
            "Provider Type",
            "Total Quantity Donated",
        );

        Visual::Bar(single_series(
            chart,
            &rows,
            "total_quantity",
            |row| label(&row.provider_type),
            |row| row.total_quantity as f64,
        ))
    })
}

/// How the providers of one city split across provider types.
pub fn provider_distribution(outcome: QueryOutcome<ProviderContact>, city: &str) -> Visual {
    Visual::from_outcome(outcome, "No providers found in the selected city.", |rows| {
        let mut slices: Vec<Slice> = Vec::new();
        for row in &rows {
            let provider_type = label(&row.provider_type);
            match slices.iter_mut().find(|slice| slice.label == provider_type) {
                Some(slice) => slice.value += 1.0,
                None => slices.push(Slice {
                    label: provider_type,
                    value: 1.0,
                }),
            }
        }

        Visual::Pie(PieChart {
            title: format!("Provider Distribution in {city}"),
            slices,
        })
    })
}

pub fn receiver_claim_totals(outcome: QueryOutcome<ReceiverClaimTotal>) -> Visual {
    Visual::from_outcome(outcome, "No data available for this query.", |rows| {
        let rows = top(rows, TOP_RECEIVERS);
        let chart = BarChart::horizontal(
            "Top Receivers by Quantity of Food Claimed",
            "Receiver Name",
            "Total Quantity Claimed",
        );

        Visual::Bar(single_series(
            chart,
            &rows,
            "total_claimed_quantity",
            |row| label(&row.receiver_name),
            |row| row.total_claimed_quantity as f64,
        ))
    })
}

/// The grand total as a headline number, plus a single bar.
pub fn total_available(outcome: QueryOutcome<TotalAvailable>) -> Visual {
    let empty = "No food data available to display.";
    Visual::from_outcome(outcome, empty, |rows| {
        let Some(total) = rows.first().and_then(|row| row.total_available_quantity) else {
            return Visual::warning(empty);
        };

        let chart = BarChart::vertical("Total Food Available", "Total Available", "Quantity")
            .with_categories(vec!["Total Available".to_string()])
            .with_series("total_available_quantity", vec![total as f64]);

        Visual::Metric(Metric {
            label: "Total Food Quantity".to_string(),
            value: format!("{} units", group_thousands(total)),
            chart,
        })
    })
}

pub fn location_listings(outcome: QueryOutcome<LocationListings>) -> Visual {
    Visual::from_outcome(outcome, "No data available for visualization.", |rows| {
        let rows = top(rows, TOP_LOCATIONS);
        let chart = BarChart::horizontal(
            "Top 10 Locations with Most Food Listings",
            "Location",
            "Number of Listings",
        );

        Visual::Bar(single_series(
            chart,
            &rows,
            "listing_count",
            |row| label(&row.location),
            |row| row.listing_count as f64,
        ))
    })
}

pub fn food_types(outcome: QueryOutcome<FoodTypeCount>) -> Visual {
    Visual::from_outcome(outcome, "No food type data available.", |rows| {
        let chart = BarChart::horizontal(
            "Most Common Food Types Available",
            "Food Type",
            "Number of Listings",
        );

        Visual::Bar(single_series(
            chart,
            &rows,
            "total_count",
            |row| label(&row.food_type),
            |row| row.total_count as f64,
        ))
    })
}

pub fn claims_per_food_item(outcome: QueryOutcome<FoodItemClaims>) -> Visual {
    Visual::from_outcome(outcome, "No claims data available.", |rows| {
        let rows = top(rows, TOP_FOOD_ITEMS);
        let chart = BarChart::horizontal(
            "Top 15 Most Claimed Food Items",
            "Food Item",
            "Number of Claims",
        );

        Visual::Bar(single_series(
            chart,
            &rows,
            "total_claims",
            |row| label(&row.food_name),
            |row| row.total_claims as f64,
        ))
    })
}

pub fn providers_by_successful_claims(outcome: QueryOutcome<ProviderSuccessfulClaims>) -> Visual {
    Visual::from_outcome(outcome, "No successful claims available.", |rows| {
        let rows = top(rows, TOP_PROVIDERS);
        let chart = BarChart::horizontal(
            "Top 10 Providers by Successful Food Claims",
            "Provider Name",
            "Number of Successful Claims",
        );

        Visual::Bar(single_series(
            chart,
            &rows,
            "successful_claims",
            |row| label(&row.provider_name),
            |row| row.successful_claims as f64,
        ))
    })
}

/// Claim statuses as a pie; slices carry counts, not percentages.
pub fn claim_status_share(outcome: QueryOutcome<ClaimStatusShare>) -> Visual {
    Visual::from_outcome(outcome, "No claims data available.", |rows| {
        Visual::Pie(PieChart {
            title: "Distribution of Claim Status".to_string(),
            slices: rows
                .into_iter()
                .map(|row| Slice {
                    label: label(&row.status),
                    value: row.total as f64,
                })
                .collect(),
        })
    })
}

pub fn receiver_average_claims(outcome: QueryOutcome<ReceiverAverageClaim>) -> Visual {
    Visual::from_outcome(outcome, "No data found for completed claims.", |rows| {
        let chart = BarChart::horizontal(
            "Average Quantity Claimed per Receiver",
            "Receiver",
            "Avg Quantity",
        )
        .reversed();

        Visual::Bar(single_series(
            chart,
            &rows,
            "avg_claimed_quantity",
            |row| label(&row.receiver_name),
            |row| row.avg_claimed_quantity,
        ))
    })
}

pub fn meal_type_claims(outcome: QueryOutcome<MealTypeClaims>) -> Visual {
    Visual::from_outcome(outcome, "No claims data available for meal types.", |rows| {
        Visual::Pie(PieChart {
            title: "Most Claimed Meal Type".to_string(),
            slices: rows
                .into_iter()
                .map(|row| Slice {
                    label: label(&row.meal_type),
                    value: row.total_claims as f64,
                })
                .collect(),
        })
    })
}

pub fn provider_donations(outcome: QueryOutcome<ProviderDonationTotal>) -> Visual {
    Visual::from_outcome(outcome, "No data found for food donations.", |rows| {
        let rows = top(rows, TOP_PROVIDERS);
        let chart = BarChart::horizontal(
            "Top 10 Providers by Total Food Donated",
            "Provider",
            "Total Quantity Donated",
        )
        .reversed();

        Visual::Bar(single_series(
            chart,
            &rows,
            "total_donated_quantity",
            |row| label(&row.provider_name),
            |row| row.total_donated_quantity as f64,
        ))
    })
}

/// `1234567` -> `"1,234,567"`.
pub fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        grouped.push('-');
    }
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    grouped
}
