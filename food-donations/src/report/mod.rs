//! Turns query outcomes into display-ready descriptions: tables, bar charts,
//! pie charts and metrics. Nothing here draws; a front end reads the
//! serialized [`Visual`] and picks its own styling.

pub mod charts;
mod table;

use serde::Serialize;
use serde_json::Value;

pub use table::table;

use crate::catalog::ReportQuery;
use crate::outcome::QueryOutcome;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Visual {
    Table(Table),
    Bar(BarChart),
    Pie(PieChart),
    Metric(Metric),
    Warning { message: String },
    Error { message: String },
}

impl Visual {
    pub fn warning(message: impl Into<String>) -> Self {
        Visual::Warning {
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Visual::Error {
            message: message.into(),
        }
    }

    /// The shared shape of every renderer: data goes to `build`, an empty
    /// result becomes a warning and a failure becomes an error.
    pub fn from_outcome<T, F>(outcome: QueryOutcome<T>, empty_message: &str, build: F) -> Self
    where
        F: FnOnce(Vec<T>) -> Visual,
    {
        match outcome {
            QueryOutcome::Data(rows) => build(rows),
            QueryOutcome::Empty => Visual::warning(empty_message),
            QueryOutcome::Failed(reason) => Visual::error(reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub orientation: Orientation,
    pub category_label: String,
    pub value_label: String,
    pub categories: Vec<String>,
    pub series: Vec<Series>,
    /// Draw the first category at the top of a horizontal chart.
    pub reverse_categories: bool,
}

impl BarChart {
    pub fn horizontal(title: &str, category_label: &str, value_label: &str) -> Self {
        Self {
            title: title.to_string(),
            orientation: Orientation::Horizontal,
            category_label: category_label.to_string(),
            value_label: value_label.to_string(),
            categories: Vec::new(),
            series: Vec::new(),
            reverse_categories: false,
        }
    }

    pub fn vertical(title: &str, category_label: &str, value_label: &str) -> Self {
        Self {
            orientation: Orientation::Vertical,
            ..Self::horizontal(title, category_label, value_label)
        }
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_series(mut self, name: &str, values: Vec<f64>) -> Self {
        self.series.push(Series {
            name: name.to_string(),
            values,
        });
        self
    }

    pub fn reversed(mut self) -> Self {
        self.reverse_categories = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<Slice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metric {
    pub label: String,
    pub value: String,
    pub chart: BarChart,
}

/// One numbered block of a report page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub number: u8,
    pub title: String,
    pub visual: Visual,
}

impl Section {
    pub fn new(query: ReportQuery, visual: Visual) -> Self {
        Self {
            number: query.number(),
            title: query.to_string(),
            visual,
        }
    }

    pub fn titled(query: ReportQuery, title: &str, visual: Visual) -> Self {
        Self {
            number: query.number(),
            title: title.to_string(),
            visual,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn visuals_serialize_with_a_kind_tag() {
        let warning = serde_json::to_value(Visual::warning("No data available.")).unwrap();
        assert_eq!(
            warning,
            json!({ "kind": "warning", "message": "No data available." })
        );

        let chart = BarChart::horizontal("Food Types", "Food Type", "Listings")
            .with_categories(vec!["Vegan".to_string()])
            .with_series("listings", vec![4.0]);
        let value = serde_json::to_value(Visual::Bar(chart)).unwrap();
        assert_eq!(value["kind"], "bar");
        assert_eq!(value["orientation"], "horizontal");
        assert_eq!(value["series"][0]["values"][0], 4.0);
    }

    #[test]
    fn failures_render_as_errors() {
        let visual = Visual::from_outcome(
            QueryOutcome::<i64>::Failed("relation \"claims\" does not exist".to_string()),
            "unused",
            |_| unreachable!(),
        );
        assert_eq!(visual, Visual::error("relation \"claims\" does not exist"));
    }
}
