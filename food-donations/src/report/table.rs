use super::{Table, Visual};
use crate::catalog::Tabular;
use crate::outcome::QueryOutcome;

pub fn table<T: Tabular>(outcome: QueryOutcome<T>, empty_message: &str) -> Visual {
    Visual::from_outcome(outcome, empty_message, |rows| {
        Visual::Table(Table {
            columns: T::COLUMNS.iter().map(ToString::to_string).collect(),
            rows: rows.iter().map(Tabular::cells).collect(),
        })
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::catalog::{ClaimStatusShare, ProviderContact};

    #[test]
    fn rows_follow_column_order() {
        let outcome = QueryOutcome::Data(vec![ClaimStatusShare {
            status: Some("Completed".to_string()),
            total: 3,
            percentage: 60.0,
        }]);

        let Visual::Table(table) = table(outcome, "no claims") else {
            panic!("expected a table");
        };
        assert_eq!(table.columns, vec!["status", "total", "percentage"]);
        assert_eq!(
            table.rows,
            vec![vec![json!("Completed"), json!(3), json!(60.0)]]
        );
    }

    #[test]
    fn null_columns_become_null_cells() {
        let outcome = QueryOutcome::Data(vec![ProviderContact {
            name: Some("Gamma Bistro".to_string()),
            contact: None,
            provider_type: Some("Restaurant".to_string()),
            city: Some("Austin".to_string()),
        }]);

        let Visual::Table(table) = table(outcome, "no providers") else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[0][1], serde_json::Value::Null);
    }

    #[test]
    fn empty_city_renders_a_warning() {
        let visual = table(
            QueryOutcome::<ProviderContact>::Empty,
            "No providers found in the selected city.",
        );
        assert_eq!(
            visual,
            Visual::warning("No providers found in the selected city.")
        );
    }
}
