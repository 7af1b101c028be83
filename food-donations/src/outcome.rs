use crate::error::DbError;

/// What a single catalog query produced. Every query is classified into one of
/// these so a failing query never takes its neighbours down with it.
#[derive(Debug)]
pub enum QueryOutcome<T> {
    Data(Vec<T>),
    Empty,
    Failed(String),
}

impl<T> QueryOutcome<T> {
    pub fn from_rows(rows: Vec<T>) -> Self {
        if rows.is_empty() {
            QueryOutcome::Empty
        } else {
            QueryOutcome::Data(rows)
        }
    }

    /// Classifies a query result. Failures are logged here so that every call
    /// site reports them the same way.
    pub fn classify(query: &str, result: Result<Vec<T>, DbError>) -> Self {
        match result {
            Ok(rows) => Self::from_rows(rows),
            Err(e) => {
                tracing::error!(%query, error = ?e, "report query failed");
                QueryOutcome::Failed(e.to_string())
            }
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, QueryOutcome::Failed(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_rows_are_not_failures() {
        let outcome = QueryOutcome::<i64>::classify("food types", Ok(vec![]));
        assert!(matches!(outcome, QueryOutcome::Empty));
        assert!(!outcome.is_failed());
    }

    #[test]
    fn errors_keep_the_database_message() {
        let error = sqlx::Error::ColumnNotFound("food_name".into());
        let outcome = QueryOutcome::<i64>::classify("claims per food item", Err(error.into()));

        match outcome {
            QueryOutcome::Failed(reason) => assert!(reason.contains("food_name")),
            other => panic!("expected failure, got {other:?}"),
        }
    }
}
