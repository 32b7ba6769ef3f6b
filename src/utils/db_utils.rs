use sqlx::{Executor, Sqlite};

/// Which uniqueness constraint an insert tripped over.
#[derive(Debug, PartialEq, Eq)]
pub struct UniqueViolation {
    /// Column list as sqlite reports it, e.g. `employees.email`
    pub columns: String,
}

impl UniqueViolation {
    pub fn involves(&self, column: &str) -> bool {
        let suffix = format!(".{column}");
        self.columns
            .split(',')
            .map(str::trim)
            .any(|c| c == column || c.ends_with(&suffix))
    }
}

/// Returns the violated columns when `err` is a UNIQUE / PRIMARY KEY failure.
pub fn unique_violation(err: &sqlx::Error) -> Option<UniqueViolation> {
    let db_err = match err {
        sqlx::Error::Database(db_err) => db_err,
        _ => return None,
    };

    // "UNIQUE constraint failed: employees.email"
    let message = db_err.message();
    if !db_err.is_unique_violation() && !message.starts_with("UNIQUE constraint failed") {
        return None;
    }

    let columns = message
        .split_once(':')
        .map(|(_, cols)| cols.trim())
        .unwrap_or(message);

    Some(UniqueViolation {
        columns: columns.to_string(),
    })
}

/// True when the error is any kind of constraint failure (unique, foreign key, not null, check).
pub fn is_constraint_violation(err: &sqlx::Error) -> bool {
    match err {
        sqlx::Error::Database(db_err) => db_err.message().contains("constraint failed"),
        _ => false,
    }
}

pub async fn employee_exists<'e, E>(executor: E, employee_id: &str) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Sqlite>,
{
    let found = sqlx::query_scalar::<_, i64>("SELECT 1 FROM employees WHERE employee_id = ?")
        .bind(employee_id)
        .fetch_optional(executor)
        .await?;

    Ok(found.is_some())
}
