use common::error::{AppError, Res};
use sqlx::{Executor, Postgres, QueryBuilder};

/// The closed set of user columns a partial update may touch. Column names
/// are spliced into the statement text, so they must never come from request
/// data; this enum is the only way to name one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    PictureUrl,
    BillingCustomerId,
    Active,
}

impl UserField {
    pub fn column(self) -> &'static str {
        match self {
            UserField::FirstName => "first_name",
            UserField::LastName => "last_name",
            UserField::Email => "email",
            UserField::PictureUrl => "picture_url",
            UserField::BillingCustomerId => "billing_customer_id",
            UserField::Active => "active",
        }
    }
}

#[derive(Debug, Clone)]
pub enum FieldValue {
    Text(String),
    OptText(Option<String>),
    Bool(bool),
}

/// Builds one `UPDATE` statement covering exactly the fields it was given,
/// plus a forced `updated_at = now()`. Values are always bind parameters.
/// Runs against any executor, so the same delta works on a pool connection or
/// inside a transaction.
#[derive(Debug, Default)]
pub struct UserUpdate {
    fields: Vec<(UserField, FieldValue)>,
}

impl UserUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a field delta. Setting the same field twice keeps the latest
    /// value; a column may appear only once in the statement.
    pub fn set(mut self, field: UserField, value: FieldValue) -> Self {
        if let Some(entry) = self.fields.iter_mut().find(|(f, _)| *f == field) {
            entry.1 = value;
        } else {
            self.fields.push((field, value));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Executes the update against `executor`. An empty delta is a successful
    /// no-op that never reaches the store. Execution failures surface to the
    /// caller without retries.
    pub async fn execute<'e, E: Executor<'e, Database = Postgres>>(
        &self,
        executor: E,
        user_id: i64,
    ) -> Res<()> {
        if self.is_empty() {
            return Ok(());
        }
        let mut query = self.build(user_id);
        query
            .build()
            .execute(executor)
            .await
            .map_err(AppError::from)?;
        Ok(())
    }

    fn build(&self, user_id: i64) -> QueryBuilder<'static, Postgres> {
        let mut query = QueryBuilder::new("UPDATE users SET updated_at = now()");
        for (field, value) in &self.fields {
            query.push(", ");
            query.push(field.column());
            query.push(" = ");
            match value {
                FieldValue::Text(v) => query.push_bind(v.clone()),
                FieldValue::OptText(v) => query.push_bind(v.clone()),
                FieldValue::Bool(v) => query.push_bind(*v),
            };
        }
        query.push(" WHERE id = ");
        query.push_bind(user_id);
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statement_covers_exactly_the_staged_fields() {
        let update = UserUpdate::new()
            .set(UserField::FirstName, FieldValue::Text("Ada".to_string()))
            .set(UserField::PictureUrl, FieldValue::OptText(None));
        assert_eq!(
            update.build(42).into_sql(),
            "UPDATE users SET updated_at = now(), first_name = $1, picture_url = $2 WHERE id = $3"
        );
    }

    #[test]
    fn every_value_is_a_bind_parameter() {
        let update = UserUpdate::new().set(
            UserField::BillingCustomerId,
            FieldValue::Text("cus_' OR 1=1 --".to_string()),
        );
        let sql = update.build(1).into_sql();
        assert!(!sql.contains("OR 1=1"));
        assert!(sql.contains("billing_customer_id = $1"));
    }

    #[test]
    fn setting_a_field_twice_keeps_the_latest_value() {
        let update = UserUpdate::new()
            .set(UserField::Email, FieldValue::Text("a@x".to_string()))
            .set(UserField::Email, FieldValue::Text("b@x".to_string()));
        let sql = update.build(1).into_sql();
        assert_eq!(sql.matches("email = ").count(), 1);
    }

    #[test]
    fn empty_update_stays_empty() {
        assert!(UserUpdate::new().is_empty());
        assert!(!UserUpdate::new()
            .set(UserField::Active, FieldValue::Bool(false))
            .is_empty());
    }
}
