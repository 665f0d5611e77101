//! Column codecs for the `Any` driver.
//!
//! `AnyRow::try_get::<Option<T>>` rejects SQL NULL with a type mismatch, so
//! every nullable column is checked with `try_get_raw` before decoding.
//! Member and policy fields are stored in untyped columns and come back as
//! whatever SQLite holds: integer, real, text or NULL.

use crate::error::DbError;
use serde_json::Value;
use sqlx::any::{Any, AnyArguments, AnyRow};
use sqlx::query::Query;
use sqlx::{Decode, Row, Type, ValueRef};

pub type AnyQuery<'q> = Query<'q, Any, AnyArguments<'q>>;

/// Decode a column that may hold NULL.
pub fn nullable<T>(row: &AnyRow, column: &str) -> Result<Option<T>, DbError>
where
    T: for<'r> Decode<'r, Any> + Type<Any>,
{
    if row.try_get_raw(column)?.is_null() {
        return Ok(None);
    }
    Ok(Some(row.try_get(column)?))
}

/// Read an untyped column as JSON without coercing it.
pub fn loose_value(row: &AnyRow, column: &str) -> Result<Value, DbError> {
    if row.try_get_raw(column)?.is_null() {
        return Ok(Value::Null);
    }
    if let Ok(integer) = row.try_get::<i64, _>(column) {
        return Ok(Value::from(integer));
    }
    if let Ok(real) = row.try_get::<f64, _>(column) {
        return Ok(Value::from(real));
    }
    let text: String = row.try_get(column)?;
    Ok(Value::String(text))
}

/// Bind a JSON value as the closest SQLite storage class.
///
/// Booleans become 0/1 and arrays or objects are stored as JSON text.
pub fn bind_loose(query: AnyQuery<'_>, value: Value) -> AnyQuery<'_> {
    match value {
        Value::Null => query.bind(None::<String>),
        Value::Bool(flag) => query.bind(i64::from(flag)),
        Value::Number(number) => match number.as_i64() {
            Some(integer) => query.bind(integer),
            None => query.bind(number.as_f64()),
        },
        Value::String(text) => query.bind(text),
        nested => query.bind(nested.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DbClient;
    use serde_json::json;

    async fn scratch() -> DbClient {
        let client = DbClient::from_url("sqlite::memory:").await.unwrap();
        client
            .execute("CREATE TABLE scratch (id INTEGER PRIMARY KEY, v, t TEXT)")
            .await
            .unwrap();
        client
    }

    async fn store_and_read(client: &DbClient, value: Value) -> Value {
        let query = sqlx::query("INSERT INTO scratch (v) VALUES ($1) RETURNING id");
        let row = bind_loose(query, value).fetch_one(client.pool()).await.unwrap();
        let id: i64 = row.get("id");
        let row = sqlx::query("SELECT v FROM scratch WHERE id = $1")
            .bind(id)
            .fetch_one(client.pool())
            .await
            .unwrap();
        loose_value(&row, "v").unwrap()
    }

    #[tokio::test]
    async fn untyped_column_keeps_json_kinds() {
        let client = scratch().await;
        for value in [json!(null), json!(50000), json!(299.5), json!("50000"), json!("Family")] {
            assert_eq!(store_and_read(&client, value.clone()).await, value);
        }
        assert_eq!(store_and_read(&client, json!(true)).await, json!(1));
        assert_eq!(store_and_read(&client, json!({"a": 1})).await, json!(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn nullable_reads_null_as_none() {
        let client = scratch().await;
        client.execute("INSERT INTO scratch (id, t) VALUES (1, NULL)").await.unwrap();
        client.execute("INSERT INTO scratch (id, t) VALUES (2, 'x')").await.unwrap();

        let rows = sqlx::query("SELECT t FROM scratch ORDER BY id")
            .fetch_all(client.pool())
            .await
            .unwrap();
        assert_eq!(nullable::<String>(&rows[0], "t").unwrap(), None);
        assert_eq!(nullable::<String>(&rows[1], "t").unwrap(), Some("x".to_string()));
    }
}
