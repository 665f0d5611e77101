// --- File: crates/policyhub_crud/src/routes.rs ---

use crate::handlers::{
    create_handler, delete_handler, list_handler, read_handler, update_handler, CrudState, Record,
};
use axum::{routing::get, Router};
use policyhub_db::Repository;
use std::sync::Arc;

/// Mounts list/create on `collection` and read/update/delete on `collection/{id}`.
pub fn routes<T, R>(collection: &str, label: &'static str, repository: R) -> Router
where
    T: Record,
    R: Repository<T> + 'static,
{
    let state = Arc::new(CrudState { repository, label });

    Router::new()
        .route(
            collection,
            get(list_handler::<T, R>).post(create_handler::<T, R>),
        )
        .route(
            &format!("{collection}/{{id}}"),
            get(read_handler::<T, R>)
                .put(update_handler::<T, R>)
                .delete(delete_handler::<T, R>),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use policyhub_db::DbError;
    use serde::{Deserialize, Serialize};
    use serde_json::{json, Value};
    use std::sync::Mutex;
    use tower::ServiceExt;

    #[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
    struct Note {
        #[serde(default)]
        id: Option<i64>,
        text: Value,
    }

    #[derive(Default)]
    struct MemoryRepository {
        rows: Mutex<Vec<Note>>,
    }

    impl Repository<Note> for MemoryRepository {
        async fn init_schema(&self) -> Result<(), DbError> {
            Ok(())
        }

        async fn create(&self, note: Note) -> Result<i64, DbError> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.len() as i64 + 1;
            rows.push(Note { id: Some(id), ..note });
            Ok(id)
        }

        async fn find_all(&self) -> Result<Vec<Note>, DbError> {
            Ok(self.rows.lock().unwrap().clone())
        }

        async fn read(&self, id: i64) -> Result<Option<Note>, DbError> {
            Ok(self.rows.lock().unwrap().iter().find(|n| n.id == Some(id)).cloned())
        }

        async fn update(&self, id: i64, note: Note) -> Result<u64, DbError> {
            let mut rows = self.rows.lock().unwrap();
            match rows.iter_mut().find(|n| n.id == Some(id)) {
                Some(row) => {
                    *row = Note { id: Some(id), ..note };
                    Ok(1)
                }
                None => Ok(0),
            }
        }

        async fn delete(&self, id: i64) -> Result<u64, DbError> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|n| n.id != Some(id));
            Ok((before - rows.len()) as u64)
        }
    }

    fn app() -> Router {
        routes::<Note, _>("/notes", "note", MemoryRepository::default())
    }

    async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn create_read_update_delete_cycle() {
        let app = app();
        let (status, body) = send(&app, "POST", "/notes", Some(r#"{"text":"first"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "id": 1 }));

        let (_, body) = send(&app, "GET", "/notes/1", None).await;
        assert_eq!(body, json!({ "id": 1, "text": "first" }));

        let (status, _) = send(&app, "PUT", "/notes/1", Some(r#"{"text":2}"#)).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, "GET", "/notes", None).await;
        assert_eq!(body, json!([{ "id": 1, "text": 2 }]));

        let (status, _) = send(&app, "DELETE", "/notes/1", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, "GET", "/notes/1", None).await;
        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn unmatched_update_and_delete_still_succeed() {
        let app = app();
        let (status, _) = send(&app, "PUT", "/notes/9", Some(r#"{"text":"x"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = send(&app, "DELETE", "/notes/9", None).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(&app, "GET", "/notes", None).await;
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn bad_ids_and_bodies_are_client_errors() {
        let app = app();
        let (status, _) = send(&app, "GET", "/notes/abc", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, "POST", "/notes", Some("{not json")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}
