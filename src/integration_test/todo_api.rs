use super::test_util::{empty_app, seeded_app, send};
use crate::api::test_util::{deserialize_body, error_body};
use crate::db::test_util::seeding_todo_items;
use crate::dto::TodoItemDto;
use axum::http::{Method, StatusCode, header};
use serde_json::{Value, json};
use speculoos::prelude::*;

async fn listed_items(app: &axum::Router) -> Vec<TodoItemDto> {
    let response = send(app, Method::GET, "/todoitems", None).await;
    assert_eq!(StatusCode::OK, response.status());

    deserialize_body(response.into_body()).await
}

fn seeded_dtos() -> Vec<TodoItemDto> {
    seeding_todo_items()
        .into_iter()
        .map(TodoItemDto::from)
        .collect()
}

#[tokio::test]
async fn lists_seeded_items() {
    let app = seeded_app().await;

    let items = listed_items(&app).await;
    assert_eq!(seeded_dtos(), items);
}

#[tokio::test]
async fn lists_nothing_from_empty_store() {
    let app = empty_app().await;

    let items = listed_items(&app).await;
    assert_that!(items).has_length(0);
}

#[tokio::test]
async fn list_uses_camel_case_field_names() {
    let app = seeded_app().await;

    let response = send(&app, Method::GET, "/todoitems", None).await;
    let body: Value = deserialize_body(response.into_body()).await;
    assert_eq!(
        json!({ "id": 3, "name": "Estudar Rust", "isComplete": true }),
        body[2]
    );
}

#[tokio::test]
async fn gets_single_item() {
    let app = seeded_app().await;

    let response = send(&app, Method::GET, "/todoitems/2", None).await;
    assert_eq!(StatusCode::OK, response.status());

    let item: TodoItemDto = deserialize_body(response.into_body()).await;
    assert_eq!("Lavar a louça", item.name);
}

#[tokio::test]
async fn get_of_missing_item_is_404() {
    let app = seeded_app().await;

    let response = send(&app, Method::GET, "/todoitems/-1", None).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());

    let body = error_body(response).await;
    assert_eq!("not_found", body.error_code);
}

#[tokio::test]
async fn get_with_non_numeric_id_is_400() {
    let app = seeded_app().await;

    let response = send(&app, Method::GET, "/todoitems/abc", None).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body = error_body(response).await;
    assert_eq!("invalid_path", body.error_code);
    assert_that!(body.extra_info).is_some();
}

#[tokio::test]
async fn put_and_delete_with_non_numeric_id_are_400() {
    let app = seeded_app().await;

    let put_response = send(
        &app,
        Method::PUT,
        "/todoitems/abc",
        Some(r#"{ "id": 1, "name": "Fazer arroz", "isComplete": true }"#),
    )
    .await;
    assert_eq!(StatusCode::BAD_REQUEST, put_response.status());
    assert_eq!("invalid_path", error_body(put_response).await.error_code);

    let delete_response = send(&app, Method::DELETE, "/todoitems/abc", None).await;
    assert_eq!(StatusCode::BAD_REQUEST, delete_response.status());
    assert_eq!("invalid_path", error_body(delete_response).await.error_code);

    assert_eq!(seeded_dtos(), listed_items(&app).await);
}

#[tokio::test]
async fn creates_item() {
    let app = seeded_app().await;

    let response = send(
        &app,
        Method::POST,
        "/todoitems",
        Some(r#"{ "name": "Regar as plantas" }"#),
    )
    .await;
    assert_eq!(StatusCode::CREATED, response.status());

    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let created: TodoItemDto = deserialize_body(response.into_body()).await;
    assert_that!(location).is_some().is_equal_to(format!("/todoitems/{}", created.id));
    assert!(!created.is_complete);

    let fetched = send(&app, Method::GET, &format!("/todoitems/{}", created.id), None).await;
    assert_eq!(StatusCode::OK, fetched.status());
    assert_eq!(seeding_todo_items().len() + 1, listed_items(&app).await.len());
}

#[tokio::test]
async fn create_with_empty_name_is_400() {
    let app = seeded_app().await;

    let response = send(&app, Method::POST, "/todoitems", Some(r#"{ "name": "" }"#)).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body = error_body(response).await;
    assert_eq!("invalid_input", body.error_code);
    assert_eq!(seeded_dtos(), listed_items(&app).await);
}

#[tokio::test]
async fn updates_existing_item() {
    let app = seeded_app().await;

    let response = send(
        &app,
        Method::PUT,
        "/todoitems/1",
        Some(r#"{ "id": 1, "name": "Fazer arroz", "isComplete": true }"#),
    )
    .await;
    assert_eq!(StatusCode::NO_CONTENT, response.status());

    let fetched = send(&app, Method::GET, "/todoitems/1", None).await;
    let item: TodoItemDto = deserialize_body(fetched.into_body()).await;
    assert!(item.is_complete);
}

#[tokio::test]
async fn update_of_missing_item_is_404() {
    let app = seeded_app().await;

    let response = send(
        &app,
        Method::PUT,
        "/todoitems/10",
        Some(r#"{ "id": 10, "name": "Fazer arroz", "isComplete": true }"#),
    )
    .await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    assert_eq!(seeded_dtos(), listed_items(&app).await);
}

#[tokio::test]
async fn update_with_mismatched_id_is_400() {
    let app = seeded_app().await;

    let response = send(
        &app,
        Method::PUT,
        "/todoitems/1",
        Some(r#"{ "id": 2, "name": "Fazer arroz", "isComplete": true }"#),
    )
    .await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body = error_body(response).await;
    assert_eq!("id_mismatch", body.error_code);
    assert_eq!(seeded_dtos(), listed_items(&app).await);
}

#[tokio::test]
async fn update_with_malformed_json_is_400() {
    let app = seeded_app().await;

    let response = send(&app, Method::PUT, "/todoitems/1", Some(r#"{ "id": 1, "#)).await;
    assert_eq!(StatusCode::BAD_REQUEST, response.status());

    let body = error_body(response).await;
    assert_eq!("invalid_json", body.error_code);
    assert_that!(body.extra_info).is_some();
}

#[tokio::test]
async fn deletes_existing_item() {
    let app = seeded_app().await;

    let response = send(&app, Method::DELETE, "/todoitems/1", None).await;
    assert_eq!(StatusCode::NO_CONTENT, response.status());

    let remaining_ids: Vec<i64> = listed_items(&app).await.iter().map(|item| item.id).collect();
    assert_eq!(vec![2, 3], remaining_ids);

    let fetched = send(&app, Method::GET, "/todoitems/1", None).await;
    assert_eq!(StatusCode::NOT_FOUND, fetched.status());
}

#[tokio::test]
async fn delete_of_missing_item_is_404() {
    let app = seeded_app().await;

    let response = send(&app, Method::DELETE, "/todoitems/10", None).await;
    assert_eq!(StatusCode::NOT_FOUND, response.status());
    assert_eq!(seeded_dtos(), listed_items(&app).await);
}

#[tokio::test]
async fn serves_openapi_document() {
    let app = empty_app().await;

    let response = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(StatusCode::OK, response.status());

    let document: Value = deserialize_body(response.into_body()).await;
    assert!(document["paths"]["/todoitems"].is_object());
    assert!(document["paths"]["/todoitems/{item_id}"].is_object());
    assert!(document["components"]["schemas"]["TodoItemDto"].is_object());
}
