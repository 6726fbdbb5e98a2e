use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::{TodoError, TodoPort};
use crate::external_connections::ExternalConnectivity;
use crate::routing_utils::{
    BasicErrorResponse, GenericErrorResponse, IdMismatchErrorResponse, Json,
    NotFoundErrorResponse, Path, ValidationErrorResponse,
};
use crate::{AppState, SharedData, domain, dto, persistence};
use axum::Router;
use axum::extract::State;
use axum::http::{HeaderName, StatusCode, header};
use axum::response::{ErrorResponse, IntoResponse, Response};
use axum::routing::get;
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::OpenApi;
use validator::Validate;

#[derive(OpenApi)]
#[openapi(
    paths(
        get_todo_items,
        get_todo_item,
        create_todo_item,
        update_todo_item,
        delete_todo_item
    ),
    components(responses(BasicErrorResponse))
)]
/// Defines the OpenAPI documentation for the todo item API
pub struct TodoApi;

/// Builds a router for all the routes under "/todoitems"
pub fn todo_routes() -> Router<Arc<SharedData>> {
    Router::new()
        .route(
            "/",
            get(|State(app_state): AppState| async move {
                let mut ext_cxn = app_state.ext_cxn.clone();
                let todo_service = domain::todo::TodoService {};
                let todo_reader = persistence::db_todo_driven_ports::DbTodoReader;

                get_todo_items(&mut ext_cxn, &todo_service, &todo_reader).await
            })
            .post(
                |State(app_state): AppState, Json(new_item): Json<dto::NewTodoItemDto>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};
                    let todo_writer = persistence::db_todo_driven_ports::DbTodoWriter;

                    create_todo_item(new_item, &mut ext_cxn, &todo_service, &todo_writer).await
                },
            ),
        )
        .route(
            "/:item_id",
            get(
                |State(app_state): AppState, Path(item_id): Path<i64>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};
                    let todo_reader = persistence::db_todo_driven_ports::DbTodoReader;

                    get_todo_item(item_id, &mut ext_cxn, &todo_service, &todo_reader).await
                },
            )
            .put(
                |State(app_state): AppState,
                 Path(item_id): Path<i64>,
                 Json(item_data): Json<dto::TodoItemDto>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};
                    let todo_writer = persistence::db_todo_driven_ports::DbTodoWriter;

                    update_todo_item(item_id, item_data, &mut ext_cxn, &todo_service, &todo_writer)
                        .await
                },
            )
            .delete(
                |State(app_state): AppState, Path(item_id): Path<i64>| async move {
                    let mut ext_cxn = app_state.ext_cxn.clone();
                    let todo_service = domain::todo::TodoService {};
                    let todo_writer = persistence::db_todo_driven_ports::DbTodoWriter;

                    delete_todo_item(item_id, &mut ext_cxn, &todo_service, &todo_writer).await
                },
            ),
        )
}

/// Turns domain failures into the matching API error response
struct TodoErrorResponse(TodoError);

impl IntoResponse for TodoErrorResponse {
    fn into_response(self) -> Response {
        match self.0 {
            err @ TodoError::IdMismatch { .. } => {
                warn!("Rejected todo item update: {err}");
                IdMismatchErrorResponse(err.to_string()).into_response()
            }
            TodoError::DoesNotExist(item_id) => {
                info!("Todo item {item_id} does not exist");
                NotFoundErrorResponse.into_response()
            }
            TodoError::PortError(err) => GenericErrorResponse(err).into_response(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/todoitems",
    tag = "Todo Items",
    responses(
        (status = 200, description = "Every stored todo item", body = [dto::TodoItemDto]),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Retrieves every todo item in the store
async fn get_todo_items(
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_reader: &impl TodoReader,
) -> Result<Json<Vec<dto::TodoItemDto>>, ErrorResponse> {
    info!("Requested todo items");
    let items = todo_service
        .all_items(&mut *ext_cxn, todo_reader)
        .await
        .map_err(GenericErrorResponse)?;

    Ok(Json(items.into_iter().map(dto::TodoItemDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/todoitems/{item_id}",
    tag = "Todo Items",
    params(("item_id" = i64, Path, description = "ID of the todo item")),
    responses(
        (status = 200, description = "The requested todo item", body = dto::TodoItemDto),
        (status = 404, response = BasicErrorResponse),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Retrieves a single todo item
async fn get_todo_item(
    item_id: i64,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_reader: &impl TodoReader,
) -> Result<Json<dto::TodoItemDto>, ErrorResponse> {
    info!("Requested todo item {item_id}");
    let item = todo_service
        .item_by_id(item_id, &mut *ext_cxn, todo_reader)
        .await
        .map_err(GenericErrorResponse)?;

    let Some(item) = item else {
        info!("Todo item {item_id} does not exist");
        return Err(NotFoundErrorResponse.into());
    };

    Ok(Json(dto::TodoItemDto::from(item)))
}

#[utoipa::path(
    post,
    path = "/todoitems",
    tag = "Todo Items",
    request_body = dto::NewTodoItemDto,
    responses(
        (status = 201, description = "Todo item was created", body = dto::TodoItemDto,
            headers(("Location" = String, description = "Path of the new todo item"))),
        (status = 400, response = BasicErrorResponse),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Creates a todo item with a store-assigned ID
async fn create_todo_item(
    new_item: dto::NewTodoItemDto,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_writer: &impl TodoWriter,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<dto::TodoItemDto>), ErrorResponse> {
    info!("Creating todo item {new_item}");
    new_item
        .validate()
        .map_err(ValidationErrorResponse::from)?;

    let domain_item = domain::todo::NewTodoItem::from(new_item);
    let created_item = todo_service
        .create_item(&domain_item, &mut *ext_cxn, todo_writer)
        .await
        .map_err(GenericErrorResponse)?;
    let location = format!("/todoitems/{}", created_item.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(dto::TodoItemDto::from(created_item)),
    ))
}

#[utoipa::path(
    put,
    path = "/todoitems/{item_id}",
    tag = "Todo Items",
    params(("item_id" = i64, Path, description = "ID of the todo item, must match the ID in the body")),
    request_body = dto::TodoItemDto,
    responses(
        (status = 204, description = "Todo item was replaced"),
        (status = 400, response = BasicErrorResponse),
        (status = 404, response = BasicErrorResponse),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Replaces the name and completion state of a todo item
async fn update_todo_item(
    item_id: i64,
    item_data: dto::TodoItemDto,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_writer: &impl TodoWriter,
) -> Result<StatusCode, ErrorResponse> {
    info!("Updating todo item {item_id} with {item_data}");
    item_data
        .validate()
        .map_err(ValidationErrorResponse::from)?;

    let domain_update = domain::todo::UpdateTodoItem::from(item_data);
    todo_service
        .update_item(item_id, &domain_update, &mut *ext_cxn, todo_writer)
        .await
        .map_err(TodoErrorResponse)?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/todoitems/{item_id}",
    tag = "Todo Items",
    params(("item_id" = i64, Path, description = "ID of the todo item")),
    responses(
        (status = 204, description = "Todo item was deleted"),
        (status = 404, response = BasicErrorResponse),
        (status = 500, response = BasicErrorResponse),
    ),
)]
/// Deletes a todo item
async fn delete_todo_item(
    item_id: i64,
    ext_cxn: &mut impl ExternalConnectivity,
    todo_service: &impl TodoPort,
    todo_writer: &impl TodoWriter,
) -> Result<StatusCode, ErrorResponse> {
    info!("Deleting todo item {item_id}");
    todo_service
        .delete_item(item_id, &mut *ext_cxn, todo_writer)
        .await
        .map_err(TodoErrorResponse)?;

    Ok(StatusCode::NO_CONTENT)
}
