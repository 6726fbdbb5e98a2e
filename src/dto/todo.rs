use crate::domain;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// DTO for a todo item, both as returned by the API and as submitted to replace an existing item
#[derive(Debug, Serialize, Deserialize, Display, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[display("todo item {id} (\"{name}\", complete: {is_complete})")]
#[cfg_attr(test, derive(PartialEq, Eq, Clone))]
pub struct TodoItemDto {
    #[schema(example = 1)]
    pub id: i64,
    #[validate(length(min = 1))]
    #[schema(example = "Fazer arroz")]
    pub name: String,
    #[schema(example = false)]
    pub is_complete: bool,
}

impl From<domain::todo::TodoItem> for TodoItemDto {
    fn from(value: domain::todo::TodoItem) -> Self {
        TodoItemDto {
            id: value.id,
            name: value.name,
            is_complete: value.is_complete,
        }
    }
}

impl From<TodoItemDto> for domain::todo::UpdateTodoItem {
    fn from(value: TodoItemDto) -> Self {
        domain::todo::UpdateTodoItem {
            id: value.id,
            name: value.name,
            is_complete: value.is_complete,
        }
    }
}

/// DTO for creating a todo item via the API. The store picks the new item's ID.
#[derive(Debug, Deserialize, Display, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
#[display("\"{name}\" (complete: {is_complete})")]
#[cfg_attr(test, derive(Serialize))]
pub struct NewTodoItemDto {
    #[validate(length(min = 1))]
    #[schema(example = "Lavar a louça")]
    pub name: String,
    #[serde(default)]
    #[schema(example = false)]
    pub is_complete: bool,
}

impl From<NewTodoItemDto> for domain::todo::NewTodoItem {
    fn from(value: NewTodoItemDto) -> Self {
        domain::todo::NewTodoItem {
            name: value.name,
            is_complete: value.is_complete,
        }
    }
}
