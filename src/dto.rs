use utoipa::OpenApi;

mod todo;

pub use todo::*;

/// Collects the OpenAPI schemas of every DTO the API sends or receives
#[derive(OpenApi)]
#[openapi(components(schemas(TodoItemDto, NewTodoItemDto)))]
pub struct OpenApiSchemas;
