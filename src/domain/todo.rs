use crate::domain::DrivenPortError;
use crate::domain::todo::driven_ports::{TodoReader, TodoWriter};
use crate::domain::todo::driving_ports::TodoError;
use crate::external_connections::ExternalConnectivity;
use anyhow::Context;

#[derive(PartialEq, Eq, Debug)]
#[cfg_attr(test, derive(Clone))]
pub struct TodoItem {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

#[cfg_attr(test, derive(Clone, PartialEq, Eq, Debug))]
pub struct NewTodoItem {
    pub name: String,
    pub is_complete: bool,
}

/// Replacement content for an existing item. Carries the ID the caller believes it is updating,
/// which must agree with the ID of the item being replaced.
#[cfg_attr(test, derive(Clone, PartialEq, Eq, Debug))]
pub struct UpdateTodoItem {
    pub id: i64,
    pub name: String,
    pub is_complete: bool,
}

pub mod driven_ports {
    use super::*;

    pub trait TodoReader {
        async fn all_items(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Vec<TodoItem>, anyhow::Error>;
        async fn item_by_id(
            &self,
            item_id: i64,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<Option<TodoItem>, anyhow::Error>;
    }

    pub trait TodoWriter {
        /// Stores a new item and returns the ID the store assigned to it
        async fn create_item(
            &self,
            new_item: &NewTodoItem,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<i64, anyhow::Error>;

        /// Overwrites the content of an item. Fails with [DrivenPortError::DoesNotExist] if no
        /// item has the given ID.
        async fn update_item(
            &self,
            item_id: i64,
            update: &UpdateTodoItem,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<(), DrivenPortError>;

        /// Removes an item. Fails with [DrivenPortError::DoesNotExist] if no item has the given ID.
        async fn delete_item(
            &self,
            item_id: i64,
            ext_cxn: &mut impl ExternalConnectivity,
        ) -> Result<(), DrivenPortError>;
    }
}

pub mod driving_ports {
    use super::*;
    use thiserror::Error;

    #[derive(Debug, Error)]
    pub enum TodoError {
        #[error("the request body refers to todo item {body_id}, but todo item {path_id} was requested")]
        IdMismatch { path_id: i64, body_id: i64 },
        #[error("todo item {0} does not exist")]
        DoesNotExist(i64),
        #[error(transparent)]
        PortError(#[from] anyhow::Error),
    }

    impl TodoError {
        /// Converts a failure from a driven port into a TodoError, describing the [action] that was
        /// being attempted on item [item_id] if the port itself broke
        pub(super) fn from_port_error(err: DrivenPortError, item_id: i64, action: &str) -> Self {
            match err {
                DrivenPortError::DoesNotExist => Self::DoesNotExist(item_id),
                DrivenPortError::CommsFailure(cause) => {
                    Self::PortError(cause.context(action.to_owned()))
                }
            }
        }
    }


    pub trait TodoPort {
        async fn all_items(
            &self,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
        ) -> Result<Vec<TodoItem>, anyhow::Error>;
        async fn item_by_id(
            &self,
            item_id: i64,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_read: &impl driven_ports::TodoReader,
        ) -> Result<Option<TodoItem>, anyhow::Error>;
        async fn create_item(
            &self,
            new_item: &NewTodoItem,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<TodoItem, anyhow::Error>;
        async fn update_item(
            &self,
            item_id: i64,
            update: &UpdateTodoItem,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<(), TodoError>;
        async fn delete_item(
            &self,
            item_id: i64,
            ext_cxn: &mut impl ExternalConnectivity,
            todo_write: &impl driven_ports::TodoWriter,
        ) -> Result<(), TodoError>;
    }
}

pub struct TodoService {}

impl driving_ports::TodoPort for TodoService {
    async fn all_items(
        &self,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Vec<TodoItem>, anyhow::Error> {
        let items = todo_read
            .all_items(&mut *ext_cxn)
            .await
            .context("listing todo items")?;

        Ok(items)
    }

    async fn item_by_id(
        &self,
        item_id: i64,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_read: &impl TodoReader,
    ) -> Result<Option<TodoItem>, anyhow::Error> {
        let item = todo_read
            .item_by_id(item_id, &mut *ext_cxn)
            .await
            .context("fetching a todo item")?;

        Ok(item)
    }

    async fn create_item(
        &self,
        new_item: &NewTodoItem,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<TodoItem, anyhow::Error> {
        let created_id = todo_write
            .create_item(new_item, &mut *ext_cxn)
            .await
            .context("creating a todo item")?;

        Ok(TodoItem {
            id: created_id,
            name: new_item.name.clone(),
            is_complete: new_item.is_complete,
        })
    }

    async fn update_item(
        &self,
        item_id: i64,
        update: &UpdateTodoItem,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<(), TodoError> {
        if update.id != item_id {
            return Err(TodoError::IdMismatch {
                path_id: item_id,
                body_id: update.id,
            });
        }

        todo_write
            .update_item(item_id, update, &mut *ext_cxn)
            .await
            .map_err(|err| TodoError::from_port_error(err, item_id, "updating a todo item"))
    }

    async fn delete_item(
        &self,
        item_id: i64,
        ext_cxn: &mut impl ExternalConnectivity,
        todo_write: &impl TodoWriter,
    ) -> Result<(), TodoError> {
        todo_write
            .delete_item(item_id, &mut *ext_cxn)
            .await
            .map_err(|err| TodoError::from_port_error(err, item_id, "deleting a todo item"))
    }
}
