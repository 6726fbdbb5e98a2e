use crate::domain;
use crate::domain::DrivenPortError;
use crate::domain::todo::{NewTodoItem, TodoItem, UpdateTodoItem};
use crate::external_connections::{ConnectionHandle, ExternalConnectivity};
use anyhow::{Context, Error};
use sqlx::{FromRow, query, query_as};

pub struct DbTodoReader;

#[derive(FromRow)]
struct TodoItemRow {
    id: i64,
    name: String,
    is_complete: bool,
}

impl From<TodoItemRow> for domain::todo::TodoItem {
    fn from(value: TodoItemRow) -> Self {
        TodoItem {
            id: value.id,
            name: value.name,
            is_complete: value.is_complete,
        }
    }
}

impl domain::todo::driven_ports::TodoReader for DbTodoReader {
    async fn all_items(&self, ext_cxn: &mut impl ExternalConnectivity) -> Result<Vec<TodoItem>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todo_items: Vec<TodoItem> = query_as::<_, TodoItemRow>(
            "SELECT ti.id, ti.name, ti.is_complete FROM todo_item ti ORDER BY ti.id",
        )
        .fetch_all(cxn.borrow_connection())
        .await
        .context("trying to fetch all todo items")?
        .into_iter()
        .map(domain::todo::TodoItem::from)
        .collect();

        Ok(todo_items)
    }

    async fn item_by_id(
        &self,
        item_id: i64,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<Option<TodoItem>, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let todo_item = query_as::<_, TodoItemRow>(
            "SELECT ti.id, ti.name, ti.is_complete FROM todo_item ti WHERE ti.id = ?",
        )
        .bind(item_id)
        .fetch_optional(cxn.borrow_connection())
        .await
        .context("trying to fetch a todo item by ID")?
        .map(domain::todo::TodoItem::from);

        Ok(todo_item)
    }
}

pub struct DbTodoWriter;

impl domain::todo::driven_ports::TodoWriter for DbTodoWriter {
    async fn create_item(
        &self,
        new_item: &NewTodoItem,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<i64, Error> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let insert_result = query("INSERT INTO todo_item(name, is_complete) VALUES (?, ?)")
            .bind(&new_item.name)
            .bind(new_item.is_complete)
            .execute(cxn.borrow_connection())
            .await
            .context("trying to insert a new todo item into the database")?;

        Ok(insert_result.last_insert_rowid())
    }

    async fn update_item(
        &self,
        item_id: i64,
        update: &UpdateTodoItem,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<(), DrivenPortError> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let update_result = query("UPDATE todo_item SET name = ?, is_complete = ? WHERE id = ?")
            .bind(&update.name)
            .bind(update.is_complete)
            .bind(item_id)
            .execute(cxn.borrow_connection())
            .await
            .context("trying to update a todo item in the database")?;

        if update_result.rows_affected() == 0 {
            return Err(DrivenPortError::DoesNotExist);
        }

        Ok(())
    }

    async fn delete_item(
        &self,
        item_id: i64,
        ext_cxn: &mut impl ExternalConnectivity,
    ) -> Result<(), DrivenPortError> {
        let mut cxn = ext_cxn.database_cxn().await?;

        let delete_result = query("DELETE FROM todo_item WHERE id = ?")
            .bind(item_id)
            .execute(cxn.borrow_connection())
            .await
            .context("trying to remove a todo item from the database")?;

        if delete_result.rows_affected() == 0 {
            return Err(DrivenPortError::DoesNotExist);
        }

        Ok(())
    }
}
