use chrono::offset::Utc;
use log::info;
use rocket::serde::json::Json;
use rocket::{delete, get, patch, post, routes, Route, State};

use crate::data::StoreHandle;
use crate::internal_error::{InternalError, InternalResult};

use super::data::*;
use super::helpers::*;

#[get("/")]
pub fn index() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "Hello, FastAPI!".to_string(),
    })
}

#[post("/todos", data = "<new_todo>")]
pub async fn add_todo(
    new_todo: Json<NewTodo>,
    store: &State<StoreHandle>,
) -> InternalResult<Json<Todo>> {
    // also checked by create_todo; checking here first leaves the file unread
    if !new_todo.priority.any() {
        return Err(InternalError::NoPriority);
    }

    let store = store.lock().await;
    let mut todos = store.load().await?;

    let todo = create_todo(&mut todos, new_todo.into_inner(), Utc::now().timestamp_millis())?;
    store.save(&todos).await?;

    info!("created todo {}", todo.id);
    Ok(Json(todo))
}

#[get("/alltodos")]
pub async fn get_todos(store: &State<StoreHandle>) -> InternalResult<Json<Vec<Todo>>> {
    let store = store.lock().await;
    let todos = store.load().await?;

    Ok(Json(todos))
}

#[delete("/todos/<todo_id>")]
pub async fn delete_todo(
    todo_id: TodoID,
    store: &State<StoreHandle>,
) -> InternalResult<Json<DeleteResponse>> {
    let store = store.lock().await;
    let mut todos = store.load().await?;

    remove_todo(&mut todos, todo_id)?;
    store.save(&todos).await?;

    info!("deleted todo {}", todo_id);
    Ok(Json(DeleteResponse {
        message: "Todo deleted successfully".to_string(),
        id: todo_id,
    }))
}

#[patch("/todo_complete/<todo_id>")]
pub async fn complete_todo(
    todo_id: TodoID,
    store: &State<StoreHandle>,
) -> InternalResult<Json<CompleteResponse>> {
    let store = store.lock().await;
    let mut todos = store.load().await?;

    mark_complete(&mut todos, todo_id)?;
    store.save(&todos).await?;

    info!("completed todo {}", todo_id);
    Ok(Json(CompleteResponse {
        message: "Todo status updated successfully".to_string(),
        id: todo_id,
        status: STATUS_COMPLETE.to_string(),
    }))
}

#[patch("/todos/<todo_id>", data = "<patch>")]
pub async fn set_todo(
    todo_id: TodoID,
    patch: Json<TodoPatch>,
    store: &State<StoreHandle>,
) -> InternalResult<Json<UpdateResponse>> {
    let store = store.lock().await;
    let mut todos = store.load().await?;

    let todo = update_todo(&mut todos, todo_id, patch.into_inner())?;
    store.save(&todos).await?;

    info!("updated todo {}", todo_id);
    Ok(Json(UpdateResponse {
        message: "Todo updated successfully".to_string(),
        todo,
    }))
}

pub fn todo_routes() -> Vec<Route> {
    routes![
        index,
        add_todo,
        get_todos,
        delete_todo,
        complete_todo,
        set_todo,
    ]
}
