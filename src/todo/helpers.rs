use crate::internal_error::{InternalError, InternalResult};

use super::data::*;

/// Millisecond timestamp, bumped past the largest id already in use.
pub fn next_todo_id(todos: &[Todo], now_millis: i64) -> TodoID {
    let after_last = todos
        .iter()
        .map(|todo| todo.id)
        .max()
        .map_or(1, |id| id.saturating_add(1));

    now_millis.max(after_last)
}

pub fn create_todo(
    todos: &mut Vec<Todo>,
    new_todo: NewTodo,
    now_millis: i64,
) -> InternalResult<Todo> {
    if !new_todo.priority.any() {
        return Err(InternalError::NoPriority);
    }

    let todo = new_todo.into_todo(next_todo_id(todos, now_millis));
    todos.push(todo.clone());

    Ok(todo)
}

pub fn find_todo_mut(todos: &mut [Todo], todo_id: TodoID) -> InternalResult<&mut Todo> {
    todos
        .iter_mut()
        .find(|todo| todo.id == todo_id)
        .ok_or(InternalError::NotFound(todo_id))
}

pub fn remove_todo(todos: &mut Vec<Todo>, todo_id: TodoID) -> InternalResult<Todo> {
    match todos.iter().position(|todo| todo.id == todo_id) {
        Some(index) => Ok(todos.remove(index)),
        None => Err(InternalError::NotFound(todo_id)),
    }
}

pub fn mark_complete(todos: &mut [Todo], todo_id: TodoID) -> InternalResult<()> {
    find_todo_mut(todos, todo_id)?.status = STATUS_COMPLETE.to_string();
    Ok(())
}

// Priority is not re-validated here: a patch may clear every flag.
pub fn update_todo(
    todos: &mut [Todo],
    todo_id: TodoID,
    patch: TodoPatch,
) -> InternalResult<Todo> {
    let todo = find_todo_mut(todos, todo_id)?;
    todo.apply(patch);
    Ok(todo.clone())
}
