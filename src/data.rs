use std::sync::Arc;
use tokio::sync::Mutex;

use crate::todo::store::TodoStore;

/// Held from load to save, so requests mutate the todo file one at a time.
pub type StoreHandle = Arc<Mutex<TodoStore>>;

pub fn store_handle(store: TodoStore) -> StoreHandle {
    Arc::new(Mutex::new(store))
}
