use log::{debug, error};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tokio::fs;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::internal_error::InternalResult;

use super::data::Todo;

/// The whole todo collection, kept as one JSON array in one file.
pub struct TodoStore {
    path: PathBuf,
}

impl TodoStore {
    pub fn new(path: impl Into<PathBuf>) -> TodoStore {
        TodoStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> InternalResult<Vec<Todo>> {
        match fs::read(&self.path).await {
            Ok(contents) => {
                let todos: Vec<Todo> = serde_json::from_slice(&contents)?;
                debug!("loaded {} todos from {}", todos.len(), self.path.display());
                Ok(todos)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(vec![]),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn save(&self, todos: &[Todo]) -> InternalResult<()> {
        let contents = to_pretty_json(todos)?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, contents).await?;
        if let Err(e) = fs::rename(&tmp_path, &self.path).await {
            if let Err(remove_error) = fs::remove_file(&tmp_path).await {
                error!(
                    "failed to remove {}: {}",
                    tmp_path.display(),
                    remove_error
                );
            }
            return Err(e.into());
        }

        debug!("saved {} todos to {}", todos.len(), self.path.display());
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.path.with_file_name(format!(".{}.tmp", file_name))
    }
}

fn to_pretty_json(todos: &[Todo]) -> serde_json::Result<Vec<u8>> {
    let mut contents = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut contents, PrettyFormatter::with_indent(b"    "));
    todos.serialize(&mut serializer)?;
    Ok(contents)
}
