use rocket::tokio::task::JoinError;

use crate::model::error::{ErrorKind, TreeError};

pub mod api_handler;
pub mod export_handler;
pub mod file_handler;
pub mod folder_handler;

/// the blocking task behind a request panicked or was cancelled
#[derive(Debug)]
pub struct TaskFailed;

impl TreeError for TaskFailed {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Storage
    }

    fn message(&self) -> &'static str {
        "Failed to complete the request. Check server logs for details"
    }
}

/// runs a service call on the blocking thread pool so the database round trip doesn't stall the executor
pub async fn run_blocking<T, E, F>(task: F) -> Result<T, Box<dyn TreeError + Send>>
where
    F: FnOnce() -> Result<T, E> + Send + 'static,
    T: Send + 'static,
    E: TreeError + Send + 'static,
{
    match spawn_db_task(task).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(e)) => Err(Box::new(e)),
        Err(e) => {
            log::error!("Blocking task failed to complete. Error is {e:?}");
            Err(Box::new(TaskFailed))
        }
    }
}

/// moves database work off of the async executor
#[cfg(not(test))]
pub async fn spawn_db_task<T, F>(task: F) -> Result<T, JoinError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    rocket::tokio::task::spawn_blocking(task).await
}

/// test databases are named after the current thread, so the work has to stay on it
#[cfg(test)]
pub async fn spawn_db_task<T, F>(task: F) -> Result<T, JoinError>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    Ok(task())
}
