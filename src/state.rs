use std::sync::Arc;

use crate::directory::{Directory, Snapshot};
use crate::error::ApiError;
use crate::fleet::FleetEdits;

#[derive(Debug, Clone)]
pub struct AppState {
    directory: Arc<Directory>,
    pub edits: FleetEdits,
}

impl AppState {
    pub fn new(directory: Directory) -> Self {
        Self {
            directory: Arc::new(directory),
            edits: FleetEdits::new(),
        }
    }

    /// Fresh read of the directory with the admin's fleet edits on top.
    pub async fn snapshot(&self) -> Result<Snapshot, ApiError> {
        let mut snapshot = self.directory.snapshot().await?;
        self.edits.apply(&mut snapshot).await;
        Ok(snapshot)
    }
}
