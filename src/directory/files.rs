use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::info;

use super::{DirectoryError, Snapshot};
use crate::model::{BusRow, Route, StopRow};

/// Reads `routes.csv`, `stops.csv` and `buses.csv` from a directory.
#[derive(Debug, Clone)]
pub struct CsvDirectory {
    dir: PathBuf,
}

impl CsvDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[tracing::instrument(err, skip(self), fields(dir = %self.dir.display()))]
    pub fn snapshot(&self) -> Result<Snapshot, DirectoryError> {
        let routes: Vec<Route> = self.load_table("routes.csv")?;
        let stops: Vec<StopRow> = self.load_table("stops.csv")?;
        let buses: Vec<BusRow> = self.load_table("buses.csv")?;

        info!(
            "loaded {} routes, {} stops, {} buses",
            routes.len(),
            stops.len(),
            buses.len()
        );

        Ok(Snapshot::new(routes, stops, buses))
    }

    fn load_table<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>, DirectoryError> {
        let path = self.dir.join(file_name);
        let csv_error = |source: csv::Error| DirectoryError::Csv {
            file: path.clone(),
            source,
        };

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_path(&path)
            .map_err(csv_error)?;

        let mut rows = Vec::new();
        for result in rdr.deserialize() {
            let row: T = result.map_err(csv_error)?;
            rows.push(row);
        }
        Ok(rows)
    }
}
