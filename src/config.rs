use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;

use crate::directory::{CsvDirectory, Directory, DirectoryError, SupabaseDirectory};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing Supabase environment variables")]
    MissingSupabaseCredentials,

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Bus tracking backend for the Next Stop rider app.
#[derive(Debug, Clone, Parser)]
#[command(name = "next-stop", version, about)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "NEXT_STOP_BIND", default_value = "0.0.0.0:3030")]
    pub bind: SocketAddr,

    /// Base URL of the hosted table store
    #[arg(long, env = "SUPABASE_URL")]
    pub supabase_url: Option<String>,

    #[arg(long, env = "SUPABASE_ANON_KEY", hide_env_values = true)]
    pub supabase_anon_key: Option<String>,

    /// Read routes.csv, stops.csv and buses.csv from this directory instead of the table store
    #[arg(long, env = "NEXT_STOP_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Also write daily rolling log files here
    #[arg(long, env = "NEXT_STOP_LOG_DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Config {
    pub fn directory(&self) -> Result<Directory, ConfigError> {
        if let Some(dir) = &self.data_dir {
            return Ok(Directory::Files(CsvDirectory::new(dir)));
        }

        match (&self.supabase_url, &self.supabase_anon_key) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => {
                Ok(Directory::Supabase(SupabaseDirectory::new(url, key)?))
            }
            _ => Err(ConfigError::MissingSupabaseCredentials),
        }
    }
}
