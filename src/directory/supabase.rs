use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{info, info_span, Instrument};

use super::{DirectoryError, Snapshot};
use crate::model::{BusRow, Route, StopRow};

/// Client for the hosted table store's REST interface (PostgREST).
#[derive(Debug, Clone)]
pub struct SupabaseDirectory {
    client: Client,
    base_url: String,
}

impl SupabaseDirectory {
    pub fn new(base_url: &str, anon_key: &str) -> Result<Self, DirectoryError> {
        let mut headers = HeaderMap::new();
        headers.insert("apikey", header_value(anon_key)?);
        headers.insert(AUTHORIZATION, header_value(&format!("Bearer {anon_key}"))?);

        let client = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    /// Fetches the three tables concurrently.
    #[tracing::instrument(err, skip(self))]
    pub async fn snapshot(&self) -> Result<Snapshot, DirectoryError> {
        let (routes, stops, buses) = tokio::try_join!(
            self.fetch_table::<Route>("routes", None),
            self.fetch_table::<StopRow>("stops", Some("sequence")),
            self.fetch_table::<BusRow>("buses", Some("number")),
        )?;

        info!(
            "fetched {} routes, {} stops, {} buses",
            routes.len(),
            stops.len(),
            buses.len()
        );

        Ok(Snapshot::new(routes, stops, buses))
    }

    async fn fetch_table<T: DeserializeOwned>(
        &self,
        table: &str,
        order: Option<&str>,
    ) -> Result<Vec<T>, DirectoryError> {
        let mut query = vec![("select", "*")];
        if let Some(column) = order {
            query.push(("order", column));
        }

        let response = self
            .client
            .get(self.table_url(table))
            .query(&query)
            .send()
            .instrument(info_span!("Fetching table", table))
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectoryError::Status {
                table: table.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let rows = response
            .json::<Vec<T>>()
            .instrument(info_span!("Reading body of response", table))
            .await?;

        Ok(rows)
    }
}

fn header_value(value: &str) -> Result<HeaderValue, DirectoryError> {
    HeaderValue::from_str(value)
        .map_err(|_| DirectoryError::InvalidCredentials("anon key is not a valid header value".into()))
}
