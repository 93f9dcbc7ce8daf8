use std::time::Duration;

use backoff::ExponentialBackoff;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::framework::config::ProviderConfig;

use super::{CategoryDetail, CategoryId, CategorySummary, Error, Result, TriviaProvider};

/// Stop retrying a flaky endpoint after this long.
const RETRY_WINDOW: Duration = Duration::from_secs(30);

/// Client for a jservice-style trivia api: `GET /api/categories?count=N` for
/// the listing, `GET /api/category?id=N` for one category's clues.
#[derive(Debug, Clone)]
pub struct HttpProvider {
    client: reqwest::Client,
    base: Url,
}

impl HttpProvider {
    pub fn new(config: &ProviderConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .expect("default tls backend should be available");

        Self {
            client,
            base: config.base_url().clone(),
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(self.base.join(path)?)
    }

    #[instrument(skip(self, query))]
    async fn get_json<T>(&self, url: Url, query: &[(&str, String)]) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let response = backoff::future::retry_notify(
            Self::retry_policy(),
            || async {
                let response = self
                    .client
                    .get(url.clone())
                    .query(query)
                    .send()
                    .await
                    .map_err(|err| Error::Request(err).backoff())?;

                let status = response.status();
                if !status.is_success() {
                    return Err(Error::Status(status).backoff());
                }

                Ok(response)
            },
            |err, _| warn!("{err}, retrying..."),
        )
        .await?;

        debug!(code = %response.status());

        response.json().await.map_err(Error::Decode)
    }

    fn retry_policy() -> ExponentialBackoff {
        ExponentialBackoff {
            max_elapsed_time: Some(RETRY_WINDOW),
            ..ExponentialBackoff::default()
        }
    }
}

impl TriviaProvider for HttpProvider {
    async fn list_categories(&self, count: usize) -> Result<Vec<CategorySummary>> {
        let url = self.endpoint("api/categories")?;
        self.get_json(url, &[("count", count.to_string())]).await
    }

    async fn category_detail(&self, id: CategoryId) -> Result<CategoryDetail> {
        let url = self.endpoint("api/category")?;
        self.get_json(url, &[("id", id.to_string())]).await
    }
}
