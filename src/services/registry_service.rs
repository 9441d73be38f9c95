use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;
use reqwest::Client;
use crate::config::RegistryConfig;
use crate::errors::{RegistryError, RegistryResult};
use crate::models::{DeleteRequest, RecordSet, UpsertRequest};

/// The three operations the remote user registry offers.
///
/// No retries happen at this level; each call is a single attempt.
#[async_trait]
pub trait Registry: Send + Sync {
    async fn list(&self) -> RegistryResult<RecordSet>;
    async fn upsert(&self, request: &UpsertRequest) -> RegistryResult<()>;
    async fn delete(&self, user_id: &str) -> RegistryResult<()>;
}

/// HTTP implementation of [`Registry`].
#[derive(Clone)]
pub struct RegistryService {
    client: Client,
    config: RegistryConfig,
}

impl RegistryService {
    pub fn new(config: RegistryConfig) -> RegistryResult<Self> {
        let client = Client::builder()
            .connect_timeout(config.timeout())
            .build()?;
        Ok(Self { client, config })
    }

    // Bounds the whole exchange, body included.
    async fn bounded<T, F>(&self, operation: &str, fut: F) -> RegistryResult<T>
    where
        F: Future<Output = RegistryResult<T>>,
    {
        let timeout = self.config.timeout();
        match tokio::time::timeout(timeout, fut).await {
            Ok(result) => result.map_err(|e| {
                tracing::error!("Registry {} failed: {}", operation, e);
                e
            }),
            Err(_elapsed) => {
                tracing::error!("Registry {} timed out after {:?}", operation, timeout);
                Err(RegistryError::Timeout(duration_ms(timeout)))
            }
        }
    }
}

#[async_trait]
impl Registry for RegistryService {
    async fn list(&self) -> RegistryResult<RecordSet> {
        let url = self.config.list_url();
        tracing::debug!("GET {}", url);

        self.bounded("list", async {
            let body = self.client.get(&url).send().await?.text().await?;
            let records: RecordSet = serde_json::from_str(&body)?;
            tracing::debug!("Decoded {} records", records.len());
            Ok::<_, RegistryError>(records)
        })
        .await
    }

    async fn upsert(&self, request: &UpsertRequest) -> RegistryResult<()> {
        let url = self.config.upsert_url();
        tracing::debug!("POST {} for user {}", url, request.user_id);

        self.bounded("upsert", async {
            // The response body is read so the exchange completes, then discarded.
            let response = self.client.post(&url).json(request).send().await?;
            let _ = response.bytes().await?;
            Ok::<_, RegistryError>(())
        })
        .await
    }

    async fn delete(&self, user_id: &str) -> RegistryResult<()> {
        let url = self.config.delete_url();
        tracing::debug!("POST {} for user {}", url, user_id);

        let body = DeleteRequest { user_id: user_id.to_string() };
        self.bounded("delete", async {
            let response = self.client.post(&url).json(&body).send().await?;
            let _ = response.bytes().await?;
            Ok::<_, RegistryError>(())
        })
        .await
    }
}

fn duration_ms(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}
