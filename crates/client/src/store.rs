use curriculum_core::model::{Topic, TopicId, Unit};

use crate::api::ApiClient;
use crate::error::ClientError;

/// Cached view of the curriculum tree.
///
/// Mutations are fire-and-forget followed by a full re-fetch: a successful
/// toggle drops the cached tree entirely so the next read re-derives every
/// progress percentage from fresh data. Stale state is discarded, never
/// reconciled.
pub struct CurriculumStore {
    client: ApiClient,
    cached: Option<Vec<Unit>>,
}

impl CurriculumStore {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cached: None,
        }
    }

    /// The curriculum tree, fetched on first access and cached until the
    /// next invalidation.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` when the fetch fails; the cache stays empty.
    pub async fn curriculum(&mut self) -> Result<&[Unit], ClientError> {
        if self.cached.is_none() {
            self.cached = Some(self.client.get_curriculum().await?);
        }
        Ok(self.cached.as_deref().unwrap_or_default())
    }

    /// Toggle one topic. On success the cached tree is invalidated.
    ///
    /// # Errors
    ///
    /// Returns `ClientError` when the toggle fails; the cache is left as-is
    /// so the UI keeps rendering the last known tree.
    pub async fn toggle_topic(
        &mut self,
        id: TopicId,
        completed: bool,
    ) -> Result<Topic, ClientError> {
        let updated = self.client.toggle_topic(id, completed).await?;
        self.invalidate();
        Ok(updated)
    }

    /// Drop the cached tree; the next read re-fetches.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }

    #[must_use]
    pub fn is_cached(&self) -> bool {
        self.cached.is_some()
    }
}
