//! # Subscription list owner
//!
//! [`SubscriptionBook`] owns the followed authors of the current page, the
//! total count and the page number. Unsubscribing removes the author at once
//! and decrements the count; a failed request puts both back, unless a newer
//! page has been loaded in the meantime.

use crate::client::{ApiResult, FoodgramClient};
use crate::models::{Page, Subscription};

/// A removal applied locally and awaiting the server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingRemoval {
    pub author_id: u64,
    index: usize,
    item: Subscription,
    revision: u64,
}

impl PendingRemoval {
    pub async fn send<C: FoodgramClient>(&self, client: &C) -> ApiResult<()> {
        client.unsubscribe(self.author_id).await
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriptionBook {
    subscriptions: Vec<Subscription>,
    count: u64,
    page: u32,
    /// Bumped whenever a fetched page replaces the list.
    revision: u64,
}

impl Default for SubscriptionBook {
    fn default() -> Self {
        Self {
            subscriptions: Vec::new(),
            count: 0,
            page: 1,
            revision: 0,
        }
    }
}

impl SubscriptionBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Returns whether the page actually changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.max(1);
        let changed = page != self.page;
        self.page = page;
        changed
    }

    /// Replace list and count with a freshly fetched page.
    pub fn set(&mut self, page: Page<Subscription>) {
        self.subscriptions = page.results;
        self.count = page.count;
        self.revision += 1;
    }

    /// Optimistically drop an author. `None` when not on this page.
    pub fn begin_remove(&mut self, author_id: u64) -> Option<PendingRemoval> {
        let index = self.subscriptions.iter().position(|s| s.id() == author_id)?;
        let item = self.subscriptions.remove(index);
        self.count = self.count.saturating_sub(1);
        Some(PendingRemoval {
            author_id,
            index,
            item,
            revision: self.revision,
        })
    }

    /// Reconcile a removal with the server's answer. A failure restores the
    /// author only into the list it was removed from.
    pub fn settle_remove(
        &mut self,
        pending: PendingRemoval,
        result: ApiResult<()>,
    ) -> ApiResult<()> {
        let Err(err) = result else {
            return Ok(());
        };
        if pending.revision != self.revision {
            tracing::debug!(
                "unsubscribe from author {} failed after a reload, list left as fetched",
                pending.author_id
            );
            return Err(err);
        }
        tracing::warn!("restoring subscription to author {}: {err}", pending.author_id);
        let index = pending.index.min(self.subscriptions.len());
        self.subscriptions.insert(index, pending.item);
        self.count += 1;
        Err(err)
    }
}
