use crate::client::ApiResult;
use crate::config::PagesConfig;
use crate::error::ApiError;
use crate::fetch::{Fetch, Phase, Request, Ticket};
use crate::models::{Page, Subscription};
use crate::pagination::Pagination;
use crate::query::SubscriptionQuery;
use crate::subscriptions::{PendingRemoval, SubscriptionBook};

/// The "My followings" page.
#[derive(Clone, Debug, PartialEq)]
pub struct SubscriptionsPage {
    pub book: SubscriptionBook,
    fetch: Fetch<SubscriptionQuery>,
    page_size: u32,
    recipes_limit: u32,
}

impl SubscriptionsPage {
    pub fn new(pages: &PagesConfig) -> Self {
        Self {
            book: SubscriptionBook::new(),
            fetch: Fetch::new(),
            page_size: pages.subscriptions_page_size,
            recipes_limit: pages.subscription_recipes_limit,
        }
    }

    pub fn phase(&self) -> &Phase<SubscriptionQuery> {
        self.fetch.phase()
    }

    fn query(&self) -> SubscriptionQuery {
        SubscriptionQuery {
            page: self.book.page(),
            limit: Some(self.page_size),
            recipes_limit: Some(self.recipes_limit),
        }
    }

    pub fn mount(&mut self) -> Request<SubscriptionQuery> {
        let query = self.query();
        self.fetch.begin(query)
    }

    /// Move to another page. `None` when already there.
    pub fn change_page(&mut self, page: u32) -> Option<Request<SubscriptionQuery>> {
        if !self.book.set_page(page) {
            return None;
        }
        Some(self.mount())
    }

    pub fn retry(&mut self) -> Option<Request<SubscriptionQuery>> {
        self.fetch.retry()
    }

    /// Returns whether the response was applied.
    pub fn on_response(
        &mut self,
        ticket: Ticket,
        result: ApiResult<Page<Subscription>>,
    ) -> bool {
        match self.fetch.settle(ticket, result) {
            Some(page) => {
                self.book.set(page);
                true
            }
            None => false,
        }
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::new(self.book.count(), self.page_size, self.book.page())
    }

    pub fn begin_remove(&mut self, author_id: u64) -> Option<PendingRemoval> {
        self.book.begin_remove(author_id)
    }

    /// Reconcile an unsubscribe. When it emptied the current page, returns
    /// the reload to perform: the previous page if there is one, otherwise
    /// this page again while the server still has followings.
    pub fn settle_remove(
        &mut self,
        pending: PendingRemoval,
        result: ApiResult<()>,
    ) -> Result<Option<Request<SubscriptionQuery>>, ApiError> {
        self.book.settle_remove(pending, result)?;
        if !self.book.subscriptions().is_empty() {
            return Ok(None);
        }
        if self.book.page() > 1 {
            let previous = self.book.page() - 1;
            return Ok(self.change_page(previous));
        }
        if self.book.count() > 0 {
            return Ok(Some(self.mount()));
        }
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::FoodgramClient;
    use crate::memory::{Call, MemoryClient};
    use crate::models::User;

    fn subscription(id: u64, username: &str) -> Subscription {
        Subscription {
            author: User {
                id,
                username: username.to_string(),
                is_subscribed: true,
                ..User::default()
            },
            recipes: Vec::new(),
            recipes_count: 0,
        }
    }

    #[test]
    fn test_mount_uses_configured_sizes() {
        let mut page = SubscriptionsPage::new(&PagesConfig::default());
        let req = page.mount();
        assert_eq!(
            req.params,
            SubscriptionQuery {
                page: 1,
                limit: Some(6),
                recipes_limit: Some(5),
            }
        );
    }

    #[test]
    fn test_page_change_reissues_and_replaces() {
        let mut page = SubscriptionsPage::new(&PagesConfig::default());
        let first = page.mount();
        assert!(page.on_response(first.ticket, Ok(Page::new(vec![subscription(1, "anna")], 8))));

        let second = page.change_page(2).unwrap();
        assert_eq!(second.params.page, 2);
        assert!(page.change_page(2).is_none());

        assert!(page.on_response(second.ticket, Ok(Page::new(vec![subscription(2, "boris")], 7))));
        assert_eq!(page.book.count(), 7);
        assert_eq!(page.book.subscriptions()[0].author.username, "boris");
        assert!(matches!(page.phase(), Phase::Loaded(q) if q.page == 2));
    }

    #[test]
    fn test_stale_page_response_is_discarded() {
        let mut page = SubscriptionsPage::new(&PagesConfig::default());
        page.mount();
        let to_two = page.change_page(2).unwrap();
        let to_three = page.change_page(3).unwrap();

        let third = Page::new(vec![subscription(3, "vera")], 20);
        assert!(page.on_response(to_three.ticket, Ok(third)));
        // Page 2 answers last; it must not overwrite page 3.
        let second = Page::new(vec![subscription(2, "boris")], 19);
        assert!(!page.on_response(to_two.ticket, Ok(second)));

        assert_eq!(page.book.count(), 20);
        assert_eq!(page.book.subscriptions()[0].id(), 3);
        assert_eq!(page.book.page(), 3);
    }

    #[test]
    fn test_pagination_reflects_count() {
        let mut page = SubscriptionsPage::new(&PagesConfig::default());
        let req = page.mount();
        page.on_response(req.ticket, Ok(Page::new(vec![subscription(1, "anna")], 13)));
        let pagination = page.pagination();
        assert_eq!(pagination.total_pages(), 3);
        assert!(pagination.has_next());
        assert!(!pagination.has_previous());
    }

    #[tokio::test]
    async fn test_unsubscribe_last_on_page_steps_back() {
        let client = MemoryClient::new();
        let mut authors = Vec::new();
        for name in ["a", "b", "c", "d", "e", "f", "g"] {
            let id = client.add_author(name);
            client.follow(id);
            authors.push(id);
        }

        let mut page = SubscriptionsPage::new(&PagesConfig::default());
        page.mount();
        let req = page.change_page(2).unwrap();
        let result = client.get_subscriptions(&req.params).await;
        assert!(page.on_response(req.ticket, result));
        assert_eq!(page.book.subscriptions().len(), 1);

        let pending = page.begin_remove(authors[6]).unwrap();
        assert_eq!(page.book.count(), 6);
        let result = pending.send(&client).await;
        let reload = page.settle_remove(pending, result).unwrap().unwrap();
        assert_eq!(reload.params.page, 1);

        let result = client.get_subscriptions(&reload.params).await;
        assert!(page.on_response(reload.ticket, result));
        assert_eq!(page.book.subscriptions().len(), 6);
        assert!(client.calls().contains(&Call::Unsubscribe(authors[6])));
    }

    #[tokio::test]
    async fn test_failed_unsubscribe_restores_author() {
        let client = MemoryClient::new();
        let anna = client.add_author("anna");
        client.follow(anna);

        let mut page = SubscriptionsPage::new(&PagesConfig::default());
        let req = page.mount();
        let result = client.get_subscriptions(&req.params).await;
        page.on_response(req.ticket, result);

        client.fail_next(ApiError::Network("offline".to_string()));
        let pending = page.begin_remove(anna).unwrap();
        let result = pending.send(&client).await;
        assert!(page.settle_remove(pending, result).is_err());
        assert_eq!(page.book.count(), 1);
        assert_eq!(page.book.subscriptions()[0].id(), anna);
    }

    #[test]
    fn test_failed_unsubscribe_after_page_change_keeps_new_page() {
        let mut page = SubscriptionsPage::new(&PagesConfig::default());
        let first = page.mount();
        let authors: Vec<_> = (1..=6).map(|id| subscription(id, "author")).collect();
        assert!(page.on_response(first.ticket, Ok(Page::new(authors, 14))));

        let pending = page.begin_remove(3).unwrap();
        let second = page.change_page(2).unwrap();
        let authors: Vec<_> = (7..=12).map(|id| subscription(id, "author")).collect();
        assert!(page.on_response(second.ticket, Ok(Page::new(authors, 14))));

        let result = page.settle_remove(pending, Err(ApiError::Network("offline".to_string())));
        assert!(result.is_err());
        assert_eq!(page.book.page(), 2);
        assert_eq!(page.book.count(), 14);
        let ids: Vec<_> = page.book.subscriptions().iter().map(|s| s.id()).collect();
        assert_eq!(ids, vec![7, 8, 9, 10, 11, 12]);
    }

    #[tokio::test]
    async fn test_emptied_first_page_reloads_while_followings_remain() {
        let client = MemoryClient::new();
        for name in ["anna", "boris"] {
            let id = client.add_author(name);
            client.follow(id);
        }
        let config = PagesConfig {
            subscriptions_page_size: 1,
            ..PagesConfig::default()
        };

        let mut page = SubscriptionsPage::new(&config);
        let req = page.mount();
        let result = client.get_subscriptions(&req.params).await;
        assert!(page.on_response(req.ticket, result));
        let shown = page.book.subscriptions()[0].id();

        let pending = page.begin_remove(shown).unwrap();
        let result = pending.send(&client).await;
        let reload = page.settle_remove(pending, result).unwrap().unwrap();
        assert_eq!(reload.params.page, 1);

        let result = client.get_subscriptions(&reload.params).await;
        assert!(page.on_response(reload.ticket, result));
        assert_eq!(page.book.count(), 1);
        assert_eq!(page.book.subscriptions().len(), 1);
        assert_ne!(page.book.subscriptions()[0].id(), shown);
    }

    #[tokio::test]
    async fn test_unsubscribing_the_last_following_needs_no_reload() {
        let client = MemoryClient::new();
        let anna = client.add_author("anna");
        client.follow(anna);

        let mut page = SubscriptionsPage::new(&PagesConfig::default());
        let req = page.mount();
        let result = client.get_subscriptions(&req.params).await;
        page.on_response(req.ticket, result);

        let pending = page.begin_remove(anna).unwrap();
        let result = pending.send(&client).await;
        assert_eq!(page.settle_remove(pending, result), Ok(None));
        assert_eq!(page.book.count(), 0);
    }
}
