//! Store collaborator interface.
//!
//! The persistence engine is external; the query core reaches it only
//! through these read operations. Failures propagate to the caller as-is.

use async_trait::async_trait;

use hubline_common::{Brand, Channel, Form, Integration, StoreError, Tag};

use crate::selector::Selector;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// Ordering and slicing applied after the selector has decided which
/// records match. Never changes membership, only the returned window.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    pub sort: Option<(&'static str, SortOrder)>,
    pub skip: u64,
    pub limit: Option<u64>,
}

impl FindOptions {
    pub fn sorted(field: &'static str, order: SortOrder) -> Self {
        Self {
            sort: Some((field, order)),
            ..Self::default()
        }
    }

    pub fn page(mut self, skip: u64, limit: u64) -> Self {
        self.skip = skip;
        self.limit = Some(limit);
        self
    }
}

/// Read access to the five collections the query core composes over.
#[async_trait]
pub trait DataStore: Send + Sync {
    async fn find_integrations(
        &self,
        selector: &Selector,
        options: FindOptions,
    ) -> Result<Vec<Integration>, StoreError>;

    async fn integration_by_id(&self, id: &str) -> Result<Option<Integration>, StoreError>;

    async fn count_integrations(&self, selector: &Selector) -> Result<u64, StoreError>;

    async fn find_forms(
        &self,
        selector: &Selector,
        options: FindOptions,
    ) -> Result<Vec<Form>, StoreError>;

    async fn form_by_id(&self, id: &str) -> Result<Option<Form>, StoreError>;

    async fn count_forms(&self, selector: &Selector) -> Result<u64, StoreError>;

    async fn channel_by_id(&self, id: &str) -> Result<Option<Channel>, StoreError>;

    async fn find_channels(
        &self,
        selector: &Selector,
        options: FindOptions,
    ) -> Result<Vec<Channel>, StoreError>;

    async fn brand_by_id(&self, id: &str) -> Result<Option<Brand>, StoreError>;

    async fn find_tags(
        &self,
        selector: &Selector,
        options: FindOptions,
    ) -> Result<Vec<Tag>, StoreError>;
}
