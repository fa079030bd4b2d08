//! In-process store backend.
//!
//! Evaluates selectors against each record's JSON projection via
//! [`Selector::matches`], then applies sort/skip/limit. Serves as the test
//! and dev-fixture backend; production deployments wire in a
//! document-store-backed `DataStore` instead.

use std::cmp::Ordering;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::RwLock;

use hubline_common::{Brand, Channel, Form, Integration, StoreError, Tag};

use crate::selector::Selector;
use crate::store::{DataStore, FindOptions, SortOrder};

#[derive(Default)]
pub struct MemoryStore {
    integrations: RwLock<Vec<Integration>>,
    channels: RwLock<Vec<Channel>>,
    brands: RwLock<Vec<Brand>>,
    forms: RwLock<Vec<Form>>,
    tags: RwLock<Vec<Tag>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_integration(&self, record: Integration) {
        self.integrations.write().await.push(record);
    }

    pub async fn insert_channel(&self, record: Channel) {
        self.channels.write().await.push(record);
    }

    pub async fn insert_brand(&self, record: Brand) {
        self.brands.write().await.push(record);
    }

    pub async fn insert_form(&self, record: Form) {
        self.forms.write().await.push(record);
    }

    pub async fn insert_tag(&self, record: Tag) {
        self.tags.write().await.push(record);
    }

    /// Drop every record. Test fixtures reset between scenarios with this.
    pub async fn clear(&self) {
        self.integrations.write().await.clear();
        self.channels.write().await.clear();
        self.brands.write().await.clear();
        self.forms.write().await.clear();
        self.tags.write().await.clear();
    }
}

fn project<T: Serialize>(record: &T) -> Value {
    serde_json::to_value(record).unwrap_or(Value::Null)
}

fn compare_keys(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        _ => Ordering::Equal,
    }
}

/// Filter, then order and slice. Insertion order is the natural order when
/// no sort key is given; the sort is stable, so equal keys keep it too.
fn select<T: Serialize + Clone>(records: &[T], selector: &Selector, options: &FindOptions) -> Vec<T> {
    let matched = records
        .iter()
        .filter(|r| selector.matches(&project(r)))
        .cloned();

    let ordered: Vec<T> = match options.sort {
        Some((field, order)) => {
            let mut keyed: Vec<(Value, T)> = matched
                .map(|r| {
                    let key = project(&r).get(field).cloned().unwrap_or(Value::Null);
                    (key, r)
                })
                .collect();
            keyed.sort_by(|a, b| match order {
                SortOrder::Asc => compare_keys(&a.0, &b.0),
                SortOrder::Desc => compare_keys(&b.0, &a.0),
            });
            keyed.into_iter().map(|(_, r)| r).collect()
        }
        None => matched.collect(),
    };

    let take = options.limit.map(|l| l as usize).unwrap_or(usize::MAX);
    ordered
        .into_iter()
        .skip(options.skip as usize)
        .take(take)
        .collect()
}

fn count<T: Serialize>(records: &[T], selector: &Selector) -> u64 {
    records
        .iter()
        .filter(|r| selector.matches(&project(r)))
        .count() as u64
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn find_integrations(
        &self,
        selector: &Selector,
        options: FindOptions,
    ) -> Result<Vec<Integration>, StoreError> {
        Ok(select(&self.integrations.read().await, selector, &options))
    }

    async fn integration_by_id(&self, id: &str) -> Result<Option<Integration>, StoreError> {
        Ok(self
            .integrations
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn count_integrations(&self, selector: &Selector) -> Result<u64, StoreError> {
        Ok(count(&self.integrations.read().await, selector))
    }

    async fn find_forms(
        &self,
        selector: &Selector,
        options: FindOptions,
    ) -> Result<Vec<Form>, StoreError> {
        Ok(select(&self.forms.read().await, selector, &options))
    }

    async fn form_by_id(&self, id: &str) -> Result<Option<Form>, StoreError> {
        Ok(self.forms.read().await.iter().find(|r| r.id == id).cloned())
    }

    async fn count_forms(&self, selector: &Selector) -> Result<u64, StoreError> {
        Ok(count(&self.forms.read().await, selector))
    }

    async fn channel_by_id(&self, id: &str) -> Result<Option<Channel>, StoreError> {
        Ok(self
            .channels
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_channels(
        &self,
        selector: &Selector,
        options: FindOptions,
    ) -> Result<Vec<Channel>, StoreError> {
        Ok(select(&self.channels.read().await, selector, &options))
    }

    async fn brand_by_id(&self, id: &str) -> Result<Option<Brand>, StoreError> {
        Ok(self
            .brands
            .read()
            .await
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn find_tags(
        &self,
        selector: &Selector,
        options: FindOptions,
    ) -> Result<Vec<Tag>, StoreError> {
        Ok(select(&self.tags.read().await, selector, &options))
    }
}
