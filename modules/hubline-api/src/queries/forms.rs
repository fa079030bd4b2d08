//! Form queries: tag-filtered listing, detail lookup, and the per-tag
//! breakdown count.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;

use hubline_common::{Form, HublineError, QueryConfig, StoreError, TagType};
use hubline_store::{DataStore, FindOptions, Selector, SortOrder};

use crate::auth::AuthContext;
use crate::pagination::Page;

#[derive(Debug, Clone, Default)]
pub struct FormListArgs {
    pub page: Option<i32>,
    pub per_page: Option<i32>,
    pub tag: Option<String>,
}

/// Forms filter directly on their own tag-id list; no indirection needed.
pub fn list_selector(args: &FormListArgs) -> Selector {
    let mut selector = Selector::new();
    if let Some(tag_id) = &args.tag {
        selector = selector.contains("tagIds", tag_id.clone());
    }
    selector
}

/// Grand total plus per-tag sub-totals, keyed by tag id. Forms carrying
/// several tags are counted once per tag, so the by-tag sum may exceed
/// `total`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormCounts {
    pub total: u64,
    pub by_tag: HashMap<String, u64>,
}

pub struct FormQueries {
    store: Arc<dyn DataStore>,
    config: Arc<QueryConfig>,
}

impl FormQueries {
    pub fn new(store: Arc<dyn DataStore>, config: Arc<QueryConfig>) -> Self {
        Self { store, config }
    }

    /// Filtered form list, ascending by name, paginated.
    pub async fn forms(
        &self,
        auth: &AuthContext,
        args: FormListArgs,
    ) -> Result<Vec<Form>, HublineError> {
        auth.require_login()?;

        let selector = list_selector(&args);
        let page = Page::from_args(args.page, args.per_page, &self.config);
        let options = FindOptions::sorted("name", SortOrder::Asc).page(page.skip(), page.limit());

        Ok(self.store.find_forms(&selector, options).await?)
    }

    /// Direct lookup by id. `None` is a valid, non-error outcome.
    pub async fn form_detail(
        &self,
        auth: &AuthContext,
        id: &str,
    ) -> Result<Option<Form>, HublineError> {
        auth.require_login()?;
        Ok(self.store.form_by_id(id).await?)
    }

    /// One count per Form-type tag, plus the grand total. The per-tag
    /// counts have no mutual ordering dependency and run concurrently; the
    /// breakdown is assembled only once all of them have succeeded, so a
    /// store failure surfaces instead of a partially-filled map.
    pub async fn forms_total_count(&self, auth: &AuthContext) -> Result<FormCounts, HublineError> {
        auth.require_login()?;

        let tag_selector = Selector::new().eq("type", TagType::Form.to_string());
        let tags = self
            .store
            .find_tags(&tag_selector, FindOptions::default())
            .await?;

        let per_tag = try_join_all(tags.into_iter().map(|tag| {
            let store = Arc::clone(&self.store);
            async move {
                let selector = Selector::new().contains("tagIds", tag.id.clone());
                let count = store.count_forms(&selector).await?;
                Ok::<_, StoreError>((tag.id, count))
            }
        }))
        .await?;

        let total = self.store.count_forms(&Selector::new()).await?;

        Ok(FormCounts {
            total,
            by_tag: per_tag.into_iter().collect(),
        })
    }
}
