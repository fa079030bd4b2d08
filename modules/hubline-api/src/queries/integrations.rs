//! Integration queries: filtered listing, detail lookup, scalar counting,
//! and related-entity lookups the transport's field resolvers bind to.

use std::sync::Arc;

use tracing::debug;

use hubline_common::{
    Brand, Channel, Form, HublineError, Integration, IntegrationKind, QueryConfig, StoreError,
};
use hubline_store::{DataStore, FindOptions, Selector};

use crate::auth::AuthContext;
use crate::pagination::Page;

#[derive(Debug, Clone, Default)]
pub struct IntegrationListArgs {
    pub page: Option<i32>,
    pub per_page: Option<i32>,
    pub kind: Option<IntegrationKind>,
    pub search_value: Option<String>,
    pub channel_id: Option<String>,
    pub brand_id: Option<String>,
    pub tag: Option<String>,
}

/// Count filters are a strict subset of the list filters: no
/// `search_value`, no `tag`. The reference behavior has this asymmetry and
/// it is preserved here.
#[derive(Debug, Clone, Default)]
pub struct IntegrationCountArgs {
    pub kind: Option<IntegrationKind>,
    pub channel_id: Option<String>,
    pub brand_id: Option<String>,
}

/// Translate list filters into a selector. Every present dimension adds one
/// conjunct; absent dimensions constrain nothing. Total: unknown referents
/// degrade to match-nothing membership constraints, never errors.
pub async fn list_selector(
    store: &dyn DataStore,
    args: &IntegrationListArgs,
) -> Result<Selector, StoreError> {
    let mut selector = Selector::new();

    if let Some(kind) = args.kind {
        selector = selector.eq("kind", kind.to_string());
    }

    if let Some(brand_id) = &args.brand_id {
        selector = selector.eq("brandId", brand_id.clone());
    }

    if let Some(channel_id) = &args.channel_id {
        let member_ids = channel_integration_ids(store, channel_id).await?;
        selector = selector.is_in("_id", member_ids);
    }

    if let Some(term) = &args.search_value {
        selector = selector.search("name", term.clone());
    }

    if let Some(tag_id) = &args.tag {
        let form_ids = form_ids_by_tag(store, tag_id).await?;
        selector = selector.is_in("formId", form_ids);
    }

    Ok(selector)
}

/// The indirect tag filter, as its own step: a tag names Forms, and
/// Integrations join through `form_id`. Returns the ids of every Form
/// carrying the tag; empty when none does.
pub async fn form_ids_by_tag(
    store: &dyn DataStore,
    tag_id: &str,
) -> Result<Vec<String>, StoreError> {
    let selector = Selector::new().contains("tagIds", tag_id.to_string());
    let forms = store.find_forms(&selector, FindOptions::default()).await?;
    if forms.is_empty() {
        debug!(tag_id, "tag filter resolved to no forms");
    }
    Ok(forms.into_iter().map(|f| f.id).collect())
}

async fn channel_integration_ids(
    store: &dyn DataStore,
    channel_id: &str,
) -> Result<Vec<String>, StoreError> {
    match store.channel_by_id(channel_id).await? {
        Some(channel) => Ok(channel.integration_ids),
        None => {
            debug!(channel_id, "channel filter resolved to no channel");
            Ok(Vec::new())
        }
    }
}

pub struct IntegrationQueries {
    store: Arc<dyn DataStore>,
    config: Arc<QueryConfig>,
}

impl IntegrationQueries {
    pub fn new(store: Arc<dyn DataStore>, config: Arc<QueryConfig>) -> Self {
        Self { store, config }
    }

    /// Filtered, paginated integration list in natural store order.
    pub async fn integrations(
        &self,
        auth: &AuthContext,
        args: IntegrationListArgs,
    ) -> Result<Vec<Integration>, HublineError> {
        auth.require_login()?;

        let selector = list_selector(self.store.as_ref(), &args).await?;
        let page = Page::from_args(args.page, args.per_page, &self.config);
        let options = FindOptions::default().page(page.skip(), page.limit());

        Ok(self.store.find_integrations(&selector, options).await?)
    }

    /// Direct lookup by id. `None` is a valid, non-error outcome.
    pub async fn integration_detail(
        &self,
        auth: &AuthContext,
        id: &str,
    ) -> Result<Option<Integration>, HublineError> {
        auth.require_login()?;
        Ok(self.store.integration_by_id(id).await?)
    }

    /// Total matching the same selector the list uses, without pagination.
    pub async fn integrations_total_count(
        &self,
        auth: &AuthContext,
        args: IntegrationCountArgs,
    ) -> Result<u64, HublineError> {
        auth.require_login()?;

        let list_args = IntegrationListArgs {
            kind: args.kind,
            channel_id: args.channel_id,
            brand_id: args.brand_id,
            ..Default::default()
        };
        let selector = list_selector(self.store.as_ref(), &list_args).await?;

        Ok(self.store.count_integrations(&selector).await?)
    }

    /// The integration's brand, if it references one that exists.
    pub async fn brand(
        &self,
        auth: &AuthContext,
        integration: &Integration,
    ) -> Result<Option<Brand>, HublineError> {
        auth.require_login()?;
        match &integration.brand_id {
            Some(brand_id) => Ok(self.store.brand_by_id(brand_id).await?),
            None => Ok(None),
        }
    }

    /// The integration's form, if it references one that exists.
    pub async fn form(
        &self,
        auth: &AuthContext,
        integration: &Integration,
    ) -> Result<Option<Form>, HublineError> {
        auth.require_login()?;
        match &integration.form_id {
            Some(form_id) => Ok(self.store.form_by_id(form_id).await?),
            None => Ok(None),
        }
    }

    /// Channels listing this integration among their members.
    pub async fn channels(
        &self,
        auth: &AuthContext,
        integration: &Integration,
    ) -> Result<Vec<Channel>, HublineError> {
        auth.require_login()?;
        let selector = Selector::new().contains("integrationIds", integration.id.clone());
        Ok(self
            .store
            .find_channels(&selector, FindOptions::default())
            .await?)
    }
}
