//! Record factories for seeding a [`MemoryStore`] in tests and dev
//! fixtures. Every field has a generated default; overrides pin only what a
//! scenario cares about.

use serde_json::json;
use uuid::Uuid;

use hubline_common::{Brand, Channel, Form, Integration, IntegrationKind, Tag, TagType};

use crate::memory::MemoryStore;

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

fn fresh_name(prefix: &str, id: &str) -> String {
    format!("{prefix}-{}", &id[..8])
}

#[derive(Default)]
pub struct IntegrationOverrides {
    pub kind: Option<IntegrationKind>,
    pub name: Option<String>,
    pub brand_id: Option<String>,
    pub form_id: Option<String>,
}

pub async fn integration_factory(
    store: &MemoryStore,
    overrides: IntegrationOverrides,
) -> Integration {
    let id = fresh_id();
    let kind = overrides.kind.unwrap_or(IntegrationKind::Messenger);
    let record = Integration {
        name: overrides.name.unwrap_or_else(|| fresh_name("integration", &id)),
        kind,
        brand_id: overrides.brand_id,
        form_id: overrides.form_id,
        language_code: Some("en".to_string()),
        code: None,
        messenger_data: match kind {
            IntegrationKind::Messenger => Some(json!({ "welcomeMessage": "hi" })),
            _ => None,
        },
        form_data: None,
        twitter_data: None,
        facebook_data: None,
        ui_options: None,
        id,
    };
    store.insert_integration(record.clone()).await;
    record
}

#[derive(Default)]
pub struct ChannelOverrides {
    pub name: Option<String>,
    pub integration_ids: Option<Vec<String>>,
}

pub async fn channel_factory(store: &MemoryStore, overrides: ChannelOverrides) -> Channel {
    let id = fresh_id();
    let record = Channel {
        name: overrides.name.unwrap_or_else(|| fresh_name("channel", &id)),
        integration_ids: overrides.integration_ids.unwrap_or_default(),
        id,
    };
    store.insert_channel(record.clone()).await;
    record
}

#[derive(Default)]
pub struct BrandOverrides {
    pub name: Option<String>,
}

pub async fn brand_factory(store: &MemoryStore, overrides: BrandOverrides) -> Brand {
    let id = fresh_id();
    let record = Brand {
        name: overrides.name.unwrap_or_else(|| fresh_name("brand", &id)),
        code: Some(fresh_name("code", &id)),
        id,
    };
    store.insert_brand(record.clone()).await;
    record
}

#[derive(Default)]
pub struct FormOverrides {
    pub name: Option<String>,
    pub tag_ids: Option<Vec<String>>,
}

pub async fn form_factory(store: &MemoryStore, overrides: FormOverrides) -> Form {
    let id = fresh_id();
    let record = Form {
        name: overrides.name.unwrap_or_else(|| fresh_name("form", &id)),
        code: None,
        tag_ids: overrides.tag_ids.unwrap_or_default(),
        id,
    };
    store.insert_form(record.clone()).await;
    record
}

#[derive(Default)]
pub struct TagOverrides {
    pub tag_type: Option<TagType>,
    pub name: Option<String>,
}

pub async fn tag_factory(store: &MemoryStore, overrides: TagOverrides) -> Tag {
    let id = fresh_id();
    let record = Tag {
        tag_type: overrides.tag_type.unwrap_or(TagType::Form),
        name: overrides.name.unwrap_or_else(|| fresh_name("tag", &id)),
        id,
    };
    store.insert_tag(record.clone()).await;
    record
}
