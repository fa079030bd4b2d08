use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// --- Enums ---

/// Channel type discriminant on an Integration. Determines which of the
/// per-channel payload fields is populated; the query core never looks
/// inside the payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IntegrationKind {
    Messenger,
    Form,
    Twitter,
    Facebook,
}

impl std::fmt::Display for IntegrationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntegrationKind::Messenger => write!(f, "messenger"),
            IntegrationKind::Form => write!(f, "form"),
            IntegrationKind::Twitter => write!(f, "twitter"),
            IntegrationKind::Facebook => write!(f, "facebook"),
        }
    }
}

/// Tags are scoped by type; form-related filtering always goes through
/// `Form`-type tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TagType {
    Conversation,
    Customer,
    EngageMessage,
    Form,
}

impl std::fmt::Display for TagType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TagType::Conversation => write!(f, "conversation"),
            TagType::Customer => write!(f, "customer"),
            TagType::EngageMessage => write!(f, "engage_message"),
            TagType::Form => write!(f, "form"),
        }
    }
}

// --- Entities ---

/// A channel-specific connector. Owned and mutated by collaborators outside
/// this core; read-side only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    #[serde(rename = "_id")]
    pub id: String,
    pub kind: IntegrationKind,
    pub name: String,
    pub brand_id: Option<String>,
    pub form_id: Option<String>,
    pub language_code: Option<String>,
    pub code: Option<String>,
    /// Opaque per-channel payloads. Exactly one is populated, per `kind`.
    pub messenger_data: Option<Value>,
    pub form_data: Option<Value>,
    pub twitter_data: Option<Value>,
    pub facebook_data: Option<Value>,
    pub ui_options: Option<Value>,
}

/// Integration membership is inclusion in `integration_ids`, not a stored
/// back-reference on the Integration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub integration_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub code: Option<String>,
    pub tag_ids: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "type")]
    pub tag_type: TagType,
    pub name: String,
}
