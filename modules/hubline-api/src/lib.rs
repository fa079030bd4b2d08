//! Read-side query core: selector construction, pagination, and
//! mixed-dimension counting over integrations and forms, behind facades a
//! transport layer binds to. The store and the login gate are collaborator
//! interfaces; this crate owns only the query composition between them.

pub mod auth;
pub mod pagination;
pub mod queries;

pub use auth::{AuthContext, Principal};
pub use pagination::Page;
pub use queries::forms::{FormCounts, FormListArgs, FormQueries};
pub use queries::integrations::{
    IntegrationCountArgs, IntegrationListArgs, IntegrationQueries,
};
