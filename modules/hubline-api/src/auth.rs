use hubline_common::HublineError;

/// The authenticated caller, as established by the external auth
/// collaborator. This core trusts the verdict and does no authorization
/// logic of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: String,
}

/// Optional auth attached to each request by the transport layer.
/// None if the caller presented no valid session.
#[derive(Debug, Clone, Default)]
pub struct AuthContext(pub Option<Principal>);

impl AuthContext {
    pub fn logged_in(user_id: impl Into<String>) -> Self {
        Self(Some(Principal {
            user_id: user_id.into(),
        }))
    }

    pub fn anonymous() -> Self {
        Self(None)
    }

    /// Login gate called as the first statement of every query operation.
    /// On failure the operation never reaches the store.
    pub fn require_login(&self) -> Result<&Principal, HublineError> {
        self.0.as_ref().ok_or(HublineError::Unauthorized)
    }
}
