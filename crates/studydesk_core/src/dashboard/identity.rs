//! Identity gating for dashboard operations.
//!
//! # Responsibility
//! - Supply the opaque user id that scopes every dashboard collection.
//! - Keep the "not yet signed in" state explicit so widgets can degrade to
//!   logged no-ops instead of touching unscoped data.

use log::warn;
use uuid::Uuid;

/// Opaque user identifier issued by the external auth provider.
pub type UserId = String;

/// Source of the current user's identity.
pub trait IdentityProvider {
    /// Resolved user id, or `None` while sign-in is still pending.
    fn current_user(&self) -> Option<UserId>;
}

/// Session-held identity resolved anonymously or from an external token.
#[derive(Debug, Clone, Default)]
pub struct SessionIdentity {
    user: Option<UserId>,
}

impl SessionIdentity {
    /// Identity that has not resolved yet; all gated operations no-op.
    pub fn pending() -> Self {
        Self { user: None }
    }

    /// Identity pre-resolved from a custom auth token.
    pub fn with_token_uid(uid: impl Into<String>) -> Self {
        Self {
            user: Some(uid.into()),
        }
    }

    /// Resolves anonymously with a generated uid. Idempotent: an already
    /// resolved identity keeps its uid.
    pub fn resolve_anonymous(&mut self) -> &str {
        if self.user.is_none() {
            self.user = Some(format!("anon-{}", Uuid::new_v4()));
        }
        self.user.as_deref().unwrap_or_default()
    }
}

impl IdentityProvider for SessionIdentity {
    fn current_user(&self) -> Option<UserId> {
        self.user.clone()
    }
}

/// Gate helper: the resolved uid, or a logged skip.
pub(crate) fn require_user<I: IdentityProvider>(identity: &I, op: &str) -> Option<UserId> {
    match identity.current_user() {
        Some(user) => Some(user),
        None => {
            warn!(
                "event={op} module=dashboard status=skipped reason=identity_unresolved"
            );
            None
        }
    }
}
