//! # Local Auth Binding
//!
//! Demo `AuthProvider` driven by environment variables. The hosted auth
//! flows (magic link, OAuth, the admin credential check) all live with the
//! real backend; a terminal session just needs to know who it is.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tracing::info;

use fooddash_storefront::{AuthProvider, Role, Session, StoreError, UserProfile};

/// Auth provider backed by `FOODDASH_USER` / `FOODDASH_ROLE`.
///
/// No `FOODDASH_USER` means nobody is signed in; `FOODDASH_ROLE=admin`
/// routes to the admin gate like the hosted backend would.
pub struct LocalAuth {
    session: Option<Session>,
    signed_out: AtomicBool,
}

impl LocalAuth {
    pub fn from_env() -> Self {
        let session = std::env::var("FOODDASH_USER").ok().map(|name| {
            let role = match std::env::var("FOODDASH_ROLE").as_deref() {
                Ok("admin") => Role::Admin,
                _ => Role::Customer,
            };
            Session {
                role,
                user: UserProfile {
                    name: Some(name),
                    email: None,
                },
            }
        });

        LocalAuth {
            session,
            signed_out: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl AuthProvider for LocalAuth {
    async fn check_session(&self) -> Result<Option<Session>, StoreError> {
        if self.signed_out.load(Ordering::SeqCst) {
            return Ok(None);
        }
        Ok(self.session.clone())
    }

    async fn logout(&self) -> Result<(), StoreError> {
        self.signed_out.store(true, Ordering::SeqCst);
        info!("Local session ended");
        Ok(())
    }
}
