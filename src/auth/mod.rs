//! Credentials for the Google Play Developer API
//!
//! A credential is anything that can produce a bearer token for the
//! publishing scope. The only production source is a service account key
//! (see [`service_account`]); the [`Credential`] wrapper adapts a source to
//! the `GetToken` trait the generated API hub expects.

pub mod service_account;

use async_trait::async_trait;
use google_apis_common::GetToken;
use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub use service_account::ServiceAccountCredential;

/// Boxed error returned by credential sources
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Source of bearer tokens for a fixed set of scopes.
#[async_trait]
pub trait CredentialSource: Send + Sync {
    /// Scopes every token from this source is issued for
    fn scopes(&self) -> &[String];

    /// Get a token for this source's scopes.
    ///
    /// Returns `Ok(None)` only if the source has no token to offer.
    async fn token(&self) -> Result<Option<String>, BoxError>;
}

/// Cloneable handle over a credential source.
///
/// Implements google-apis-common's `GetToken` so it can be handed straight
/// to the API hub. Scopes requested by the hub are ignored in favor of the
/// source's own scope set.
#[derive(Clone)]
pub struct Credential {
    inner: Arc<dyn CredentialSource>,
}

impl Credential {
    /// Wrap a credential source.
    pub fn new<T: CredentialSource + 'static>(source: T) -> Self {
        Self {
            inner: Arc::new(source),
        }
    }

    pub fn scopes(&self) -> &[String] {
        self.inner.scopes()
    }

    /// Whether both handles wrap the same credential source
    pub fn shares_source(&self, other: &Credential) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Fetch a bearer token from the underlying source
    pub async fn token(&self) -> Result<Option<String>, BoxError> {
        self.inner.token().await
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("scopes", &self.inner.scopes())
            .finish_non_exhaustive()
    }
}

impl GetToken for Credential {
    fn get_token<'a>(
        &'a self,
        scopes: &'a [&str],
    ) -> Pin<Box<dyn Future<Output = Result<Option<String>, BoxError>> + Send + 'a>> {
        let inner = self.inner.clone();
        Box::pin(async move {
            if scopes.iter().any(|s| !inner.scopes().iter().any(|own| own == s)) {
                tracing::trace!(
                    "Hub requested scopes {:?}, issuing token for {:?}",
                    scopes,
                    inner.scopes()
                );
            }
            inner.token().await
        })
    }
}
