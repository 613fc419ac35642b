//! Google Play publisher client setup
//!
//! [`init`] must run before any call against the Android Publisher API. It
//! checks the publishing config, authorizes a service account for the
//! publishing scope and returns a [`PublisherClient`] wrapping the generated
//! API hub.

use std::sync::Arc;

use google_androidpublisher3::AndroidPublisher;
use tracing::{debug, info};

use crate::auth::{Credential, ServiceAccountCredential};
use crate::config::PublishConfig;
use crate::error::{PublishError, Result};
use crate::transport::{Connector, Transport};

/// Content type of an uploaded APK
pub const MIME_TYPE_APK: &str = "application/vnd.android.package-archive";

/// OAuth scope granting access to the Android Publisher API
pub const PUBLISH_SCOPE: &str = "https://www.googleapis.com/auth/androidpublisher";

/// Scope set requested for every publishing credential
pub const PUBLISH_SCOPES: [&str; 1] = [PUBLISH_SCOPE];

/// Generated Android Publisher hub over the shared transport
pub type PublisherHub = AndroidPublisher<Connector>;

/// Authorized Android Publisher API client
pub struct PublisherClient {
    hub: PublisherHub,
    transport: Arc<Transport>,
    credential: Credential,
    application_name: String,
}

impl PublisherClient {
    fn new(transport: Arc<Transport>, credential: Credential, application_name: String) -> Self {
        let mut hub = AndroidPublisher::new(transport.api_client(), credential.clone());
        hub.user_agent(application_name.clone());

        Self {
            hub,
            transport,
            credential,
            application_name,
        }
    }

    /// The generated API hub, used to issue publishing calls
    pub fn hub(&self) -> &PublisherHub {
        &self.hub
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    /// Shared transport this client runs on
    pub fn transport(&self) -> &Arc<Transport> {
        &self.transport
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Exchange the credential for a bearer token now.
    ///
    /// API calls do this on demand; calling it up front surfaces a rejected
    /// key or unreachable token endpoint before any publishing work starts.
    pub async fn access_token(&self) -> Result<String> {
        self.credential
            .token()
            .await
            .map_err(|e| PublishError::TokenExchange(e.to_string()))?
            .ok_or_else(|| {
                PublishError::TokenExchange("Authorization server returned no access token".to_string())
            })
    }
}

impl std::fmt::Debug for PublisherClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PublisherClient")
            .field("application_name", &self.application_name)
            .field("credential", &self.credential)
            .finish_non_exhaustive()
    }
}

/// Performs all setup needed to run requests against the API.
///
/// Checks run in a fixed order and stop at the first failure:
/// 1. `application_name` present and non-empty (`InvalidArgument`)
/// 2. `service_email` present and non-empty (`IllegalState`)
/// 3. `service_key` present and non-empty (`InvalidArgument`)
/// 4. the key file exists (`NotFound`)
///
/// None of these touch the network. Afterwards the shared transport is
/// acquired and the key is turned into a credential for [`PUBLISH_SCOPE`].
pub async fn init(config: &PublishConfig) -> Result<PublisherClient> {
    let application_name = match config.application_name() {
        Some(name) if !name.is_empty() => name,
        _ => {
            return Err(PublishError::InvalidArgument(
                "Play config applicationName cannot be null or empty! \
                 (suggested format 'Company-App/1.0')"
                    .to_string(),
            ))
        }
    };

    let service_email = match config.service_email() {
        Some(email) if !email.is_empty() => email,
        _ => {
            return Err(PublishError::IllegalState(
                "Play configuration must specify service email!".to_string(),
            ))
        }
    };

    let key_path = match config.service_key() {
        Some(path) if !path.as_os_str().is_empty() => path,
        _ => {
            return Err(PublishError::InvalidArgument(
                "Play config serviceKey cannot be null or empty!".to_string(),
            ))
        }
    };

    if !key_path.exists() {
        return Err(PublishError::NotFound(format!(
            "Could not find key file: {}",
            key_path.display()
        )));
    }

    debug!(
        "Initializing publisher client {} as {}",
        application_name, service_email
    );

    let transport = Transport::shared();
    let credential =
        ServiceAccountCredential::authorize(&transport, service_email, &PUBLISH_SCOPES, key_path)
            .await?;

    info!("Publisher client ready for {}", application_name);

    Ok(PublisherClient::new(
        transport,
        Credential::new(credential),
        application_name.to_string(),
    ))
}
