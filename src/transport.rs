//! Process-wide HTTPS transport
//!
//! One rustls connector and one hyper client are built on first use and
//! shared by every publisher client in the process. The API hub and the
//! token exchange both run over the same connector.

use std::sync::Arc;

use google_apis_common::Body;
use hyper_rustls::{HttpsConnector, HttpsConnectorBuilder};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;
use once_cell::sync::OnceCell;
use tracing::{debug, warn};

/// Connector type shared by the API hub and the authenticator
pub type Connector = HttpsConnector<HttpConnector>;

/// HTTP client used by the generated API hub
pub type ApiClient = Client<Connector, Body>;

/// HTTP client used by yup-oauth2 for the token exchange
pub type AuthClient = Client<Connector, String>;

static SHARED: OnceCell<Arc<Transport>> = OnceCell::new();

/// Secure transport backing all Play API traffic
pub struct Transport {
    connector: Connector,
    api_client: ApiClient,
}

impl Transport {
    /// Return the process-wide transport, creating it on first call.
    ///
    /// Concurrent first callers block on the cell; exactly one transport is
    /// ever stored and every caller gets a handle to it.
    ///
    /// Pooled connections are driven by the Tokio runtime that opened them,
    /// so all clients built on the shared transport must run on one runtime
    /// for the life of the process. Code that needs a second runtime should
    /// build its own transport with [`Transport::new`].
    pub fn shared() -> Arc<Transport> {
        SHARED
            .get_or_init(|| {
                debug!("Creating shared HTTPS transport");
                Arc::new(Transport::new())
            })
            .clone()
    }

    /// Build a new trusted transport.
    ///
    /// Trust roots come from the platform store. When that store cannot be
    /// loaded (common in minimal containers) the bundled web PKI roots are used.
    pub fn new() -> Self {
        // Another component may already have installed a provider
        let _ = rustls::crypto::ring::default_provider().install_default();

        let connector = match HttpsConnectorBuilder::new().with_native_roots() {
            Ok(builder) => builder.https_or_http().enable_http1().enable_http2().build(),
            Err(e) => {
                warn!("Native trust roots unavailable ({}), using bundled roots", e);
                HttpsConnectorBuilder::new()
                    .with_webpki_roots()
                    .https_or_http()
                    .enable_http1()
                    .enable_http2()
                    .build()
            }
        };

        Self::from_connector(connector)
    }

    /// Build a transport around an existing connector
    pub fn from_connector(connector: Connector) -> Self {
        let api_client = Client::builder(TokioExecutor::new()).build(connector.clone());

        Self {
            connector,
            api_client,
        }
    }

    /// Client handed to the API hub
    pub fn api_client(&self) -> ApiClient {
        self.api_client.clone()
    }

    /// Fresh client over the shared connector for the token exchange
    pub fn auth_client(&self) -> AuthClient {
        Client::builder(TokioExecutor::new()).build(self.connector.clone())
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport").finish_non_exhaustive()
    }
}
