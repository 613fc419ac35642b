//! play-publisher: authorized Google Play Developer API clients for build tooling
//!
//! A publishing plugin calls [`publisher::init`] once during setup. It checks
//! the publishing configuration, authorizes a service account for the
//! Android Publisher scope and hands back a [`publisher::PublisherClient`]
//! whose hub is ready for edits, uploads and track updates.
//!
//! # Architecture
//!
//! - **Config**: YAML configuration with `${VAR}` expansion.
//! - **Transport**: one rustls-backed HTTPS transport per process, created
//!   lazily and shared by every client.
//! - **Auth**: service account credentials (JSON, PEM or PKCS#12 keys) exposed to the
//!   API hub through the `GetToken` trait.
//! - **Publisher**: the validation and construction sequence.
//!
//! # Example
//!
//! ```no_run
//! use play_publisher::config::PublishConfig;
//! use play_publisher::publisher;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PublishConfig::new(
//!     "Acme-App/1.0",
//!     "publisher@acme.iam.gserviceaccount.com",
//!     "/etc/acme/play-key.json",
//! );
//!
//! let client = publisher::init(&config).await?;
//! let hub = client.hub();
//! # let _ = hub;
//! # Ok(())
//! # }
//! ```

pub mod auth;
pub mod config;
pub mod env;
pub mod error;
pub mod publisher;
pub mod transport;

pub use error::{PublishError, Result};
pub use publisher::{init, PublisherClient, MIME_TYPE_APK, PUBLISH_SCOPE};
