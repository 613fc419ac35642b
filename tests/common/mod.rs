//! Shared fixtures for publisher tests

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

/// Throwaway 2048-bit RSA key, PKCS#8 PEM
pub const TEST_KEY_PEM: &str = include_str!("../fixtures/test-key.pem");

/// JSON service account key wrapping `TEST_KEY_PEM`
pub const TEST_KEY_JSON: &str = include_str!("../fixtures/service-account.json");

/// The same key as a PKCS#12 archive under Google's `notasecret` password
pub const TEST_KEY_P12: &[u8] = include_bytes!("../fixtures/test-key.p12");

pub const SERVICE_EMAIL: &str = "svc@acme.iam";

/// Write `contents` to a temporary key file that lives as long as the handle
pub fn key_file(contents: impl AsRef<[u8]>, suffix: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("play-key-")
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create key file");
    file.write_all(contents.as_ref())
        .expect("Failed to write key file");
    file
}

/// A path inside a fresh temp dir that is guaranteed not to exist
pub fn missing_path(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    assert!(!path.exists());
    path
}
