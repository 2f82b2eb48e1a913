pub mod config;
pub mod error;
pub mod grpc;
pub mod matcher;
pub mod report;
pub mod selector;
pub mod source;
pub mod workload;

use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber. `RUST_LOG`, when set and valid, replaces
/// `default_directive`. Later calls are ignored.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// The kube client's TLS stack needs a process-wide rustls provider.
pub fn install_crypto_provider() {
    if rustls::crypto::aws_lc_rs::default_provider()
        .install_default()
        .is_err()
    {
        debug!("rustls crypto provider already installed");
    }
}
