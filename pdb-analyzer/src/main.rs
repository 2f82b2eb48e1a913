use envconfig::Envconfig;
use kube::Client;
use pdb_analyzer::{
    config::AnalyzerConfig,
    grpc::{PdbAnalyzerSvc, run_grpc_server, shutdown_signal},
    init_tracing, install_crypto_provider,
    matcher::Matcher,
    source::KubeClusterSource,
};
use tracing::info;

#[tokio::main(flavor = "multi_thread")]
async fn main() -> anyhow::Result<()> {
    init_tracing("info");

    install_crypto_provider();

    let cfg = AnalyzerConfig::init_from_env()?;
    info!(?cfg, "Starting PDB analyzer");

    let client = Client::try_default().await?;
    let svc = PdbAnalyzerSvc::new(
        KubeClusterSource::new(client),
        Matcher::new(cfg.failure_policy()),
    );
    run_grpc_server(cfg.grpc_addr(), svc, shutdown_signal()).await
}
