pub mod analyzer;
pub mod helpers;

use std::future::Future;
use std::net::SocketAddr;

use analyzer_pb::CustomAnalyzerServiceServer;
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic_reflection::server::Builder as ReflectionBuilder;
use tracing::{info, warn};

pub use analyzer::PdbAnalyzerSvc;

/// Bind `addr` and serve until `shutdown` resolves. A bind failure is
/// returned to the caller.
pub async fn run_grpc_server(
    addr: SocketAddr,
    svc: PdbAnalyzerSvc,
    shutdown: impl Future<Output = ()> + Send,
) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("PDB analyzer gRPC listening on {}", listener.local_addr()?);
    serve(listener, svc, shutdown).await
}

/// Serve the analyzer and reflection services on an already bound listener.
pub async fn serve(
    listener: TcpListener,
    svc: PdbAnalyzerSvc,
    shutdown: impl Future<Output = ()> + Send,
) -> anyhow::Result<()> {
    let reflection = ReflectionBuilder::configure()
        .register_encoded_file_descriptor_set(analyzer_pb::FILE_DESCRIPTOR_SET)
        .build_v1()
        .map_err(|e| warn!(error = %e, "reflection service unavailable"))
        .ok();

    let mut builder =
        Server::builder().add_service(CustomAnalyzerServiceServer::new(svc));
    if let Some(reflection) = reflection {
        builder = builder.add_service(reflection);
    }

    builder
        .serve_with_incoming_shutdown(
            TcpListenerStream::new(listener),
            shutdown,
        )
        .await?;
    Ok(())
}

/// Resolves on Ctrl-C or, on unix, SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };
    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
