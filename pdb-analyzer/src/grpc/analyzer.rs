use std::sync::Arc;

use analyzer_pb::{CustomAnalyzerService, RunRequest, RunResponse};
use async_trait::async_trait;
use tonic::{Request, Response, Status};
use tracing::{info, instrument};

use crate::grpc::helpers::to_proto_result;
use crate::matcher::Matcher;
use crate::report::render;
use crate::source::ClusterSource;

/// `CustomAnalyzerService` backed by a [`ClusterSource`].
///
/// Holds no mutable state; one instance serves every call.
pub struct PdbAnalyzerSvc {
    source: Arc<dyn ClusterSource>,
    matcher: Matcher,
}

impl PdbAnalyzerSvc {
    pub fn new<S: ClusterSource>(source: S, matcher: Matcher) -> Self {
        Self {
            source: Arc::new(source),
            matcher,
        }
    }
}

#[async_trait]
impl CustomAnalyzerService for PdbAnalyzerSvc {
    /// The caller's `grpc-timeout` is enforced by the transport, which drops
    /// this future and answers `Cancelled` once it expires.
    #[instrument(level = "info", skip(self, _request))]
    async fn run(
        &self,
        _request: Request<RunRequest>,
    ) -> Result<Response<RunResponse>, Status> {
        let missing = self.matcher.scan(self.source.as_ref()).await?;

        let report = render(&missing);
        info!(
            missing = missing.len(),
            gaps = report.has_gaps(),
            policy = ?self.matcher.policy(),
            "run: {}",
            report.status
        );
        Ok(Response::new(RunResponse {
            result: Some(to_proto_result(report)),
        }))
    }
}
