use std::net::{IpAddr, SocketAddr};

use envconfig::Envconfig;

use crate::matcher::FailurePolicy;

#[derive(Envconfig, Clone, Debug)]
pub struct AnalyzerConfig {
    #[envconfig(from = "PDB_ANALYZER_GRPC_HOST", default = "0.0.0.0")]
    pub grpc_host: IpAddr,

    #[envconfig(from = "PDB_ANALYZER_GRPC_PORT", default = "8085")]
    pub grpc_port: u16,

    /// Abort a run when listing inside any namespace fails, instead of
    /// skipping that namespace.
    /// Env: PDB_ANALYZER_STRICT
    #[envconfig(from = "PDB_ANALYZER_STRICT", default = "false")]
    pub strict: bool,
}

impl AnalyzerConfig {
    pub fn grpc_addr(&self) -> SocketAddr {
        SocketAddr::new(self.grpc_host, self.grpc_port)
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        if self.strict {
            FailurePolicy::Strict
        } else {
            FailurePolicy::FailOpen
        }
    }
}
