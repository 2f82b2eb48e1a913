#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::net::SocketAddr;
use std::time::Duration;

use async_trait::async_trait;
use kube::core::ErrorResponse;
use pdb_analyzer::grpc::{PdbAnalyzerSvc, serve};
use pdb_analyzer::selector::Selector;
use pdb_analyzer::source::ClusterSource;
use pdb_analyzer::workload::{PdbRecord, WorkloadKind, WorkloadRef};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;

pub fn labels(pairs: &[(&str, &str)]) -> Selector {
    Selector::from_match_labels(pairs.iter().copied())
}

pub fn unavailable() -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".into(),
        message: "simulated outage".into(),
        reason: "ServiceUnavailable".into(),
        code: 503,
    })
}

/// In-memory cluster with per-namespace failure injection.
#[derive(Default)]
pub struct FakeCluster {
    namespaces: Vec<String>,
    workloads: BTreeMap<String, Vec<WorkloadRef>>,
    pdbs: BTreeMap<String, Vec<PdbRecord>>,
    fail_namespaces: bool,
    fail_statefulsets_in: HashSet<String>,
    namespace_delay: Option<Duration>,
}

impl FakeCluster {
    pub fn namespace(mut self, ns: &str) -> Self {
        self.namespaces.push(ns.to_string());
        self
    }

    pub fn deployment(self, ns: &str, name: &str, s: Selector) -> Self {
        self.workload(WorkloadRef::new(WorkloadKind::Deployment, ns, name, s))
    }

    pub fn statefulset(self, ns: &str, name: &str, s: Selector) -> Self {
        self.workload(WorkloadRef::new(WorkloadKind::StatefulSet, ns, name, s))
    }

    fn workload(mut self, w: WorkloadRef) -> Self {
        self.workloads.entry(w.namespace.clone()).or_default().push(w);
        self
    }

    pub fn pdb(mut self, ns: &str, name: &str, s: Selector) -> Self {
        self.pdbs
            .entry(ns.to_string())
            .or_default()
            .push(PdbRecord::new(ns, name, Some(s)));
        self
    }

    pub fn failing_statefulsets(mut self, ns: &str) -> Self {
        self.fail_statefulsets_in.insert(ns.to_string());
        self
    }

    /// Stall every namespace listing, standing in for a slow API server.
    pub fn slow_namespaces(mut self, delay: Duration) -> Self {
        self.namespace_delay = Some(delay);
        self
    }

    pub fn failing_namespaces(mut self) -> Self {
        self.fail_namespaces = true;
        self
    }

    fn of_kind(&self, ns: &str, kind: WorkloadKind) -> Vec<WorkloadRef> {
        self.workloads
            .get(ns)
            .map(|ws| ws.iter().filter(|w| w.kind == kind).cloned().collect())
            .unwrap_or_default()
    }
}

#[async_trait]
impl ClusterSource for FakeCluster {
    async fn list_namespaces(&self) -> Result<Vec<String>, kube::Error> {
        if let Some(delay) = self.namespace_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_namespaces {
            return Err(unavailable());
        }
        Ok(self.namespaces.clone())
    }

    async fn list_deployments(
        &self,
        namespace: &str,
    ) -> Result<Vec<WorkloadRef>, kube::Error> {
        Ok(self.of_kind(namespace, WorkloadKind::Deployment))
    }

    async fn list_statefulsets(
        &self,
        namespace: &str,
    ) -> Result<Vec<WorkloadRef>, kube::Error> {
        if self.fail_statefulsets_in.contains(namespace) {
            return Err(unavailable());
        }
        Ok(self.of_kind(namespace, WorkloadKind::StatefulSet))
    }

    async fn list_pdbs(
        &self,
        namespace: &str,
    ) -> Result<Vec<PdbRecord>, kube::Error> {
        Ok(self.pdbs.get(namespace).cloned().unwrap_or_default())
    }
}

pub struct TestServer {
    pub addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    handle: JoinHandle<anyhow::Result<()>>,
}

impl TestServer {
    pub async fn start(svc: PdbAnalyzerSvc) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();
        let handle = tokio::spawn(serve(listener, svc, async {
            let _ = rx.await;
        }));
        Self {
            addr,
            shutdown: Some(tx),
            handle,
        }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub async fn stop(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        self.handle.await.unwrap().unwrap();
    }
}
