use async_trait::async_trait;
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use k8s_openapi::api::core::v1::Namespace;
use k8s_openapi::api::policy::v1::PodDisruptionBudget;
use kube::Client;
use kube::api::{Api, ListParams};

use crate::workload::{PdbRecord, WorkloadRef};

/// Read-only view of the cluster used by a scan.
#[async_trait]
pub trait ClusterSource: Send + Sync + 'static {
    async fn list_namespaces(&self) -> Result<Vec<String>, kube::Error>;

    async fn list_deployments(
        &self,
        namespace: &str,
    ) -> Result<Vec<WorkloadRef>, kube::Error>;

    async fn list_statefulsets(
        &self,
        namespace: &str,
    ) -> Result<Vec<WorkloadRef>, kube::Error>;

    async fn list_pdbs(
        &self,
        namespace: &str,
    ) -> Result<Vec<PdbRecord>, kube::Error>;
}

pub struct KubeClusterSource {
    client: Client,
}

impl KubeClusterSource {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ClusterSource for KubeClusterSource {
    async fn list_namespaces(&self) -> Result<Vec<String>, kube::Error> {
        let api: Api<Namespace> = Api::all(self.client.clone());
        let list = api.list(&ListParams::default()).await?;
        Ok(list
            .items
            .into_iter()
            .filter_map(|ns| ns.metadata.name)
            .collect())
    }

    async fn list_deployments(
        &self,
        namespace: &str,
    ) -> Result<Vec<WorkloadRef>, kube::Error> {
        let api: Api<Deployment> =
            Api::namespaced(self.client.clone(), namespace);
        let list = api.list(&ListParams::default()).await?;
        Ok(list
            .items
            .iter()
            .map(|d| WorkloadRef::from_deployment(namespace, d))
            .collect())
    }

    async fn list_statefulsets(
        &self,
        namespace: &str,
    ) -> Result<Vec<WorkloadRef>, kube::Error> {
        let api: Api<StatefulSet> =
            Api::namespaced(self.client.clone(), namespace);
        let list = api.list(&ListParams::default()).await?;
        Ok(list
            .items
            .iter()
            .map(|s| WorkloadRef::from_statefulset(namespace, s))
            .collect())
    }

    async fn list_pdbs(
        &self,
        namespace: &str,
    ) -> Result<Vec<PdbRecord>, kube::Error> {
        let api: Api<PodDisruptionBudget> =
            Api::namespaced(self.client.clone(), namespace);
        let list = api.list(&ListParams::default()).await?;
        Ok(list
            .items
            .iter()
            .map(|p| PdbRecord::from_pdb(namespace, p))
            .collect())
    }
}
