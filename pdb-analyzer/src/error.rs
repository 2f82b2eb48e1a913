use std::fmt;

use tonic::Status;

/// Per-namespace resource listed during a scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListedResource {
    Deployments,
    StatefulSets,
    PodDisruptionBudgets,
}

impl fmt::Display for ListedResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ListedResource::Deployments => "deployments",
            ListedResource::StatefulSets => "statefulsets",
            ListedResource::PodDisruptionBudgets => "poddisruptionbudgets",
        })
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AnalyzerError {
    #[error("failed to list namespaces: {0}")]
    ListNamespaces(#[source] kube::Error),
    #[error("failed to list {resource} in namespace {namespace}: {source}")]
    ListNamespaced {
        resource: ListedResource,
        namespace: String,
        #[source]
        source: kube::Error,
    },
}

impl AnalyzerError {
    pub fn namespaced(
        resource: ListedResource,
        namespace: &str,
        source: kube::Error,
    ) -> Self {
        AnalyzerError::ListNamespaced {
            resource,
            namespace: namespace.to_string(),
            source,
        }
    }
}

impl From<AnalyzerError> for Status {
    fn from(value: AnalyzerError) -> Self {
        Status::internal(value.to_string())
    }
}
