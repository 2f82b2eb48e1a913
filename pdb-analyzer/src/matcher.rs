use std::collections::HashSet;

use tracing::{debug, instrument, warn};

use crate::error::{AnalyzerError, ListedResource};
use crate::selector::Selector;
use crate::source::ClusterSource;
use crate::workload::{MissingWorkload, PdbRecord, WorkloadRef};

/// What a scan does when listing inside one namespace fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Skip the namespace. It is then absent from the report, which makes it
    /// look the same as a fully covered namespace.
    #[default]
    FailOpen,
    /// Abort the scan with [`AnalyzerError::ListNamespaced`].
    Strict,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Matcher {
    policy: FailurePolicy,
}

impl Matcher {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Walk every namespace one at a time and collect uncovered workloads.
    ///
    /// Failing to list namespaces is always fatal.
    #[instrument(level = "debug", skip(self, source), fields(policy = ?self.policy))]
    pub async fn scan(
        &self,
        source: &dyn ClusterSource,
    ) -> Result<Vec<MissingWorkload>, AnalyzerError> {
        let namespaces = source
            .list_namespaces()
            .await
            .map_err(AnalyzerError::ListNamespaces)?;
        debug!(count = namespaces.len(), "scan: listed namespaces");

        let mut missing = Vec::new();
        for ns in &namespaces {
            match self.scan_namespace(source, ns).await {
                Ok(found) => {
                    debug!(namespace = %ns, missing = found.len(), "scan: namespace done");
                    missing.extend(found);
                }
                Err(e) => match self.policy {
                    FailurePolicy::FailOpen => {
                        warn!(namespace = %ns, error = %e, "scan: skipping namespace");
                    }
                    FailurePolicy::Strict => return Err(e),
                },
            }
        }
        Ok(missing)
    }

    async fn scan_namespace(
        &self,
        source: &dyn ClusterSource,
        ns: &str,
    ) -> Result<Vec<MissingWorkload>, AnalyzerError> {
        let deployments = source.list_deployments(ns).await.map_err(|e| {
            AnalyzerError::namespaced(ListedResource::Deployments, ns, e)
        })?;
        let statefulsets = source.list_statefulsets(ns).await.map_err(|e| {
            AnalyzerError::namespaced(ListedResource::StatefulSets, ns, e)
        })?;
        let pdbs = source.list_pdbs(ns).await.map_err(|e| {
            AnalyzerError::namespaced(ListedResource::PodDisruptionBudgets, ns, e)
        })?;
        Ok(find_uncovered(&deployments, &statefulsets, &pdbs))
    }
}

/// Workloads with no PDB of the same namespace carrying an identical
/// selector. Deployments come first, then StatefulSets, each in input order.
pub fn find_uncovered(
    deployments: &[WorkloadRef],
    statefulsets: &[WorkloadRef],
    pdbs: &[PdbRecord],
) -> Vec<MissingWorkload> {
    let covered: HashSet<(&str, &Selector)> = pdbs
        .iter()
        .filter_map(|p| {
            p.selector.as_ref().map(|s| (p.namespace.as_str(), s))
        })
        .collect();

    deployments
        .iter()
        .chain(statefulsets)
        .filter(|w| !covered.contains(&(w.namespace.as_str(), &w.selector)))
        .map(MissingWorkload::from)
        .collect()
}
