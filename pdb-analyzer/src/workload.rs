use std::fmt;

use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use k8s_openapi::api::policy::v1::PodDisruptionBudget;

use crate::selector::Selector;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WorkloadKind {
    Deployment,
    StatefulSet,
}

impl WorkloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadKind::Deployment => "Deployment",
            WorkloadKind::StatefulSet => "StatefulSet",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A Deployment or StatefulSet as seen by the matcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkloadRef {
    pub kind: WorkloadKind,
    pub namespace: String,
    pub name: String,
    pub selector: Selector,
}

impl WorkloadRef {
    pub fn new(
        kind: WorkloadKind,
        namespace: impl Into<String>,
        name: impl Into<String>,
        selector: Selector,
    ) -> Self {
        Self {
            kind,
            namespace: namespace.into(),
            name: name.into(),
            selector,
        }
    }

    /// A Deployment without a spec is treated as selecting nothing in
    /// particular and gets the empty selector.
    pub fn from_deployment(namespace: &str, deployment: &Deployment) -> Self {
        let selector = deployment
            .spec
            .as_ref()
            .map(|spec| Selector::from_label_selector(&spec.selector))
            .unwrap_or_else(Selector::empty);
        Self::new(
            WorkloadKind::Deployment,
            namespace,
            deployment.metadata.name.clone().unwrap_or_default(),
            selector,
        )
    }

    pub fn from_statefulset(namespace: &str, sts: &StatefulSet) -> Self {
        let selector = sts
            .spec
            .as_ref()
            .map(|spec| Selector::from_label_selector(&spec.selector))
            .unwrap_or_else(Selector::empty);
        Self::new(
            WorkloadKind::StatefulSet,
            namespace,
            sts.metadata.name.clone().unwrap_or_default(),
            selector,
        )
    }
}

/// A PodDisruptionBudget reduced to what coverage needs.
///
/// `selector` is `None` when the PDB has no `spec.selector`; such a budget
/// selects no pods and covers nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdbRecord {
    pub namespace: String,
    pub name: String,
    pub selector: Option<Selector>,
}

impl PdbRecord {
    pub fn new(
        namespace: impl Into<String>,
        name: impl Into<String>,
        selector: Option<Selector>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            selector,
        }
    }

    pub fn from_pdb(namespace: &str, pdb: &PodDisruptionBudget) -> Self {
        let selector = pdb
            .spec
            .as_ref()
            .and_then(|spec| spec.selector.as_ref())
            .map(Selector::from_label_selector);
        Self::new(
            namespace,
            pdb.metadata.name.clone().unwrap_or_default(),
            selector,
        )
    }
}

/// A workload with no PDB whose selector equals its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MissingWorkload {
    pub kind: WorkloadKind,
    pub namespace: String,
    pub name: String,
}

impl MissingWorkload {
    /// `"Kind Name"`, as listed under a namespace in the report.
    pub fn label(&self) -> String {
        format!("{} {}", self.kind, self.name)
    }
}

impl From<&WorkloadRef> for MissingWorkload {
    fn from(w: &WorkloadRef) -> Self {
        Self {
            kind: w.kind,
            namespace: w.namespace.clone(),
            name: w.name.clone(),
        }
    }
}
