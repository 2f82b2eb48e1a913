use std::collections::BTreeMap;

use crate::workload::MissingWorkload;

pub const ANALYZER_NAME: &str = "pdb-analyzer";

pub const STATUS_ALL_COVERED: &str =
    "All Deployments and StatefulSets across all namespaces have matching PDBs.";
pub const STATUS_GAPS_FOUND: &str =
    "Missing PodDisruptionBudgets detected for some workloads.";

const HEADER: &str =
    "Missing PodDisruptionBudgets detected for the following workloads:\n\n";

/// Uncovered workloads grouped by namespace, namespaces ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GapReport {
    namespaces: BTreeMap<String, Vec<String>>,
}

impl GapReport {
    /// Within a namespace, entries keep the order of `missing`.
    pub fn from_missing(missing: &[MissingWorkload]) -> Self {
        let mut namespaces: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for m in missing {
            namespaces
                .entry(m.namespace.clone())
                .or_default()
                .push(m.label());
        }
        Self { namespaces }
    }

    pub fn is_empty(&self) -> bool {
        self.namespaces.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.namespaces
            .iter()
            .map(|(ns, items)| (ns.as_str(), items.as_slice()))
    }

    pub fn render(&self) -> String {
        let mut out = String::from(HEADER);
        for (ns, items) in self.iter() {
            out.push_str(&format!("Namespace: {}\n", ns));
            for item in items {
                out.push_str(&format!("  - {}\n", item));
            }
            out.push('\n');
        }

        push_remediation(&mut out);

        out.push_str("=== SUMMARY ===\n");
        out.push_str("Missing PodDisruptionBudgets by namespace:\n");
        for (ns, items) in self.iter() {
            out.push_str(&format!("  - {}: {} workloads\n", ns, items.len()));
        }
        out
    }
}

fn push_remediation(out: &mut String) {
    out.push_str("\n=== RECOMMENDATION ===\n");
    out.push_str("Create PodDisruptionBudgets for these workloads to ensure high availability during voluntary disruptions.\n");
    out.push_str("\n=== HOW TO FIX ===\n");
    out.push_str("For each workload, create a PDB that matches the workload's selector.\n");
    out.push_str("Example for Deployment 'app' in namespace 'default':\n\n");
    out.push_str("```yaml\n");
    out.push_str("apiVersion: policy/v1\n");
    out.push_str("kind: PodDisruptionBudget\n");
    out.push_str("metadata:\n");
    out.push_str("  name: app-pdb\n");
    out.push_str("  namespace: default\n");
    out.push_str("spec:\n");
    out.push_str("  minAvailable: 1  # or use maxUnavailable\n");
    out.push_str("  selector:\n");
    out.push_str("    matchLabels:\n");
    out.push_str("      app: app-name  # must match your workload's selector\n");
    out.push_str("```\n\n");
}

/// Outcome of one analyzer run: a short status plus, when gaps exist, the
/// full text report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub status: &'static str,
    pub text: Option<String>,
}

impl Report {
    pub fn has_gaps(&self) -> bool {
        self.text.is_some()
    }
}

pub fn render(missing: &[MissingWorkload]) -> Report {
    let gaps = GapReport::from_missing(missing);
    if gaps.is_empty() {
        return Report {
            status: STATUS_ALL_COVERED,
            text: None,
        };
    }
    Report {
        status: STATUS_GAPS_FOUND,
        text: Some(gaps.render()),
    }
}
