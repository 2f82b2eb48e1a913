use analyzer_pb::ErrorDetail;
use analyzer_pb::v1::Result as AnalyzerResult;

use crate::report::{ANALYZER_NAME, Report};

/// The full report travels as the single error detail; a covered cluster
/// sends none.
pub fn to_proto_result(report: Report) -> AnalyzerResult {
    let error = report
        .text
        .map(|text| {
            vec![ErrorDetail {
                text,
                ..Default::default()
            }]
        })
        .unwrap_or_default();
    AnalyzerResult {
        name: ANALYZER_NAME.to_string(),
        details: report.status.to_string(),
        error,
        ..Default::default()
    }
}
