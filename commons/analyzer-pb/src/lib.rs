pub mod v1 {
    tonic::include_proto!("schema.v1");
}

pub use v1::custom_analyzer_service_client::CustomAnalyzerServiceClient;
pub use v1::custom_analyzer_service_server::{
    CustomAnalyzerService, CustomAnalyzerServiceServer,
};
pub use v1::{ErrorDetail, RunRequest, RunResponse, Sensitive};

/// Encoded descriptor set for `schema.v1`, registered with the reflection
/// service.
pub const FILE_DESCRIPTOR_SET: &[u8] =
    tonic::include_file_descriptor_set!("analyzer_descriptor");
