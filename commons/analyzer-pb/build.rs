use std::env;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let out_dir = PathBuf::from(env::var("OUT_DIR")?);

    let mut config = prost_build::Config::new();
    config.protoc_executable(protoc_bin_vendored::protoc_bin_path()?);

    tonic_build::configure()
        .build_client(true)
        .build_server(true)
        .file_descriptor_set_path(out_dir.join("analyzer_descriptor.bin"))
        .compile_protos_with_config(
            config,
            &["proto/schema/v1/custom_analyzer.proto"],
            &["proto/"],
        )?;
    Ok(())
}
