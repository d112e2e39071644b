use tonic_build::manual::{Builder, Method, Service};

fn method(name: &str, route: &str, input: &str, output: &str) -> Method {
    Method::builder()
        .name(name)
        .route_name(route)
        .input_type(format!("crate::proto::{input}"))
        .output_type(format!("crate::proto::{output}"))
        .codec_path("tonic::codec::ProstCodec")
        .build()
}

fn main() {
    let scorekeeper = Service::builder()
        .name("Scorekeeper")
        .package("belot")
        .method(method("reset", "Reset", "ResetRequest", "ResetResponse"))
        .method(method("step", "Step", "StepRequest", "StepResponse"))
        .method(method("get_snapshot", "GetSnapshot", "SnapshotRequest", "SnapshotResponse"))
        .build();

    Builder::new()
        .build_client(false)
        .compile(&[scorekeeper]);
}
