fn main() {
    // napi-build only matters when the Node-API binding surface is compiled in.
    if std::env::var_os("CARGO_FEATURE_NAPI").is_some() {
        napi_build::setup();
    }
}
