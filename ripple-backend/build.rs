#[path = "builds/clfft.rs"]
mod clfft;

fn main() {
    println!("cargo:rerun-if-env-changed=CLFFT_ROOT");
    if std::env::var_os("CARGO_FEATURE_CLFFT").is_some() {
        clfft::build();
    }
}
