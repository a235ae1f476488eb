use std::path::PathBuf;

pub fn build() {
    // clFFT is a prebuilt vendor library; CLFFT_ROOT points at its install
    // prefix when it is not on the default linker path.
    if let Some(root) = std::env::var_os("CLFFT_ROOT") {
        let lib_dir: PathBuf = PathBuf::from(root).join("lib");
        println!("cargo:rustc-link-search=native={}", lib_dir.display());
    }

    println!("cargo:rustc-link-lib=dylib=clFFT");
    println!("cargo:rustc-link-lib=dylib=OpenCL");
}
