// File: crates/chart-core/build.rs
// Summary: Links advapi32 on Windows; Skia's font manager reads installed fonts from the registry.

fn main() {
    if std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("windows") {
        println!("cargo:rustc-link-lib=advapi32");
    }
    println!("cargo:rerun-if-changed=build.rs");
}
