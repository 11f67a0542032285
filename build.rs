use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    built::write_built_file()
        .expect("Failed to acquire build-time information");

    // Put the linker script where the linker can find it.
    let out = PathBuf::from(env::var_os("OUT_DIR").unwrap());
    File::create(out.join("memory.x"))
        .unwrap()
        .write_all(include_bytes!("memory.x"))
        .unwrap();
    println!("cargo:rustc-link-search={}", out.display());
    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}
