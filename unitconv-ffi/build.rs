//! Writes `include/unitconv.h` from the crate's `extern "C"` surface.
//!
//! A header that cannot be produced is reported as a cargo warning; the library still builds.

use std::env;
use std::path::Path;

const HEADER: &str = "unitconv.h";

fn main() {
    println!("cargo:rerun-if-changed=src/");
    println!("cargo:rerun-if-changed=cbindgen.toml");

    // docs.rs builds in a read-only source tree.
    if env::var_os("DOCS_RS").is_some() {
        return;
    }

    let Some(crate_dir) = env::var_os("CARGO_MANIFEST_DIR") else {
        println!("cargo:warning=CARGO_MANIFEST_DIR is not set; skipping {HEADER}");
        return;
    };

    if let Err(reason) = write_header(Path::new(&crate_dir)) {
        println!("cargo:warning=Skipping {HEADER}: {reason}");
    }
}

fn write_header(crate_dir: &Path) -> Result<(), String> {
    let include_dir = crate_dir.join("include");
    std::fs::create_dir_all(&include_dir)
        .map_err(|e| format!("cannot create {}: {e}", include_dir.display()))?;

    let config = cbindgen::Config::from_file(crate_dir.join("cbindgen.toml"))
        .map_err(|e| format!("cannot read cbindgen.toml: {e}"))?;

    let bindings = cbindgen::Builder::new()
        .with_crate(crate_dir)
        .with_config(config)
        .generate()
        .map_err(|e| format!("cbindgen failed: {e}"))?;

    bindings.write_to_file(include_dir.join(HEADER));
    Ok(())
}
