//! Generates `include/textmap.h` from the crate sources with cbindgen.

use std::env;
use std::error::Error;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn Error>> {
    let crate_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR")?);

    println!("cargo::rerun-if-changed=src");
    println!("cargo::rerun-if-changed=cbindgen.toml");

    cbindgen::generate(&crate_dir)?.write_to_file(crate_dir.join("include").join("textmap.h"));
    Ok(())
}
