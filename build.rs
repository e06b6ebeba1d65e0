#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_hex_case(&outdir_path, "default_hex_case.rs")?;
    Ok(())
}

/// Create default_hex_case.rs, containing definition of constant DEFAULT_HEX_CASE
fn write_default_hex_case(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let case = match env::var("RUST_BYTENUM_DEFAULT_HEX_CASE") {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "lower" => "Lower",
            "upper" => "Upper",
            _ => panic!("$RUST_BYTENUM_DEFAULT_HEX_CASE must be 'lower' or 'upper'"),
        },
        Err(_) => "Lower",
    };

    let default_hex_case_rs_path = outdir_path.join(filename);

    let default_hex_case = format!("const DEFAULT_HEX_CASE: LetterCase = LetterCase::{case};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_hex_case_rs_path) {
        Ok(existing_contents) if existing_contents == default_hex_case => {},
        _ => {
            let mut default_hex_case_rs = File::create(&default_hex_case_rs_path)
                .expect("Could not create default_hex_case.rs");
            write!(default_hex_case_rs, "{default_hex_case}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", default_hex_case_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_BYTENUM_DEFAULT_HEX_CASE");

    Ok(())
}
