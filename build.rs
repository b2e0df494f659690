// Copies the static site skeleton (index.html, data/) into `dist/` so that
// `wasm-pack build --target web --out-dir dist/pkg` yields a servable folder.
use std::{fs, path::Path};

use fs_extra::dir::{copy, CopyOptions};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        println!("cargo:warning=static/ not found – skipping dist copy");
        return;
    }

    let out_dir = Path::new("dist");
    if let Err(err) = fs::create_dir_all(out_dir) {
        println!("cargo:warning=cannot create dist/: {err}");
        return;
    }

    // `content_only` merges static/* into dist/ rather than creating dist/static.
    // dist/pkg from a previous wasm-pack run is left in place.
    let options = CopyOptions::new().overwrite(true).content_only(true);
    if let Err(err) = copy(static_dir, out_dir, &options) {
        println!("cargo:warning=copying static/ to dist/ failed: {err}");
    }
}
