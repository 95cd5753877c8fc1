use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest_path = Path::new(&out_dir).join("catalog.rs");
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let catalog_dir = Path::new(&manifest_dir).join("catalog");

    let mut entries: Vec<_> = WalkDir::new(&catalog_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map_or(false, |ext| ext == "yaml" || ext == "yml")
        })
        .map(|e| e.into_path())
        .collect();
    // Stable order regardless of directory iteration
    entries.sort();

    let mut code = String::new();
    code.push_str("/// Embedded catalog files as (relative path, YAML text)\n");
    code.push_str("pub static SOURCES: &[(&str, &str)] = &[\n");
    for path in &entries {
        let name = path.strip_prefix(&catalog_dir).unwrap().to_string_lossy();
        code.push_str(&format!(
            "    ({:?}, include_str!({:?})),\n",
            name,
            path.to_string_lossy()
        ));
    }
    code.push_str("];\n");

    fs::write(&dest_path, code).unwrap();

    println!("cargo:rerun-if-changed=catalog");
}
