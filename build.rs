use cargo_lock::Lockfile;
use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// One locked package, serialized into the binary for --show-build-info.
#[derive(Serialize)]
struct DepInfo {
    name: String,
    version: String,
    checksum: Option<String>,
    source: Option<String>,
}

fn git_hash() -> String {
    let output = Command::new("git").args(["rev-parse", "HEAD"]).output();
    match output {
        Ok(o) if o.status.success() => String::from_utf8(o.stdout).unwrap().trim().to_string(),
        _ => "unknown".to_string(),
    }
}

fn dependency_inventory(lock_path: &Path) -> Vec<DepInfo> {
    let lock = Lockfile::load(lock_path).expect("Cargo.lock is unreadable");
    let mut deps: Vec<DepInfo> = lock
        .packages
        .into_iter()
        .map(|pkg| DepInfo {
            name: pkg.name.as_str().to_string(),
            version: pkg.version.to_string(),
            checksum: pkg.checksum.map(|c| c.to_string()),
            source: pkg.source.map(|s| s.to_string()),
        })
        .collect();
    deps.sort_by(|a, b| a.name.cmp(&b.name));
    deps
}

fn main() {
    println!("cargo:rustc-env=APP_GIT_HASH={}", git_hash());
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=Cargo.lock");

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let deps = dependency_inventory(&Path::new(&manifest_dir).join("Cargo.lock"));
    let json = serde_json::to_string(&deps).expect("dependency list failed to serialize");

    // The binary pulls this back in with include_str!(env!("DEPS_INFO_PATH"))
    let out = Path::new(&env::var("OUT_DIR").unwrap()).join("deps_info.json");
    fs::write(&out, json).expect("could not write deps_info.json");
    println!("cargo:rustc-env=DEPS_INFO_PATH={}", out.display());
}
