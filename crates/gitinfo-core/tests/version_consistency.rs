//! Every workspace crate inherits the workspace version, and the binaries'
//! `--version` output therefore agrees with the library's `VERSION`.

use std::path::{Path, PathBuf};

fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .and_then(Path::parent)
        .expect("crate lives two levels below the workspace root")
        .to_path_buf()
}

fn read_toml(path: &Path) -> toml::Value {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("read {}: {e}", path.display()));
    text.parse()
        .unwrap_or_else(|e| panic!("parse {}: {e}", path.display()))
}

fn workspace_members() -> Vec<String> {
    let doc = read_toml(&workspace_root().join("Cargo.toml"));
    doc["workspace"]["members"]
        .as_array()
        .expect("workspace.members is an array")
        .iter()
        .map(|m| m.as_str().expect("member is a string").to_string())
        .collect()
}

#[test]
fn all_members_use_workspace_version() {
    let members = workspace_members();
    assert!(members.contains(&"crates/gitinfo-core".to_string()));
    assert!(members.contains(&"crates/gitinfo-cli".to_string()));
    assert!(members.contains(&"crates/fw-upload".to_string()));

    for member in &members {
        let doc = read_toml(&workspace_root().join(member).join("Cargo.toml"));
        let inherits = doc["package"]["version"]
            .get("workspace")
            .and_then(|v| v.as_bool())
            == Some(true);
        assert!(
            inherits,
            "{member} should use version.workspace = true, got {:?}",
            doc["package"]["version"]
        );
    }
}

#[test]
fn workspace_version_matches_cargo_pkg() {
    let doc = read_toml(&workspace_root().join("Cargo.toml"));
    let ws_version = doc["workspace"]["package"]["version"]
        .as_str()
        .expect("workspace.package.version");
    assert_eq!(ws_version, gitinfo_core::VERSION);
}
