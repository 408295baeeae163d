use std::{
    fs,
    path::{Path, PathBuf},
};

fn project_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).parent().unwrap().to_path_buf()
}

fn rust_files(dir: &Path, acc: &mut Vec<PathBuf>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            rust_files(&path, acc);
        } else if path.extension().is_some_and(|it| it == "rs") {
            acc.push(path);
        }
    }
}

#[test]
fn no_debug_leftovers() {
    let root = project_root();
    let mut files = Vec::new();
    for dir in ["src", "tests", "demos"] {
        rust_files(&root.join(dir), &mut files);
    }
    for file in files {
        let text = fs::read_to_string(&file).unwrap();
        for (i, line) in text.lines().enumerate() {
            let stripped = line.trim_end();
            if stripped.len() != line.len() {
                panic!("trailing whitespace at {}:{}", file.display(), i + 1);
            }
            if line.contains("dbg!(") || line.contains("todo!(") {
                panic!("debug leftover at {}:{}", file.display(), i + 1);
            }
        }
    }
}

#[test]
fn manifest_is_consistent() {
    let root = project_root();
    let manifest = fs::read_to_string(root.join("Cargo.toml")).unwrap();

    let field = |key: &str| {
        manifest
            .lines()
            .find_map(|it| it.strip_prefix(key)?.trim_start().strip_prefix("= \""))
            .and_then(|it| it.strip_suffix('"'))
            .unwrap_or_else(|| panic!("`{key}` is missing from Cargo.toml"))
            .to_string()
    };

    let version = field("version");
    let parts = version.split('.').collect::<Vec<_>>();
    assert!(
        parts.len() == 3 && parts.iter().all(|it| it.parse::<u32>().is_ok()),
        "version `{version}` is not MAJOR.MINOR.PATCH"
    );

    let name = field("name");
    let xtask = fs::read_to_string(root.join("xtask/src/main.rs")).unwrap();
    assert!(xtask.contains(&format!("-p {name}\"")), "xtask publishes a crate other than `{name}`");

    for line in manifest.lines() {
        if let Some(path) = line.strip_prefix("path = \"").and_then(|it| it.strip_suffix('"')) {
            assert!(root.join(path).exists(), "Cargo.toml points at missing `{path}`");
        }
    }
}
