#![allow(dead_code)]

pub mod fixtures {
    use std::fs;
    use std::path::{Path, PathBuf};

    pub const SHOP_ROOT: &str = "github.com/acme/shop";

    /// Path of a file under `tests/fixtures`
    pub fn fixture(name: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("fixtures")
            .join(name)
    }

    /// Copy a fixture into `dir` and return the copy's path
    pub fn copy_fixture(name: &str, dir: &Path) -> PathBuf {
        let dest = dir.join(name);
        fs::copy(fixture(name), &dest).unwrap();
        dest
    }

    /// Write `content` to `dir/name` and return the path
    pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
