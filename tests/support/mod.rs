use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SPACE_HIGHWAYS: &str = "\
Solar System, Alpha Centauri, 5
Solar System, Betelgeuse, 5
Solar System, Vega, 7
Alpha Centauri, Sirius, 4
Betelgeuse, Sirius, 8
Betelgeuse, Vega, 6
Sirius, Betelgeuse, 8
Sirius, Vega, 2
Vega, Alpha Centauri, 3
";

/// Get a Command for travel-distance, isolated from the caller's environment
pub fn travel_distance() -> Command {
    let mut cmd = cargo_bin_cmd!("travel-distance");
    cmd.env_remove("TRAVEL_DISTANCE_GRAPH")
        .env_remove("TRAVEL_DISTANCE_CONFIG")
        .env_remove("TRAVEL_DISTANCE_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Write `contents` to `name` inside `dir` and return the path
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Temp dir holding the space-highway route file
pub fn setup_graph() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "space.graph", SPACE_HIGHWAYS);
    (dir, path)
}

/// Command preloaded with `--graph <space-highway file>`
#[allow(dead_code)]
pub fn with_graph(path: &Path) -> Command {
    let mut cmd = travel_distance();
    cmd.arg("--graph").arg(path);
    cmd
}
