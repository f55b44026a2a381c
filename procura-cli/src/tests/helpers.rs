//! Test helpers for staging CLI input files in a scratch directory.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Scratch directory that lives as long as the test.
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Write `value` as JSON to `name` and return its path.
    pub(super) fn write_json(&self, name: &str, value: &Value) -> Utf8PathBuf {
        let path = self.path(name);
        let payload = serde_json::to_vec_pretty(value).expect("serialise fixture");
        write_utf8(&path, &payload);
        path
    }
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write fixture");
}

/// Decode the bytes a command wrote to its output sink.
pub(super) fn parse_output(buffer: &[u8]) -> Value {
    let text = std::str::from_utf8(buffer).expect("stdout utf-8");
    assert!(text.ends_with('\n'), "output should end with a newline");
    serde_json::from_str(text).expect("output should be JSON")
}

pub(super) fn sample_inputs() -> Value {
    serde_json::json!({
        "price": 80.0,
        "compliance": 60.0,
        "quality": 90.0,
        "delivery": 70.0,
    })
}

pub(super) fn sample_bids() -> Value {
    serde_json::json!([
        { "bid": "zenith", "inputs": { "price": 80.0, "compliance": 60.0, "quality": 90.0, "delivery": 70.0 } },
        { "bid": "acme", "inputs": { "price": 90.0, "compliance": 80.0, "quality": 70.0, "delivery": 60.0 } },
        { "bid": "baraka", "inputs": { "price": 100.0, "compliance": 100.0, "quality": 100.0, "delivery": 100.0 } },
    ])
}

/// Nairobi depot followed by three collection points out of visiting order.
pub(super) fn sample_waypoints() -> Value {
    serde_json::json!([
        { "location": { "x": 36.8219, "y": -1.2921 }, "payload": "nairobi" },
        { "location": { "x": 39.6682, "y": -4.0435 }, "payload": "mombasa" },
        { "location": { "x": 37.0834, "y": -1.0388 }, "payload": "thika" },
        { "location": { "x": 37.2634, "y": -1.5177 }, "payload": "machakos" },
    ])
}
