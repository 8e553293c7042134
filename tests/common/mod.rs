//! Common test utilities for jfig integration tests
//!
//! Provides shared test fixtures, data types, and helper functions.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// =============================================================================
// Test Data
// =============================================================================

/// A per-entity record stored one file per remote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RemoteConfig {
    #[serde(rename = "type")]
    pub remote_type: String,
    pub endpoint: Option<String>,
    pub port: u16,
}

impl RemoteConfig {
    pub fn new(remote_type: &str, port: u16) -> Self {
        Self {
            remote_type: remote_type.to_string(),
            endpoint: None,
            port,
        }
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }
}

/// Nested settings used for whole-file deserialization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UiSettings {
    pub theme: String,
    pub font_size: f64,
    pub tags: Vec<String>,
}

// =============================================================================
// Test Fixtures
// =============================================================================

/// Temporary directory that is removed when the fixture drops
pub struct TestFixture {
    pub temp_dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Fixture pre-populated with `(relative path, content)` files
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let fixture = Self::new();
        for (name, content) in files {
            fixture.write(name, content);
        }
        fixture
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.temp_dir.path().join(relative)
    }

    /// Write `content` to `relative`, creating parent directories
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent dir");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("Failed to read file")
    }

    /// Parse the file at `relative` as JSON
    pub fn read_json(&self, relative: &str) -> Value {
        serde_json::from_str(&self.read(relative)).expect("File does not hold valid JSON")
    }
}
