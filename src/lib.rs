//! Shared fixtures for the workspace-level integration tests.

use serde::Deserialize;

/// Contents of `tests/testdata/fibonacci_golden.json`.
#[derive(Debug, Deserialize)]
pub struct GoldenData {
    pub description: String,
    pub values: Vec<GoldenEntry>,
}

/// One known Fibonacci value: either exact, or a prefix plus digit count.
#[derive(Debug, Deserialize)]
pub struct GoldenEntry {
    pub n: u64,
    #[serde(default)]
    pub fib: Option<String>,
    #[serde(default)]
    pub fib_prefix: Option<String>,
    #[serde(default)]
    pub fib_digits: Option<usize>,
}

/// Path of the golden fixture.
pub const GOLDEN_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/testdata/fibonacci_golden.json"
);

/// Load and parse the golden fixture.
pub fn load_golden_data() -> std::io::Result<GoldenData> {
    let data = std::fs::read_to_string(GOLDEN_PATH)?;
    serde_json::from_str(&data).map_err(std::io::Error::from)
}
