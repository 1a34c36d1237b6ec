mod hash;

pub use hash::{compute_file_hash, compute_hash};

/// Default directory holding the speed benchmark results
pub const DEFAULT_SPEED_DIR: &str = "genesis-init-speed";

/// Default directory holding the memory benchmark results
pub const DEFAULT_MEMORY_DIR: &str = "genesis-init-memory";

/// Default directory receiving the merged results
pub const DEFAULT_OUTPUT_DIR: &str = "genesis-data";

/// Name of the optional config file, looked up in the root directory
pub const CONFIG_FILE: &str = ".genesis-merge.json";

/// `<id>.json`
pub fn json_file_name(identifier: &str) -> String {
    format!("{identifier}.json")
}

/// `<id>.html`
pub fn html_file_name(identifier: &str) -> String {
    format!("{identifier}.html")
}

/// `<id>.metadata.json`
pub fn metadata_file_name(identifier: &str) -> String {
    format!("{identifier}.metadata.json")
}

/// `<id>.<side>.json`, used for the relocated HTML reports
pub fn side_file_name(identifier: &str, side: &str) -> String {
    format!("{identifier}.{side}.json")
}
