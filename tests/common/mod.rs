//! Shared test utilities and fixtures

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use fibseq_config::FibConfig;

/// Expected stdout of a default run.
pub const DEFAULT_OUTPUT: &str = "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n";

/// Run the driver in-process and capture what it writes.
pub fn run_to_string(config: &FibConfig) -> anyhow::Result<String> {
    let mut out = Vec::new();
    fibseq::run(config, &mut out)?;
    Ok(String::from_utf8(out)?)
}

/// Write `contents` as the config file under a fake home directory.
pub fn write_home_config(home: &Path, contents: &str) {
    let dir = home.join(".fibseq");
    fs::create_dir_all(&dir).expect("create config dir");
    fs::write(dir.join("config.toml"), contents).expect("write config");
}
