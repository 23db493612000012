//! data_runtime: config schemas and loaders.
//!
//! Everything tunable about the controller lives in `data/config/*.toml` at
//! the workspace root, with env-var overrides for quick iteration. Absent
//! files fall back to built-in defaults; unparsable files are errors.

use std::path::PathBuf;

pub mod configs {
    pub mod controller;
    pub mod pc_animations;
    pub mod weapon;
}

/// Resolve the workspace `data/` directory so tests and tools can run from
/// any crate.
pub(crate) fn data_root() -> PathBuf {
    let here = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    let ws = here.join("../../data");
    if ws.is_dir() { ws } else { here.join("data") }
}
