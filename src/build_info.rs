//! Compile-time build information, shown by `battle-arena --version`.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version string: `battle-arena <date> (<commit>)`.
pub fn version_line() -> String {
    format!("battle-arena {} ({})", BUILD_DATE, BUILD_COMMIT)
}
