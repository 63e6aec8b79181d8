#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use loadplan::infrastructure::TomlOrderCatalog;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz catalog parsing and validation - this should never panic
        let _ = TomlOrderCatalog::parse(content, Path::new("fuzz.toml"));
    }
});
