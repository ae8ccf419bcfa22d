use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/beerxml")
        .join(name)
}

/// Writes `content` under a fresh temporary directory.
#[allow(dead_code)]
pub fn write_document(name: &str, content: &[u8]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (temp_dir, path)
}

/// Wraps one `<RECIPE>` body in a document.
#[allow(dead_code)]
pub fn recipe_document(body: &str) -> String {
    format!("<RECIPES><RECIPE>{}</RECIPE></RECIPES>", body)
}

/// Style and equipment every synthesized recipe needs.
#[allow(dead_code)]
pub const MINIMAL_REFERENCES: &str = "\
    <STYLE><NAME>Bitter</NAME><CATEGORY_NUMBER>11</CATEGORY_NUMBER>\
    <STYLE_LETTER>A</STYLE_LETTER><STYLE_GUIDE>BJCP</STYLE_GUIDE></STYLE>\
    <EQUIPMENT><NAME>Kit</NAME><BATCH_SIZE>20</BATCH_SIZE><BOIL_SIZE>24</BOIL_SIZE></EQUIPMENT>";
