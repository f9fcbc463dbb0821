//! Page rendering (HTML), reading the embedded table back, and writing the file.

mod html;

pub use html::render_html;

use crate::Result;
use crate::data::LocationRecord;
use crate::diagnostics;

use anyhow::{Context, anyhow};
use regex::Regex;
use std::fs;

/// Pull the `const LOCS = [...]` block back out of a rendered page.
pub fn extract_locations(document: &str) -> Result<Vec<LocationRecord>> {
    let re = Regex::new(r"(?s)const LOCS = (\[.*?\]);\n")?;
    let caps = re.captures(document).ok_or_else(|| {
        anyhow!(diagnostics::error_message(
            "document has no embedded location table"
        ))
    })?;
    let json = caps.get(1).map(|m| m.as_str()).unwrap_or("[]");
    let records = serde_json::from_str(json)
        .with_context(|| diagnostics::error_message("embedded location table is not valid JSON"))?;
    Ok(records)
}

/// Write the rendered page as UTF-8.
pub fn write_document(path: &str, document: &str) -> Result<()> {
    fs::write(path, document)
        .with_context(|| diagnostics::error_message(format!("write {}", path)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RadiusConfig;
    use crate::data::{builtin, validate};
    use crate::view::build_map_view;

    const TS: &str = "19 Oct 2026  08:30 UTC";

    fn render_builtin() -> String {
        let locs = validate(builtin()).unwrap();
        let view = build_map_view(&locs, &RadiusConfig::default(), TS, None);
        render_html(&view).unwrap()
    }

    #[test]
    fn embedded_table_round_trips() {
        let doc = render_builtin();
        assert_eq!(extract_locations(&doc).unwrap(), builtin());
    }

    #[test]
    fn extract_rejects_foreign_documents() {
        assert!(extract_locations("<html><body></body></html>").is_err());
        assert!(extract_locations("const LOCS = [oops];\n").is_err());
    }

    #[test]
    fn write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        let path = path.to_str().unwrap();

        let doc = render_builtin();
        write_document(path, &doc).unwrap();

        let back = fs::read_to_string(path).unwrap();
        assert_eq!(back, doc);
        assert_eq!(extract_locations(&back).unwrap(), builtin());
    }

    #[test]
    fn write_into_missing_directory_fails_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("index.html");
        let err = write_document(path.to_str().unwrap(), "x").unwrap_err();
        assert!(format!("{:#}", err).contains("index.html"));
    }
}
