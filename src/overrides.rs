//! File-backed override source, overlaid on a base key source.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::error::BindError;
use crate::source::KeySource;

/// A two-layer key source: entries loaded from an override file shadow the
/// base source; keys absent from the file fall through.
///
/// An entry present in the file with an empty value counts as absent and
/// falls through, so the overlay can never erase a base key.
#[derive(Debug)]
pub(crate) struct Overlay<'a, S: ?Sized> {
    entries: HashMap<String, String>,
    base: &'a S,
}

impl<'a, S: KeySource + ?Sized> Overlay<'a, S> {
    /// Parses the override file at `path` and stacks it on `base`.
    ///
    /// The file is dotenv-format; the process environment is never touched.
    pub(crate) fn load(path: &Path, base: &'a S) -> Result<Self, BindError> {
        let entries = read_override_file(path)?;
        debug!("loaded {} override entries from {:?}", entries.len(), path);
        Ok(Self { entries, base })
    }
}

impl<S: KeySource + ?Sized> KeySource for Overlay<'_, S> {
    fn get(&self, key: &str) -> String {
        match self.entries.get(key) {
            Some(value) if !value.is_empty() => value.clone(),
            _ => self.base.get(key),
        }
    }
}

fn read_override_file(path: &Path) -> Result<HashMap<String, String>, BindError> {
    let wrap = |source: dotenvy::Error| BindError::OverrideLoad {
        path: path.to_path_buf(),
        source,
    };

    let mut entries = HashMap::new();
    for item in dotenvy::from_filename_iter(path).map_err(wrap)? {
        let (key, value) = item.map_err(wrap)?;
        entries.insert(key, value);
    }
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MapSource;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_overlay_shadows_base() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "DB_HOST=override.local").unwrap();

        let base = MapSource::new()
            .with("DB_HOST", "base.local")
            .with("DB_PORT", "5432");
        let overlay = Overlay::load(file.path(), &base).unwrap();

        assert_eq!(overlay.get("DB_HOST"), "override.local");
    }

    #[test]
    fn test_overlay_falls_through_for_absent_keys() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "DB_HOST=override.local").unwrap();

        let base = MapSource::new().with("DB_PORT", "5432");
        let overlay = Overlay::load(file.path(), &base).unwrap();

        assert_eq!(overlay.get("DB_PORT"), "5432");
        assert_eq!(overlay.get("DB_USER"), "");
    }

    #[test]
    fn test_overlay_empty_file_value_falls_through() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "DB_HOST=").unwrap();

        let base = MapSource::new().with("DB_HOST", "base.local");
        let overlay = Overlay::load(file.path(), &base).unwrap();

        assert_eq!(overlay.get("DB_HOST"), "base.local");
    }

    #[test]
    fn test_missing_override_file() {
        let base = MapSource::new();
        let result = Overlay::load(Path::new("/nonexistent/.env"), &base);

        assert!(matches!(result, Err(BindError::OverrideLoad { .. })));
    }

    #[test]
    fn test_malformed_override_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "this line has no equals sign").unwrap();

        let base = MapSource::new();
        let result = Overlay::load(file.path(), &base);

        assert!(matches!(result, Err(BindError::OverrideLoad { .. })));
    }
}
