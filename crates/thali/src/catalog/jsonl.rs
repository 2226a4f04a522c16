//! JSONL reading and writing for catalogs.
//!
//! One restaurant per line, serialized with the camelCase field names of
//! [`Restaurant`]. Blank lines are skipped. Unlike a lenient loader, the
//! first malformed line aborts the load: a catalog is either read whole or
//! not at all.

use super::Catalog;
use crate::domain::Restaurant;
use crate::error::{CatalogError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

impl Catalog {
    /// Read a catalog from JSONL.
    ///
    /// # Errors
    ///
    /// - `Error::Io` if reading fails
    /// - `CatalogError::MalformedRecord` for the first line that is not a valid record
    /// - Any invariant violation reported by [`Catalog::from_restaurants`]
    pub fn from_json_lines<R: BufRead>(reader: R) -> Result<Self> {
        let mut restaurants = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let restaurant: Restaurant =
                serde_json::from_str(&line).map_err(|source| CatalogError::MalformedRecord {
                    line_number: index + 1,
                    source,
                })?;
            restaurants.push(restaurant);
        }

        Ok(Self::from_restaurants(restaurants)?)
    }

    /// Read a catalog from a JSONL file.
    ///
    /// # Errors
    ///
    /// See [`Catalog::from_json_lines`].
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let catalog = Self::from_json_lines(BufReader::new(file))?;
        tracing::info!(path = %path.display(), count = catalog.len(), "Loaded catalog");
        Ok(catalog)
    }

    /// Write the catalog as JSONL, one restaurant per line.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if writing fails.
    pub fn write_json_lines<W: Write>(&self, mut writer: W) -> Result<()> {
        for restaurant in self {
            serde_json::to_writer(&mut writer, restaurant).map_err(std::io::Error::from)?;
            writer.write_all(b"\n")?;
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn builtin_as_jsonl() -> Vec<u8> {
        let mut buffer = Vec::new();
        Catalog::builtin().write_json_lines(&mut buffer).unwrap();
        buffer
    }

    #[test]
    fn test_export_writes_one_line_per_restaurant() {
        let buffer = builtin_as_jsonl();
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text.lines().count(), Catalog::builtin().len());
        assert!(text.lines().next().unwrap().contains("\"id\":\"bfc-dhanmondi\""));
        assert!(text.contains("\"priceRange\":\"$$\""));
    }

    #[test]
    fn test_exported_catalog_loads_back_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("restaurants.jsonl");
        std::fs::write(&path, builtin_as_jsonl()).unwrap();

        let loaded = Catalog::load(&path).unwrap();
        assert_eq!(&loaded, Catalog::builtin());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut buffer = b"\n".to_vec();
        buffer.extend(builtin_as_jsonl());
        buffer.extend(b"   \n");

        let loaded = Catalog::from_json_lines(Cursor::new(buffer)).unwrap();
        assert_eq!(loaded.len(), Catalog::builtin().len());
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let text = String::from_utf8(builtin_as_jsonl()).unwrap();
        let mut lines: Vec<&str> = text.lines().collect();
        lines[2] = "{\"id\": \"broken\"";
        let input = lines.join("\n");

        let err = Catalog::from_json_lines(Cursor::new(input)).unwrap_err();
        match err {
            Error::Catalog(CatalogError::MalformedRecord { line_number, .. }) => {
                assert_eq!(line_number, 3);
            }
            other => panic!("Expected MalformedRecord, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_price_tier_is_malformed() {
        let text = String::from_utf8(builtin_as_jsonl()).unwrap();
        let first = text.lines().next().unwrap().replace("\"$$\"", "\"$$$$$\"");

        let err = Catalog::from_json_lines(Cursor::new(first)).unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }

    #[test]
    fn test_duplicate_ids_in_file_are_rejected() {
        let text = String::from_utf8(builtin_as_jsonl()).unwrap();
        let first = text.lines().next().unwrap();
        let input = format!("{first}\n{first}\n");

        let err = Catalog::from_json_lines(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, Error::Catalog(CatalogError::DuplicateId(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let err = Catalog::load(&dir.path().join("absent.jsonl")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
