use std::collections::HashMap;

use crate::error::{ConvertError, Result};

// Source prefab path -> engine asset path. Lookups are exact string
// matches; the source data is consistent about casing and separators, so
// nothing is normalized here.
#[derive(Debug, Default)]
pub struct MappingTable {
    entries: HashMap<String, String>,
}

impl MappingTable {
    // Parse `source;target` rows, one per line, no header, no escaping.
    // Fields past the second are ignored and blank lines are skipped.
    // Later rows replace earlier ones with the same source path.
    pub fn parse_lines<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::build(lines, false)
    }

    // Like parse_lines, but a repeated source path is an error. Catches
    // accidental copy-paste rows in hand-maintained tables.
    pub fn parse_lines_strict<'a, I>(lines: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::build(lines, true)
    }

    fn build<'a, I>(lines: I, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut entries = HashMap::new();
        for (idx, line) in lines.into_iter().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            let mut fields = line.split(';');
            let (Some(source), Some(target)) = (fields.next(), fields.next()) else {
                return Err(ConvertError::Format {
                    line: idx + 1,
                    reason: format!("mapping row has no ';' separator: '{line}'"),
                });
            };
            if strict && entries.contains_key(source) {
                return Err(ConvertError::DuplicateMapping {
                    line: idx + 1,
                    key: source.to_string(),
                });
            }
            entries.insert(source.to_string(), target.to_string());
        }
        Ok(Self { entries })
    }

    pub fn lookup(&self, source: &str) -> Option<&str> {
        self.entries.get(source).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::MappingTable;

    #[test]
    fn lookup_is_exact() {
        let table = MappingTable::parse_lines(["resmap/tree01;prefabs/Tree01"]).unwrap();
        assert_eq!(table.lookup("resmap/tree01"), Some("prefabs/Tree01"));
        // no case folding on lookups
        assert_eq!(table.lookup("RESMAP/TREE01"), None);
        assert_eq!(table.lookup("resmap/tree02"), None);
    }

    #[test]
    fn later_duplicate_wins() {
        let table =
            MappingTable::parse_lines(["resmap/a;first", "resmap/a;second"]).unwrap();
        assert_eq!(table.lookup("resmap/a"), Some("second"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn strict_mode_rejects_duplicates() {
        let err = MappingTable::parse_lines_strict(["resmap/a;first", "resmap/a;second"])
            .unwrap_err();
        assert!(err.to_string().contains("duplicate mapping"));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn extra_fields_are_ignored() {
        let table = MappingTable::parse_lines(["resmap/a;target;comment"]).unwrap();
        assert_eq!(table.lookup("resmap/a"), Some("target"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let table = MappingTable::parse_lines(["", "resmap/a;target", "   "]).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn row_without_separator_is_an_error() {
        let err = MappingTable::parse_lines(["resmap/a;ok", "no separator here"]).unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
