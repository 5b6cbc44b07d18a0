use std::fs;
use std::path::Path;

use crate::error::GeneratorError;

use super::*;

impl LockDocument {
    /// Load and parse a lockfile, structural decoding only; missing
    /// optional fields are tolerated downstream.
    pub fn load(path: &Path) -> Result<Self, GeneratorError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            GeneratorError::Io(format!("cannot read lockfile {}: {e}", path.display()))
        })?;

        serde_json::from_str(&contents).map_err(|e| {
            GeneratorError::Parse(format!("cannot parse lockfile {}: {e}", path.display()))
        })
    }

    /// Document shape decides the traversal, `packages` wins over
    /// `dependencies`; neither key present means nothing to do.
    pub fn schema(&self) -> LockSchema<'_> {
        if let Some(packages) = &self.packages {
            LockSchema::Flat(packages)
        } else if let Some(dependencies) = &self.dependencies {
            LockSchema::Tree(dependencies)
        } else {
            LockSchema::Empty
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn load_fails_on_missing_file() {
        let err = LockDocument::load(Path::new("/nonexistent/package-lock.json")).unwrap_err();
        assert!(matches!(err, GeneratorError::Io(_)));
        assert_eq!(err.exit_code(), -2);
    }

    #[test]
    fn load_fails_on_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{not json").unwrap();

        let err = LockDocument::load(file.path()).unwrap_err();
        assert!(matches!(err, GeneratorError::Parse(_)));
        assert_eq!(err.exit_code(), -3);
    }

    #[test]
    fn packages_key_wins_over_dependencies() {
        let doc: LockDocument = serde_json::from_str(
            r#"{
  "packages": { "": {} },
  "dependencies": { "foo": { "resolved": "https://x/foo-1.0.tgz" } }
}"#,
        )
        .unwrap();

        assert!(matches!(doc.schema(), LockSchema::Flat(_)));
    }

    #[test]
    fn dependencies_key_selects_tree_form() {
        let doc: LockDocument =
            serde_json::from_str(r#"{ "dependencies": {} }"#).unwrap();
        assert!(matches!(doc.schema(), LockSchema::Tree(_)));
    }

    #[test]
    fn neither_key_means_nothing_to_do() {
        let doc: LockDocument = serde_json::from_str(r#"{ "lockfileVersion": 1 }"#).unwrap();
        assert!(matches!(doc.schema(), LockSchema::Empty));
    }

    #[test]
    fn tolerates_unknown_fields_and_version_maps() {
        // flat entries carry version-requirement maps under the same
        // field name the tree form uses for nested records
        let doc: LockDocument = serde_json::from_str(
            r#"{
  "name": "app",
  "lockfileVersion": 3,
  "packages": {
    "node_modules/foo": {
      "version": "1.0.0",
      "resolved": "https://x/foo-1.0.tgz",
      "integrity": "sha512-deadbeef",
      "dependencies": { "bar": "^2.0.0" },
      "engines": { "node": ">=14" }
    }
  }
}"#,
        )
        .unwrap();

        match doc.schema() {
            LockSchema::Flat(packages) => {
                let record = &packages["node_modules/foo"];
                assert_eq!(record.resolved.as_deref(), Some("https://x/foo-1.0.tgz"));
                assert_eq!(record.integrity.as_deref(), Some("sha512-deadbeef"));
            }
            other => panic!("unexpected schema: {other:?}"),
        }
    }
}
