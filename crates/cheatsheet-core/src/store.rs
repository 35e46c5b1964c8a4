//! Record aggregation and resolution.
//!
//! Records from every configured source are concatenated into one
//! [`RecordPool`], rebuilt on each call so edits to the sources are picked
//! up without a restart. A source that fails to load contributes nothing and
//! never aborts the others.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::model::Record;
use crate::source::{FileLoader, SourceError, SourceLoader};

/// Resolution failure surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// An explicit id matched no record.
    RecordNotFound { id: String },
    /// No id was given and there are no records at all.
    PoolEmpty,
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::RecordNotFound { id } => write!(f, "no cheatsheet with id '{id}'"),
            ResolveError::PoolEmpty => write!(f, "no cheatsheets found"),
        }
    }
}

impl std::error::Error for ResolveError {}

/// Warning generated for a source that contributed no records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceWarning {
    pub source_path: PathBuf,
    pub message: String,
}

impl From<SourceError> for SourceWarning {
    fn from(err: SourceError) -> Self {
        Self {
            source_path: err.path,
            message: err.message,
        }
    }
}

/// Ordered concatenation of all loaded records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPool {
    records: Vec<Record>,
}

impl RecordPool {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Ids in pool order. Duplicates are preserved.
    pub fn list_ids(&self) -> Vec<&str> {
        self.records.iter().map(|record| record.id.as_str()).collect()
    }

    /// Returns the first record with the given id.
    ///
    /// # Errors
    /// Returns [`ResolveError::RecordNotFound`] if no record matches.
    pub fn find_by_id(&self, id: &str) -> Result<&Record, ResolveError> {
        self.records
            .iter()
            .find(|record| record.id == id)
            .ok_or_else(|| ResolveError::RecordNotFound { id: id.to_string() })
    }

    /// Returns the first record in pool order.
    ///
    /// # Errors
    /// Returns [`ResolveError::PoolEmpty`] if the pool has no records.
    pub fn first(&self) -> Result<&Record, ResolveError> {
        self.records.first().ok_or(ResolveError::PoolEmpty)
    }

    /// Resolves the record a caller asked for.
    ///
    /// A non-empty id must match exactly (whitespace included); it never
    /// falls back to the first record. A missing or empty id selects the
    /// first record.
    ///
    /// # Errors
    /// Returns [`ResolveError`] when nothing can be resolved.
    pub fn resolve(&self, id: Option<&str>) -> Result<&Record, ResolveError> {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => self.find_by_id(id),
            None => self.first(),
        }
    }
}

impl From<Vec<Record>> for RecordPool {
    fn from(records: Vec<Record>) -> Self {
        Self::new(records)
    }
}

/// Result of loading records from every source.
#[derive(Debug, Clone, Default)]
pub struct LoadRecordsResult {
    pub pool: RecordPool,
    pub warnings: Vec<SourceWarning>,
}

/// Loads and concatenates records from the filesystem.
pub fn load_all<P: AsRef<Path>>(paths: &[P]) -> RecordPool {
    load_all_with(&FileLoader, paths).pool
}

/// Loads and concatenates records using the given loader.
///
/// Sources are visited in order; failures become warnings.
pub fn load_all_with<L, P>(loader: &L, paths: &[P]) -> LoadRecordsResult
where
    L: SourceLoader + ?Sized,
    P: AsRef<Path>,
{
    let mut result = LoadRecordsResult::default();

    for path in paths {
        let path = path.as_ref();
        match loader.load(path) {
            Ok(document) => {
                tracing::debug!(
                    path = %path.display(),
                    count = document.cheatsheets.len(),
                    "loaded cheatsheet source"
                );
                result.pool.records.extend(document.cheatsheets);
            }
            Err(err) => {
                if err.is_not_found() {
                    tracing::debug!(path = %path.display(), "cheatsheet source not found; skipping");
                } else {
                    tracing::warn!(path = %path.display(), error = %err.message, "skipping cheatsheet source");
                }
                result.warnings.push(err.into());
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;

    use tempfile::tempdir;

    use super::*;
    use crate::model::{Section, SourceDocument};
    use crate::source::SourceErrorKind;

    struct FakeLoader {
        docs: HashMap<PathBuf, Vec<&'static str>>,
    }

    impl FakeLoader {
        fn new(sources: &[(&str, Option<Vec<&'static str>>)]) -> Self {
            let docs = sources
                .iter()
                .filter_map(|(path, ids)| ids.clone().map(|ids| (PathBuf::from(*path), ids)))
                .collect();
            Self { docs }
        }
    }

    impl SourceLoader for FakeLoader {
        fn load(&self, path: &Path) -> Result<SourceDocument, SourceError> {
            match self.docs.get(path) {
                Some(ids) => Ok(SourceDocument {
                    cheatsheets: ids.iter().map(|id| Record::new(*id, Vec::new())).collect(),
                }),
                None => Err(SourceError {
                    path: path.to_path_buf(),
                    kind: SourceErrorKind::Malformed,
                    message: "bad".to_string(),
                }),
            }
        }
    }

    fn pool(ids: &[&str]) -> RecordPool {
        ids.iter()
            .map(|id| Record::new(*id, vec![Section::new("s", Default::default(), vec![])]))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn test_failing_source_is_skipped() {
        let loader = FakeLoader::new(&[
            ("a", Some(vec!["a1", "a2"])),
            ("b", None),
            ("c", Some(vec!["c1"])),
        ]);

        let result = load_all_with(&loader, &["a", "b", "c"]);

        assert_eq!(result.pool.list_ids(), vec!["a1", "a2", "c1"]);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].source_path, PathBuf::from("b"));
    }

    #[test]
    fn test_source_order_is_preserved() {
        let loader = FakeLoader::new(&[("a", Some(vec!["x"])), ("b", Some(vec!["y", "z"]))]);

        let result = load_all_with(&loader, &["b", "a"]);

        assert_eq!(result.pool.list_ids(), vec!["y", "z", "x"]);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_no_sources_gives_empty_pool() {
        let loader = FakeLoader::new(&[]);
        let result = load_all_with::<_, &str>(&loader, &[]);
        assert!(result.pool.is_empty());
    }

    #[test]
    fn test_load_all_from_files() {
        let dir = tempdir().unwrap();
        let toml_path = dir.path().join("one.toml");
        let json_path = dir.path().join("two.json");
        let bad_path = dir.path().join("bad.yaml");
        fs::write(
            &toml_path,
            "[[cheatsheets]]\nid = \"git\"\nsections = []\n",
        )
        .unwrap();
        fs::write(&json_path, r#"{"cheatsheets":[{"id":"vim","sections":[]}]}"#).unwrap();
        fs::write(&bad_path, "cheatsheets: [").unwrap();

        let pool = load_all(&[
            toml_path,
            bad_path,
            dir.path().join("missing.toml"),
            json_path,
        ]);

        assert_eq!(pool.list_ids(), vec!["git", "vim"]);
    }

    #[test]
    fn test_find_by_id_missing_on_non_empty_pool() {
        let pool = pool(&["git", "vim"]);
        assert_eq!(
            pool.find_by_id("missing"),
            Err(ResolveError::RecordNotFound {
                id: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_find_by_id_returns_first_duplicate() {
        let mut records = vec![Record::new("git", vec![]).with_title("first")];
        records.push(Record::new("git", vec![]).with_title("second"));
        let pool = RecordPool::new(records);

        assert_eq!(pool.find_by_id("git").unwrap().title, "first");
        assert_eq!(pool.list_ids(), vec!["git", "git"]);
    }

    #[test]
    fn test_first_on_empty_pool() {
        assert_eq!(RecordPool::default().first(), Err(ResolveError::PoolEmpty));
    }

    #[test]
    fn test_resolve_explicit_id_never_falls_back() {
        let pool = pool(&["git"]);
        assert!(matches!(
            pool.resolve(Some("vim")),
            Err(ResolveError::RecordNotFound { .. })
        ));
    }

    #[test]
    fn test_resolve_empty_id_uses_first() {
        let pool = pool(&["git", "vim"]);
        assert_eq!(pool.resolve(None).unwrap().id, "git");
        assert_eq!(pool.resolve(Some("")).unwrap().id, "git");
        assert_eq!(pool.resolve(Some("vim")).unwrap().id, "vim");
    }

    #[test]
    fn test_resolve_whitespace_id_is_not_trimmed() {
        let pool = pool(&["git"]);
        assert_eq!(
            pool.resolve(Some("  ")),
            Err(ResolveError::RecordNotFound {
                id: "  ".to_string()
            })
        );
        assert_eq!(
            pool.resolve(Some(" git ")),
            Err(ResolveError::RecordNotFound {
                id: " git ".to_string()
            })
        );
    }

    #[test]
    fn test_resolve_error_messages() {
        let not_found = ResolveError::RecordNotFound {
            id: "x".to_string(),
        };
        assert_eq!(not_found.to_string(), "no cheatsheet with id 'x'");
        assert_eq!(ResolveError::PoolEmpty.to_string(), "no cheatsheets found");
    }
}
