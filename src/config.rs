use crate::evaluator::EvalOptions;
use std::path::PathBuf;

/// Environment variable naming a persisted table file.
pub const TABLES_ENV: &str = "PRIMEVAL_TABLES";

/// Where the evaluator gets its tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TableSource {
    /// Enumerate all five-card hands in memory.
    #[default]
    Build,
    /// Load a JSON or binary table file.
    File(PathBuf),
}

impl TableSource {
    /// `File` when a path is given, `Build` otherwise.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        path.map_or(TableSource::Build, TableSource::File)
    }
}

/// Evaluator configuration.
///
/// ```
/// use primeval::config::{Config, TableSource};
///
/// let config = Config::default();
/// assert_eq!(config.table, TableSource::Build);
/// assert!(!config.options.reject_duplicates);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub table: TableSource,
    pub options: EvalOptions,
}

impl Config {
    pub fn new(table: TableSource, options: EvalOptions) -> Self {
        Self { table, options }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_source_from_optional_path() {
        assert_eq!(TableSource::from_path(None), TableSource::Build);
        assert_eq!(
            TableSource::from_path(Some(PathBuf::from("t.bin"))),
            TableSource::File(PathBuf::from("t.bin"))
        );
    }
}
