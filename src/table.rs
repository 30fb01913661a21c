//! On-disk form of the equivalence class and hash lookup tables.
//!
//! Two encodings carry the same [`PersistedTables`] content:
//!
//! - JSON: `{"hash_count", "eclass_count", "hashes": [[key, class]], "eclasses": [[index, [r0..r4]]]}`
//!   with ranks as poker values 2..=14.
//! - Binary: magic `PRMV`, `u16` version, `u32` counts, then the same records, all big-endian.
//!
//! Only the field names are shared with packed `high_hand_prime_hash` data files.
//! Those list one unsorted key per dealt hand (2,598,960 of them) and cannot be
//! loaded as-is; write tables with `primeval build` instead.
//!
//! Loading cross-checks every hash key against the ranks of the class it names, so a
//! corrupted file is refused instead of misclassifying hands later.

use crate::evaluator::detector::HandValue;
use crate::evaluator::hash::split_key;
use crate::evaluator::{Category, EclassTable, EvalError, HashLookup, CLASS_COUNT};
use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;
use std::str::FromStr;

const MAGIC: &[u8; 4] = b"PRMV";
const VERSION: u16 = 1;
/// Upper bound on preallocation from a declared record count.
const MAX_PREALLOC: usize = 1 << 16;

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TableError {
    #[error("table i/o: {0}")]
    Io(#[from] io::Error),
    #[error("table json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("not a table file (bad magic)")]
    BadMagic,
    #[error("unsupported table version {0}")]
    UnsupportedVersion(u16),
    #[error("expected {expected} {what}, found {actual}")]
    CountMismatch { what: &'static str, expected: usize, actual: usize },
    #[error("hash key {0} is out of order")]
    UnsortedHashes(u64),
    #[error("hash key {0} appears twice")]
    DuplicateHash(u64),
    #[error("hash key {key} maps to unknown class {class}")]
    UnknownClass { key: u64, class: u16 },
    #[error("hash key {0} was classified two different ways")]
    InconsistentHash(u64),
    #[error("class index {found} where {expected} was expected")]
    ClassIndexGap { expected: usize, found: u16 },
    #[error("class {index} has ranks that do not fit its category")]
    ClassShape { index: u16 },
    #[error("class {index} is not weaker than the class before it")]
    ClassOrder { index: u16 },
    #[error("hash key {key} does not match the ranks of class {class}")]
    KeyMismatch { key: u64, class: u16 },
    #[error("class {0} is referenced by more than one hash key")]
    ClassReferencedTwice(u16),
    #[error("class {0} is not referenced by any hash key")]
    UnreferencedClass(u16),
    #[error("unknown table format '{0}'")]
    UnknownFormat(String),
    #[error("a global evaluator is already installed")]
    AlreadyInstalled,
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Table file encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableFormat {
    Json,
    Binary,
}

impl TableFormat {
    /// `.json` files are JSON, anything else is binary.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => TableFormat::Json,
            _ => TableFormat::Binary,
        }
    }
}

impl FromStr for TableFormat {
    type Err = TableError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(TableFormat::Json),
            "binary" | "bin" => Ok(TableFormat::Binary),
            _ => Err(TableError::UnknownFormat(s.to_string())),
        }
    }
}

/// Serializable snapshot of both tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedTables {
    pub hash_count: usize,
    pub eclass_count: usize,
    /// `(key, class_index)` sorted by key, where `key = product << 1 | is_flush`.
    pub hashes: Vec<(u64, u16)>,
    /// `(class_index, ranks)` in index order.
    pub eclasses: Vec<(u16, [u8; 5])>,
}

impl PersistedTables {
    pub fn from_tables(eclasses: &EclassTable, lookup: &HashLookup) -> Self {
        let hashes = lookup.entries();
        let eclasses: Vec<(u16, [u8; 5])> = eclasses.entries().collect();
        Self { hash_count: hashes.len(), eclass_count: eclasses.len(), hashes, eclasses }
    }

    /// Validate and materialize both tables.
    pub fn into_tables(self) -> Result<(EclassTable, HashLookup), TableError> {
        if self.hashes.len() != self.hash_count {
            return Err(TableError::CountMismatch {
                what: "hashes",
                expected: self.hash_count,
                actual: self.hashes.len(),
            });
        }
        if self.eclasses.len() != self.eclass_count {
            return Err(TableError::CountMismatch {
                what: "eclasses",
                expected: self.eclass_count,
                actual: self.eclasses.len(),
            });
        }
        let eclasses = EclassTable::from_entries(self.eclasses)?;
        check_class_order(&eclasses)?;
        check_keys(&eclasses, &self.hashes)?;
        let lookup = HashLookup::from_entries(self.hashes, eclasses.len())?;
        if lookup.len() != CLASS_COUNT {
            return Err(TableError::CountMismatch {
                what: "hashes",
                expected: CLASS_COUNT,
                actual: lookup.len(),
            });
        }
        Ok((eclasses, lookup))
    }

    pub fn read_json<R: Read>(reader: R) -> Result<Self, TableError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<(), TableError> {
        Ok(serde_json::to_writer(writer, self)?)
    }

    pub fn read_binary<R: Read>(mut reader: R) -> Result<Self, TableError> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic)?;
        if &magic != MAGIC {
            return Err(TableError::BadMagic);
        }
        let version = reader.read_u16::<BigEndian>()?;
        if version != VERSION {
            return Err(TableError::UnsupportedVersion(version));
        }
        let hash_count = reader.read_u32::<BigEndian>()? as usize;
        let eclass_count = reader.read_u32::<BigEndian>()? as usize;

        let mut hashes = Vec::with_capacity(hash_count.min(MAX_PREALLOC));
        for _ in 0..hash_count {
            let key = reader.read_u64::<BigEndian>()?;
            let class = reader.read_u16::<BigEndian>()?;
            hashes.push((key, class));
        }
        let mut eclasses = Vec::with_capacity(eclass_count.min(MAX_PREALLOC));
        for _ in 0..eclass_count {
            let index = reader.read_u16::<BigEndian>()?;
            let mut ranks = [0u8; 5];
            reader.read_exact(&mut ranks)?;
            eclasses.push((index, ranks));
        }
        Ok(Self { hash_count, eclass_count, hashes, eclasses })
    }

    pub fn write_binary<W: Write>(&self, mut writer: W) -> Result<(), TableError> {
        writer.write_all(MAGIC)?;
        writer.write_u16::<BigEndian>(VERSION)?;
        writer.write_u32::<BigEndian>(count_u32(self.hashes.len())?)?;
        writer.write_u32::<BigEndian>(count_u32(self.eclasses.len())?)?;
        for &(key, class) in &self.hashes {
            writer.write_u64::<BigEndian>(key)?;
            writer.write_u16::<BigEndian>(class)?;
        }
        for &(index, ranks) in &self.eclasses {
            writer.write_u16::<BigEndian>(index)?;
            writer.write_all(&ranks)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Read a table file, choosing the encoding from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let tables = match TableFormat::from_path(path) {
            TableFormat::Json => Self::read_json(reader)?,
            TableFormat::Binary => Self::read_binary(reader)?,
        };
        log::info!(
            "loaded {} hashes and {} classes from {}",
            tables.hashes.len(),
            tables.eclasses.len(),
            path.display()
        );
        Ok(tables)
    }

    pub fn save(&self, path: impl AsRef<Path>, format: TableFormat) -> Result<(), TableError> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        match format {
            TableFormat::Json => self.write_json(writer)?,
            TableFormat::Binary => self.write_binary(writer)?,
        }
        log::info!("saved {:?} tables to {}", format, path.display());
        Ok(())
    }
}

/// Classes must run strictly from strongest to weakest.
fn check_class_order(eclasses: &EclassTable) -> Result<(), TableError> {
    let mut previous: Option<HandValue> = None;
    for class in eclasses.iter() {
        let value = HandValue::from_parts(class.category(), &class.ranks());
        if previous.map_or(false, |p| value >= p) {
            return Err(TableError::ClassOrder { index: class.index() });
        }
        previous = Some(value);
    }
    Ok(())
}

/// Each key must encode its class's ranks and flush flag, and each class must own one key.
fn check_keys(eclasses: &EclassTable, hashes: &[(u64, u16)]) -> Result<(), TableError> {
    let mut referenced = vec![false; eclasses.len()];
    for &(key, index) in hashes {
        let class = eclasses
            .class_by_index(usize::from(index))
            .map_err(|_| TableError::UnknownClass { key, class: index })?;
        let expected = class
            .ranks()
            .iter()
            .try_fold(1u64, |acc, r| r.prime().map(|p| acc * p))
            .ok_or(TableError::ClassShape { index })?;
        let flush_class = matches!(class.category(), Category::Flush | Category::StraightFlush);
        if split_key(key) != (expected, flush_class) {
            return Err(TableError::KeyMismatch { key, class: index });
        }
        let seen = &mut referenced[usize::from(index) - 1];
        if *seen {
            return Err(TableError::ClassReferencedTwice(index));
        }
        *seen = true;
    }
    match referenced.iter().position(|&r| !r) {
        Some(missing) => Err(TableError::UnreferencedClass((missing + 1) as u16)),
        None => Ok(()),
    }
}

fn count_u32(n: usize) -> Result<u32, TableError> {
    u32::try_from(n).map_err(|_| TableError::CountMismatch {
        what: "records",
        expected: u32::MAX as usize,
        actual: n,
    })
}
