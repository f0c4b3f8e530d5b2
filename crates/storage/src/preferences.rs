// Grouped key/value preference store
// Persisted to one JSON file, rewritten in full on every mutation

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::StorageError;
use crate::paths;
use crate::value::{FromCanonical, ToCanonical};

/// Group used by the un-suffixed method forms.
pub const DEFAULT_GROUP: &str = "Default";

/// One named group of key/value pairs.
///
/// The `Values` wrapper is part of the file format: on disk each group is an
/// object holding a single field that contains the key map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Group {
    #[serde(rename = "Values", default)]
    values: BTreeMap<String, String>,
}

/// Grouped preference store backed by a single JSON file.
///
/// Values are persisted as strings; [`ToCanonical`] and [`FromCanonical`]
/// decide the textual form per logical type. Every mutating call rewrites
/// the whole file before returning, so the file always reflects the last
/// successful write.
///
/// The store is not internally synchronized: mutating methods take
/// `&mut self`, and a process that shares one store across threads wraps it
/// in a `Mutex`, which also keeps the file write inside the critical
/// section.
#[derive(Debug)]
pub struct Preferences {
    path: PathBuf,
    groups: BTreeMap<String, Group>,
}

impl Preferences {
    /// Conventional store location, under the per-app local data directory.
    pub fn default_path() -> PathBuf {
        paths::local_file("preferences.json")
    }

    /// Open the store at the conventional location.
    pub fn open_default() -> Self {
        Self::open(Self::default_path())
    }

    /// Open the store backed by `path`, loading whatever is already there.
    ///
    /// An absent file starts the store empty, as does a file that does not
    /// parse: a corrupt preference file must never take the app down at
    /// startup, so it is dropped (with a note on stderr) and replaced on
    /// the next write. Nothing is created on disk until the first mutation.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let groups = Self::load(&path);
        Self { path, groups }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(path: &Path) -> BTreeMap<String, Group> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                eprintln!("Starting with empty preferences");
                return BTreeMap::new();
            }
        };

        match serde_json::from_str(&contents) {
            Ok(groups) => groups,
            Err(e) => {
                eprintln!("Error parsing {}: {}", path.display(), e);
                eprintln!("Starting with empty preferences");
                BTreeMap::new()
            }
        }
    }

    /// Typed read from the [`DEFAULT_GROUP`] group.
    pub fn get<T: FromCanonical>(&self, key: &str, default: T) -> Result<T, StorageError> {
        self.get_in(DEFAULT_GROUP, key, default)
    }

    /// Typed read.
    ///
    /// A missing group or key returns `default`. Present text is parsed as
    /// the logical type of `default`; text that does not parse is an error
    /// rather than a fallback, so corrupt data stays visible to the caller.
    pub fn get_in<T: FromCanonical>(
        &self,
        group: &str,
        key: &str,
        default: T,
    ) -> Result<T, StorageError> {
        let Some(raw) = self.groups.get(group).and_then(|g| g.values.get(key)) else {
            return Ok(default);
        };

        T::from_canonical(raw, default).ok_or_else(|| StorageError::Parse {
            group: group.to_string(),
            key: key.to_string(),
            value: raw.clone(),
            target: T::LOGICAL_TYPE,
        })
    }

    /// Store a value in the [`DEFAULT_GROUP`] group.
    pub fn set<T: ToCanonical>(&mut self, key: &str, value: T) -> Result<(), StorageError> {
        self.set_in(DEFAULT_GROUP, key, value)
    }

    /// Store `value` under `group`/`key` and persist.
    ///
    /// The group is created on first use; an existing value is overwritten.
    pub fn set_in<T: ToCanonical>(
        &mut self,
        group: &str,
        key: &str,
        value: T,
    ) -> Result<(), StorageError> {
        self.groups
            .entry(group.to_string())
            .or_default()
            .values
            .insert(key.to_string(), value.to_canonical());
        self.save()
    }

    /// Remove a key from the [`DEFAULT_GROUP`] group.
    pub fn remove(&mut self, key: &str) -> Result<bool, StorageError> {
        self.remove_in(DEFAULT_GROUP, key)
    }

    /// Remove one key.
    ///
    /// Returns `false`, without touching the file, when the group or key
    /// does not exist. An emptied group stays in place.
    pub fn remove_in(&mut self, group: &str, key: &str) -> Result<bool, StorageError> {
        let Some(g) = self.groups.get_mut(group) else {
            return Ok(false);
        };
        if g.values.remove(key).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Drop every group and persist the now-empty store.
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.groups = BTreeMap::new();
        self.save()
    }

    /// Drop one whole group.
    ///
    /// Returns `false`, without touching the file, when the group does not
    /// exist.
    pub fn clear_group(&mut self, group: &str) -> Result<bool, StorageError> {
        if self.groups.remove(group).is_none() {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Serialize the whole store and replace the file.
    ///
    /// Full rewrite via sibling temp file + rename; a crash mid-write
    /// cannot leave a truncated preference file behind.
    fn save(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| StorageError::Io(format!("create {}: {}", parent.display(), e)))?;
        }

        let json = serde_json::to_string_pretty(&self.groups)
            .map_err(|e| StorageError::Io(format!("serialize preferences: {e}")))?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)
            .map_err(|e| StorageError::Io(format!("write {}: {}", tmp.display(), e)))?;
        fs::rename(&tmp, &self.path)
            .map_err(|e| StorageError::Io(format!("rename {}: {}", tmp.display(), e)))?;
        Ok(())
    }
}
