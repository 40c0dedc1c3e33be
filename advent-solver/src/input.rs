//! Read-only store of puzzle inputs, keyed by (day, part)

use crate::error::{InputError, SolveError};
use crate::registry::DAYS;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Puzzle inputs loaded once from a directory tree
///
/// Directory structure: `{root}/day-{day}/part-{part}.txt`
#[derive(Debug, Default)]
pub struct InputStore {
    inputs: HashMap<(u8, u8), String>,
}

impl InputStore {
    /// Load every present input under `root`
    ///
    /// A missing `root` gives an empty store. Empty files count as absent.
    pub fn load(root: impl AsRef<Path>) -> Result<Self, InputError> {
        let root = root.as_ref();
        let mut inputs = HashMap::new();

        for day in 1..=DAYS {
            let day_dir = Self::day_dir(root, day);
            if !day_dir.is_dir() {
                continue;
            }
            for (part, path) in list_parts(&day_dir)? {
                let content = fs::read_to_string(&path).map_err(|source| InputError::Io {
                    path: path.clone(),
                    source,
                })?;
                if content.is_empty() {
                    tracing::debug!(day, part, path = %path.display(), "skipping empty input");
                    continue;
                }
                tracing::debug!(day, part, bytes = content.len(), "loaded input");
                inputs.insert((day, part), content);
            }
        }

        Ok(Self { inputs })
    }

    /// Build a store from in-memory texts
    pub fn from_texts(texts: impl IntoIterator<Item = ((u8, u8), String)>) -> Self {
        Self {
            inputs: texts
                .into_iter()
                .filter(|(_, text)| !text.is_empty())
                .collect(),
        }
    }

    /// Get the path of a day's directory
    pub fn day_dir(root: &Path, day: u8) -> PathBuf {
        root.join(format!("day-{}", day))
    }

    /// Get the raw text for day/part, or None if it isn't there
    pub fn get(&self, day: u8, part: u8) -> Option<&str> {
        self.inputs.get(&(day, part)).map(String::as_str)
    }

    /// Get the raw text for day/part, failing with `MissingInput` if absent
    pub fn require(&self, day: u8, part: u8) -> Result<&str, SolveError> {
        self.get(day, part)
            .ok_or(SolveError::MissingInput { day, part })
    }

    /// Check if input is present
    pub fn contains(&self, day: u8, part: u8) -> bool {
        self.inputs.contains_key(&(day, part))
    }

    /// Number of loaded inputs
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Check if nothing was loaded
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// List `part-{n}.txt` files of a day directory as (part, path)
fn list_parts(day_dir: &Path) -> Result<Vec<(u8, PathBuf)>, InputError> {
    let io_err = |source: std::io::Error| InputError::Io {
        path: day_dir.to_path_buf(),
        source,
    };

    let mut parts = Vec::new();
    for entry in fs::read_dir(day_dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if let Some(part) = part_number(name) {
            parts.push((part, path));
        }
    }
    parts.sort_by_key(|(part, _)| *part);
    Ok(parts)
}

/// Parse `part-{digits}.txt` into the part number
fn part_number(file_name: &str) -> Option<u8> {
    let digits = file_name.strip_prefix("part-")?.strip_suffix(".txt")?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_input(root: &Path, day: u8, file: &str, content: &str) {
        let dir = InputStore::day_dir(root, day);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(file), content).unwrap();
    }

    #[test]
    fn test_part_number() {
        assert_eq!(part_number("part-1.txt"), Some(1));
        assert_eq!(part_number("part-12.txt"), Some(12));
        assert_eq!(part_number("part-.txt"), None);
        assert_eq!(part_number("part-1a.txt"), None);
        assert_eq!(part_number("part-1.md"), None);
        assert_eq!(part_number("notes.txt"), None);
    }

    #[test]
    fn test_day_dir_format() {
        let path = InputStore::day_dir(Path::new("inputs"), 3);
        assert_eq!(path, Path::new("inputs").join("day-3"));
    }

    #[test]
    fn test_load_tree() {
        let temp = TempDir::new().unwrap();
        write_input(temp.path(), 3, "part-1.txt", "00100\n11110\n");
        write_input(temp.path(), 3, "part-2.txt", "10110\n");
        write_input(temp.path(), 3, "readme.txt", "ignored");
        write_input(temp.path(), 1, "part-1.txt", "");

        let store = InputStore::load(temp.path()).unwrap();

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(3, 1), Some("00100\n11110\n"));
        assert_eq!(store.get(3, 2), Some("10110\n"));
        assert!(!store.contains(1, 1));
    }

    #[test]
    fn test_missing_input_is_absent_not_error() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::load(temp.path()).unwrap();

        assert!(store.is_empty());
        assert_eq!(store.get(4, 1), None);
        assert!(matches!(
            store.require(4, 1),
            Err(SolveError::MissingInput { day: 4, part: 1 })
        ));
    }

    #[test]
    fn test_missing_root_gives_empty_store() {
        let temp = TempDir::new().unwrap();
        let store = InputStore::load(temp.path().join("nope")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_from_texts() {
        let store = InputStore::from_texts([((2, 1), "forward 5".to_string()), ((2, 2), String::new())]);
        assert_eq!(store.require(2, 1).unwrap(), "forward 5");
        assert_eq!(store.get(2, 2), None);
    }
}
