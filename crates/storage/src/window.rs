// Window placement persistence
// Saved field by field at shutdown, restored before the first frame

use crate::error::StorageError;
use crate::preferences::Preferences;

/// Preference group holding the geometry keys.
const GROUP: &str = "Window";

/// Last-known main window geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPlacement {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub is_maximized: bool,
}

impl WindowPlacement {
    /// Read the stored placement, taking any field that was never saved
    /// from `fallback` (first launch, or a partially written group).
    pub fn restore(prefs: &Preferences, fallback: WindowPlacement) -> Result<Self, StorageError> {
        Ok(Self {
            x: prefs.get_in(GROUP, "X", fallback.x)?,
            y: prefs.get_in(GROUP, "Y", fallback.y)?,
            width: prefs.get_in(GROUP, "Width", fallback.width)?,
            height: prefs.get_in(GROUP, "Height", fallback.height)?,
            is_maximized: prefs.get_in(GROUP, "IsMaximized", fallback.is_maximized)?,
        })
    }

    /// Persist the placement.
    pub fn save(&self, prefs: &mut Preferences) -> Result<(), StorageError> {
        prefs.set_in(GROUP, "X", self.x)?;
        prefs.set_in(GROUP, "Y", self.y)?;
        prefs.set_in(GROUP, "Width", self.width)?;
        prefs.set_in(GROUP, "Height", self.height)?;
        prefs.set_in(GROUP, "IsMaximized", self.is_maximized)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_store() -> (tempfile::TempDir, Preferences) {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::open(dir.path().join("preferences.json"));
        (dir, prefs)
    }

    const FALLBACK: WindowPlacement = WindowPlacement {
        x: 0,
        y: 0,
        width: 500,
        height: 400,
        is_maximized: false,
    };

    #[test]
    fn first_launch_uses_fallback() {
        let (_dir, prefs) = scratch_store();
        let placement = WindowPlacement::restore(&prefs, FALLBACK).unwrap();
        assert_eq!(placement, FALLBACK);
    }

    #[test]
    fn save_then_restore_roundtrip() {
        let (_dir, mut prefs) = scratch_store();
        let placement = WindowPlacement {
            x: 100,
            y: 50,
            width: 800,
            height: 600,
            is_maximized: true,
        };
        placement.save(&mut prefs).unwrap();

        let restored = WindowPlacement::restore(&prefs, FALLBACK).unwrap();
        assert_eq!(restored, placement);
    }

    #[test]
    fn partial_group_mixes_stored_and_fallback() {
        let (_dir, mut prefs) = scratch_store();
        prefs.set_in("Window", "X", 100).unwrap();
        prefs.set_in("Window", "Width", 800).unwrap();

        let placement = WindowPlacement::restore(&prefs, FALLBACK).unwrap();
        assert_eq!(placement.x, 100);
        assert_eq!(placement.width, 800);
        assert_eq!(placement.y, FALLBACK.y);
        assert_eq!(placement.height, FALLBACK.height);
        assert!(!placement.is_maximized);
    }
}
