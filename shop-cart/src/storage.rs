//! Cart persistence
//!
//! The store writes its state through a [`CartStorage`] after every
//! mutation so a reload restores the exact same cart.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::CartResult;
use crate::model::CartState;

/// Persistence seam for the cart store
pub trait CartStorage {
    /// Load the persisted state, `None` when nothing was saved yet
    fn load(&self) -> CartResult<Option<CartState>>;

    /// Persist the given state
    fn save(&self, state: &CartState) -> CartResult<()>;
}

/// Pretty-printed JSON file at a caller-chosen path
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CartStorage for JsonFileStorage {
    fn load(&self) -> CartResult<Option<CartState>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    fn save(&self, state: &CartState) -> CartResult<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

/// In-memory storage for tests
#[derive(Default)]
pub struct MemoryStorage {
    state: Mutex<Option<CartState>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CartStorage for MemoryStorage {
    fn load(&self) -> CartResult<Option<CartState>> {
        Ok(self.state.lock().map(|s| s.clone()).unwrap_or(None))
    }

    fn save(&self, state: &CartState) -> CartResult<()> {
        if let Ok(mut slot) = self.state.lock() {
            *slot = Some(state.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartLine;

    fn create_test_state() -> CartState {
        CartState {
            lines: vec![CartLine {
                product_id: "p1".to_string(),
                variant_id: Some("v1".to_string()),
                title: "Ceylon Tea".to_string(),
                image: "/img/tea.jpg".to_string(),
                slug: "ceylon-tea".to_string(),
                price: 120_000,
                quantity: 3,
            }],
            is_open: true,
            delivery_fee: 50_000,
        }
    }

    #[test]
    fn test_json_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("cart.json"));

        assert!(storage.load().unwrap().is_none());

        let state = create_test_state();
        storage.save(&state).unwrap();

        let restored = storage.load().unwrap().unwrap();
        assert_eq!(restored.lines, state.lines);
        assert_eq!(restored.delivery_fee, state.delivery_fee);
    }

    #[test]
    fn test_json_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = JsonFileStorage::new(dir.path().join("nested/deep/cart.json"));
        storage.save(&create_test_state()).unwrap();
        assert!(storage.path().exists());
    }

    #[test]
    fn test_memory_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());

        let state = create_test_state();
        storage.save(&state).unwrap();
        assert_eq!(storage.load().unwrap().unwrap().lines, state.lines);
    }
}
