//! Shadow Color History
//!
//! Most-recent-first list of picked colors, persisted as a JSON array under
//! a single localStorage key.

use crate::config::{COLOR_HISTORY_CAP, COLOR_HISTORY_KEY, DEFAULT_SHADOW_COLOR};
use crate::error::{js_error, AppError, AppResult};

/// Normalize a CSS hex color (`#rgb` / `#rrggbb`) to lowercase.
/// Returns `None` for anything else.
pub fn normalize_color(input: &str) -> Option<String> {
    let color = input.trim();
    let hex = color.strip_prefix('#')?;
    if !matches!(hex.len(), 3 | 6) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(color.to_ascii_lowercase())
}

/// Bounded, duplicate-free color list
#[derive(Debug, Clone, PartialEq)]
pub struct ColorHistory {
    colors: Vec<String>,
    cap: usize,
}

impl ColorHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            colors: Vec::new(),
            cap: cap.max(1),
        }
    }

    /// History holding only the default color
    pub fn with_default() -> Self {
        let mut history = Self::new(COLOR_HISTORY_CAP);
        history.push(DEFAULT_SHADOW_COLOR);
        history
    }

    /// Move `color` to the front, evicting the oldest entry past the cap.
    /// Returns false when the color is invalid.
    pub fn push(&mut self, color: &str) -> bool {
        let Some(color) = normalize_color(color) else {
            return false;
        };
        self.colors.retain(|c| *c != color);
        self.colors.insert(0, color);
        self.colors.truncate(self.cap);
        true
    }

    pub fn latest(&self) -> &str {
        self.colors
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_SHADOW_COLOR)
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Parse a stored JSON array. Invalid entries are skipped; the order of
    /// the stored list is kept.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let stored: Vec<String> = serde_json::from_str(json)?;
        let mut history = Self::new(COLOR_HISTORY_CAP);
        for color in stored.iter().rev() {
            history.push(color);
        }
        Ok(history)
    }

    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string(&self.colors)
            .map_err(|e| AppError::Storage(format!("failed to serialize color history: {}", e)))
    }
}

impl Default for ColorHistory {
    fn default() -> Self {
        Self::with_default()
    }
}

/// Durable key/value storage for user preferences
pub trait PreferenceStore {
    fn load(&self, key: &str) -> AppResult<Option<String>>;
    fn save(&self, key: &str, value: &str) -> AppResult<()>;
}

/// `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalPreferenceStore;

impl LocalPreferenceStore {
    fn storage() -> AppResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(AppError::StorageUnavailable)?
            .local_storage()
            .map_err(|e| AppError::Storage(js_error(e)))?
            .ok_or(AppError::StorageUnavailable)
    }
}

impl PreferenceStore for LocalPreferenceStore {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| AppError::Storage(js_error(e)))
    }

    fn save(&self, key: &str, value: &str) -> AppResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| AppError::Storage(js_error(e)))
    }
}

/// Read the history, falling back to the default color when the stored
/// value is absent, unreadable, malformed or empty.
pub fn load_color_history(store: &dyn PreferenceStore) -> ColorHistory {
    let raw = match store.load(COLOR_HISTORY_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return ColorHistory::with_default(),
        Err(e) => {
            tracing::warn!("[ColorHistory] Failed to read stored history: {}", e);
            return ColorHistory::with_default();
        }
    };

    match ColorHistory::from_json(&raw) {
        Ok(history) if !history.is_empty() => history,
        Ok(_) => ColorHistory::with_default(),
        Err(e) => {
            tracing::warn!("[ColorHistory] Ignoring stored history: {}", e);
            ColorHistory::with_default()
        }
    }
}

pub fn save_color_history(store: &dyn PreferenceStore, history: &ColorHistory) -> AppResult<()> {
    store.save(COLOR_HISTORY_KEY, &history.to_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    /// In-memory store
    #[derive(Debug, Default)]
    struct MemoryPreferenceStore {
        values: RefCell<HashMap<String, String>>,
    }

    impl PreferenceStore for MemoryPreferenceStore {
        fn load(&self, key: &str) -> AppResult<Option<String>> {
            Ok(self.values.borrow().get(key).cloned())
        }

        fn save(&self, key: &str, value: &str) -> AppResult<()> {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[test]
    fn test_normalize_color() {
        assert_eq!(normalize_color("#FF8C00"), Some("#ff8c00".to_string()));
        assert_eq!(normalize_color(" #abc "), Some("#abc".to_string()));
        assert_eq!(normalize_color("ff8c00"), None);
        assert_eq!(normalize_color("#ff8c0"), None);
        assert_eq!(normalize_color("#gggggg"), None);
        assert_eq!(normalize_color("red"), None);
    }

    #[test]
    fn test_push_existing_moves_to_front() {
        let mut history = ColorHistory::new(8);
        history.push("#111111");
        history.push("#222222");
        history.push("#333333");
        history.push("#111111");
        assert_eq!(history.colors(), ["#111111", "#333333", "#222222"]);
    }

    #[test]
    fn test_push_is_case_insensitive() {
        let mut history = ColorHistory::new(8);
        history.push("#AABBCC");
        history.push("#aabbcc");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut history = ColorHistory::new(COLOR_HISTORY_CAP);
        for i in 1..=9 {
            assert!(history.push(&format!("#00000{}", i)));
        }
        assert_eq!(history.len(), 8);
        assert_eq!(history.latest(), "#000009");
        assert!(!history.colors().contains(&"#000001".to_string()));
    }

    #[test]
    fn test_invalid_color_rejected() {
        let mut history = ColorHistory::new(8);
        assert!(!history.push("not-a-color"));
        assert!(history.is_empty());
        assert_eq!(history.latest(), DEFAULT_SHADOW_COLOR);
    }

    #[test]
    fn test_json_keeps_stored_order() {
        let history = ColorHistory::from_json(r##"["#ff0000", "#00ff00", "bogus", "#0000ff"]"##).unwrap();
        assert_eq!(history.colors(), ["#ff0000", "#00ff00", "#0000ff"]);
        assert_eq!(history.to_json().unwrap(), r##"["#ff0000","#00ff00","#0000ff"]"##);
    }

    #[test]
    fn test_json_drops_duplicates_and_caps() {
        let stored: Vec<String> = (0..12).map(|i| format!("#0000{:02}", i)).collect();
        let mut json = serde_json::to_string(&stored).unwrap();
        json = json.replace("\"#000011\"", "\"#000000\"");
        let history = ColorHistory::from_json(&json).unwrap();
        assert_eq!(history.len(), 8);
        assert_eq!(history.latest(), "#000000");
        let unique: HashSet<&String> = history.colors().iter().collect();
        assert_eq!(unique.len(), history.len());
    }

    #[test]
    fn test_load_falls_back_to_default() {
        let store = MemoryPreferenceStore::default();
        assert_eq!(load_color_history(&store).colors(), [DEFAULT_SHADOW_COLOR]);

        store.save(COLOR_HISTORY_KEY, "{not json").unwrap();
        assert_eq!(load_color_history(&store).colors(), [DEFAULT_SHADOW_COLOR]);

        store.save(COLOR_HISTORY_KEY, "[]").unwrap();
        assert_eq!(load_color_history(&store).colors(), [DEFAULT_SHADOW_COLOR]);

        store.save(COLOR_HISTORY_KEY, r#"["nope"]"#).unwrap();
        assert_eq!(load_color_history(&store).colors(), [DEFAULT_SHADOW_COLOR]);
    }

    #[test]
    fn test_non_adjacent_duplicates_collapse() {
        let history = ColorHistory::from_json(r##"["#aaaaaa", "#bbbbbb", "#AAAAAA", "#cccccc", "#aaaaaa"]"##).unwrap();
        assert_eq!(history.colors(), ["#aaaaaa", "#bbbbbb", "#cccccc"]);
        let unique: HashSet<&String> = history.colors().iter().collect();
        assert_eq!(unique.len(), history.len());
    }

    #[test]
    fn test_malformed_json_is_reported_as_malformed() {
        let err = ColorHistory::from_json("{not json").unwrap_err();
        assert!(matches!(err, AppError::MalformedHistory(_)));
    }

    struct ReadOnlyPreferenceStore;

    impl PreferenceStore for ReadOnlyPreferenceStore {
        fn load(&self, _key: &str) -> AppResult<Option<String>> {
            Ok(None)
        }

        fn save(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_save_failure_is_a_storage_error() {
        let history = ColorHistory::with_default();
        let err = save_color_history(&ReadOnlyPreferenceStore, &history).unwrap_err();
        assert!(matches!(err, AppError::Storage(_)));
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryPreferenceStore::default();
        let mut history = ColorHistory::new(COLOR_HISTORY_CAP);
        history.push("#123456");
        history.push("#abcdef");
        save_color_history(&store, &history).unwrap();

        let loaded = load_color_history(&store);
        assert_eq!(loaded, history);
        assert_eq!(loaded.latest(), "#abcdef");
    }
}
