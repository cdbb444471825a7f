//! Progress and rewards tracking.
//!
//! Holds the star tally and per-section interaction counts, mirroring both
//! to durable storage after every mutation so a reload never loses stars.
//! Absent or malformed stored values fall back to zero.

use serde::{Deserialize, Serialize};

use crate::models::Section;
use crate::storage::KvStore;

/// Storage key for the star tally (decimal string)
const STARS_KEY: &str = "stars";

/// Storage key for per-section counts (JSON object)
const SECTIONS_KEY: &str = "section-progress";

/// Stars between milestone celebrations
pub const MILESTONE_INTERVAL: u64 = 10;

/// Interaction counts per section. Fields missing from stored data
/// default to zero; unknown fields are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionCounts {
    pub shapes: u64,
    pub colors: u64,
    pub numbers: u64,
    pub alphabet: u64,
}

impl SectionCounts {
    pub fn get(&self, section: Section) -> u64 {
        match section {
            Section::Shapes => self.shapes,
            Section::Colors => self.colors,
            Section::Numbers => self.numbers,
            Section::Alphabet => self.alphabet,
        }
    }

    fn get_mut(&mut self, section: Section) -> &mut u64 {
        match section {
            Section::Shapes => &mut self.shapes,
            Section::Colors => &mut self.colors,
            Section::Numbers => &mut self.numbers,
            Section::Alphabet => &mut self.alphabet,
        }
    }
}

/// Star tally and per-section progress, backed by durable storage
#[derive(Debug)]
pub struct ProgressStore {
    store: KvStore,
    stars: u64,
    sections: SectionCounts,
}

impl ProgressStore {
    /// Load progress from storage. Absent or malformed values fall back
    /// to zero rather than erroring.
    pub fn load(store: KvStore) -> Self {
        let stars = store
            .get(STARS_KEY)
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);
        let sections = store
            .get(SECTIONS_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self {
            store,
            stars,
            sections,
        }
    }

    /// Total stars earned across all sections
    pub fn stars(&self) -> u64 {
        self.stars
    }

    /// Interactions recorded for `section`
    pub fn section_count(&self, section: Section) -> u64 {
        self.sections.get(section)
    }

    /// Record one qualifying interaction: one star plus one count for the
    /// section. Persists immediately and returns the updated tally.
    pub fn record_interaction(&mut self, section: Section) -> u64 {
        self.stars += 1;
        *self.sections.get_mut(section) += 1;
        self.persist();
        self.stars
    }

    /// True exactly when a post-increment tally lands on a milestone
    pub fn is_milestone(total: u64) -> bool {
        total > 0 && total % MILESTONE_INTERVAL == 0
    }

    /// Write both values to storage, overwriting prior ones. Storage
    /// failures are swallowed; the in-memory state stays authoritative.
    pub fn persist(&self) {
        let _ = self.store.set(STARS_KEY, &self.stars.to_string());
        if let Ok(json) = serde_json::to_string(&self.sections) {
            let _ = self.store.set(SECTIONS_KEY, &json);
        }
    }

    /// Drop all progress back to zero and persist the cleared state
    pub fn reset(&mut self) {
        self.stars = 0;
        self.sections = SectionCounts::default();
        self.persist();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::{TempDir, tempdir};

    fn temp_store() -> (TempDir, KvStore) {
        let dir = tempdir().unwrap();
        let store = KvStore::open(dir.path().to_path_buf());
        (dir, store)
    }

    #[test]
    fn test_load_from_empty_storage() {
        let (_dir, store) = temp_store();
        let progress = ProgressStore::load(store);
        assert_eq!(progress.stars(), 0);
        for section in Section::ALL {
            assert_eq!(progress.section_count(section), 0);
        }
    }

    #[test]
    fn test_record_returns_updated_tally() {
        let (_dir, store) = temp_store();
        let mut progress = ProgressStore::load(store);
        assert_eq!(progress.record_interaction(Section::Shapes), 1);
        assert_eq!(progress.record_interaction(Section::Shapes), 2);
        assert_eq!(progress.record_interaction(Section::Colors), 3);
    }

    #[test]
    fn test_counting_law() {
        let (_dir, store) = temp_store();
        let mut progress = ProgressStore::load(store);
        for _ in 0..5 {
            progress.record_interaction(Section::Numbers);
        }
        for _ in 0..3 {
            progress.record_interaction(Section::Alphabet);
        }
        progress.record_interaction(Section::Shapes);

        assert_eq!(progress.stars(), 9);
        assert_eq!(progress.section_count(Section::Numbers), 5);
        assert_eq!(progress.section_count(Section::Alphabet), 3);
        assert_eq!(progress.section_count(Section::Shapes), 1);
        assert_eq!(progress.section_count(Section::Colors), 0);
    }

    #[test]
    fn test_persist_load_round_trip() {
        let (_dir, store) = temp_store();
        let mut progress = ProgressStore::load(store.clone());
        for _ in 0..3 {
            progress.record_interaction(Section::Numbers);
        }
        progress.record_interaction(Section::Colors);
        drop(progress);

        let reloaded = ProgressStore::load(store);
        assert_eq!(reloaded.stars(), 4);
        assert_eq!(reloaded.section_count(Section::Numbers), 3);
        assert_eq!(reloaded.section_count(Section::Colors), 1);
    }

    #[test]
    fn test_corrupt_stars_falls_back_to_zero() {
        let (_dir, store) = temp_store();
        store.set("stars", "banana").unwrap();
        let progress = ProgressStore::load(store);
        assert_eq!(progress.stars(), 0);
    }

    #[test]
    fn test_corrupt_sections_fall_back_to_empty() {
        let (_dir, store) = temp_store();
        store.set("section-progress", "{ not json").unwrap();
        let progress = ProgressStore::load(store);
        for section in Section::ALL {
            assert_eq!(progress.section_count(section), 0);
        }
    }

    #[test]
    fn test_partial_sections_default_missing_to_zero() {
        let (_dir, store) = temp_store();
        store.set("section-progress", r#"{"numbers":3}"#).unwrap();
        let progress = ProgressStore::load(store);
        assert_eq!(progress.section_count(Section::Numbers), 3);
        assert_eq!(progress.section_count(Section::Shapes), 0);
    }

    #[test]
    fn test_unknown_section_names_are_ignored() {
        let (_dir, store) = temp_store();
        store
            .set("section-progress", r#"{"numbers":2,"dinosaurs":9}"#)
            .unwrap();
        let progress = ProgressStore::load(store);
        assert_eq!(progress.section_count(Section::Numbers), 2);
        assert_eq!(progress.stars(), 0);
    }

    #[test]
    fn test_stars_stored_as_decimal_string() {
        let (_dir, store) = temp_store();
        let mut progress = ProgressStore::load(store.clone());
        for _ in 0..12 {
            progress.record_interaction(Section::Shapes);
        }
        assert_eq!(store.get("stars"), Some("12".to_string()));
    }

    #[test]
    fn test_milestone_boundaries() {
        assert!(!ProgressStore::is_milestone(0));
        assert!(!ProgressStore::is_milestone(9));
        assert!(ProgressStore::is_milestone(10));
        assert!(!ProgressStore::is_milestone(11));
        assert!(ProgressStore::is_milestone(20));
    }

    #[test]
    fn test_milestone_fires_twice_in_25_records() {
        let (_dir, store) = temp_store();
        let mut progress = ProgressStore::load(store);
        let mut fired = Vec::new();
        for _ in 0..25 {
            let total = progress.record_interaction(Section::Colors);
            if ProgressStore::is_milestone(total) {
                fired.push(total);
            }
        }
        assert_eq!(fired, vec![10, 20]);
    }

    #[test]
    fn test_milestone_fires_on_tenth_after_nine() {
        let (_dir, store) = temp_store();
        let mut progress = ProgressStore::load(store);
        for _ in 0..9 {
            let total = progress.record_interaction(Section::Shapes);
            assert!(!ProgressStore::is_milestone(total));
        }
        let total = progress.record_interaction(Section::Shapes);
        assert!(ProgressStore::is_milestone(total));
    }

    #[test]
    fn test_reset_clears_and_persists() {
        let (_dir, store) = temp_store();
        let mut progress = ProgressStore::load(store.clone());
        progress.record_interaction(Section::Numbers);
        progress.reset();
        assert_eq!(progress.stars(), 0);

        let reloaded = ProgressStore::load(store);
        assert_eq!(reloaded.stars(), 0);
        assert_eq!(reloaded.section_count(Section::Numbers), 0);
    }
}
