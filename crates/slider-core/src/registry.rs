//! Host-owned registry of mounted sliders.
//!
//! # Design
//! - Replaces page-wide globals with an object the host creates and owns.
//! - One slider per section: mounting a section again hands back the previous entry so
//!   the caller can tear it down.

use std::collections::BTreeMap;

use tracing::debug;

/// Mounted sliders keyed by section id.
#[derive(Debug)]
pub struct SliderRegistry<C> {
    sliders: BTreeMap<String, C>,
    element_defined: bool,
}

impl<C> Default for SliderRegistry<C> {
    fn default() -> Self {
        Self {
            sliders: BTreeMap::new(),
            element_defined: false,
        }
    }
}

impl<C> SliderRegistry<C> {
    /// Empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track `slider` under `section_id`, returning any slider it replaces.
    pub fn mount(&mut self, section_id: impl Into<String>, slider: C) -> Option<C> {
        let section_id = section_id.into();
        let previous = self.sliders.insert(section_id.clone(), slider);
        debug!(
            section = %section_id,
            replaced = previous.is_some(),
            "slider registered"
        );
        previous
    }

    /// Stop tracking the slider for `section_id`.
    pub fn unmount(&mut self, section_id: &str) -> Option<C> {
        let removed = self.sliders.remove(section_id);
        if removed.is_some() {
            debug!(section = %section_id, "slider unregistered");
        }
        removed
    }

    /// Slider mounted for `section_id`.
    #[must_use]
    pub fn get(&self, section_id: &str) -> Option<&C> {
        self.sliders.get(section_id)
    }

    /// Mutable access to the slider mounted for `section_id`.
    pub fn get_mut(&mut self, section_id: &str) -> Option<&mut C> {
        self.sliders.get_mut(section_id)
    }

    /// Number of mounted sliders.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    /// Whether no slider is mounted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }

    /// Mounted section ids in sorted order.
    pub fn section_ids(&self) -> impl Iterator<Item = &str> {
        self.sliders.keys().map(String::as_str)
    }

    /// Drop every mounted slider.
    pub fn clear(&mut self) {
        self.sliders.clear();
    }

    /// Record that the placeholder element has been defined.
    ///
    /// Returns `true` only the first time, so callers define the element once.
    pub const fn claim_element_definition(&mut self) -> bool {
        if self.element_defined {
            return false;
        }
        self.element_defined = true;
        true
    }

    /// Whether the placeholder element has been defined through this registry.
    #[must_use]
    pub const fn element_defined(&self) -> bool {
        self.element_defined
    }
}

#[cfg(test)]
mod tests {
    use super::SliderRegistry;

    #[test]
    fn remounting_a_section_returns_previous_slider() {
        let mut registry = SliderRegistry::new();
        assert!(registry.mount("hero", 1).is_none());
        assert_eq!(registry.mount("hero", 2), Some(1));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("hero"), Some(&2));
    }

    #[test]
    fn unmount_removes_only_the_named_section() {
        let mut registry = SliderRegistry::new();
        registry.mount("b", "second");
        registry.mount("a", "first");
        assert_eq!(registry.section_ids().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(registry.unmount("a"), Some("first"));
        assert_eq!(registry.unmount("a"), None);
        assert!(!registry.is_empty());
        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn element_definition_is_claimed_once() {
        let mut registry: SliderRegistry<()> = SliderRegistry::new();
        assert!(!registry.element_defined());
        assert!(registry.claim_element_definition());
        assert!(!registry.claim_element_definition());
        assert!(registry.element_defined());
    }

    #[test]
    fn get_mut_allows_in_place_updates() {
        let mut registry = SliderRegistry::new();
        registry.mount("hero", 1);
        if let Some(value) = registry.get_mut("hero") {
            *value += 1;
        }
        assert_eq!(registry.get("hero"), Some(&2));
    }
}
