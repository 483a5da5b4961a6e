//! Exclusive selection groups (toggles and chips).
//!
//! A group stores the index of its active option rather than a flag per
//! option, so "at most one active" holds by construction.

use serde::{Deserialize, Serialize};

/// Visual family of a selection group. Both kinds behave identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupKind {
    /// Segmented toggle (two or three side-by-side buttons).
    Toggle,
    /// Row of filter chips.
    Chips,
}

/// A named set of mutually exclusive options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionGroup {
    name: String,
    kind: GroupKind,
    options: Vec<String>,
    active: Option<usize>,
}

impl OptionGroup {
    /// Build a group from its surface structure. `initially_active` is
    /// ignored when it does not name an option.
    pub fn observe(
        name: impl Into<String>,
        kind: GroupKind,
        options: Vec<String>,
        initially_active: Option<usize>,
    ) -> Self {
        let active = initially_active.filter(|index| *index < options.len());
        Self {
            name: name.into(),
            kind,
            options,
            active,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> GroupKind {
        self.kind
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Index of the active option, if any.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Label of the active option, if any.
    pub fn active_label(&self) -> Option<&str> {
        self.active
            .and_then(|index| self.options.get(index))
            .map(String::as_str)
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Pure transition: the group after `chosen` is activated.
    ///
    /// An index outside the group leaves it unchanged.
    #[must_use]
    pub fn activated(mut self, chosen: usize) -> Self {
        self.activate(chosen);
        self
    }

    /// Activate `chosen`, deactivating its siblings.
    ///
    /// Returns `true` when the visible state changed.
    pub fn activate(&mut self, chosen: usize) -> bool {
        if chosen >= self.options.len() || self.active == Some(chosen) {
            return false;
        }
        self.active = Some(chosen);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_observe_discards_out_of_range_initial() {
        let group = OptionGroup::observe("plan", GroupKind::Toggle, labels(&["a", "b"]), Some(5));
        assert_eq!(group.active(), None);
    }

    #[test]
    fn test_activate_switches_active_option() {
        let mut group =
            OptionGroup::observe("plan", GroupKind::Toggle, labels(&["a", "b", "c"]), Some(0));

        assert!(group.activate(2));
        assert_eq!(group.active(), Some(2));
        assert!(!group.is_active(0));
        assert_eq!(group.active_label(), Some("c"));
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut group = OptionGroup::observe("plan", GroupKind::Chips, labels(&["a", "b"]), None);

        assert!(group.activate(1));
        assert!(!group.activate(1));
        assert_eq!(group.active(), Some(1));
    }

    #[test]
    fn test_activate_unknown_target_is_noop() {
        let group = OptionGroup::observe("plan", GroupKind::Chips, labels(&["a"]), Some(0));
        let after = group.clone().activated(7);
        assert_eq!(after, group);
    }

    #[test]
    fn test_empty_group_is_valid() {
        let mut group = OptionGroup::observe("empty", GroupKind::Chips, Vec::new(), None);
        assert!(group.is_empty());
        assert!(!group.activate(0));
        assert_eq!(group.active_label(), None);
    }
}
