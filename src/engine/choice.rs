use std::collections::BTreeSet;

use crate::models::TruthValue;

/// One checkbox per option; any number may be checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceSurface {
    options: Vec<String>,
    checked: Vec<bool>,
}

impl ChoiceSurface {
    pub fn new(options: &[String]) -> Self {
        Self {
            options: options.to_vec(),
            checked: vec![false; options.len()],
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn is_checked(&self, option: usize) -> bool {
        self.checked.get(option).copied().unwrap_or(false)
    }

    pub fn toggle(&mut self, option: usize) -> bool {
        match self.checked.get_mut(option) {
            Some(checked) => {
                *checked = !*checked;
                true
            }
            None => false,
        }
    }

    pub fn selected(&self) -> BTreeSet<String> {
        self.options
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(option, _)| option.clone())
            .collect()
    }
}

/// A mutually exclusive Wahr/Falsch pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrueFalseSurface {
    selected: Option<TruthValue>,
}

impl TrueFalseSurface {
    pub fn choose(&mut self, choice: TruthValue) -> bool {
        let changed = self.selected != Some(choice);
        self.selected = Some(choice);
        changed
    }

    pub fn selected(&self) -> Option<TruthValue> {
        self.selected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<String> {
        ["A", "B", "C"].iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_twice_unchecks() {
        let mut surface = ChoiceSurface::new(&options());
        assert!(surface.toggle(1));
        assert!(surface.is_checked(1));
        assert!(surface.toggle(1));
        assert!(!surface.is_checked(1));
        assert!(surface.selected().is_empty());
    }

    #[test]
    fn test_no_limit_on_selection() {
        let mut surface = ChoiceSurface::new(&options());
        for option in 0..3 {
            surface.toggle(option);
        }
        assert_eq!(surface.selected().len(), 3);
    }

    #[test]
    fn test_toggle_out_of_range() {
        let mut surface = ChoiceSurface::new(&options());
        assert!(!surface.toggle(3));
        assert!(!surface.is_checked(3));
    }

    #[test]
    fn test_true_false_is_exclusive() {
        let mut surface = TrueFalseSurface::default();
        assert_eq!(surface.selected(), None);
        assert!(surface.choose(TruthValue::Wahr));
        assert!(surface.choose(TruthValue::Falsch));
        assert!(!surface.choose(TruthValue::Falsch));
        assert_eq!(surface.selected(), Some(TruthValue::Falsch));
    }
}
