//! Speed-search pattern handling for the popup

use std::rc::Rc;

use crate::matcher::RefMatcher;

/// What the owning engine should do with the active model after a pattern
/// change. `activation_changed` flags an off→on or on→off edge, the only
/// runtime trigger for a model-variant swap besides initial construction.
#[derive(Debug)]
pub enum SearchUpdate {
    /// Restore unfiltered children, keeping the current model variant
    /// unless the activation edge demands a swap
    Clear { activation_changed: bool },
    /// Apply this matcher to the active model
    Filter {
        matcher: Rc<RefMatcher>,
        activation_changed: bool,
    },
}

impl SearchUpdate {
    pub fn activation_changed(&self) -> bool {
        match self {
            SearchUpdate::Clear { activation_changed }
            | SearchUpdate::Filter {
                activation_changed, ..
            } => *activation_changed,
        }
    }
}

/// Receives raw speed-search keystrokes and turns them into filtering
/// decisions for the active tree model.
#[derive(Debug, Default)]
pub struct SearchController {
    filter_active: bool,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter_active(&self) -> bool {
        self.filter_active
    }

    /// Normalize the raw pattern and decide between clearing and filtering.
    ///
    /// `None`, `"/"`, and all-whitespace patterns clear the filter. The
    /// pattern is trimmed before the matcher is built, since the matcher
    /// treats space characters as part of the pattern.
    pub fn on_pattern_changed(&mut self, pattern: Option<&str>) -> SearchUpdate {
        match normalize(pattern) {
            None => {
                let activation_changed = self.filter_active;
                self.filter_active = false;
                SearchUpdate::Clear { activation_changed }
            }
            Some(trimmed) => {
                let activation_changed = !self.filter_active;
                self.filter_active = true;
                SearchUpdate::Filter {
                    matcher: Rc::new(RefMatcher::new(trimmed)),
                    activation_changed,
                }
            }
        }
    }
}

fn normalize(pattern: Option<&str>) -> Option<String> {
    let raw = pattern?;
    if raw == "/" {
        return None;
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
