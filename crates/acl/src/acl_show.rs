//! AclShow - Show/hide an element based on a comma-separated ability list
//!
//! The host environment owns the element and the change notifications; this
//! module only decides visibility and remembers the last watched value.

use crate::AclService;

/// Show/hide primitive implemented by the host element
pub trait Visibility {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Visibility binding for a single element
#[derive(Debug, Default)]
pub struct AclShow {
    /// Last value passed to `watch` (`None` until the first call)
    last_value: Option<Option<String>>,
    /// Outcome of the last evaluation
    visible: Option<bool>,
}

impl AclShow {
    /// Create a new AclShow
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a binding value into ability names
    pub fn parse_abilities(value: &str) -> Vec<&str> {
        value
            .split(',')
            .map(str::trim)
            .filter(|a| !a.is_empty())
            .collect()
    }

    /// May the element be shown for this binding value?
    ///
    /// A missing or blank value always hides.
    pub fn evaluate(acl: &AclService, value: Option<&str>) -> bool {
        match value {
            Some(value) => acl.can_any(&Self::parse_abilities(value)),
            None => false,
        }
    }

    /// Apply the binding if `value` changed since the last call.
    ///
    /// Returns whether the element was re-evaluated.
    pub fn watch(
        &mut self,
        acl: &AclService,
        value: Option<&str>,
        target: &mut impl Visibility,
    ) -> bool {
        let value = value.map(str::to_string);
        if self.last_value.as_ref() == Some(&value) {
            return false;
        }
        self.last_value = Some(value);
        self.refresh(acl, target);
        true
    }

    /// Re-evaluate against the last watched value (e.g., after roles changed)
    pub fn refresh(&mut self, acl: &AclService, target: &mut impl Visibility) {
        let value = self.last_value.clone().flatten();
        let visible = Self::evaluate(acl, value.as_deref());

        if visible {
            target.show();
        } else {
            target.hide();
        }
        self.visible = Some(visible);
    }

    /// Result of the last evaluation, if any
    pub fn is_visible(&self) -> Option<bool> {
        self.visible
    }
}
