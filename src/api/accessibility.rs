use serde::{Deserialize, Serialize};

use crate::core::Rect;

/// Screen-reader descriptor for one bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityElement {
    /// Region of the drawn bar, in screen coordinates.
    pub frame: Rect,
    pub label: String,
}

impl AccessibilityElement {
    #[must_use]
    pub fn new(frame: Rect, label: impl Into<String>) -> Self {
        Self {
            frame,
            label: label.into(),
        }
    }
}

/// Query interface host accessibility layers use to walk a chart's bars.
///
/// The container itself is not an accessibility element; its children are.
pub trait AccessibilityContainer {
    fn accessibility_elements(&self) -> &[AccessibilityElement];

    fn is_accessibility_element(&self) -> bool {
        false
    }

    fn accessibility_element_count(&self) -> usize {
        self.accessibility_elements().len()
    }

    fn accessibility_element(&self, index: usize) -> Option<&AccessibilityElement> {
        self.accessibility_elements().get(index)
    }

    fn index_of_accessibility_element(&self, element: &AccessibilityElement) -> Option<usize> {
        self.accessibility_elements()
            .iter()
            .position(|candidate| candidate == element)
    }
}
