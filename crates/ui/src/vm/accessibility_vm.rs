use senso_core::model::components::menu_copy;
use senso_core::model::{AccessibilityCategory, CategoryButtonConfig, category_buttons};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryPanelVm {
    pub category: AccessibilityCategory,
    pub heading: &'static str,
    pub body: String,
}

/// Overview buttons, one per category in display order.
#[must_use]
pub fn map_overview() -> Vec<CategoryButtonConfig> {
    category_buttons()
}

#[must_use]
pub fn map_category_panel(category: AccessibilityCategory) -> CategoryPanelVm {
    let topic = match category {
        AccessibilityCategory::Seeing => "Seeing",
        AccessibilityCategory::Hearing => "Hearing",
        AccessibilityCategory::MotorActivity => "Motor activity",
        AccessibilityCategory::Cognitive => "Cognitive",
    };
    CategoryPanelVm {
        category,
        heading: category.title(),
        body: format!("{topic} {}", menu_copy::PANEL_PLACEHOLDER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeing_panel_uses_placeholder_copy() {
        let panel = map_category_panel(AccessibilityCategory::Seeing);
        assert_eq!(panel.heading, "Sehen");
        assert_eq!(panel.body, "Seeing settings will be available soon :-)");
    }

    #[test]
    fn overview_lists_all_categories() {
        let categories: Vec<_> = map_overview().iter().map(|button| button.category).collect();
        assert_eq!(categories, AccessibilityCategory::ALL.to_vec());
    }
}
