mod menu;
mod overview;
mod panel;

pub use menu::AccessibilityMenuView;
pub use overview::AccessibilityCategoriesOverview;
pub use panel::AccessibilityCategoryPanel;
