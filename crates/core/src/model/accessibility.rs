use serde::{Deserialize, Serialize};

/// Groups of accessibility settings offered by the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccessibilityCategory {
    Seeing,
    Hearing,
    MotorActivity,
    Cognitive,
}

impl AccessibilityCategory {
    /// Display order of the overview.
    pub const ALL: [AccessibilityCategory; 4] = [
        AccessibilityCategory::Seeing,
        AccessibilityCategory::Hearing,
        AccessibilityCategory::MotorActivity,
        AccessibilityCategory::Cognitive,
    ];

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            AccessibilityCategory::Seeing => "Sehen",
            AccessibilityCategory::Hearing => "Hören",
            AccessibilityCategory::MotorActivity => "Bedienen",
            AccessibilityCategory::Cognitive => "Schwierigkeit",
        }
    }

    /// Material icon ligature.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            AccessibilityCategory::Seeing => "visibility",
            AccessibilityCategory::Hearing => "hearing",
            AccessibilityCategory::MotorActivity => "touch_app",
            AccessibilityCategory::Cognitive => "psychology",
        }
    }
}

/// What the accessibility menu currently shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuScreen {
    Closed,
    Overview,
    Category(AccessibilityCategory),
}

/// Navigation state of the accessibility menu.
///
/// Views never hold their own copy of these flags; they read `screen()` and
/// call the transition methods.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccessibilityMenu {
    is_open: bool,
    selected: Option<AccessibilityCategory>,
}

impl AccessibilityMenu {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    #[must_use]
    pub fn selected_category(&self) -> Option<AccessibilityCategory> {
        self.selected
    }

    #[must_use]
    pub fn screen(&self) -> MenuScreen {
        match (self.is_open, self.selected) {
            (false, _) => MenuScreen::Closed,
            (true, None) => MenuScreen::Overview,
            (true, Some(category)) => MenuScreen::Category(category),
        }
    }

    /// Opens the menu on whatever screen was last selected.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Closes the menu; the next `open` starts at the overview.
    pub fn close(&mut self) {
        self.is_open = false;
        self.selected = None;
    }

    pub fn toggle_menu(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Switches to a category panel, or back to the overview with `None`.
    pub fn update_selected_category(&mut self, category: Option<AccessibilityCategory>) {
        if category.is_some() {
            self.is_open = true;
        }
        self.selected = category;
        tracing::debug!(?category, "accessibility category updated");
    }

    pub fn select_category(&mut self, category: AccessibilityCategory) {
        self.update_selected_category(Some(category));
    }

    pub fn back(&mut self) {
        self.update_selected_category(None);
    }
}
