//! Configuration records for the board and menu components.
//!
//! Every field a component reacts to is listed here; views take these records
//! instead of loose property bags.

use crate::model::accessibility::AccessibilityCategory;
use crate::model::color::HexColor;
use crate::model::ids::SensoButtonId;

//
// ─── SENSO BUTTON ──────────────────────────────────────────────────────────────
//

const HOVER_LIGHTNESS_SHIFT: i16 = -15;
const SELECTED_LIGHTNESS_SHIFT: i16 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SensoButtonConfig {
    pub id: SensoButtonId,
    pub color: HexColor,
    /// Material icon ligature rendered inside the quadrant.
    pub icon: String,
    /// Accessible name of the button.
    pub title: String,
    pub disabled: bool,
}

/// CSS colors derived from a button's base color.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ButtonPalette {
    pub base: String,
    pub hover: String,
    pub selected: String,
}

impl SensoButtonConfig {
    #[must_use]
    pub fn palette(&self) -> ButtonPalette {
        let hsl = self.color.to_hsl();
        ButtonPalette {
            base: self.color.to_string(),
            hover: hsl.with_lightness_shift(HOVER_LIGHTNESS_SHIFT).css(),
            selected: hsl.with_lightness_shift(SELECTED_LIGHTNESS_SHIFT).css(),
        }
    }
}

/// The four quadrants with their default colors and icons.
#[must_use]
pub fn default_board() -> Vec<SensoButtonConfig> {
    SensoButtonId::ALL
        .iter()
        .map(|&id| {
            let (color, icon, title) = match id {
                SensoButtonId::TopLeft => (HexColor::rgb(0x2e, 0x9e, 0x4f), "eco", "Grün"),
                SensoButtonId::TopRight => (HexColor::rgb(0xd6, 0x3a, 0x3a), "favorite", "Rot"),
                SensoButtonId::BottomLeft => (HexColor::rgb(0xe8, 0xb9, 0x1c), "star", "Gelb"),
                SensoButtonId::BottomRight => {
                    (HexColor::rgb(0x2f, 0x6f, 0xd6), "water_drop", "Blau")
                }
            };
            SensoButtonConfig {
                id,
                color,
                icon: icon.to_string(),
                title: title.to_string(),
                disabled: false,
            }
        })
        .collect()
}

//
// ─── TOOLTIP ───────────────────────────────────────────────────────────────────
//

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TooltipConfig {
    pub arrow: bool,
    pub enter_delay_ms: u32,
    pub leave_delay_ms: u32,
    pub enter_next_delay_ms: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            arrow: true,
            enter_delay_ms: 500,
            leave_delay_ms: 75,
            enter_next_delay_ms: 500,
        }
    }
}

//
// ─── ACCESSIBILITY MENU ────────────────────────────────────────────────────────
//

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryButtonConfig {
    pub category: AccessibilityCategory,
    pub title: String,
    pub icon: String,
    pub tooltip_text: String,
    pub aria_label: String,
    pub tooltip: TooltipConfig,
}

impl CategoryButtonConfig {
    #[must_use]
    pub fn for_category(category: AccessibilityCategory) -> Self {
        let title = category.title();
        Self {
            category,
            title: title.to_string(),
            icon: category.icon().to_string(),
            tooltip_text: format!("Zeige alle {title}-bezogene Einstellungen an"),
            aria_label: format!("Zeige alle Einstellungen für {title} an"),
            tooltip: TooltipConfig::default(),
        }
    }
}

/// Overview buttons in display order.
#[must_use]
pub fn category_buttons() -> Vec<CategoryButtonConfig> {
    AccessibilityCategory::ALL
        .iter()
        .map(|&category| CategoryButtonConfig::for_category(category))
        .collect()
}

/// Fixed copy of the menu frame.
pub mod menu_copy {
    pub const HEADING: &str = "Einstellungen der Barrierefreiheit";
    pub const HERO_ICON: &str = "accessibility_new";
    pub const CLOSE_LABEL: &str = "Schließen";
    pub const CLOSE_ICON: &str = "close";
    pub const CLOSE_ARIA: &str = "Barrierefreiheit-Menü schließen";
    pub const CLOSE_TOOLTIP: &str = "Schließe das Einstellungsmenü";
    pub const BACK_ICON: &str = "arrow_back";
    pub const BACK_ARIA: &str = "Zurück zum Einstellungen Menü";
    pub const PANEL_PLACEHOLDER: &str = "settings will be available soon :-)";
}
