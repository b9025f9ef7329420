use dioxus::prelude::*;
use senso_core::model::{AccessibilityMenu, MenuScreen};

use super::overview::AccessibilityCategoriesOverview;
use super::panel::AccessibilityCategoryPanel;

/// Renders whatever screen the shared `AccessibilityMenu` is on.
#[component]
pub fn AccessibilityMenuView() -> Element {
    let menu = use_context::<Signal<AccessibilityMenu>>();
    let screen = menu.read().screen();

    match screen {
        MenuScreen::Closed => rsx! {},
        MenuScreen::Overview => rsx! {
            aside { class: "accessibility-menu", role: "dialog",
                AccessibilityCategoriesOverview {}
            }
        },
        MenuScreen::Category(category) => rsx! {
            aside { class: "accessibility-menu", role: "dialog",
                AccessibilityCategoryPanel { category }
            }
        },
    }
}
