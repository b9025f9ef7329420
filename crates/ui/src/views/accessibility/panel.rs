use dioxus::prelude::*;
use senso_core::model::components::menu_copy;
use senso_core::model::{AccessibilityCategory, AccessibilityMenu};

use crate::vm::map_category_panel;

#[component]
pub fn AccessibilityCategoryPanel(category: AccessibilityCategory) -> Element {
    let menu = use_context::<Signal<AccessibilityMenu>>();
    let panel = map_category_panel(category);

    let on_back = {
        let mut menu = menu;
        use_callback(move |_: ()| menu.write().update_selected_category(None))
    };

    rsx! {
        div { class: "category-panel",
            button {
                r#type: "button",
                class: "icon-button",
                aria_label: menu_copy::BACK_ARIA,
                onclick: move |_| on_back.call(()),
                span { class: "material-icons-round", {menu_copy::BACK_ICON} }
            }
            h2 { "{panel.heading}" }
            p { "{panel.body}" }
        }
    }
}
