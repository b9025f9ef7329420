use dioxus::prelude::*;
use senso_core::model::components::menu_copy;
use senso_core::model::{AccessibilityCategory, AccessibilityMenu, CategoryButtonConfig};

use crate::vm::map_overview;

#[component]
fn AccessibilityCategoryButton(
    config: CategoryButtonConfig,
    on_select: Callback<AccessibilityCategory>,
) -> Element {
    let category = config.category;
    let tooltip = config.tooltip;
    rsx! {
        span {
            class: if tooltip.arrow { "tooltip tooltip--arrow" } else { "tooltip" },
            title: "{config.tooltip_text}",
            "data-enter-delay": "{tooltip.enter_delay_ms}",
            "data-leave-delay": "{tooltip.leave_delay_ms}",
            "data-enter-next-delay": "{tooltip.enter_next_delay_ms}",
            button {
                r#type: "button",
                class: "category-button",
                aria_label: "{config.aria_label}",
                onclick: move |_| on_select.call(category),
                span { class: "material-icons-round", "{config.icon}" }
                "{config.title}"
            }
        }
    }
}

/// Entry screen of the menu: one button per settings category.
#[component]
pub fn AccessibilityCategoriesOverview() -> Element {
    let menu = use_context::<Signal<AccessibilityMenu>>();
    let buttons = map_overview();

    let on_select = {
        let mut menu = menu;
        use_callback(move |category: AccessibilityCategory| {
            menu.write().update_selected_category(Some(category));
        })
    };
    let on_close = {
        let mut menu = menu;
        use_callback(move |_: ()| menu.write().toggle_menu())
    };

    rsx! {
        div { class: "overview-contentContainer",
            header {
                div { class: "overview-close",
                    span { class: "tooltip tooltip--arrow", title: menu_copy::CLOSE_TOOLTIP,
                        button {
                            r#type: "button",
                            class: "btn btn-text",
                            aria_label: menu_copy::CLOSE_ARIA,
                            onclick: move |_| on_close.call(()),
                            span { class: "material-icons", {menu_copy::CLOSE_ICON} }
                            {menu_copy::CLOSE_LABEL}
                        }
                    }
                }
                div { class: "heroIcon",
                    span { class: "material-icons-round icon", {menu_copy::HERO_ICON} }
                }
                h2 { {menu_copy::HEADING} }
            }
            main {
                nav {
                    for config in buttons {
                        AccessibilityCategoryButton {
                            key: "{config.title}",
                            config: config.clone(),
                            on_select: on_select,
                        }
                    }
                }
            }
        }
    }
}
