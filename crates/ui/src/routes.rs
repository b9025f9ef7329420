use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};
use senso_core::model::AccessibilityMenu;

use crate::views::{AccessibilityMenuView, SensoView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", SensoView)] Senso {},
}

#[component]
fn Layout() -> Element {
    let mut menu = use_context::<Signal<AccessibilityMenu>>();
    let menu_open = menu.read().is_open();

    rsx! {
        div { class: "app",
            header { class: "app-bar",
                h1 { "Senso" }
                button {
                    r#type: "button",
                    class: if menu_open {
                        "app-bar-action app-bar-action--active"
                    } else {
                        "app-bar-action"
                    },
                    aria_label: "Barrierefreiheit-Menü öffnen",
                    aria_expanded: "{menu_open}",
                    onclick: move |_| menu.write().toggle_menu(),
                    span { class: "material-icons-round", "accessibility_new" }
                }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
            AccessibilityMenuView {}
        }
    }
}
