use dioxus::prelude::*;
use dioxus_router::Router;
use senso_core::model::AccessibilityMenu;

use crate::routes::Route;

#[component]
pub fn App() -> Element {
    // Navigation state of the accessibility menu, shared by the app bar and the menu views.
    use_context_provider(|| Signal::new(AccessibilityMenu::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Senso" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
