use dioxus::prelude::*;
use senso_core::model::SensoButtonId;

use crate::vm::SensoButtonVm;

/// One quadrant of the board.
#[component]
pub fn SensoButton(vm: SensoButtonVm, on_press: Callback<SensoButtonId>) -> Element {
    let id = vm.id;
    rsx! {
        button {
            id: "{vm.dom_id}",
            class: "{vm.class}",
            style: "{vm.style}",
            r#type: "button",
            disabled: vm.disabled,
            aria_label: "{vm.aria_label}",
            onclick: move |_| on_press.call(id),
            span { class: "material-icons-round senso-icon", "{vm.icon}" }
        }
    }
}
