use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use senso_core::Clock;
use senso_core::model::{AccessibilityMenu, GameSettings, SensoButtonConfig, default_board};
use senso_core::time::fixed_clock;

use crate::context::{UiApp, build_app_context};
use crate::views::{AccessibilityMenuView, SensoView};

#[derive(Clone)]
struct TestApp {
    settings: GameSettings,
}

impl UiApp for TestApp {
    fn game_settings(&self) -> GameSettings {
        self.settings.clone()
    }

    fn seed(&self) -> Option<u64> {
        Some(7)
    }

    fn board(&self) -> Vec<SensoButtonConfig> {
        default_board()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Senso,
    AccessibilityMenu,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    menu: AccessibilityMenu,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.menu));
    match props.view {
        ViewKind::Senso => rsx! { SensoView {} },
        ViewKind::AccessibilityMenu => rsx! { AccessibilityMenuView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, menu: AccessibilityMenu) -> ViewHarness {
    let app = Arc::new(TestApp {
        settings: GameSettings::default(),
    });
    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app, view, menu });
    ViewHarness { dom }
}
