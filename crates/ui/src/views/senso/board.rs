use dioxus::prelude::*;
use senso_core::model::{SelectionFeedback, SensoButtonId, TargetSequence};

use crate::context::AppContext;
use crate::vm::{BoardUiState, PlaybackPlan, map_board};

use super::button::SensoButton;

#[component]
pub fn SensoView() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = ctx.game_settings().clone();
    let board = ctx.board();

    let game = use_signal(move || ctx.new_game());
    let feedback = use_signal(|| None::<SelectionFeedback>);
    let highlighted = use_signal(|| None::<SensoButtonId>);
    let playing_back = use_signal(|| false);

    // Shows the sequence; input stays disabled until the last flash is over.
    let play = use_callback(move |sequence: TargetSequence| {
        let plan = PlaybackPlan::new(&sequence, &settings);
        let mut highlighted = highlighted;
        let mut playing_back = playing_back;
        playing_back.set(true);
        spawn(async move {
            for id in plan.steps.iter().copied() {
                highlighted.set(Some(id));
                tokio::time::sleep(plan.flash).await;
                highlighted.set(None);
                tokio::time::sleep(plan.pause).await;
            }
            playing_back.set(false);
        });
    });

    let on_press = {
        let mut game = game;
        let mut feedback = feedback;
        use_callback(move |id: SensoButtonId| {
            if playing_back() {
                return;
            }
            let result = game.write().press(id);
            match result {
                Ok(result) => {
                    if let Some(next) = result.feedback {
                        feedback.set(Some(next));
                    }
                }
                Err(err) => tracing::warn!(%err, button = %id, "press rejected"),
            }
        })
    };

    let on_start = {
        let mut game = game;
        let mut feedback = feedback;
        use_callback(move |_: ()| {
            let started = game.write().start_game().cloned();
            match started {
                Ok(sequence) => {
                    feedback.set(None);
                    play.call(sequence);
                }
                Err(err) => tracing::warn!(%err, "could not start game"),
            }
        })
    };

    let on_advance = {
        let mut game = game;
        let mut feedback = feedback;
        use_callback(move |_: ()| {
            let next = game.write().advance_level().cloned();
            match next {
                Ok(sequence) => {
                    feedback.set(None);
                    play.call(sequence);
                }
                Err(err) => tracing::warn!(%err, "could not advance level"),
            }
        })
    };

    let on_restart = {
        let mut game = game;
        use_callback(move |_: ()| {
            let replay = game.write().restart_level().cloned();
            match replay {
                Ok(sequence) => play.call(sequence),
                Err(err) => tracing::warn!(%err, "could not restart level"),
            }
        })
    };

    let ui_state = BoardUiState {
        highlighted: highlighted(),
        playing_back: playing_back(),
        feedback: feedback(),
    };
    let vm = map_board(&game.read(), &board, ui_state);
    let level_label = vm.level_label.clone().unwrap_or_default();

    rsx! {
        section { class: "page senso",
            header { class: "senso-header",
                if !level_label.is_empty() {
                    p { class: "senso-level", "{level_label}" }
                }
                p { class: "senso-status", "{vm.status_line}" }
                p { id: "subtitle", class: "senso-subtitle", aria_live: "polite", "{vm.subtitle}" }
            }
            div { class: "senso-board",
                for button in vm.buttons.clone() {
                    SensoButton { key: "{button.dom_id}", vm: button, on_press: on_press }
                }
            }
            div { class: "senso-controls",
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: !vm.can_start,
                    onclick: move |_| on_start.call(()),
                    "Start"
                }
                button {
                    r#type: "button",
                    class: "btn",
                    disabled: !vm.can_advance,
                    onclick: move |_| on_advance.call(()),
                    "Nächstes Level"
                }
                button {
                    r#type: "button",
                    class: "btn btn-text",
                    disabled: !vm.can_restart,
                    onclick: move |_| on_restart.call(()),
                    "Folge wiederholen"
                }
            }
        }
    }
}
