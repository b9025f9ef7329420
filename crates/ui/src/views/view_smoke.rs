use senso_core::model::{AccessibilityCategory, AccessibilityMenu};

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn senso_view_smoke_renders_idle_board() {
    let mut harness = setup_view_harness(ViewKind::Senso, AccessibilityMenu::new());
    harness.rebuild();
    let html = harness.render();

    for dom_id in ["top-left", "top-right", "bottom-left", "bottom-right"] {
        let expected = format!("id=\"{dom_id}\"");
        assert!(html.contains(&expected), "missing {expected} in {html}");
    }
    assert!(html.contains("id=\"subtitle\""), "missing subtitle in {html}");
    assert!(html.contains("Start"), "missing start button in {html}");
    assert!(!html.contains("Richtig"), "unexpected feedback in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_renders_nothing_when_closed() {
    let mut harness = setup_view_harness(ViewKind::AccessibilityMenu, AccessibilityMenu::new());
    harness.rebuild();
    let html = harness.render();
    assert!(!html.contains("accessibility-menu"), "menu rendered while closed: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_renders_overview() {
    let mut menu = AccessibilityMenu::new();
    menu.open();
    let mut harness = setup_view_harness(ViewKind::AccessibilityMenu, menu);
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Einstellungen der Barrierefreiheit"),
        "missing heading in {html}"
    );
    for title in ["Sehen", "Bedienen", "Schwierigkeit"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(
        html.contains("Zeige alle Sehen-bezogene Einstellungen an"),
        "missing tooltip in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn menu_view_smoke_renders_category_panel() {
    let mut menu = AccessibilityMenu::new();
    menu.select_category(AccessibilityCategory::Seeing);
    let mut harness = setup_view_harness(ViewKind::AccessibilityMenu, menu);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Sehen"), "missing heading in {html}");
    assert!(
        html.contains("Seeing settings will be available soon :-)"),
        "missing placeholder in {html}"
    );
    assert!(
        !html.contains("Einstellungen der Barrierefreiheit"),
        "overview rendered with a category selected: {html}"
    );
}
