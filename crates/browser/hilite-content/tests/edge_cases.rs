//! Edge case tests for hilite-content

use hilite_content::{
    ContentConfig, ContentError, ContentScript, KeyEvent, MemoryStore, Request, Response,
};
use hilite_core::find_text;
use hilite_dom::{Document, Range, Selection};
use hilite_html::get_inner_html;

fn enabled_script(config: ContentConfig) -> ContentScript<MemoryStore> {
    let mut script = ContentScript::new(config, MemoryStore::new());
    let mut scratch = Document::default();
    script.handle_message(&mut scratch, Request::ToggleHighlight { enabled: true });
    script
}

fn parse(html: &str) -> Document {
    hilite_html::parse(html).expect("fixture should parse")
}

// ============================================================================
// MOUSE-UP FILTERING
// ============================================================================

#[test]
fn test_selection_inside_own_ui_is_ignored() {
    let mut doc = parse("<body><div class=\"container\"><p>controls</p></div><p>page</p></body>");
    let body = doc.body().unwrap();
    let before = get_inner_html(doc.tree(), body);
    let mut script = enabled_script(ContentConfig::default());

    let range = find_text(doc.tree(), body, "controls").unwrap();
    let target = range.start_container();
    let mut selection = Selection::from_range(range);

    assert!(script.on_mouse_up(&mut doc, &mut selection, target).is_empty());
    assert_eq!(selection.range_count(), 1, "selection is left alone");
    assert_eq!(get_inner_html(doc.tree(), body), before);
}

#[test]
fn test_ignored_class_is_configurable() {
    let mut doc = parse("<body><aside class=\"toolbar\"><p>tools</p></aside></body>");
    let body = doc.body().unwrap();
    let config = ContentConfig {
        ignore_container_class: "toolbar".into(),
        ..Default::default()
    };
    let mut script = enabled_script(config);

    let range = find_text(doc.tree(), body, "tools").unwrap();
    let target = range.start_container();
    assert!(script
        .on_mouse_up(&mut doc, &mut Selection::from_range(range), target)
        .is_empty());
}

#[test]
fn test_empty_selections_leave_page_untouched() {
    let mut doc = parse("<body><p>one</p>\n\n<p>two</p></body>");
    let body = doc.body().unwrap();
    let before = get_inner_html(doc.tree(), body);
    let mut script = enabled_script(ContentConfig::default());

    let one = find_text(doc.tree(), body, "one").unwrap().start_container();
    let two = find_text(doc.tree(), body, "two").unwrap().start_container();

    let mut none = Selection::new();
    let mut caret = Selection::from_range(Range::new(one, 1));
    let mut blank = Selection::from_range(Range::between(one, 3, two, 0));
    for selection in [&mut none, &mut caret, &mut blank] {
        assert!(script.on_mouse_up(&mut doc, selection, body).is_empty());
    }
    assert_eq!(get_inner_html(doc.tree(), body), before);
    assert!(script.highlighter().list_markers(doc.tree()).is_empty());
}

// ============================================================================
// DOUBLE-CLICK
// ============================================================================

#[test]
fn test_double_click_removes_marker_even_when_disabled() {
    let mut doc = parse("<body><p>keep this part</p></body>");
    let body = doc.body().unwrap();
    let before = get_inner_html(doc.tree(), body);
    let mut script = enabled_script(ContentConfig::default());

    let range = find_text(doc.tree(), body, "this").unwrap();
    let markers = script.on_mouse_up(&mut doc, &mut Selection::from_range(range), body);
    assert_eq!(markers.len(), 1);

    script.handle_message(&mut doc, Request::ToggleHighlight { enabled: false });
    let inner = doc.tree().get(markers[0]).unwrap().first_child;
    assert!(script.on_double_click(&mut doc, inner));
    assert_eq!(get_inner_html(doc.tree(), body), before);

    // The marker is gone; a second double-click finds nothing
    assert!(!script.on_double_click(&mut doc, inner));
}

#[test]
fn test_double_click_on_plain_text() {
    let mut doc = parse("<body><p>plain</p></body>");
    let body = doc.body().unwrap();
    let mut script = enabled_script(ContentConfig::default());
    assert!(!script.on_double_click(&mut doc, body));
}

// ============================================================================
// PROTOCOL ERRORS AND SHORTCUTS
// ============================================================================

#[test]
fn test_malformed_messages() {
    let mut doc = parse("<body><p>x</p></body>");
    let mut script = enabled_script(ContentConfig::default());

    for message in ["not json", r#"{"action": "unknown"}"#, r#"{"enabled": true}"#] {
        assert!(matches!(
            script.handle_json(&mut doc, message),
            Err(ContentError::BadRequest(_))
        ));
    }
    assert!(script.is_enabled(), "bad messages change nothing");
}

#[test]
fn test_toggle_to_same_state() {
    let mut doc = parse("<body><p>x</p></body>");
    let mut script = enabled_script(ContentConfig::default());
    let response = script.handle_message(&mut doc, Request::ToggleHighlight { enabled: true });
    assert_eq!(response, Response::toggled(true));
    assert!(script.is_enabled());
    assert!(script.take_notifications().is_empty(), "only the shortcut notifies");
}

#[test]
fn test_shortcut_needs_both_modifiers() {
    let mut doc = parse("<body><p>x</p></body>");
    let mut script = ContentScript::new(ContentConfig::default(), MemoryStore::new());

    assert!(!script.on_key_down(&mut doc, &KeyEvent::new("H").with_shift()));
    assert!(!script.on_key_down(&mut doc, &KeyEvent::new("h").with_ctrl()));
    assert!(!script.is_enabled());
    assert!(script.take_notifications().is_empty());
}

#[test]
fn test_page_without_body() {
    let mut doc = Document::empty("about:blank");
    let mut script = ContentScript::new(ContentConfig::default(), MemoryStore::new());

    // Nothing to put a cursor on, nothing to read
    let response = script.handle_message(&mut doc, Request::ToggleHighlight { enabled: true });
    assert_eq!(response.success, Some(true));
    assert_eq!(script.page_content(&doc), "");
    assert_eq!(
        script.handle_message(&mut doc, Request::GetMarkedContent),
        Response::marked(Vec::new())
    );
}
