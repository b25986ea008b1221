//! Edge cases: bad pages, mixed color syntax, click routing, persistence.

use pinta_engine::{
    JsonStore, LoadError, MemorySource, MemoryStore, NullFeedback, Session, SessionConfig,
};

fn session_over(pages: &[(&str, &str)]) -> Session {
    let mut source = MemorySource::new();
    for (id, markup) in pages {
        source.insert(*id, *markup);
    }
    let mut session = Session::new(
        Box::new(source),
        Box::new(MemoryStore::new()),
        Box::new(NullFeedback),
        SessionConfig::default(),
    );
    session.set_pages(pages.iter().map(|(id, _)| id.to_string()).collect());
    session
}

const SIMPLE: &str = r##"<svg viewBox="0 0 10 10"><path fill="#ffffff" stroke="#000000"/></svg>"##;

#[test]
fn read_failure_keeps_previous_page() {
    let mut session = session_over(&[("1.svg", SIMPLE)]);
    session.set_pages(vec!["1.svg".into(), "missing.svg".into()]);
    session.load_page(0).unwrap();
    assert!(matches!(session.load_page(1), Err(LoadError::Read { .. })));
    // load_page(1) bumped the generation but read failed before parsing
    assert_eq!(session.current_page_id(), Some("1.svg"));
    assert!(session.document().is_some());
}

#[test]
fn empty_page_list_refuses_loads() {
    let mut session = session_over(&[]);
    assert!(matches!(session.load_page(0), Err(LoadError::NoPages)));
    assert!(session.next_page().is_none());
    assert!(session.prev_page().is_none());
}

#[test]
fn nothing_mounted_all_noops() {
    let mut session = session_over(&[("1.svg", SIMPLE)]);
    let mut tree = pinta_dom::SvgTree::new();
    let phantom = tree.create_element("path");
    assert!(!session.click(phantom));
    assert!(!session.undo());
    assert!(!session.redo());
    assert!(session.export_markup().is_none());
    assert_eq!(session.current_page_id(), None);
}

#[test]
fn rgb_syntax_classifies_like_hex() {
    let page = r#"<svg viewBox="0 0 9 9">
        <path id="area" fill="rgb(255, 255, 255)" stroke="rgb(0,0,0)"/>
        <path id="barrier" fill="none" stroke="rgb(0, 0, 0)"/>
    </svg>"#;
    let mut session = session_over(&[("1.svg", page)]);
    session.load_page(0).unwrap();
    let doc = session.document().unwrap();
    let elements = doc.elements();
    // elements[0] is the injected background
    let area = elements[1];
    let barrier = elements[2];
    assert!(session.regions().is_paintable(area));
    assert!(!session.regions().is_paintable(barrier));
}

#[test]
fn click_routes_to_nearest_paintable_ancestor() {
    let page = r##"<svg viewBox="0 0 9 9">
        <g fill="#ffffff" stroke="#000000"><path fill="none" stroke="#000000"/></g>
    </svg>"##;
    let mut session = session_over(&[("1.svg", page)]);
    session.load_page(0).unwrap();
    let doc = session.document().unwrap();
    let elements = doc.elements();
    let group = elements[1];
    let inner_barrier = elements[2];

    session.set_color("#c0ffee");
    assert!(session.click(inner_barrier), "click walks up to the paintable group");
    let doc = session.document().unwrap();
    assert_eq!(doc.tree.attr(group, "fill"), Some("#c0ffee"));
    assert_eq!(doc.tree.attr(inner_barrier, "fill"), Some("none"));
}

#[test]
fn text_labels_never_paint() {
    let page = r#"<svg viewBox="0 0 9 9"><text fill="black">5</text></svg>"#;
    let mut session = session_over(&[("1.svg", page)]);
    session.load_page(0).unwrap();
    let text = session.document().unwrap().elements()[1];
    session.set_color("#ff0000");
    assert!(!session.click(text));
}

#[test]
fn background_is_paintable_and_counts() {
    let mut session = session_over(&[("1.svg", SIMPLE)]);
    session.load_page(0).unwrap();
    let bg = session.document().unwrap().elements()[0];
    session.set_color("#abcdef");
    assert!(session.click(bg));
    assert_eq!(session.current_unique_count(), 1);
}

#[test]
fn remount_resets_membership_but_keeps_persisted_count() {
    let mut session = session_over(&[("1.svg", SIMPLE)]);
    session.load_page(0).unwrap();
    let target = session.document().unwrap().elements()[1];
    session.set_color("#ff0000");
    assert!(session.click(target));
    assert_eq!(session.current_unique_count(), 1);

    // remount the same page: the in-memory membership set resets, the
    // persisted count survives, so the same region can count again
    session.load_page(0).unwrap();
    let target = session.document().unwrap().elements()[1];
    session.set_color("#00ff00");
    assert!(session.click(target));
    assert_eq!(session.current_unique_count(), 2);
}

#[test]
fn award_persists_across_sessions() {
    let path = std::env::temp_dir().join(format!("pinta-award-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let build = |path: &std::path::Path| {
        let mut source = MemorySource::new();
        source.insert("1.svg", SIMPLE);
        let mut session = Session::new(
            Box::new(source),
            Box::new(JsonStore::new(path)),
            Box::new(NullFeedback),
            SessionConfig {
                award_threshold: 1,
                ..SessionConfig::default()
            },
        );
        session.set_pages(vec!["1.svg".into()]);
        session.load_page(0).unwrap();
        session
    };

    let mut first = build(&path);
    let target = first.document().unwrap().elements()[1];
    first.set_color("#ff0000");
    assert!(first.click(target));
    assert!(first.current_page_starred());
    drop(first);

    let mut second = build(&path);
    assert!(second.current_page_starred(), "award survives a restart");
    assert_eq!(second.progress_summary().stars, 1);

    let _ = std::fs::remove_file(&path);
}
