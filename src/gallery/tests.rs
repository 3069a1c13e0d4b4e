use super::*;

fn gallery(n: usize) -> GalleryState {
    GalleryState::new((0..n).map(|i| format!("/img/{}.jpg", i)).collect())
}

#[test]
fn test_initial_state_is_closed() {
    let state = gallery(3);
    assert_eq!(state.lightbox(), Lightbox::Closed);
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.current_image(), Some("/img/0.jpg"));
}

#[test]
fn test_open_at_guards_index() {
    let mut state = gallery(3);
    assert!(!state.open_at(3));
    assert!(!state.is_open());

    assert!(state.open_at(2));
    assert!(state.is_open());
    assert_eq!(state.current_index(), 2);
}

#[test]
fn test_empty_gallery_never_opens() {
    let mut state = gallery(0);
    assert!(!state.open_at(0));
    state.next();
    state.prev();
    state.select_index(0);
    state.handle_key(Key::ArrowRight);

    assert!(!state.is_open());
    assert_eq!(state.current_index(), 0);
    assert_eq!(state.current_image(), None);
}

#[test]
fn test_navigation_wraps_for_every_size() {
    for n in 1..=6 {
        let mut state = gallery(n);
        state.open_at(n - 1);
        state.next();
        assert_eq!(state.current_index(), 0, "next from last, n={}", n);

        state.prev();
        assert_eq!(state.current_index(), n - 1, "prev from first, n={}", n);
    }
}

#[test]
fn test_single_image_navigation_stays_put() {
    let mut state = gallery(1);
    state.open_at(0);
    state.next();
    assert_eq!(state.current_index(), 0);
    state.prev();
    assert_eq!(state.current_index(), 0);
}

#[test]
fn test_navigation_ignored_while_closed() {
    let mut state = gallery(4);
    state.next();
    state.select_index(3);
    assert_eq!(state.current_index(), 0);
}

#[test]
fn test_select_index_bounds() {
    let mut state = gallery(4);
    state.open_at(0);
    state.select_index(3);
    assert_eq!(state.current_index(), 3);
    state.select_index(4);
    assert_eq!(state.current_index(), 3);
}

#[test]
fn test_keys_drive_transitions() {
    let mut state = gallery(3);
    state.handle_key(Key::Escape);
    assert!(!state.is_open());

    state.open_at(0);
    state.handle_key(Key::ArrowLeft);
    assert_eq!(state.current_index(), 2);
    state.handle_key(Key::ArrowRight);
    assert_eq!(state.current_index(), 0);
    state.handle_key(Key::Other);
    assert!(state.is_open());
    state.handle_key(Key::Escape);
    assert!(!state.is_open());
    assert_eq!(state.current_index(), 0);
}

#[test]
fn test_apply_events() {
    let mut state = gallery(2);
    for event in [
        LightboxEvent::OpenAt(0),
        LightboxEvent::Next,
        LightboxEvent::Next,
        LightboxEvent::Prev,
    ] {
        state.apply(event);
    }
    assert!(state.is_open());
    assert_eq!(state.current_index(), 1);

    state.apply(LightboxEvent::Key(Key::Escape));
    assert!(!state.is_open());
}

#[test]
fn test_key_names() {
    assert_eq!(Key::from_name("Escape"), Key::Escape);
    assert_eq!(Key::from_name("Esc"), Key::Escape);
    assert_eq!(Key::from_name("ArrowLeft"), Key::ArrowLeft);
    assert_eq!(Key::from_name("Right"), Key::ArrowRight);
    assert_eq!(Key::from_name("Enter"), Key::Other);
}

#[test]
fn test_keyboard_listener_detaches_on_drop() {
    let hub = KeyboardHub::new();
    let first = hub.attach();
    let second = hub.attach();
    assert_eq!(hub.active_listeners(), 2);

    drop(first);
    assert_eq!(hub.active_listeners(), 1);
    drop(second);
    assert_eq!(hub.active_listeners(), 0);
}
