use crossterm::event::{
    KeyCode, KeyModifiers, MouseButton as CtButton, MouseEvent, MouseEventKind,
};
use swatch::{Key, Modifiers, MouseButton, PointerEvent, PointerKind};

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

// ============================================================================
// Keys
// ============================================================================

#[test]
fn test_key_from_crossterm() {
    assert_eq!(Key::from(KeyCode::Char('a')), Key::Char('a'));
    assert_eq!(Key::from(KeyCode::Esc), Key::Escape);
    assert_eq!(Key::from(KeyCode::PageDown), Key::PageDown);
    assert_eq!(Key::from(KeyCode::F(5)), Key::Unknown);
}

#[test]
fn test_modifiers_from_crossterm() {
    let mods = Modifiers::from(KeyModifiers::SHIFT | KeyModifiers::ALT);
    assert!(mods.shift);
    assert!(mods.alt);
    assert!(!mods.ctrl);
    assert!(Modifiers::from(KeyModifiers::NONE).none());
}

// ============================================================================
// Pointer
// ============================================================================

#[test]
fn test_pointer_from_mouse_down_and_up() {
    let down = PointerEvent::from_mouse(mouse(MouseEventKind::Down(CtButton::Left), 4, 7));
    assert_eq!(down, Some(PointerEvent::down(4, 7)));
    assert!(down.is_some_and(|e| e.is_down()));

    let up = PointerEvent::from_mouse(mouse(MouseEventKind::Up(CtButton::Left), 4, 7));
    assert_eq!(up, Some(PointerEvent::up(4, 7)));
}

#[test]
fn test_pointer_from_mouse_drag_is_move() {
    let drag = PointerEvent::from_mouse(mouse(MouseEventKind::Drag(CtButton::Left), 9, 2));
    assert_eq!(drag, Some(PointerEvent::moved(9, 2)));

    let moved = PointerEvent::from_mouse(mouse(MouseEventKind::Moved, 1, 1));
    assert_eq!(moved.map(|e| e.kind), Some(PointerKind::Move));
}

#[test]
fn test_pointer_right_button() {
    let down = PointerEvent::from_mouse(mouse(MouseEventKind::Down(CtButton::Right), 0, 0));
    assert_eq!(down.map(|e| e.kind), Some(PointerKind::Down(MouseButton::Right)));
}

#[test]
fn test_pointer_scroll_is_ignored() {
    assert_eq!(
        PointerEvent::from_mouse(mouse(MouseEventKind::ScrollDown, 0, 0)),
        None
    );
}
