//! Input events consumed by controls and the picker.
//!
//! These are deliberately small: a host (terminal loop, test, GUI shim)
//! translates its native events into these and feeds them in.

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
    Unknown,
}

/// Key modifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Default::default()
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }

    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Phase of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down(MouseButton),
    /// Pointer moved (with or without a button held).
    Move,
    Up,
    /// The gesture was aborted by the host (focus loss, resize, ...).
    Cancel,
}

/// A pointer event in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: u16,
    pub y: u16,
}

impl PointerEvent {
    pub const fn new(kind: PointerKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    pub const fn down(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Down(MouseButton::Left), x, y)
    }

    pub const fn moved(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Move, x, y)
    }

    pub const fn up(x: u16, y: u16) -> Self {
        Self::new(PointerKind::Up, x, y)
    }

    pub const fn cancel() -> Self {
        Self::new(PointerKind::Cancel, 0, 0)
    }

    pub fn is_down(&self) -> bool {
        matches!(self.kind, PointerKind::Down(_))
    }

    /// Convert a crossterm mouse event. Scroll events have no pointer meaning
    /// here and map to `None`.
    pub fn from_mouse(event: crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;
        let kind = match event.kind {
            MouseEventKind::Down(button) => PointerKind::Down(button.into()),
            MouseEventKind::Drag(_) | MouseEventKind::Moved => PointerKind::Move,
            MouseEventKind::Up(_) => PointerKind::Up,
            _ => return None,
        };
        Some(Self::new(kind, event.column, event.row))
    }
}

// Conversion from crossterm types
impl From<crossterm::event::KeyCode> for Key {
    fn from(code: crossterm::event::KeyCode) -> Self {
        use crossterm::event::KeyCode;
        match code {
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Enter => Key::Enter,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Tab => Key::Tab,
            KeyCode::BackTab => Key::BackTab,
            KeyCode::Esc => Key::Escape,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            _ => Key::Unknown,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
