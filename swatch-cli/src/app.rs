//! Event handling for `swatch pick`.

use crossterm::event::{Event, KeyEventKind, MouseEvent};
use swatch::picker::{is_hex_draft, read_field, FieldInput, Part};
use swatch::{
    ColorPicker, DisplayFormat, GlobalEvent, Key, ListenerRegistry, Modifiers, MouseButton,
    PickerConfig, PointerEvent, PointerKind,
};

use crate::error::CliError;
use crate::terminal::Terminal;
use crate::view::{self, InputSlot, Layout};

/// Text being typed into one input.
#[derive(Debug)]
struct Editor {
    slot: InputSlot,
    text: String,
}

pub struct App {
    picker: ColorPicker,
    registry: ListenerRegistry,
    size: (u16, u16),
    layout: Layout,
    editor: Option<Editor>,
    quit: bool,
}

impl App {
    /// Start with the popover already open.
    pub fn new(value: impl Into<String>, config: PickerConfig) -> Self {
        let registry = ListenerRegistry::new();
        let mut picker = ColorPicker::with_registry(value, config, registry.clone());
        picker.open();

        let mut app = Self {
            picker,
            registry,
            size: (80, 24),
            layout: Layout::default(),
            editor: None,
            quit: false,
        };
        app.settle();
        app
    }

    pub fn value(&self) -> &str {
        self.picker.value()
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.size = (width, height);
        self.settle();
    }

    /// Run until the user quits. Returns the final color.
    pub fn run(mut self, terminal: &mut Terminal) -> Result<String, CliError> {
        log::info!("picking from {:?}", self.picker.value());

        while !self.should_quit() {
            let (width, height) = terminal.refresh_size()?;
            self.resize(width, height);

            let editing = self.editor.as_ref().map(|e| (e.slot, e.text.as_str()));
            terminal.draw(|buf| view::draw(buf, &self.picker, &self.layout, editing))?;

            for event in terminal.poll(None)? {
                self.handle_event(event);
            }
        }

        log::info!("picked {:?}", self.value());
        Ok(self.value().to_string())
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                self.handle_key(key.code.into(), key.modifiers.into());
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Resize(width, height) => self.size = (width, height),
            _ => {}
        }
        self.settle();
    }

    /// Recompute the layout and make sure an open picker has a focused part.
    fn settle(&mut self) {
        let (width, height) = self.size;
        self.layout = Layout::compute(width, height, &self.picker);
        self.layout.apply(&mut self.picker);

        if self.picker.is_open() && self.picker.focused().is_none() {
            self.picker.set_focus(Some(Part::Surface));
        }
    }

    /// Offer a screen-wide event to the pickers listening for it. Returns
    /// true if the picker closed.
    fn dispatch_global(&mut self, event: GlobalEvent) -> bool {
        let mut closed = false;
        for id in self.registry.subscribers(&event) {
            if id == self.picker.id() {
                closed |= self.picker.handle_global(&event);
            }
        }
        if closed {
            self.editor = None;
        }
        closed
    }

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        if modifiers.ctrl && key == Key::Char('c') {
            self.quit = true;
            return;
        }

        if self.editor.is_some() {
            self.handle_editor_key(key);
            return;
        }

        if !self.picker.is_open() {
            if !self.picker.handle_trigger_key(key) && matches!(key, Key::Char('q') | Key::Escape)
            {
                self.quit = true;
            }
            return;
        }

        let event = GlobalEvent::Key { key, modifiers };
        if self.dispatch_global(event) {
            return;
        }

        match key {
            Key::Char('q') => self.quit = true,
            Key::Char('f') => self.cycle_format(),
            Key::Char('e') => {
                if let Some((slot, _)) = self.layout.inputs.first() {
                    self.start_editing(*slot);
                }
            }
            Key::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.picker.select_preset_index(index);
            }
            _ => {
                self.picker.handle_key(key, modifiers);
            }
        }
    }

    fn cycle_format(&mut self) {
        self.finish_editing();
        let current = DisplayFormat::ALL
            .iter()
            .position(|f| *f == self.picker.format())
            .unwrap_or(0);
        let next = DisplayFormat::ALL[(current + 1) % DisplayFormat::ALL.len()];
        self.picker.switch_format(next);
    }

    // -------------------------------------------------------------------------
    // Mouse
    // -------------------------------------------------------------------------

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let Some(pointer) = PointerEvent::from_mouse(mouse) else {
            return;
        };

        if let PointerKind::Down(button) = pointer.kind {
            self.dispatch_global(GlobalEvent::PointerDown {
                x: pointer.x,
                y: pointer.y,
            });
            if button == MouseButton::Left
                && self.picker.is_open()
                && self.click_chrome(pointer.x, pointer.y)
            {
                return;
            }
            self.finish_editing();
        }

        self.picker.handle_pointer(pointer);
    }

    /// Clicks on tabs, inputs and presets. Returns true if one was hit.
    fn click_chrome(&mut self, x: u16, y: u16) -> bool {
        if let Some(format) = self.layout.tab_at(x, y) {
            self.finish_editing();
            self.picker.switch_format(format);
            return true;
        }
        if let Some(index) = self.layout.preset_at(x, y) {
            self.finish_editing();
            self.picker.select_preset_index(index);
            return true;
        }
        if let Some(slot) = self.layout.input_at(x, y) {
            self.start_editing(slot);
            return true;
        }
        false
    }

    // -------------------------------------------------------------------------
    // Inputs
    // -------------------------------------------------------------------------

    fn start_editing(&mut self, slot: InputSlot) {
        self.finish_editing();
        let text = match slot {
            InputSlot::Hex => self.picker.hex_text().trim_start_matches('#').to_string(),
            InputSlot::Field(field) => self.picker.field_text(field),
        };
        log::debug!("editing {slot:?} from {text:?}");
        self.editor = Some(Editor { slot, text });
    }

    fn finish_editing(&mut self) {
        if let Some(editor) = self.editor.take() {
            if editor.slot == InputSlot::Hex {
                self.picker.end_hex_edit();
            }
        }
    }

    fn handle_editor_key(&mut self, key: Key) {
        let Some(editor) = self.editor.as_ref() else {
            return;
        };
        let mut text = editor.text.clone();
        let slot = editor.slot;

        match key {
            Key::Enter | Key::Escape => self.finish_editing(),
            Key::Tab | Key::BackTab => {
                let slots: Vec<_> = self.layout.inputs.iter().map(|(s, _)| *s).collect();
                let current = slots.iter().position(|s| *s == slot).unwrap_or(0);
                let next = if key == Key::Tab {
                    (current + 1) % slots.len().max(1)
                } else {
                    (current + slots.len().max(1) - 1) % slots.len().max(1)
                };
                if let Some(next) = slots.get(next) {
                    self.start_editing(*next);
                }
            }
            Key::Backspace => {
                text.pop();
                self.apply_edit(text);
            }
            Key::Char(c) => {
                text.push(c);
                self.apply_edit(text);
            }
            _ => {}
        }
    }

    /// Keep `text` if the input accepts it and hand it to the picker.
    fn apply_edit(&mut self, text: String) {
        let Some(editor) = self.editor.as_mut() else {
            return;
        };

        match editor.slot {
            InputSlot::Hex => {
                if !is_hex_draft(&text) {
                    return;
                }
                editor.text = text;
                self.picker.edit_hex(&editor.text);
            }
            InputSlot::Field(field) => {
                if matches!(read_field(field, &text), FieldInput::Invalid) {
                    return;
                }
                editor.text = text;
                self.picker.edit_field(field, &editor.text);
            }
        }
    }
}
