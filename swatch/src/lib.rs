pub mod color;
pub mod control;
pub mod event;
pub mod picker;
pub mod rect;

pub use color::{
    hex_to_rgba, hsla_to_rgba, hsv_to_rgb, rgb_to_hsv, rgba_to_hex, rgba_to_hsla, DisplayFormat,
    Hsla, Hsv, ParseColorError, Rgb, Rgba,
};
pub use control::{Control, DragState, SaturationValueSurface, Slider, SurfacePoint};
pub use event::{Key, Modifiers, MouseButton, PointerEvent, PointerKind};
pub use picker::{
    ColorPicker, Derived, Field, GlobalEvent, ListenerRegistry, PickerConfig, TriggerMode,
    DEFAULT_PRESETS,
};
pub use rect::Rect;
