pub mod controls;
pub mod keyboard;

pub use controls::wire_controls;
pub use keyboard::wire_keyboard;
