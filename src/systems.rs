mod core;
mod ui;

pub use self::core::*;
pub use self::ui::*;
