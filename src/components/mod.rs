//! UI Components
//!
//! Leptos components projecting the store into the page markup.

mod category_grid;
mod output_panel;
mod sprite_icon;
mod status_toast;
mod toolbar;

pub use category_grid::CategoryGrid;
pub use output_panel::OutputPanel;
pub use sprite_icon::SpriteIcon;
pub use status_toast::StatusToast;
pub use toolbar::Toolbar;
