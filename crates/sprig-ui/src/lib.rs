mod app;
mod component;
mod events;
mod render;
pub mod widgets;

pub use app::{App, UiError};
pub use component::{Component, Mounted, Scope};
pub use events::{EventQueue, UiEvent};
pub use render::{Renderer, TreeRenderer};
