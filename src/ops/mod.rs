pub mod cards;
pub mod export;
pub mod patch;

pub use cards::{Card, Sequence, cards, window_start};
pub use patch::toggle_task;
