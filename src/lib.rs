// Calendar Drag-and-Drop Library
// Interaction addons layered on top of an already-rendered calendar grid

pub mod dnd;
pub mod models;
pub mod utils;
