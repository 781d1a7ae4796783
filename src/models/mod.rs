// Models module
// Data structures shared with host applications

pub mod event;
