pub mod ansi;
pub mod span;
pub mod style;
