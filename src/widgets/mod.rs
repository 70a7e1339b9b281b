pub mod base;
pub mod components;
pub mod inputs;
pub mod traits;
