pub mod components;
pub use components::*;
