#[cfg(feature = "server")]
pub(crate) mod auth;

mod account;
pub use account::*;

mod booking;
pub use booking::*;

mod room;
pub use room::*;
