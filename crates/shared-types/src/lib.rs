mod error;
pub use error::*;

mod room;
pub use room::*;

mod booking;
pub use booking::*;

mod profile;
pub use profile::*;
