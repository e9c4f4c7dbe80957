pub mod badge;
pub mod button;
pub mod card;
pub mod input;
pub mod page_header;
pub mod separator;
pub mod skeleton;
pub mod textarea;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use input::*;
pub use page_header::*;
pub use separator::*;
pub use skeleton::*;
pub use textarea::*;
pub use toast::*;
