mod ranking;
mod record;
mod user;

pub use ranking::*;
pub use record::*;
pub use user::*;
