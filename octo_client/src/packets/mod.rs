mod command;
mod request;

pub use command::*;
pub use request::*;
