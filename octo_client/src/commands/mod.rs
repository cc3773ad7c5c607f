mod extrude;
mod flowrate;
mod select_tool;
mod set_offset;
mod set_target;
mod tool_state;

pub use extrude::*;
pub use flowrate::*;
pub use select_tool::*;
pub use set_offset::*;
pub use set_target::*;
pub use tool_state::*;
