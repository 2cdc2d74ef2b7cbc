mod command;
mod script;

pub use command::{Command, CommandError};
pub use script::{Script, ScriptError};
