//! Speech adapter — command-based synthesis.

mod command;

pub use command::CommandVoiceIo;
