//! Interactive chat module
//!
//! Provides a readline-based interactive interface to the dialogue
//! controller.

mod repl;

pub use repl::ChatRepl;
