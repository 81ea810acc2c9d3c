//! Interactive front ends: the rack shell and the trie explorer

mod command;
mod explore;
mod session;

pub use command::{Command, HELP};
pub use explore::Explorer;
pub use session::Shell;
