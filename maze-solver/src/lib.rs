//! Interactive maze solver: a text menu that loads or generates a maze,
//! edits it, and prints its breadth-first shortest path.

pub mod config;
pub mod session;

pub use config::{Args, Config};
pub use session::{Flow, Session};
