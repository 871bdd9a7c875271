//! Terminal presentation: event rendering and the interactive loop

pub mod repl;
pub mod text;

pub use repl::run;
pub use text::{render, render_banner};
