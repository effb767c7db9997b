//! Command-line front end for the document review trainer.

pub mod interactive;
pub mod logging;
pub mod render;
