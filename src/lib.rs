//! cellview - notebook cell views
//!
//! This crate provides views that keep a node tree synchronized with an
//! observable notebook cell model, following the Elm Architecture pattern,
//! plus math-safe markdown rendering for markdown cells.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod logging;
pub mod markdown;
pub mod math;
pub mod messages;
pub mod model;
pub mod notebook;
pub mod scheduler;
mod update;
pub mod util;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewConfig;
pub use messages::{CellMsg, Facet, FacetChange};
pub use model::{CellModel, CellType};
pub use scheduler::UpdateScheduler;
pub use view::{CellView, ViewContext};
