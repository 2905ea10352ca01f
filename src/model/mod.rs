//! Cell model - the observable state consumed by cell views
//!
//! Models are shared, single-threaded handles (`Rc` + `RefCell`). Every
//! mutation is announced through a [`Signal`]; views never poll.

pub mod cell;
pub mod input;
pub mod output;
pub mod signal;

pub use cell::{CellModel, CellType, Facets};
pub use input::InputModel;
pub use output::{OutputItem, OutputModel};
pub use signal::{Signal, Subscription};
