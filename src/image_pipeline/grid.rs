//! Grid geometry and icon layout module
//!
//! Describes how a sprite sheet is divided into cells and which identifier
//! each cell is written under.

mod layout;
pub mod types;

pub use layout::{IconEntry, IconLayout};
pub use types::{CellDescriptor, GridSpec};
