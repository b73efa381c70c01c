//! Memory layout of the variables attached to a mechanical behaviour.
//!
//! Given the ordered list of variables of a behaviour and a modelling
//! hypothesis, this crate computes how many scalars each variable occupies,
//! the size of a buffer storing all of them at one integration point, and
//! where each variable starts in such a buffer.
pub mod error;
pub mod hypothesis;
pub mod layout;
pub mod variable;

#[cfg(feature = "python")]
mod python;

pub use error::{LayoutError, Result};
pub use hypothesis::Hypothesis;
pub use layout::VariableLayout;
pub use variable::{get_array_size, get_variable_offset, get_variable_size, Variable, VariableType};
