//! Boundary-condition bookkeeping for frame and truss models.
//!
//! A [`RestraintRegistry`] collects the supports of a structural model as three
//! append-only sequences:
//!
//! - restrained global degree-of-freedom indices,
//! - prescribed displacements ([`Settlement`]),
//! - elastic supports ([`Spring`]).
//!
//! The stiffness assembly stage reads these sequences back to eliminate
//! restrained degrees of freedom, impose settlements and add spring stiffness.
//! Nodes are numbered from one and carry `dimension` translational degrees of
//! freedom, so the first degree of freedom of node `n` is `dimension * n - dimension`.
//!
//! ```
//! use restrainx::{RestraintKind, RestraintRegistry, SpringDirection};
//!
//! let mut registry = RestraintRegistry::new();
//! registry.add_restraint(1, RestraintKind::Pin)?;
//! registry.add_restraint_named(4, "roller")?;
//! registry.add_spring(2, 2.5e5, SpringDirection::NegY);
//!
//! assert_eq!(registry.restraints(), &[0, 1, 7]);
//! assert_eq!(registry.free_dofs(8)?, vec![2, 3, 4, 5, 6]);
//! # Ok::<(), restrainx::RestraintError>(())
//! ```
#![doc = include_str!("../README.md")]
#![warn(clippy::all)]
#![warn(missing_docs)]

mod errors;
mod registry;
mod support;

pub use errors::RestraintError;
pub use registry::{RestraintRegistry, RestraintSummary};
pub use support::{
    dof_index, node_dof, RestraintKind, Settlement, Spring, SpringDirection, DEFAULT_DIMENSION,
};
