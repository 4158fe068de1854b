//! Error types produced while recording or reading boundary conditions.

use thiserror::Error;

/// Error returned when a boundary condition cannot be recorded or mapped onto
/// global degrees of freedom.
///
/// Every variant describes a rejected call; the registry is left untouched
/// when one of them is returned, so callers can report the problem and carry on.
///
/// # Examples
///
/// ```
/// use restrainx::{RestraintError, RestraintRegistry};
///
/// let mut registry = RestraintRegistry::new();
/// let error = registry
///     .add_restraint_named(2, "clamped")
///     .expect_err("unknown kind is rejected");
/// assert_eq!(error, RestraintError::UnknownRestraintKind("clamped".to_string()));
/// assert!(registry.restraints().is_empty());
/// ```
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RestraintError {
    /// Returned when a restraint kind string is not one of `fixed`, `pin`,
    /// `roller`, `rollerX` or `rollerY`.
    #[error("unknown restraint kind {0:?}")]
    UnknownRestraintKind(String),
    /// Returned when a spring direction string is not one of `x`, `-x`, `y` or `-y`.
    #[error("invalid spring direction {0:?} (expected x, -x, y or -y)")]
    InvalidDirection(String),
    /// Returned when a node number cannot be mapped onto degrees of freedom.
    ///
    /// Nodes are numbered from one, so node zero is rejected, as is any node whose
    /// degree-of-freedom index would not fit in a `usize`.
    #[error("node {node} cannot be mapped to degrees of freedom in dimension {dimension}")]
    InvalidNode {
        /// Rejected node number.
        node: usize,
        /// Number of degrees of freedom per node used for the mapping.
        dimension: usize,
    },
    /// Returned when an axis is not one of the degrees of freedom carried by a node.
    #[error("node {node} has no axis {axis} in dimension {dimension}")]
    AxisOutOfRange {
        /// Node the axis was requested for.
        node: usize,
        /// Rejected zero-based axis.
        axis: usize,
        /// Number of degrees of freedom per node.
        dimension: usize,
    },
    /// Returned when a degree of freedom lies outside the system being assembled.
    #[error("degree of freedom {dof} is outside a system of {total} degrees of freedom")]
    DofOutOfRange {
        /// Offending global degree-of-freedom index.
        dof: usize,
        /// Total number of degrees of freedom supplied by the caller.
        total: usize,
    },
}
