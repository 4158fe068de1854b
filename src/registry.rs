//! Accumulation of node boundary conditions for a structural model.

use std::collections::BTreeSet;

use log::{debug, warn};
use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::errors::RestraintError;
use crate::support::{
    dof_index, node_dof, RestraintKind, Settlement, Spring, SpringDirection, DEFAULT_DIMENSION,
};

/// Counts describing the contents of a [`RestraintRegistry`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestraintSummary {
    /// Number of recorded restraint indices, duplicates included.
    pub restraint_entries: usize,
    /// Number of distinct restrained degrees of freedom.
    pub restrained_dofs: usize,
    /// Number of settlement records.
    pub settlements: usize,
    /// Number of spring records.
    pub springs: usize,
}

/// Append-only store of restraints, settlements and spring supports.
///
/// One registry is built per model. Entries are kept in the order they were
/// added and are never removed or rewritten; the assembly stage reads the three
/// sequences directly.
///
/// # Examples
/// ```
/// use restrainx::{RestraintKind, RestraintRegistry, SpringDirection};
///
/// let mut registry = RestraintRegistry::new();
/// registry.add_restraint(2, RestraintKind::Fixed)?;
/// registry.add_restraint(4, RestraintKind::Roller)?;
/// registry.add_settlement(2, (0.0, -0.005));
/// registry.add_spring(3, 1.0e4, SpringDirection::Y);
///
/// assert_eq!(registry.restraints(), &[2, 3, 7]);
/// assert_eq!(registry.springs()[0].as_tuple(), (3, 1.0e4, 270.0));
/// # Ok::<(), restrainx::RestraintError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RestraintRegistry {
    /// Degrees of freedom per node used when none is given explicitly.
    dimension: usize,
    /// Restrained global degree-of-freedom indices.
    restraints: Vec<usize>,
    /// Prescribed displacements.
    settlements: Vec<Settlement>,
    /// Elastic supports.
    springs: Vec<Spring>,
}

impl Default for RestraintRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RestraintRegistry {
    /// Create an empty registry for a planar model.
    ///
    /// # Examples
    /// ```
    /// use restrainx::RestraintRegistry;
    ///
    /// let registry = RestraintRegistry::new();
    /// assert!(registry.is_empty());
    /// assert_eq!(registry.dimension(), 2);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_dimension(DEFAULT_DIMENSION)
    }

    /// Create an empty registry whose nodes carry `dimension` degrees of freedom.
    #[must_use]
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            restraints: Vec::new(),
            settlements: Vec::new(),
            springs: Vec::new(),
        }
    }

    /// Degrees of freedom per node used by the methods without an explicit dimension.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Restrain the degrees of freedom of `node` selected by `kind`.
    ///
    /// # Errors
    ///
    /// Returns [`RestraintError::InvalidNode`] when `node` cannot be mapped onto
    /// degrees of freedom.
    pub fn add_restraint(&mut self, node: usize, kind: RestraintKind) -> Result<(), RestraintError> {
        self.add_restraint_with_dimension(node, kind, self.dimension)
    }

    /// Restrain `node` using an explicit number of degrees of freedom per node.
    ///
    /// The indices are computed before anything is stored, so a failed call
    /// leaves the registry unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`RestraintError::InvalidNode`] when `node` cannot be mapped onto
    /// degrees of freedom.
    pub fn add_restraint_with_dimension(
        &mut self,
        node: usize,
        kind: RestraintKind,
        dimension: usize,
    ) -> Result<(), RestraintError> {
        let dofs = kind
            .restrained_axes()
            .iter()
            .map(|&axis| dof_index(node, dimension, axis))
            .collect::<Result<Vec<_>, _>>()
            .inspect_err(|error| warn!("rejected {kind} restraint at node {node}: {error}"))?;
        debug!("{kind} restraint at node {node} fixes dofs {dofs:?}");
        self.restraints.extend(dofs);
        Ok(())
    }

    /// Restrain `node` using a kind name such as `"fixed"` or `"rollerY"`.
    ///
    /// # Errors
    ///
    /// Returns [`RestraintError::UnknownRestraintKind`] when `kind` is not a known
    /// name and [`RestraintError::InvalidNode`] when `node` cannot be mapped.
    pub fn add_restraint_named(&mut self, node: usize, kind: &str) -> Result<(), RestraintError> {
        self.add_restraint_named_with_dimension(node, kind, self.dimension)
    }

    /// Restrain `node` by kind name using an explicit number of degrees of
    /// freedom per node.
    ///
    /// # Errors
    ///
    /// Returns [`RestraintError::UnknownRestraintKind`] when `kind` is not a known
    /// name and [`RestraintError::InvalidNode`] when `node` cannot be mapped.
    pub fn add_restraint_named_with_dimension(
        &mut self,
        node: usize,
        kind: &str,
        dimension: usize,
    ) -> Result<(), RestraintError> {
        let kind = kind
            .parse::<RestraintKind>()
            .inspect_err(|error| warn!("ignored restraint at node {node}: {error}"))?;
        self.add_restraint_with_dimension(node, kind, dimension)
    }

    /// Record a prescribed displacement `(dx, dy)` at `node`.
    ///
    /// The node is not checked against existing restraints.
    pub fn add_settlement(&mut self, node: usize, (dx, dy): (f64, f64)) {
        debug!("settlement at node {node}: dx = {dx}, dy = {dy}");
        self.settlements.push(Settlement::new(node, dx, dy));
    }

    /// Attach a spring of stiffness `stiffness` to `node`.
    pub fn add_spring(&mut self, node: usize, stiffness: f64, direction: SpringDirection) {
        debug!("spring at node {node}: k = {stiffness}, direction {direction}");
        self.springs.push(Spring::new(node, stiffness, direction));
    }

    /// Attach a spring using a direction name: `"x"`, `"-x"`, `"y"` or `"-y"`.
    ///
    /// # Errors
    ///
    /// Returns [`RestraintError::InvalidDirection`] for any other name; nothing
    /// is recorded in that case.
    pub fn add_spring_named(
        &mut self,
        node: usize,
        stiffness: f64,
        direction: &str,
    ) -> Result<(), RestraintError> {
        let direction = direction
            .parse::<SpringDirection>()
            .inspect_err(|error| warn!("ignored spring at node {node}: {error}"))?;
        self.add_spring(node, stiffness, direction);
        Ok(())
    }

    /// Restrained degree-of-freedom indices in insertion order.
    #[must_use]
    pub fn restraints(&self) -> &[usize] {
        &self.restraints
    }

    /// Settlement records in insertion order.
    #[must_use]
    pub fn settlements(&self) -> &[Settlement] {
        &self.settlements
    }

    /// Spring records in insertion order.
    #[must_use]
    pub fn springs(&self) -> &[Spring] {
        &self.springs
    }

    /// Number of recorded restraint indices.
    #[must_use]
    pub fn restraint_count(&self) -> usize {
        self.restraints.len()
    }

    /// Number of recorded settlements.
    #[must_use]
    pub fn settlement_count(&self) -> usize {
        self.settlements.len()
    }

    /// Number of recorded springs.
    #[must_use]
    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    /// Return `true` when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.restraints.is_empty() && self.settlements.is_empty() && self.springs.is_empty()
    }

    /// Return `true` when `dof` appears in the restraint sequence.
    #[must_use]
    pub fn is_restrained(&self, dof: usize) -> bool {
        self.restraints.contains(&dof)
    }

    /// Degrees of freedom in `0..total_dofs` that are not restrained, ascending.
    ///
    /// # Errors
    ///
    /// Returns [`RestraintError::DofOutOfRange`] when a restraint lies outside
    /// `0..total_dofs`.
    ///
    /// # Examples
    /// ```
    /// use restrainx::{RestraintKind, RestraintRegistry};
    ///
    /// let mut registry = RestraintRegistry::new();
    /// registry.add_restraint(1, RestraintKind::Pin)?;
    /// registry.add_restraint(3, RestraintKind::Roller)?;
    /// assert_eq!(registry.free_dofs(6)?, vec![2, 3, 4]);
    /// # Ok::<(), restrainx::RestraintError>(())
    /// ```
    pub fn free_dofs(&self, total_dofs: usize) -> Result<Vec<usize>, RestraintError> {
        let mut restrained = vec![false; total_dofs];
        for &dof in &self.restraints {
            let slot = restrained
                .get_mut(dof)
                .ok_or(RestraintError::DofOutOfRange {
                    dof,
                    total: total_dofs,
                })?;
            *slot = true;
        }
        Ok(restrained
            .into_iter()
            .enumerate()
            .filter(|&(_, fixed)| !fixed)
            .map(|(dof, _)| dof)
            .collect())
    }

    /// Dense vector of prescribed displacements over `total_dofs` degrees of freedom.
    ///
    /// Each settlement writes `dx` to the first-axis and `dy` to the second-axis
    /// degree of freedom of its node; every other entry is zero. A later
    /// settlement at the same node replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns [`RestraintError::AxisOutOfRange`] when nodes carry fewer than two
    /// degrees of freedom, [`RestraintError::InvalidNode`] when a settlement node
    /// cannot be mapped and [`RestraintError::DofOutOfRange`] when it maps outside
    /// the system.
    pub fn prescribed_displacements(
        &self,
        total_dofs: usize,
    ) -> Result<DVector<f64>, RestraintError> {
        let mut displacements = DVector::zeros(total_dofs);
        for settlement in &self.settlements {
            for (axis, value) in [settlement.dx, settlement.dy].into_iter().enumerate() {
                let dof = node_dof(settlement.node, self.dimension, axis)?;
                if dof >= total_dofs {
                    return Err(RestraintError::DofOutOfRange {
                        dof,
                        total: total_dofs,
                    });
                }
                displacements[dof] = value;
            }
        }
        Ok(displacements)
    }

    /// Summarise the registry contents.
    #[must_use]
    pub fn summary(&self) -> RestraintSummary {
        let distinct: BTreeSet<usize> = self.restraints.iter().copied().collect();
        RestraintSummary {
            restraint_entries: self.restraints.len(),
            restrained_dofs: distinct.len(),
            settlements: self.settlements.len(),
            springs: self.springs.len(),
        }
    }
}
