use nalgebra::DVector;
use restrainx::{RestraintError, RestraintRegistry, RestraintSummary};

/// Degree-of-freedom partition handed to the stiffness assembly stage.
#[derive(Debug, Clone, PartialEq)]
pub struct DofPartition {
    /// Total number of degrees of freedom in the model.
    pub total_dofs: usize,
    /// Restrained degrees of freedom, ascending and without duplicates.
    pub restrained: Vec<usize>,
    /// Free degrees of freedom, ascending.
    pub free: Vec<usize>,
    /// Prescribed displacement for every degree of freedom.
    pub prescribed: DVector<f64>,
    /// Spring stiffness added to the diagonal, as `(dof, k)` pairs.
    pub spring_terms: Vec<(usize, f64)>,
    /// Counts of the recorded boundary conditions.
    pub summary: RestraintSummary,
}

/// Split the model's degrees of freedom into restrained and free sets.
///
/// This mirrors the partitioning step of the direct stiffness method described
/// at <https://en.wikipedia.org/wiki/Direct_stiffness_method>.
pub fn partition_dofs(
    registry: &RestraintRegistry,
    node_count: usize,
) -> Result<DofPartition, RestraintError> {
    let total_dofs = node_count * registry.dimension();
    let free = registry.free_dofs(total_dofs)?;
    let restrained = (0..total_dofs)
        .filter(|dof| registry.is_restrained(*dof))
        .collect();
    let prescribed = registry.prescribed_displacements(total_dofs)?;

    let mut spring_terms = Vec::with_capacity(registry.spring_count());
    for spring in registry.springs() {
        let dof = spring.dof(registry.dimension())?;
        if dof >= total_dofs {
            return Err(RestraintError::DofOutOfRange {
                dof,
                total: total_dofs,
            });
        }
        spring_terms.push((dof, spring.stiffness_components()[spring.axis()]));
    }

    Ok(DofPartition {
        total_dofs,
        restrained,
        free,
        prescribed,
        spring_terms,
        summary: registry.summary(),
    })
}
