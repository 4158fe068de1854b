use restrainx::{RestraintError, RestraintKind, RestraintRegistry, SpringDirection};

/// Support layout used for the continuous beam demonstration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeamSupports {
    /// Number of nodes along the beam.
    pub node_count: usize,
    /// Node carrying the pinned support.
    pub pinned_node: usize,
    /// Node carrying the roller at the far end.
    pub roller_node: usize,
    /// Interior node resting on an elastic bearing.
    pub spring_node: usize,
    /// Bearing stiffness in newtons per metre.
    pub spring_stiffness: f64,
    /// Vertical settlement of the pinned support in metres.
    pub settlement: f64,
}

impl Default for BeamSupports {
    fn default() -> Self {
        Self {
            node_count: 4,
            pinned_node: 1,
            roller_node: 4,
            spring_node: 3,
            spring_stiffness: 2.5e5,
            settlement: -0.005,
        }
    }
}

/// Record the supports of a four-node continuous beam.
///
/// The beam sits on a pin at its left end and a roller at its right end, with
/// an elastic bearing under an interior node. See
/// <https://en.wikipedia.org/wiki/Structural_support> for the support types.
pub fn apply_beam_conditions(
    registry: &mut RestraintRegistry,
) -> Result<BeamSupports, RestraintError> {
    let supports = BeamSupports::default();

    // A pin prevents both translations. Rotations are not tracked by this model.
    registry.add_restraint(supports.pinned_node, RestraintKind::Pin)?;

    // The roller only carries vertical reactions, leaving the beam free to
    // expand horizontally.
    registry.add_restraint_named(supports.roller_node, "roller")?;

    // The pinned support has sunk into the ground by a known amount.
    registry.add_settlement(supports.pinned_node, (0.0, supports.settlement));

    // The bearing pushes back upwards in proportion to the deflection.
    registry.add_spring(
        supports.spring_node,
        supports.spring_stiffness,
        SpringDirection::Y,
    );

    Ok(supports)
}
