use restrainx::{RestraintKind, RestraintRegistry, SpringDirection};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // A three-node beam on a pin and two elastic bearings
    let mut registry = RestraintRegistry::new();
    registry.add_restraint(1, RestraintKind::Pin)?;
    registry.add_spring(2, 1.2e5, SpringDirection::Y);
    registry.add_spring_named(3, 8.0e4, "y")?;

    // Print where each bearing enters the stiffness matrix
    for spring in registry.springs() {
        let dof = spring.dof(registry.dimension())?;
        let components = spring.stiffness_components();
        println!(
            "node {} ({:.0} deg): dof {dof}, kx = {:.3e}, ky = {:.3e}",
            spring.node,
            spring.angle_degrees(),
            components.x,
            components.y
        );
    }

    Ok(())
}
