mod analysis;
mod conditions;
mod report;

use analysis::partition_dofs;
use conditions::apply_beam_conditions;
use report::render_partition;
use restrainx::RestraintRegistry;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Verbosity follows RUST_LOG, e.g. RUST_LOG=debug to trace every support.
    env_logger::init();

    // One registry per model, populated while the model is set up.
    let mut registry = RestraintRegistry::new();
    let supports = apply_beam_conditions(&mut registry)?;

    // Split the degrees of freedom the way the stiffness assembly would.
    let partition = partition_dofs(&registry, supports.node_count)?;
    println!("{}", render_partition(&partition));

    // Snapshot of the raw sequences for downstream tools.
    println!("{}", serde_json::to_string_pretty(&registry)?);

    Ok(())
}
