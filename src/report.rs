use crate::analysis::DofPartition;
use std::fmt::Write;

/// Render a textual summary of the support layout.
///
/// The report lists which degrees of freedom the assembly stage eliminates,
/// which it solves for, and where settlements and springs enter the system.
#[must_use]
pub fn render_partition(partition: &DofPartition) -> String {
    let mut output = String::new();

    writeln!(
        &mut output,
        "Support layout ({} degrees of freedom)",
        partition.total_dofs
    )
    .expect("writing to string cannot fail");

    writeln!(
        &mut output,
        "Restrained dofs: {:?} ({} entries recorded)",
        partition.restrained, partition.summary.restraint_entries
    )
    .expect("writing to string cannot fail");

    writeln!(&mut output, "Free dofs: {:?}", partition.free)
        .expect("writing to string cannot fail");

    // Only non-zero settlements are worth listing.
    for (dof, value) in partition.prescribed.iter().enumerate() {
        if *value != 0.0 {
            writeln!(&mut output, "Settlement at dof {dof}: {value:+.3e} m")
                .expect("writing to string cannot fail");
        }
    }

    if partition.spring_terms.is_empty() {
        output.push_str("Springs: none\n");
    }
    for (dof, stiffness) in &partition.spring_terms {
        writeln!(&mut output, "Spring at dof {dof}: k = {stiffness:.3e} N/m")
            .expect("writing to string cannot fail");
    }

    output
}
