//! Types command handler.

use color_eyre::Result;

use crate::models::MutantType;

/// Print every model type with its description.
pub(super) fn run_types() -> Result<()> {
    print!("{}", types_table());
    Ok(())
}

/// One line per model type, tag padded to a column, in declaration order.
fn types_table() -> String {
    MutantType::all()
        .iter()
        .map(|mutant_type| format!("{:<10} {}\n", mutant_type, mutant_type.description()))
        .collect()
}
