use anyhow::Result;
use colored::Colorize;

use roi_engine::modules::ModuleId;

use super::render;

/// Execute the modules command
///
/// Lists the module catalog
pub fn execute() -> Result<()> {
    println!("{}", "Module Catalog".green().bold());

    let mut table = render::summary_table();
    table.set_header(vec!["Id", "Name", "Required"]);
    for module in ModuleId::ALL {
        table.add_row(vec![
            module.id().to_string(),
            module.display_name().to_string(),
            if module.is_required() { "yes" } else { "" }.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
