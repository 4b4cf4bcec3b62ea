//! List command implementation

use northwind_reports::Registry;

/// Handle the list command
pub fn handle_list() -> anyhow::Result<()> {
    for exercise in Registry::new().iter() {
        println!(
            "{:<4} {}: {}",
            exercise.id.to_string(),
            exercise.title,
            exercise.description
        );
    }
    Ok(())
}
