//! `bx components` command implementation.

use bx_sections::{SectionKind, entries, legacy_ids, lookup, resolve_path};
use clap::Args;

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the components command.
#[derive(Args)]
pub(crate) struct ComponentsArgs {
    /// Verify that every legacy id resolves to a registered component.
    #[arg(long)]
    check: bool,
}

impl ComponentsArgs {
    /// Execute the components command.
    ///
    /// # Errors
    ///
    /// Returns an error if `--check` finds registry problems.
    pub(crate) fn execute(&self) -> Result<(), CliError> {
        let output = Output::new();

        if self.check {
            let problems = check_registry();
            if problems.is_empty() {
                output.success(&format!(
                    "Registry OK: {} components, {} legacy ids",
                    entries().count(),
                    legacy_ids().count()
                ));
                return Ok(());
            }
            for problem in &problems {
                output.warning(problem);
            }
            return Err(CliError::Validation(format!(
                "{} registry problem(s) found",
                problems.len()
            )));
        }

        for entry in entries() {
            output.highlight(entry.path);
            output.entry("unit", entry.unit.name());
            if let Some(root) = entry.props_root {
                output.entry("props root", root);
            }
            if !entry.legacy_ids.is_empty() {
                output.entry("legacy ids", &entry.legacy_ids.join(", "));
            }
        }
        output.separator();
        output.info(&format!(
            "{} components, {} legacy ids",
            entries().count(),
            legacy_ids().count()
        ));
        Ok(())
    }
}

/// Problems with the registry: legacy ids resolving to unregistered paths,
/// and entries that do not map back to their kind.
fn check_registry() -> Vec<String> {
    let mut problems = Vec::new();

    for id in legacy_ids() {
        match resolve_path(id) {
            Some(path) if lookup(path).is_some() => {}
            Some(path) => problems.push(format!("{id} resolves to unregistered path {path}")),
            None => problems.push(format!("{id} does not resolve")),
        }
    }
    for entry in entries() {
        if SectionKind::from_path(entry.path) != Some(entry.kind) {
            problems.push(format!("{} does not map back to {:?}", entry.path, entry.kind));
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_has_no_problems() {
        assert_eq!(check_registry(), Vec::<String>::new());
    }

    #[test]
    fn test_check_succeeds() {
        let args = ComponentsArgs { check: true };

        assert!(args.execute().is_ok());
    }
}
