use crate::app::AppState;

/// Build the terminal report as plain lines.
///
/// Printed after the alternate screen has been torn down so the report
/// survives on the scrollback. Pure function of the final state: an empty
/// outcome list means the run was aborted; failed removals are annotated
/// with the OS error instead of being reported as deleted.
pub fn report_lines(state: &AppState) -> Vec<String> {
    if state.outcomes.is_empty() {
        return vec!["Aborted. No folders deleted.".to_string()];
    }

    let mut lines = Vec::with_capacity(state.outcomes.len() + 1);
    if state.dry_run {
        lines.push("Dry run — these would be deleted:".to_string());
    } else {
        lines.push("Deleted the following folders:".to_string());
    }

    for outcome in &state.outcomes {
        match &outcome.error {
            None => lines.push(format!("  - {}", outcome.path.display())),
            Some(err) => lines.push(format!(
                "  - {} (failed: {})",
                outcome.path.display(),
                err
            )),
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PurgeOutcome;
    use std::path::PathBuf;

    fn state(dry_run: bool, outcomes: Vec<PurgeOutcome>) -> AppState {
        let mut state = AppState::new(PathBuf::from("/root"), dry_run);
        state.outcomes = outcomes;
        state
    }

    #[test]
    fn test_abort_report() {
        let lines = report_lines(&state(false, Vec::new()));
        assert_eq!(lines, vec!["Aborted. No folders deleted.".to_string()]);
    }

    #[test]
    fn test_dry_run_report_lists_paths() {
        let lines = report_lines(&state(
            true,
            vec![PurgeOutcome {
                path: PathBuf::from("/x/node_modules"),
                error: None,
            }],
        ));
        assert_eq!(lines[0], "Dry run — these would be deleted:");
        assert_eq!(lines[1], "  - /x/node_modules");
    }

    #[test]
    fn test_failures_are_annotated() {
        let lines = report_lines(&state(
            false,
            vec![
                PurgeOutcome {
                    path: PathBuf::from("/a/node_modules"),
                    error: None,
                },
                PurgeOutcome {
                    path: PathBuf::from("/b/node_modules"),
                    error: Some("permission denied".to_string()),
                },
            ],
        ));
        assert_eq!(lines[0], "Deleted the following folders:");
        assert_eq!(lines[1], "  - /a/node_modules");
        assert_eq!(lines[2], "  - /b/node_modules (failed: permission denied)");
    }
}
