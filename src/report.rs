use crate::generator::{Action, ActionKind};
use colored::Colorize;

const FOLDER_ICON: &str = "📂";
const FILE_ICON: &str = "📝";
const SKIPPED_ICON: &str = "⚠️";

/// Renders the action log to the terminal, one icon-tagged line per record,
/// followed by a created/skipped summary. Formatting lives here only; the
/// generator itself knows nothing about icons or colors.
pub fn print_actions(actions: &[Action]) {
    for action in actions {
        let path = action.path.display().to_string();

        let line = match action.kind {
            ActionKind::DirCreated => format!("{} {}", FOLDER_ICON, path.blue()),
            ActionKind::FileCreated => format!("{} {}", FILE_ICON, path.magenta()),
            ActionKind::Skipped => format!("{} {}", SKIPPED_ICON, path.yellow()),
        };

        println!("{}", line);
    }

    let skipped = actions
        .iter()
        .filter(|action| action.kind == ActionKind::Skipped)
        .count();
    let created = actions.len() - skipped;

    println!(
        "{} created, {} skipped",
        created.to_string().green(),
        skipped.to_string().yellow()
    );
}
