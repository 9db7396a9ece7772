//! Interactive shell
//!
//! Reads one command per line, runs it through the same dispatcher as the
//! one-shot CLI and keeps going after errors. `exit`, `quit` or end of input
//! leave the loop.

use std::io::{BufRead, Write};

use clap::Parser;
use tracing::debug;

use super::{dispatch, CliContext, PlannerCommand};
use crate::error::{TripError, TripResult};

const PROMPT: &str = "trip> ";

/// One line of shell input
#[derive(Parser)]
#[command(
    name = "trip",
    no_binary_name = true,
    disable_version_flag = true,
    override_usage = "<COMMAND> [ARGS]... | exit"
)]
struct ShellLine {
    #[command(subcommand)]
    command: PlannerCommand,
}

/// Run the read-dispatch loop until `exit`, `quit` or end of input
pub async fn run_shell<R: BufRead, W: Write>(
    ctx: &CliContext<'_>,
    mut input: R,
    mut out: W,
) -> TripResult<()> {
    writeln!(out, "Trip planner shell. Type 'help' for commands, 'exit' to leave.")?;

    let mut line = String::new();
    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        let words = match split_words(&line) {
            Ok(words) => words,
            Err(err) => {
                writeln!(out, "Error: {}", err)?;
                continue;
            }
        };

        match words.first().map(String::as_str) {
            None => continue,
            Some("exit") | Some("quit") => break,
            Some(_) => {}
        }

        debug!(?words, "shell command");
        match ShellLine::try_parse_from(&words) {
            Ok(parsed) => {
                if let Err(err) = dispatch(ctx, parsed.command, &mut out).await {
                    writeln!(out, "Error: {}", err)?;
                }
            }
            // Help and usage errors render their own text
            Err(err) => write!(out, "{}", err.render())?,
        }
    }

    Ok(())
}

/// Split a line into words, honouring single and double quotes
fn split_words(line: &str) -> TripResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if quote.is_some() {
        return Err(TripError::Validation("Unterminated quote".into()));
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AuditLogger;
    use crate::config::Settings;
    use crate::storage::{MemoryStore, TripStore};
    use tempfile::TempDir;

    #[test]
    fn test_split_words() {
        assert_eq!(
            split_words(r#"activity add Paris "Eiffel Tower" --at '2026-07-01 10:00'"#).unwrap(),
            vec!["activity", "add", "Paris", "Eiffel Tower", "--at", "2026-07-01 10:00"]
        );
        assert_eq!(split_words("   \n").unwrap(), Vec::<String>::new());
        assert_eq!(split_words(r#"trip show """#).unwrap(), vec!["trip", "show", ""]);
        assert!(split_words(r#"trip show "Paris"#).unwrap_err().is_validation());
    }

    async fn run(store: &MemoryStore, script: &str) -> String {
        let temp_dir = TempDir::new().unwrap();
        let settings = Settings::default();
        let audit = AuditLogger::new(temp_dir.path().join("audit.log"));
        let ctx = CliContext::new(store, &settings, &audit);

        let mut out = Vec::new();
        run_shell(&ctx, script.as_bytes(), &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    #[tokio::test]
    async fn test_shell_runs_commands_until_exit() {
        let store = MemoryStore::new();
        let script = "trip create Paris --start 2026-07-01\n\
                      activity add Paris \"Eiffel Tower\" --cost 50 --category sightseeing --at \"2026-07-01 10:00\"\n\
                      exit\n\
                      trip create Rome --start 2026-09-10\n";

        let output = run(&store, script).await;
        assert!(output.contains("Created trip: Paris"));
        assert!(output.contains("Added activity to Paris: Eiffel Tower"));
        assert!(!output.contains("Rome"));

        let db = store.load().unwrap();
        assert_eq!(db.len(), 1);
        assert_eq!(db.trips[0].activities.len(), 1);
        assert_eq!(db.trips[0].activities[0].name, "Eiffel Tower");
    }

    #[tokio::test]
    async fn test_shell_continues_after_errors() {
        let store = MemoryStore::new();
        let script = "budget total Atlantis\n\
                      trip create Paris --start not-a-date\n\
                      frobnicate\n\
                      trip create Paris --start 2026-07-01\n\
                      budget total Paris\n\
                      quit\n";

        let output = run(&store, script).await;

        assert!(output.contains("Error: Trip not found: Atlantis"));
        assert!(output.contains("Error: Validation error: Invalid date 'not-a-date'"));
        assert!(output.contains("frobnicate"));
        assert!(output.contains("Total cost for Paris: $0.00"));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_shell_stops_at_end_of_input() {
        let store = MemoryStore::new();
        let output = run(&store, "trip create Oslo --start 2026-05-01").await;

        assert!(output.starts_with("Trip planner shell."));
        assert!(output.contains("Created trip: Oslo"));
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
