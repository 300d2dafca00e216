//! Interactive menu loop
//!
//! The default mode of the binary: prints six numbered choices and reads one
//! line per prompt. Validation and not-found errors are reported and the
//! loop continues; storage errors propagate to the caller, which terminates.
//! The loop is generic over its input/output streams so tests can drive it
//! with byte buffers.

use crate::application::NoteRepository;
use crate::cli::output::{format_note, format_note_list};
use crate::error::Result;
use crate::infrastructure::NoteStore;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
1. Add note
2. List notes
3. Read note
4. Update note
5. Delete note
6. Exit";

/// Run the menu loop on stdin/stdout until the user exits
pub fn run<S: NoteStore>(repo: &mut NoteRepository<S>) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_with(repo, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the menu loop over the given streams
pub fn run_with<S: NoteStore, R: BufRead, W: Write>(
    repo: &mut NoteRepository<S>,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    loop {
        writeln!(out, "{}", MENU)?;

        let Some(choice) = prompt(input, out, "Choose an option: ")? else {
            // End of input counts as exit
            return Ok(());
        };

        match choice.trim() {
            "1" => {
                let Some(title) = prompt(input, out, "Title: ")? else {
                    return Ok(());
                };
                let Some(body) = prompt(input, out, "Body: ")? else {
                    return Ok(());
                };
                match repo.add(&title, &body) {
                    Ok(note) => writeln!(out, "Added '{}'", note.title)?,
                    Err(e) if !e.is_fatal() => writeln!(out, "Error: {}", e)?,
                    Err(e) => return Err(e),
                }
            }
            "2" => {
                writeln!(out, "{}", format_note_list(repo.list_all()))?;
            }
            "3" => {
                let Some(query) = prompt(input, out, "Title: ")? else {
                    return Ok(());
                };
                match repo.find_by_title(&query) {
                    Some(note) => writeln!(out, "{}", format_note(note))?,
                    None => writeln!(out, "No note matches '{}'", query)?,
                }
            }
            "4" => {
                let Some(query) = prompt(input, out, "Title: ")? else {
                    return Ok(());
                };
                let Some(body) = prompt(input, out, "New body: ")? else {
                    return Ok(());
                };
                match repo.update(&query, &body) {
                    Ok(note) => writeln!(out, "Updated '{}'", note.title)?,
                    Err(e) if !e.is_fatal() => writeln!(out, "Error: {}", e)?,
                    Err(e) => return Err(e),
                }
            }
            "5" => {
                let Some(query) = prompt(input, out, "Title: ")? else {
                    return Ok(());
                };
                match repo.delete(&query) {
                    Ok(note) => writeln!(out, "Deleted '{}'", note.title)?,
                    Err(e) if !e.is_fatal() => writeln!(out, "Error: {}", e)?,
                    Err(e) => return Err(e),
                }
            }
            "6" => {
                writeln!(out, "Bye")?;
                return Ok(());
            }
            // Unrecognized choice: fall through and reprint the menu
            _ => {}
        }

        writeln!(out)?;
    }
}

/// Print a prompt and read one line. Returns `None` on end of input.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}
