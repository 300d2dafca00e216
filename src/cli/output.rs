//! Output formatting utilities

use crate::domain::Note;

/// Format a list of notes for display, one line per note
pub fn format_note_list(notes: &[Note]) -> String {
    if notes.is_empty() {
        return "No notes found".to_string();
    }

    notes
        .iter()
        .map(|note| format!("{}  {}", note.time_added.format("%d-%m-%Y"), note.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a single note for display: title, creation time, body
pub fn format_note(note: &Note) -> String {
    format!(
        "{}\nAdded: {}\n\n{}",
        note.title,
        note.time_added.format("%d-%m-%Y %H:%M"),
        note.body
    )
}
