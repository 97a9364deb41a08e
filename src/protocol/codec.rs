//! Protocol codec
//!
//! Text encoding for the operator session: reading bounded input lines,
//! parsing menu choices, and rendering responses.
//!
//! ## Output Format
//!
//! ```text
//! Title: <title>, Author: <author>, ISBN: <isbn>, Availability: <Available|Not Available>
//! ```
//!
//! Add, remove, and sort print nothing on success. Every other response is
//! one line, except listings and the waitlist which print one line per entry.

use std::io::{BufRead, Read, Write};

use super::{Field, MenuChoice, Response};
use crate::error::{LibraryError, Result};

/// Menu heading
pub const MENU_TITLE: &str = "Library Management System";

/// Printed when the operator picks Exit
pub const EXIT_MESSAGE: &str = "Exiting system.";

/// Printed for an unknown menu choice
pub const INVALID_CHOICE_MESSAGE: &str = "Invalid choice. Please try again.";

// =============================================================================
// Input
// =============================================================================

/// Read one line, without its terminator.
///
/// Returns `Ok(None)` at end of input. A line longer than `max_len` bytes is
/// consumed in full and reported as `LibraryError::Input`, so the next read
/// starts on the following line.
pub fn read_line<R: BufRead>(reader: &mut R, max_len: usize) -> Result<Option<String>> {
    let mut buf = Vec::new();
    // Room for the content plus "\r\n"
    let limit = (max_len as u64).saturating_add(2);
    let read = reader.by_ref().take(limit).read_until(b'\n', &mut buf)?;
    if read == 0 {
        return Ok(None);
    }

    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    } else if buf.len() > max_len {
        discard_rest_of_line(reader)?;
    }

    if buf.len() > max_len {
        return Err(LibraryError::Input(format!(
            "line exceeds {} bytes",
            max_len
        )));
    }

    String::from_utf8(buf)
        .map(Some)
        .map_err(|e| LibraryError::Input(format!("line is not valid UTF-8: {}", e)))
}

fn discard_rest_of_line<R: BufRead>(reader: &mut R) -> Result<()> {
    loop {
        let available = reader.fill_buf()?;
        if available.is_empty() {
            return Ok(());
        }
        match available.iter().position(|&b| b == b'\n') {
            Some(newline) => {
                reader.consume(newline + 1);
                return Ok(());
            }
            None => {
                let len = available.len();
                reader.consume(len);
            }
        }
    }
}

/// Parse a menu choice (`1..=12`, surrounding whitespace ignored)
pub fn parse_choice(line: &str) -> Result<MenuChoice> {
    let trimmed = line.trim();
    trimmed
        .parse::<u8>()
        .ok()
        .and_then(MenuChoice::from_number)
        .ok_or_else(|| LibraryError::Input(format!("unknown menu choice {:?}", trimmed)))
}

/// Normalize a raw field value.
///
/// ISBNs are single tokens and lose surrounding whitespace; titles, authors,
/// and borrower names are kept as typed.
pub fn normalize_field(field: Field, raw: String) -> String {
    match field {
        Field::Isbn => raw.trim().to_string(),
        Field::Title | Field::Author | Field::Borrower => raw,
    }
}

// =============================================================================
// Output
// =============================================================================

/// Menu lines, heading first
pub fn menu_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(MenuChoice::ALL.len() + 2);
    lines.push(String::new());
    lines.push(MENU_TITLE.to_string());
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|choice| format!("{}. {}", choice.number(), choice.label())),
    );
    lines
}

/// Render a response as output lines
pub fn render_response(response: &Response) -> Vec<String> {
    match response {
        Response::Added | Response::Removed | Response::Sorted => Vec::new(),
        Response::NotFound => vec!["Book not found.".to_string()],
        Response::Listing(books) => books.iter().map(|book| book.to_string()).collect(),
        Response::Found(book) => vec![book.to_string()],
        Response::Borrowed { borrower } => vec![format!("Book borrowed by {}.", borrower)],
        Response::Queued { .. } => vec![
            "Book is not available. You have been added to the waitlist.".to_string(),
        ],
        Response::Returned => vec!["Book returned.".to_string()],
        Response::HandedTo { next_borrower } => vec![format!(
            "Book returned. Next borrower is {}.",
            next_borrower
        )],
        Response::AlreadyAvailable => {
            vec!["Book is already available or not found.".to_string()]
        }
        Response::Waitlist(names) => {
            let mut lines = Vec::with_capacity(names.len() + 1);
            lines.push("Waitlist:".to_string());
            lines.extend(names.iter().cloned());
            lines
        }
    }
}

/// Write the menu
pub fn write_menu<W: Write>(writer: &mut W) -> Result<()> {
    write_lines(writer, &menu_lines())
}

/// Write a rendered response
pub fn write_response<W: Write>(writer: &mut W, response: &Response) -> Result<()> {
    write_lines(writer, &render_response(response))
}

/// Write a prompt (no newline) and flush so it shows before input is read
pub fn write_prompt<W: Write>(writer: &mut W, prompt: &str) -> Result<()> {
    writer.write_all(prompt.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Write lines, each newline-terminated, then flush
pub fn write_lines<W: Write>(writer: &mut W, lines: &[String]) -> Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}
