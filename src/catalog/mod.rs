//! Catalog Module
//!
//! In-memory record store plus the borrow/return/waitlist protocol.
//!
//! ## Responsibilities
//! - Keep book records in insertion order (until explicitly re-sorted)
//! - First-match lookup by title, author, or isbn
//! - Per-book availability: `Available` <-> `Borrowed`
//! - One global FIFO waitlist shared by every book
//!
//! ## Data Structure Choice
//! Linear scan over a `Vec<Book>` plus a `VecDeque<String>` waitlist:
//! - Duplicate isbns/titles/authors are allowed, so lookups are "first in
//!   current order", which a plain vector answers directly
//! - Stable `sort_by` keeps equal keys in their prior relative order

mod table;

pub use table::Catalog;

use std::fmt;

/// A single book record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    pub title: String,
    pub author: String,
    /// Intended-unique key. Not enforced on insert.
    pub isbn: String,
    /// `false` while borrowed
    pub available: bool,
}

impl Book {
    /// Create a new, available book
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        isbn: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            isbn: isbn.into(),
            available: true,
        }
    }

    /// Human-readable availability label
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Available"
        } else {
            "Not Available"
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Title: {}, Author: {}, ISBN: {}, Availability: {}",
            self.title,
            self.author,
            self.isbn,
            self.availability_label()
        )
    }
}

/// Outcome of removing a record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The first record with the isbn was deleted
    Removed,

    /// No record had the isbn; nothing changed
    NotFound,
}

/// Outcome of a borrow attempt
///
/// A missing isbn and a checked-out book are treated the same way: the
/// borrower is queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// The book was available and is now borrowed
    Borrowed { borrower: String },

    /// The borrower was appended to the waitlist tail
    Queued { borrower: String },
}

/// Outcome of returning a book
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnOutcome {
    /// The book is available again (waitlist was empty)
    Returned,

    /// The book went straight to the head of the waitlist and stays borrowed
    HandedTo { next_borrower: String },

    /// Book missing or already available; nothing changed
    NoOp,
}
