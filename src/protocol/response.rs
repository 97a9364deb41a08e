//! Response definitions
//!
//! One variant per operation outcome the operator can see.

use crate::catalog::{Book, BorrowOutcome, RemoveOutcome, ReturnOutcome};

/// Result of executing a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    /// Book appended
    Added,

    /// First record with the isbn deleted
    Removed,

    /// Lookup or removal found no record
    NotFound,

    /// Every record, in current order
    Listing(Vec<Book>),

    /// First matching record
    Found(Book),

    /// Collection re-sorted
    Sorted,

    /// Book checked out
    Borrowed { borrower: String },

    /// Borrower appended to the waitlist
    Queued { borrower: String },

    /// Book back on the shelf
    Returned,

    /// Book passed straight to the next waiting borrower
    HandedTo { next_borrower: String },

    /// Return had nothing to do
    AlreadyAvailable,

    /// Waitlist contents, head first
    Waitlist(Vec<String>),
}

impl From<RemoveOutcome> for Response {
    fn from(outcome: RemoveOutcome) -> Self {
        match outcome {
            RemoveOutcome::Removed => Response::Removed,
            RemoveOutcome::NotFound => Response::NotFound,
        }
    }
}

impl From<BorrowOutcome> for Response {
    fn from(outcome: BorrowOutcome) -> Self {
        match outcome {
            BorrowOutcome::Borrowed { borrower } => Response::Borrowed { borrower },
            BorrowOutcome::Queued { borrower } => Response::Queued { borrower },
        }
    }
}

impl From<ReturnOutcome> for Response {
    fn from(outcome: ReturnOutcome) -> Self {
        match outcome {
            ReturnOutcome::Returned => Response::Returned,
            ReturnOutcome::HandedTo { next_borrower } => Response::HandedTo { next_borrower },
            ReturnOutcome::NoOp => Response::AlreadyAvailable,
        }
    }
}

impl From<Option<Book>> for Response {
    fn from(found: Option<Book>) -> Self {
        match found {
            Some(book) => Response::Found(book),
            None => Response::NotFound,
        }
    }
}
