//! Protocol Module
//!
//! The operator-facing vocabulary of the catalog.
//!
//! ## Session Flow
//! ```text
//! ┌──────────┐  choice (1-12)  ┌────────────┐  fields  ┌─────────┐
//! │   Menu   │ ──────────────► │ MenuChoice │ ───────► │ Command │
//! └──────────┘                 └────────────┘          └────┬────┘
//!                                                           │ Library::execute
//!                                                           ▼
//!                                   rendered lines ◄── ┌──────────┐
//!                                                      │ Response │
//!                                                      └──────────┘
//! ```
//!
//! ### Menu Choices
//! 1 Add, 2 Remove, 3 Display, 4-6 Search by title/author/ISBN,
//! 7 Borrow, 8 Return, 9-10 Sort by title/author, 11 Waitlist, 12 Exit

mod command;
mod response;
mod codec;

pub use command::{Command, Field, MenuChoice};
pub use response::Response;
pub use codec::{
    menu_lines, normalize_field, parse_choice, read_line, render_response, write_lines,
    write_menu, write_prompt, write_response, EXIT_MESSAGE, INVALID_CHOICE_MESSAGE, MENU_TITLE,
};
