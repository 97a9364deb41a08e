//! Command definitions
//!
//! Menu entries the operator picks from, and the commands they resolve to.

/// Numbered menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum MenuChoice {
    AddBook = 1,
    RemoveBook = 2,
    DisplayBooks = 3,
    SearchByTitle = 4,
    SearchByAuthor = 5,
    SearchByIsbn = 6,
    BorrowBook = 7,
    ReturnBook = 8,
    SortByTitle = 9,
    SortByAuthor = 10,
    DisplayWaitlist = 11,
    Exit = 12,
}

/// Input field the shell must collect for a choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Author,
    Isbn,
    Borrower,
}

impl Field {
    /// Prompt shown before reading the field
    pub fn prompt(&self) -> &'static str {
        match self {
            Field::Title => "Enter book title: ",
            Field::Author => "Enter book author: ",
            Field::Isbn => "Enter book ISBN: ",
            Field::Borrower => "Enter borrower name: ",
        }
    }
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 12] = [
        MenuChoice::AddBook,
        MenuChoice::RemoveBook,
        MenuChoice::DisplayBooks,
        MenuChoice::SearchByTitle,
        MenuChoice::SearchByAuthor,
        MenuChoice::SearchByIsbn,
        MenuChoice::BorrowBook,
        MenuChoice::ReturnBook,
        MenuChoice::SortByTitle,
        MenuChoice::SortByAuthor,
        MenuChoice::DisplayWaitlist,
        MenuChoice::Exit,
    ];

    /// Look up an entry by its menu number
    pub fn from_number(number: u8) -> Option<Self> {
        Self::ALL.iter().copied().find(|choice| choice.number() == number)
    }

    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Menu label
    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddBook => "Add Book",
            MenuChoice::RemoveBook => "Remove Book",
            MenuChoice::DisplayBooks => "Display Books",
            MenuChoice::SearchByTitle => "Search Book by Title",
            MenuChoice::SearchByAuthor => "Search Book by Author",
            MenuChoice::SearchByIsbn => "Search Book by ISBN",
            MenuChoice::BorrowBook => "Borrow Book",
            MenuChoice::ReturnBook => "Return Book",
            MenuChoice::SortByTitle => "Sort Books by Title",
            MenuChoice::SortByAuthor => "Sort Books by Author",
            MenuChoice::DisplayWaitlist => "Display Waitlist",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Fields to read, in prompt order
    pub fn fields(&self) -> &'static [Field] {
        match self {
            MenuChoice::AddBook => &[Field::Title, Field::Author, Field::Isbn],
            MenuChoice::RemoveBook | MenuChoice::SearchByIsbn | MenuChoice::ReturnBook => {
                &[Field::Isbn]
            }
            MenuChoice::SearchByTitle => &[Field::Title],
            MenuChoice::SearchByAuthor => &[Field::Author],
            MenuChoice::BorrowBook => &[Field::Isbn, Field::Borrower],
            MenuChoice::DisplayBooks
            | MenuChoice::SortByTitle
            | MenuChoice::SortByAuthor
            | MenuChoice::DisplayWaitlist
            | MenuChoice::Exit => &[],
        }
    }

    /// Build the command from fields collected in `fields()` order.
    ///
    /// Returns `None` for `Exit`, which the shell handles itself, or when
    /// the wrong number of values is supplied.
    pub fn into_command(self, values: Vec<String>) -> Option<Command> {
        if values.len() != self.fields().len() {
            return None;
        }
        let mut values = values.into_iter();
        let mut next = || values.next().unwrap_or_default();

        let command = match self {
            MenuChoice::AddBook => Command::Add {
                title: next(),
                author: next(),
                isbn: next(),
            },
            MenuChoice::RemoveBook => Command::Remove { isbn: next() },
            MenuChoice::DisplayBooks => Command::List,
            MenuChoice::SearchByTitle => Command::FindByTitle { title: next() },
            MenuChoice::SearchByAuthor => Command::FindByAuthor { author: next() },
            MenuChoice::SearchByIsbn => Command::FindByIsbn { isbn: next() },
            MenuChoice::BorrowBook => Command::Borrow {
                isbn: next(),
                borrower: next(),
            },
            MenuChoice::ReturnBook => Command::Return { isbn: next() },
            MenuChoice::SortByTitle => Command::SortByTitle,
            MenuChoice::SortByAuthor => Command::SortByAuthor,
            MenuChoice::DisplayWaitlist => Command::Waitlist,
            MenuChoice::Exit => return None,
        };
        Some(command)
    }
}

/// A catalog operation requested by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        title: String,
        author: String,
        isbn: String,
    },
    Remove {
        isbn: String,
    },
    List,
    FindByTitle {
        title: String,
    },
    FindByAuthor {
        author: String,
    },
    FindByIsbn {
        isbn: String,
    },
    SortByTitle,
    SortByAuthor,
    Borrow {
        isbn: String,
        borrower: String,
    },
    Return {
        isbn: String,
    },
    Waitlist,
}

impl Command {
    /// The menu entry that produces this command
    pub fn menu_choice(&self) -> MenuChoice {
        match self {
            Command::Add { .. } => MenuChoice::AddBook,
            Command::Remove { .. } => MenuChoice::RemoveBook,
            Command::List => MenuChoice::DisplayBooks,
            Command::FindByTitle { .. } => MenuChoice::SearchByTitle,
            Command::FindByAuthor { .. } => MenuChoice::SearchByAuthor,
            Command::FindByIsbn { .. } => MenuChoice::SearchByIsbn,
            Command::SortByTitle => MenuChoice::SortByTitle,
            Command::SortByAuthor => MenuChoice::SortByAuthor,
            Command::Borrow { .. } => MenuChoice::BorrowBook,
            Command::Return { .. } => MenuChoice::ReturnBook,
            Command::Waitlist => MenuChoice::DisplayWaitlist,
        }
    }

    /// Whether executing the command can change catalog state
    pub fn is_mutating(&self) -> bool {
        !matches!(
            self,
            Command::List
                | Command::FindByTitle { .. }
                | Command::FindByAuthor { .. }
                | Command::FindByIsbn { .. }
                | Command::Waitlist
        )
    }
}
