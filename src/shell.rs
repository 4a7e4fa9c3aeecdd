//! Interactive shell: the menu loop over the catalog.
//!
//! The shell owns the catalog and the ID counter and is generic over its
//! input/output streams, so a session can run over real stdin/stdout or over
//! in-memory buffers in tests. One handler runs to completion per loop turn;
//! end-of-input anywhere terminates the session gracefully.

use std::io::{BufRead, Write};

use crate::{
    catalog::Catalog,
    error::{AppError, AppResult},
    models::Book,
};

const MENU: &str = "\
------ Library System ------
1. Add new book
2. List all books
3. Search by title
4. Filter by genre
5. Remove book by ID
0. Exit";

/// Outcome of one handled command: keep looping or end the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    catalog: Catalog,
    // Next ID to hand out. Monotonic; removals never free an ID for reuse.
    next_id: u32,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(catalog: Catalog, input: R, output: W) -> Self {
        Self {
            catalog,
            next_id: 1,
            input,
            output,
        }
    }

    /// The session's state, for inspection after `run` returns.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run the menu loop until the exit command or end of input.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                tracing::info!("End of input, closing session");
                return Ok(());
            };

            let flow = match line.trim() {
                "1" => self.add_book()?,
                "2" => self.list_books()?,
                "3" => self.search_books()?,
                "4" => self.filter_books()?,
                "5" => self.remove_book()?,
                "0" => {
                    tracing::info!("Exit requested");
                    Flow::Quit
                }
                other => {
                    tracing::debug!("Unrecognized menu option: {:?}", other);
                    writeln!(self.output, "Invalid option.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn show_menu(&mut self) -> AppResult<()> {
        writeln!(self.output)?;
        writeln!(self.output, "{MENU}")?;
        write!(self.output, "Choose an option: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn add_book(&mut self) -> AppResult<Flow> {
        writeln!(self.output)?;
        let Some(title) = self.prompt("Title: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(author) = self.prompt("Author: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(genre) = self.prompt("Genre: ")? else {
            return Ok(Flow::Quit);
        };

        let id = self.next_id;
        self.next_id += 1;
        self.catalog.add(Book::new(id, title, author, genre));
        tracing::debug!("Book added: id={}", id);
        writeln!(self.output, "Book added.")?;
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> AppResult<Flow> {
        writeln!(self.output)?;
        if self.catalog.is_empty() {
            writeln!(self.output, "The library is empty.")?;
        } else {
            for book in self.catalog.list_all() {
                writeln!(self.output, "{book}")?;
            }
        }
        tracing::debug!("Listed {} book(s)", self.catalog.len());
        Ok(Flow::Continue)
    }

    fn search_books(&mut self) -> AppResult<Flow> {
        writeln!(self.output)?;
        let Some(keyword) = self.prompt("Enter keyword in title: ")? else {
            return Ok(Flow::Quit);
        };
        let matches = self.catalog.search_by_title(&keyword);
        tracing::debug!("Title search {:?}: {} match(es)", keyword, matches.len());
        // No matches prints nothing; only the list view has an empty message.
        for book in matches {
            writeln!(self.output, "{book}")?;
        }
        Ok(Flow::Continue)
    }

    fn filter_books(&mut self) -> AppResult<Flow> {
        writeln!(self.output)?;
        let Some(genre) = self.prompt("Enter genre to filter: ")? else {
            return Ok(Flow::Quit);
        };
        let matches = self.catalog.filter_by_genre(&genre);
        tracing::debug!("Genre filter {:?}: {} match(es)", genre, matches.len());
        for book in matches {
            writeln!(self.output, "{book}")?;
        }
        Ok(Flow::Continue)
    }

    fn remove_book(&mut self) -> AppResult<Flow> {
        writeln!(self.output)?;
        let Some(raw) = self.prompt("Enter book ID to remove: ")? else {
            return Ok(Flow::Quit);
        };

        match parse_book_id(&raw) {
            Ok(id) => {
                if self.catalog.remove_by_id(id) {
                    tracing::debug!("Book removed: id={}", id);
                    writeln!(self.output, "Book removed.")?;
                } else {
                    tracing::debug!("Book not found: id={}", id);
                    writeln!(self.output, "Book not found.")?;
                }
            }
            Err(err) => {
                // Recoverable: report and return to the menu, state untouched.
                tracing::debug!("Malformed book ID input: {:?}", raw);
                writeln!(self.output, "{err}")?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Write a prompt without a newline, flush, and read the reply.
    /// `None` means end of input.
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Read one line, stripped of its terminator but otherwise as entered.
    /// `None` means end of input.
    fn read_line(&mut self) -> AppResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }
}

fn parse_book_id(input: &str) -> AppResult<u32> {
    input
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidBookId {
            input: input.trim().to_string(),
        })
}
