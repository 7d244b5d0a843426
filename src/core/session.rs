use crate::core::catalog::Catalog;
use crate::core::order::Order;
use crate::domain::model::Category;
use crate::utils::error::Result;
use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

pub const PROMPT: &str =
    "What would you like to order? (type 'done' to finish, 'exit' to leave): ";
pub const DONE_COMMAND: &str = "done";
pub const EXIT_COMMAND: &str = "exit";

/// How an accepted choice gets its order-line category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineClassification {
    /// Only the lowercase names pizza, burger, pasta, fries, soda and coffee
    /// are recognised; any other accepted choice is dropped without a message.
    #[default]
    LegacyNames,
    /// Use the category of the matched catalog entry.
    Catalog,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub classification: LineClassification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Done,
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Completed(Order),
    Aborted,
}

pub struct OrderSession<'a> {
    catalog: &'a Catalog,
    order: Order,
    state: SessionState,
    options: SessionOptions,
}

impl<'a> OrderSession<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_options(catalog, SessionOptions::default())
    }

    pub fn with_options(catalog: &'a Catalog, options: SessionOptions) -> Self {
        Self {
            catalog,
            order: Order::new(),
            state: SessionState::Running,
            options,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Applies one token of input. Once the session has left `Running`
    /// further input is ignored.
    pub fn handle_input<W: Write>(&mut self, choice: &str, out: &mut W) -> Result<SessionState> {
        if self.state != SessionState::Running {
            tracing::debug!("Ignoring '{}' after session ended", choice);
            return Ok(self.state);
        }

        match choice {
            DONE_COMMAND => {
                self.state = SessionState::Done;
            }
            EXIT_COMMAND => {
                writeln!(out, "Exiting the program.")?;
                self.state = SessionState::Aborted;
            }
            _ => self.select(choice, out)?,
        }

        Ok(self.state)
    }

    fn select<W: Write>(&mut self, choice: &str, out: &mut W) -> Result<()> {
        if !self.catalog.is_available(choice) {
            tracing::debug!("'{}' is unknown or unavailable", choice);
            writeln!(out, "Invalid choice. Please select an item from the menu.")?;
            return Ok(());
        }

        // A zero price reads as "not found", so free items can never be ordered.
        let price = self.catalog.price_of(choice);
        if price.is_zero() {
            writeln!(out, "{} is not available.", choice)?;
            return Ok(());
        }

        let category = match self.options.classification {
            LineClassification::LegacyNames => legacy_category(choice),
            LineClassification::Catalog => self.catalog.find(choice).map(|e| e.category()),
        };

        match category {
            Some(category) => {
                self.order.add_line(choice, price, category);
                tracing::debug!("Added {} '{}' at ${}", category, choice, price);
                writeln!(out, "{} added to your order.", choice)?;
            }
            None => {
                tracing::debug!("'{}' is on the menu but not a recognised item name; dropped", choice);
            }
        }

        Ok(())
    }

    /// Prints the menu, then prompts for choices until `done`, `exit` or end
    /// of input. End of input finishes the order as if `done` had been typed.
    pub fn run<R: BufRead, W: Write>(mut self, input: R, out: &mut W) -> Result<SessionOutcome> {
        tracing::info!("Starting order session with {} menu entries", self.catalog.len());
        self.catalog.display(out)?;

        let mut tokens = Tokens::new(input);
        while self.state == SessionState::Running {
            write!(out, "{}", PROMPT)?;
            out.flush()?;

            match tokens.next_token()? {
                Some(choice) => {
                    self.handle_input(&choice, out)?;
                }
                None => {
                    tracing::warn!("Input closed before 'done'; finishing the order");
                    writeln!(out)?;
                    self.state = SessionState::Done;
                }
            }
        }

        match self.state {
            SessionState::Aborted => {
                tracing::info!("Session aborted with {} unsent lines", self.order.len());
                Ok(SessionOutcome::Aborted)
            }
            _ => {
                self.order.display(out)?;
                out.flush()?;
                tracing::info!(
                    "Order completed: {} lines, total ${}",
                    self.order.len(),
                    self.order.total()
                );
                Ok(SessionOutcome::Completed(self.order))
            }
        }
    }
}

/// Exact, case-sensitive match against the built-in item names.
fn legacy_category(choice: &str) -> Option<Category> {
    match choice {
        "pizza" | "burger" | "pasta" | "fries" => Some(Category::Food),
        "soda" | "coffee" => Some(Category::Drink),
        _ => None,
    }
}

/// Whitespace-separated words from a line-oriented reader.
struct Tokens<R> {
    reader: R,
    pending: VecDeque<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            pending: VecDeque::new(),
        }
    }

    fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }

            // Invalid UTF-8 is replaced, never fatal.
            let mut line = Vec::new();
            if self.reader.read_until(b'\n', &mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&line)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}
