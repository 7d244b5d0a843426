use crate::domain::model::{Category, OrderLine};
use crate::domain::money::Money;
use std::io::Write;

/// The customer's selections, in the order they were made.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends without checking the catalog; callers confirm availability first.
    pub fn add_line(&mut self, name: impl Into<String>, price: Money, category: Category) {
        self.lines.push(OrderLine {
            name: name.into(),
            price,
            category,
        });
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Recomputed on every call.
    pub fn total(&self) -> Money {
        self.lines.iter().map(|line| line.price).sum()
    }

    pub fn display<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Your Order:")?;
        for line in &self.lines {
            writeln!(out, "{}", line)?;
        }
        writeln!(out, "Total: ${}", self.total())
    }
}
