use crate::domain::money::Money;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Food,
    Drink,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Drink => "Drink",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One sellable item on the menu. Only availability changes after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    name: String,
    price: Money,
    available: bool,
    category: Category,
}

impl MenuEntry {
    pub fn new(name: impl Into<String>, price: Money, available: bool, category: Category) -> Self {
        Self {
            name: name.into(),
            price,
            available,
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn set_availability(&mut self, available: bool) {
        self.available = available;
    }
}

impl fmt::Display for MenuEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} - ${} ({})",
            self.category,
            self.name,
            self.price,
            if self.available {
                "Available"
            } else {
                "Not Available"
            }
        )
    }
}

/// A selected item, copied out of the catalog at the time it was ordered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub name: String,
    pub price: Money,
    pub category: Category,
}

impl fmt::Display for OrderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.name, self.price)
    }
}
