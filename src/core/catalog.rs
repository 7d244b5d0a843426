use crate::domain::model::{Category, MenuEntry};
use crate::domain::money::Money;
use crate::domain::ports::MenuSource;
use crate::utils::error::Result;
use std::io::Write;

/// The menu, in insertion order.
///
/// Names are not required to be unique; lookups resolve to the first entry
/// whose name matches under ASCII case folding.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<MenuEntry>,
    total_items: usize,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The six entries the restaurant opens with.
    pub fn default_menu() -> Self {
        let mut catalog = Self::new();
        catalog.add_entry("Pizza", Money::from_cents(899), true, Category::Food);
        catalog.add_entry("Burger", Money::from_cents(599), true, Category::Food);
        catalog.add_entry("Pasta", Money::from_cents(799), false, Category::Food);
        catalog.add_entry("Fries", Money::from_cents(299), true, Category::Food);
        catalog.add_entry("Soda", Money::from_cents(199), true, Category::Drink);
        catalog.add_entry("Coffee", Money::from_cents(249), true, Category::Drink);
        catalog
    }

    pub fn from_source<S: MenuSource>(source: &S) -> Result<Self> {
        let mut catalog = Self::new();
        for entry in source.menu_entries()? {
            catalog.push(entry);
        }
        tracing::debug!("Loaded {} menu entries", catalog.len());
        Ok(catalog)
    }

    pub fn add_entry(
        &mut self,
        name: impl Into<String>,
        price: Money,
        available: bool,
        category: Category,
    ) {
        self.push(MenuEntry::new(name, price, available, category));
    }

    fn push(&mut self, entry: MenuEntry) {
        self.entries.push(entry);
        self.total_items += 1;
    }

    /// Number of entries ever added to this catalog.
    pub fn total_item_count(&self) -> usize {
        self.total_items
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&MenuEntry> {
        self.entries
            .iter()
            .find(|entry| entry.name().eq_ignore_ascii_case(name))
    }

    /// Unknown names are simply unavailable.
    pub fn is_available(&self, name: &str) -> bool {
        self.find(name).map(MenuEntry::is_available).unwrap_or(false)
    }

    /// Unknown names cost nothing, which is indistinguishable from a free item.
    pub fn price_of(&self, name: &str) -> Money {
        self.find(name).map(MenuEntry::price).unwrap_or(Money::ZERO)
    }

    /// Returns whether an entry matched.
    pub fn set_availability(&mut self, name: &str, available: bool) -> bool {
        match self
            .entries
            .iter_mut()
            .find(|entry| entry.name().eq_ignore_ascii_case(name))
        {
            Some(entry) => {
                entry.set_availability(available);
                true
            }
            None => false,
        }
    }

    pub fn display<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Menu:")?;
        for entry in &self.entries {
            writeln!(out, "{}", entry)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_menu_order_and_count() {
        let catalog = Catalog::default_menu();
        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["Pizza", "Burger", "Pasta", "Fries", "Soda", "Coffee"]);
        assert_eq!(catalog.total_item_count(), 6);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = Catalog::default_menu();
        assert_eq!(catalog.is_available("PIZZA"), catalog.is_available("pizza"));
        assert!(catalog.is_available("pIzZa"));
        assert_eq!(catalog.price_of("COFFEE"), Money::from_cents(249));
        assert!(!catalog.is_available("pasta"));
        assert_eq!(catalog.price_of("Pasta"), Money::from_cents(799));
    }

    #[test]
    fn test_unknown_names() {
        let catalog = Catalog::default_menu();
        assert!(!catalog.is_available("banana"));
        assert_eq!(catalog.price_of("banana"), Money::ZERO);
        assert!(catalog.find("piz").is_none());
    }

    #[test]
    fn test_first_match_wins() {
        let mut catalog = Catalog::new();
        catalog.add_entry("Tea", Money::from_cents(100), false, Category::Drink);
        catalog.add_entry("TEA", Money::from_cents(300), true, Category::Drink);

        assert!(!catalog.is_available("tea"));
        assert_eq!(catalog.price_of("tea"), Money::from_cents(100));
        assert_eq!(catalog.total_item_count(), 2);
    }

    #[test]
    fn test_set_availability() {
        let mut catalog = Catalog::default_menu();
        assert!(catalog.set_availability("pasta", true));
        assert!(catalog.is_available("Pasta"));
        assert!(!catalog.set_availability("banana", true));
    }

    #[test]
    fn test_display() {
        let catalog = Catalog::default_menu();
        let mut out = Vec::new();
        catalog.display(&mut out).unwrap();

        let expected = "Menu:\n\
            Food: Pizza - $8.99 (Available)\n\
            Food: Burger - $5.99 (Available)\n\
            Food: Pasta - $7.99 (Not Available)\n\
            Food: Fries - $2.99 (Available)\n\
            Drink: Soda - $1.99 (Available)\n\
            Drink: Coffee - $2.49 (Available)\n";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
