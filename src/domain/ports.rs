use crate::domain::model::MenuEntry;
use crate::utils::error::Result;

/// Supplies the entries a catalog is populated with at startup.
pub trait MenuSource {
    fn menu_entries(&self) -> Result<Vec<MenuEntry>>;
}
