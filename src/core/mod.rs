pub mod catalog;
pub mod order;
pub mod session;

pub use crate::domain::model::{Category, MenuEntry, OrderLine};
pub use crate::domain::money::Money;
pub use crate::domain::ports::MenuSource;
pub use crate::utils::error::Result;
