pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::menu_config::MenuConfig;
pub use self::core::{
    catalog::Catalog,
    order::Order,
    session::{LineClassification, OrderSession, SessionOptions, SessionOutcome, SessionState},
};
pub use domain::{
    model::{Category, MenuEntry, OrderLine},
    money::Money,
};
pub use utils::error::{OrderError, Result};
