pub mod menu_config;

#[cfg(feature = "cli")]
use crate::core::catalog::Catalog;
#[cfg(feature = "cli")]
use crate::core::session::{LineClassification, SessionOptions};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use menu_config::MenuConfig;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "menu-order")]
#[command(about = "Take a restaurant order interactively and print the total")]
pub struct CliConfig {
    /// TOML menu file to use instead of the built-in menu
    #[arg(long)]
    pub menu: Option<String>,

    /// Take each order line's category from the menu instead of the built-in item names
    #[arg(long)]
    pub classify_by_catalog: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 依設定建立菜單：有指定檔案就載入，否則使用內建菜單
    pub fn build_catalog(&self) -> Result<Catalog> {
        match &self.menu {
            Some(path) => {
                let config = MenuConfig::from_file(path)?;
                config.validate()?;
                Catalog::from_source(&config)
            }
            None => Ok(Catalog::default_menu()),
        }
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            classification: if self.classify_by_catalog {
                LineClassification::Catalog
            } else {
                LineClassification::LegacyNames
            },
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.menu {
            validate_path("menu", path)?;
        }
        Ok(())
    }
}
