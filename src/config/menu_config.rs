use crate::domain::model::{Category, MenuEntry};
use crate::domain::money::Money;
use crate::domain::ports::MenuSource;
use crate::utils::error::{OrderError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_price, validate_single_word,
    Validate,
};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuConfig {
    pub menu: Option<MenuInfo>,
    #[serde(default)]
    pub items: Vec<ItemConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub name: String,
    pub price: f64,
    #[serde(default = "default_available")]
    pub available: bool,
    pub category: Category,
}

static ENV_VAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$\{([^}]+)\}").expect("invalid env var regex"));

fn default_available() -> bool {
    true
}

impl MenuConfig {
    /// 從 TOML 檔案載入菜單
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| OrderError::MenuFileError {
                path: path.as_ref().display().to_string(),
                message: e.to_string(),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析菜單
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| OrderError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${COFFEE_PRICE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證菜單內容
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_list("items", &self.items)?;

        for (i, item) in self.items.iter().enumerate() {
            let name_field = format!("items[{}].name", i);
            validate_non_empty_string(&name_field, &item.name)?;
            validate_single_word(&name_field, &item.name)?;
            validate_price(&format!("items[{}].price", i), item.price)?;
        }

        Ok(())
    }

    pub fn menu_name(&self) -> Option<&str> {
        self.menu.as_ref().map(|m| m.name.as_str())
    }
}

impl Validate for MenuConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

impl MenuSource for MenuConfig {
    fn menu_entries(&self) -> Result<Vec<MenuEntry>> {
        self.items
            .iter()
            .map(|item| {
                Ok(MenuEntry::new(
                    item.name.clone(),
                    Money::from_decimal(item.price)?,
                    item.available,
                    item.category,
                ))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_menu() {
        let toml_content = r#"
[menu]
name = "Lunch"

[[items]]
name = "Bagel"
price = 3.25
category = "food"

[[items]]
name = "Tea"
price = 1.5
available = false
category = "drink"
"#;

        let config = MenuConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.menu_name(), Some("Lunch"));

        let entries = config.menu_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].to_string(), "Food: Bagel - $3.25 (Available)");
        assert_eq!(entries[1].to_string(), "Drink: Tea - $1.5 (Not Available)");
    }

    #[test]
    fn test_env_var_substitution() {
        assert_eq!(
            MenuConfig::substitute_env_vars("price = ${MENU_TEST_UNSET_VAR}"),
            "price = ${MENU_TEST_UNSET_VAR}"
        );

        std::env::set_var("MENU_TEST_LATTE_PRICE", "3.75");

        let toml_content = r#"
[[items]]
name = "Latte"
price = ${MENU_TEST_LATTE_PRICE}
category = "drink"
"#;

        let config = MenuConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.items[0].price, 3.75);

        std::env::remove_var("MENU_TEST_LATTE_PRICE");
    }

    #[test]
    fn test_unknown_category_fails_to_parse() {
        let toml_content = r#"
[[items]]
name = "Cake"
price = 4.0
category = "dessert"
"#;

        assert!(matches!(
            MenuConfig::from_toml_str(toml_content),
            Err(OrderError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_menu_validation() {
        let empty = MenuConfig::from_toml_str("[menu]\nname = \"Empty\"\n").unwrap();
        assert!(empty.validate().is_err());

        let blank_name = MenuConfig::from_toml_str(
            "[[items]]\nname = \"  \"\nprice = 1.0\ncategory = \"food\"\n",
        )
        .unwrap();
        assert!(blank_name.validate().is_err());

        let two_words = MenuConfig::from_toml_str(
            "[[items]]\nname = \"Orange Juice\"\nprice = 3.0\ncategory = \"drink\"\n",
        )
        .unwrap();
        assert!(matches!(
            two_words.validate(),
            Err(OrderError::InvalidConfigValueError { ref field, .. }) if field == "items[0].name"
        ));

        let negative = MenuConfig::from_toml_str(
            "[[items]]\nname = \"Refund\"\nprice = -1.0\ncategory = \"food\"\n",
        )
        .unwrap();
        assert!(negative.validate().is_err());
        assert!(negative.menu_entries().is_err());
    }

    #[test]
    fn test_menu_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[menu]
name = "file-test"

[[items]]
name = "Soup"
price = 4.5
category = "food"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = MenuConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.menu_name(), Some("file-test"));
    }
}
