use crate::utils::error::{OrderError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Choices are read one word at a time, so a name with spaces could never be ordered.
pub fn validate_single_word(field_name: &str, value: &str) -> Result<()> {
    if value.trim().chars().any(char::is_whitespace) {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be a single word".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_list<T>(field_name: &str, values: &[T]) -> Result<()> {
    if values.is_empty() {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: "[]".to_string(),
            reason: "At least one entry is required".to_string(),
        });
    }
    Ok(())
}

pub fn validate_price(field_name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(OrderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Price must be a finite number of at least 0".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("menu", "menu.toml").is_ok());
        assert!(validate_path("menu", "").is_err());
        assert!(validate_path("menu", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("items[0].name", "Pizza").is_ok());
        assert!(validate_non_empty_string("items[0].name", "   ").is_err());
    }

    #[test]
    fn test_validate_single_word() {
        assert!(validate_single_word("items[0].name", "Juice").is_ok());
        assert!(validate_single_word("items[0].name", "Orange Juice").is_err());
        assert!(validate_single_word("items[0].name", "Iced\tTea").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("items[0].price", 0.0).is_ok());
        assert!(validate_price("items[0].price", 8.99).is_ok());
        assert!(validate_price("items[0].price", -0.01).is_err());
        assert!(validate_price("items[0].price", f64::NAN).is_err());
        assert!(validate_price("items[0].price", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_non_empty_list() {
        assert!(validate_non_empty_list::<u8>("items", &[]).is_err());
        assert!(validate_non_empty_list("items", &[1]).is_ok());
    }
}
