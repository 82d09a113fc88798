use crate::utils::error::{ConfiguratorError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(ConfiguratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(ConfiguratorError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ConfiguratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConfiguratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConfiguratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 目錄來源可以是 http(s) URL 或本機路徑
pub fn is_remote_location(location: &str) -> bool {
    location.starts_with("http://") || location.starts_with("https://")
}

pub fn validate_catalog_location(field_name: &str, location: &str) -> Result<()> {
    if is_remote_location(location) {
        validate_url(field_name, location)
    } else {
        validate_path(field_name, location)
    }
}

pub fn validate_budget(field_name: &str, budget: f64) -> Result<()> {
    if !budget.is_finite() || budget <= 0.0 {
        return Err(ConfiguratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: budget.to_string(),
            reason: "Budget must be a positive amount".to_string(),
        });
    }
    Ok(())
}

pub fn validate_price(field_name: &str, price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(ConfiguratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: price.to_string(),
            reason: "Price cannot be negative".to_string(),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfiguratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(ConfiguratorError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("catalog.source", "https://example.com/components.json").is_ok());
        assert!(validate_url("catalog.source", "http://example.com").is_ok());
        assert!(validate_url("catalog.source", "").is_err());
        assert!(validate_url("catalog.source", "invalid-url").is_err());
        assert!(validate_url("catalog.source", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_catalog_location() {
        assert!(validate_catalog_location("catalog", "components.json").is_ok());
        assert!(validate_catalog_location("catalog", "https://parts.example.com/c.json").is_ok());
        assert!(validate_catalog_location("catalog", "").is_err());
        assert!(validate_catalog_location("catalog", "http://").is_err());
    }

    #[test]
    fn test_validate_budget() {
        assert!(validate_budget("budget", 500.0).is_ok());
        assert!(validate_budget("budget", 0.0).is_err());
        assert!(validate_budget("budget", -10.0).is_err());
        assert!(validate_budget("budget", f64::NAN).is_err());
        assert!(validate_budget("budget", f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("defaults.memory.price", 0.0).is_ok());
        assert!(validate_price("defaults.memory.price", -1.0).is_err());
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "16 GB DDR4").is_ok());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }
}
