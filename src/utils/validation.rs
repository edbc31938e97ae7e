use crate::utils::error::{BiopaxError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BiopaxError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BiopaxError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BiopaxError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(BiopaxError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_gene_list(field_name: &str, genes: &[String]) -> Result<()> {
    if genes.is_empty() {
        return Err(BiopaxError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: String::new(),
            reason: "At least one gene symbol is required".to_string(),
        });
    }

    for gene in genes {
        if gene.trim().is_empty() {
            return Err(BiopaxError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: gene.clone(),
                reason: "Gene symbols cannot be empty or whitespace-only".to_string(),
            });
        }
        if gene.chars().any(char::is_whitespace) {
            return Err(BiopaxError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: gene.clone(),
                reason: "Gene symbols cannot contain whitespace".to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("base_url", "https://www.pathwaycommons.org/pc2").is_ok());
        assert!(validate_url("base_url", "http://localhost:8080").is_ok());
        assert!(validate_url("base_url", "").is_err());
        assert!(validate_url("base_url", "ftp://example.com").is_err());
        assert!(validate_url("base_url", "not a url").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("limit", 1, 1).is_ok());
        assert!(validate_positive_number("limit", 10, 1).is_ok());
        assert!(validate_positive_number("block_size", 0, 1).is_err());
    }

    #[test]
    fn test_validate_gene_list() {
        let genes = vec!["BRAF".to_string(), "MAP2K1".to_string()];
        assert!(validate_gene_list("genes", &genes).is_ok());

        assert!(validate_gene_list("genes", &[]).is_err());
        assert!(validate_gene_list("genes", &[" ".to_string()]).is_err());
        assert!(validate_gene_list("genes", &["BRAF V600E".to_string()]).is_err());
    }
}
