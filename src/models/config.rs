use serde::Deserialize;

use crate::domain::money::MoneyFormat;

/// Configuration options for the butik service.
#[derive(Clone, Debug, Deserialize)]
pub struct ServerConfig {
    /// Path to the SQLite database file.
    pub database_url: String,
    /// Address the HTTP server binds to, e.g. `127.0.0.1:8080`.
    pub bind_address: String,
    /// Key used for the cookie session and for signing receipt links.
    pub secret_key: String,
    /// Decimal separator used when displaying prices.
    pub decimal_separator: String,
    /// Currency symbol shown in views.
    pub currency_symbol: String,
}

impl ServerConfig {
    /// The money format derived from the configured separator and symbol.
    pub fn money_format(&self) -> MoneyFormat {
        MoneyFormat {
            decimal_separator: self.decimal_separator.chars().next().unwrap_or(','),
            currency_symbol: self.currency_symbol.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_format_falls_back_to_comma() {
        let config = ServerConfig {
            database_url: "db.sqlite".into(),
            bind_address: "127.0.0.1:8080".into(),
            secret_key: "secret".into(),
            decimal_separator: String::new(),
            currency_symbol: "€".into(),
        };
        assert_eq!(config.money_format().decimal_separator, ',');
    }
}
