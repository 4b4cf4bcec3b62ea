//! Dataset and configuration file loading tests

use std::io::Write;

use northwind_reports::{ConfigError, Dataset, DatasetError, ReportConfig};
use rust_decimal::Decimal;
use tempfile::{Builder, NamedTempFile};

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

mod dataset_file_tests {
    use super::*;

    const YAML_DATASET: &str = r#"
customers:
  - id: WOLZA
    company_name: Wolski Zajazd
    city: Warszawa
    postal_code: 01-012
    country: Poland
    phone: (26) 642-7012
    orders:
      - id: 10374
        order_date: 1996-12-05
        total: "459.00"
      - id: 10611
        order_date: 1997-07-25
        total: "808.00"
products:
  - id: 1
    name: Chai
    category: Beverages
    unit_price: "18.00"
    units_in_stock: 39
suppliers:
  - name: Exotic Liquids
    city: London
    country: UK
"#;

    #[test]
    fn test_load_yaml_file() {
        let file = temp_file(".yaml", YAML_DATASET);
        let dataset = Dataset::from_path(file.path()).unwrap();

        assert_eq!(dataset.customers().len(), 1);
        let wolza = dataset.customer("WOLZA").unwrap();
        assert_eq!(wolza.total_sum(), Decimal::new(126700, 2));
        assert_eq!(wolza.region, None);
        assert_eq!(dataset.products()[0].unit_price.to_string(), "18.00");
        assert_eq!(dataset.suppliers()[0].name, "Exotic Liquids");
    }

    #[test]
    fn test_load_json_file() {
        let json = r#"{
            "customers": [
                { "id": "ALFKI", "city": "Berlin", "country": "Germany",
                  "orders": [ { "order_date": "2023-01-15", "total": 4000 } ] }
            ]
        }"#;
        let file = temp_file(".json", json);
        let dataset = Dataset::from_path(file.path()).unwrap();

        assert_eq!(dataset.order_count(), 1);
        assert!(dataset.products().is_empty());
        assert!(dataset.suppliers().is_empty());
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_file(".csv", "id,city\n");
        let err = Dataset::from_path(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::UnsupportedFormat(ext) if ext == "csv"));
    }

    #[test]
    fn test_missing_file() {
        let err = Dataset::from_path("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn test_invalid_date_is_load_failure() {
        let json = r#"{ "customers": [ { "id": "BAD", "city": "X", "country": "Y",
            "orders": [ { "order_date": "1997-02-30", "total": 1 } ] } ] }"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_negative_total_is_load_failure() {
        let json = r#"{ "customers": [ { "id": "NEG", "city": "X", "country": "Y",
            "orders": [ { "order_date": "1997-02-03", "total": "-5.00" } ] } ] }"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(_)));
    }
}

mod config_file_tests {
    use super::*;

    #[test]
    fn test_load_config_file() {
        let file = temp_file(
            ".toml",
            r#"
total_threshold = 1000
threshold_multiplier = 2
threshold_iterations = 2
order_threshold = "2500.50"

[price_bands]
cheap_below = 10
expensive_from = 100
"#,
        );
        let config = ReportConfig::from_path(file.path()).unwrap();

        assert_eq!(
            config.total_thresholds(),
            vec![Decimal::from(1000), Decimal::from(2000)]
        );
        assert_eq!(config.order_threshold, Decimal::new(250050, 2));
        assert_eq!(config.price_bands.expensive_from, Decimal::from(100));
    }

    #[test]
    fn test_malformed_config_file() {
        let file = temp_file(".toml", "total_threshold = [1, 2");
        let err = ReportConfig::from_path(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let err = ReportConfig::from_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
