//! Tests for lookup response parsing.

use super::*;
use crate::vehicle::VehicleRecord;

const FOUND: &str = r#"{
    "vehicle_info": {"year": 2003, "make": "Honda", "model": "Accord", "trim": "EX", "vin": "1HGCM82633A004352"},
    "vehicle_sales": {"price": "4500"},
    "vehicle_seller": {"firstname": "John", "lastname": "Smith"},
    "vehicle_purchaser": {"firstname": "Jane", "lastname": "Doe"}
}"#;

mod parse {
    use super::*;

    #[test]
    fn error_key_means_not_found() {
        let outcome = parse_response(br#"{"error": "No vehicle found"}"#).unwrap();

        assert_eq!(outcome, LookupOutcome::NotFound);
        assert_eq!(outcome.into_found(), None);
    }

    #[test]
    fn error_key_wins_even_alongside_data() {
        let body = br#"{"error": null, "vehicle_info": {}}"#;

        assert_eq!(parse_response(body).unwrap(), LookupOutcome::NotFound);
    }

    #[test]
    fn found_record_parses_all_sections() {
        let detail = parse_response(FOUND.as_bytes()).unwrap().into_found().unwrap();

        assert_eq!(detail.vehicle.year.as_deref(), Some("2003"));
        assert_eq!(detail.vehicle.make.as_deref(), Some("Honda"));
        assert_eq!(detail.vehicle.vin.as_deref(), Some("1HGCM82633A004352"));
        assert_eq!(detail.sale.price.as_deref(), Some("4500"));
        assert_eq!(detail.seller, Party::new("John", "Smith"));
        assert_eq!(detail.purchaser, Party::new("Jane", "Doe"));
    }

    #[test]
    fn numeric_price_becomes_text() {
        let body = br#"{
            "vehicle_info": {"vin": "X"},
            "vehicle_sales": {"price": 4500.5},
            "vehicle_seller": {"firstname": "", "lastname": ""}
        }"#;
        let detail = parse_response(body).unwrap().into_found().unwrap();

        assert_eq!(detail.sale.price.as_deref(), Some("4500.5"));
    }

    #[test]
    fn missing_purchaser_defaults_to_empty_names() {
        let body = br#"{
            "vehicle_info": {"vin": "X"},
            "vehicle_sales": {"price": null},
            "vehicle_seller": {"firstname": null, "lastname": null}
        }"#;
        let detail = parse_response(body).unwrap().into_found().unwrap();

        assert_eq!(detail.purchaser.first_name(), "");
        assert_eq!(detail.purchaser.last_name(), "");
        assert_eq!(detail.sale.price, None);
    }

    #[test]
    fn missing_required_section_is_malformed() {
        let body = br#"{"vehicle_info": {"vin": "X"}, "vehicle_sales": {"price": 1}}"#;

        assert!(matches!(
            parse_response(body),
            Err(LookupError::MalformedResponse(_))
        ));
    }

    #[test]
    fn nested_object_in_scalar_field_is_malformed() {
        let body = br#"{
            "vehicle_info": {"vin": {"nested": true}},
            "vehicle_sales": {},
            "vehicle_seller": {}
        }"#;

        assert!(matches!(
            parse_response(body),
            Err(LookupError::MalformedResponse(_))
        ));
    }

    #[test]
    fn non_json_body_is_invalid_json() {
        assert!(matches!(
            parse_response(b"<html>Server Error</html>"),
            Err(LookupError::InvalidJson(_))
        ));
    }

    #[test]
    fn json_array_is_invalid_json() {
        assert!(matches!(
            parse_response(b"[]"),
            Err(LookupError::InvalidJson(_))
        ));
    }
}

mod into_vehicle {
    use super::*;

    fn detail_with_seller(first: Option<&str>, last: Option<&str>) -> DetailRecord {
        DetailRecord {
            seller: Party {
                first_name: first.map(str::to_string),
                last_name: last.map(str::to_string),
            },
            ..DetailRecord::default()
        }
    }

    #[test]
    fn found_detail_becomes_full_record_without_run_number() {
        let detail = parse_response(FOUND.as_bytes()).unwrap().into_found().unwrap();
        let record = VehicleRecord::from(detail);

        assert_eq!(record.run_number(), None);
        assert_eq!(record.vin(), Some("1HGCM82633A004352"));
        assert_eq!(record.description(), "2003 Honda Accord EX");
        assert_eq!(record.sale_price(), Some("4500"));
        assert_eq!(record.seller(), Some("John Smith"));
    }

    #[test]
    fn empty_seller_names_become_private_seller() {
        let record = VehicleRecord::from(detail_with_seller(Some(""), Some("")));

        assert_eq!(record.seller(), Some("Private Seller"));
    }

    #[test]
    fn null_seller_names_become_private_seller() {
        let record = VehicleRecord::from(detail_with_seller(None, None));

        assert_eq!(record.seller(), Some("Private Seller"));
    }

    #[test]
    fn first_name_only_seller_is_not_private() {
        let record = VehicleRecord::from(detail_with_seller(Some("John"), Some("")));

        assert_eq!(record.seller(), Some("John"));
    }
}
