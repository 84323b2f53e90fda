//! Tests for the vehicle record.

use super::*;

fn detail_record() -> VehicleRecord {
    VehicleRecord::new()
        .with_vin("1HGCM82633A004352")
        .with_year("2003")
        .with_make("Honda")
        .with_model("Accord")
        .with_trim("EX")
        .with_sale_price("4500")
        .with_seller("John Smith")
}

mod construction {
    use super::*;

    #[test]
    fn run_list_record_has_only_run_number_and_vin() {
        let record = VehicleRecord::from_run_list("42", "1HGCM82633A004352");

        assert_eq!(record.run_number(), Some("42"));
        assert_eq!(record.vin(), Some("1HGCM82633A004352"));
        assert_eq!(record.year(), None);
        assert_eq!(record.make(), None);
        assert_eq!(record.model(), None);
        assert_eq!(record.trim(), None);
        assert_eq!(record.sale_price(), None);
        assert_eq!(record.seller(), None);
    }

    #[test]
    fn default_record_is_empty() {
        assert_eq!(VehicleRecord::new(), VehicleRecord::default());
        assert_eq!(VehicleRecord::new().run_number(), None);
    }
}

mod fill_empty {
    use super::*;

    #[test]
    fn run_number_survives_merge_with_detail() {
        let mut record = VehicleRecord::from_run_list("42", "1HGCM82633A004352");
        record.fill_empty(detail_record());

        assert_eq!(record.run_number(), Some("42"));
    }

    #[test]
    fn empty_fields_are_filled_from_detail() {
        let mut record = VehicleRecord::from_run_list("42", "1HGCM82633A004352");
        record.fill_empty(detail_record());

        assert_eq!(record.year(), Some("2003"));
        assert_eq!(record.make(), Some("Honda"));
        assert_eq!(record.model(), Some("Accord"));
        assert_eq!(record.trim(), Some("EX"));
        assert_eq!(record.sale_price(), Some("4500"));
        assert_eq!(record.seller(), Some("John Smith"));
    }

    #[test]
    fn populated_fields_are_never_overwritten() {
        let mut record = VehicleRecord::from_run_list("42", "RUNLISTVIN0000001").with_make("Acura");
        record.fill_empty(detail_record().with_run_number("99"));

        assert_eq!(record.run_number(), Some("42"));
        assert_eq!(record.vin(), Some("RUNLISTVIN0000001"));
        assert_eq!(record.make(), Some("Acura"));
    }

    #[test]
    fn empty_string_counts_as_empty() {
        let mut record = VehicleRecord::from_run_list("", "1HGCM82633A004352").with_trim("");
        record.fill_empty(detail_record().with_run_number("7"));

        assert_eq!(record.run_number(), Some("7"));
        assert_eq!(record.trim(), Some("EX"));
    }

    #[test]
    fn absent_source_field_leaves_slot_untouched() {
        let mut record = VehicleRecord::from_run_list("42", "1HGCM82633A004352");
        record.fill_empty(VehicleRecord::new());

        assert_eq!(record, VehicleRecord::from_run_list("42", "1HGCM82633A004352"));
    }
}

mod derived_values {
    use super::*;

    #[test]
    fn description_joins_year_make_model_trim() {
        assert_eq!(detail_record().description(), "2003 Honda Accord EX");
    }

    #[test]
    fn description_keeps_separators_for_missing_parts() {
        let record = VehicleRecord::new().with_year("2003").with_make("Honda");

        assert_eq!(record.description(), "2003 Honda  ");
    }

    #[test]
    fn vin_suffix_is_last_six_characters() {
        assert_eq!(detail_record().vin_suffix(), "004352");
    }

    #[test]
    fn vin_suffix_of_short_vin_is_whole_vin() {
        let record = VehicleRecord::new().with_vin("ABC");

        assert_eq!(record.vin_suffix(), "ABC");
    }

    #[test]
    fn vin_suffix_of_missing_vin_is_empty() {
        assert_eq!(VehicleRecord::new().vin_suffix(), "");
    }
}

mod seller {
    use super::*;

    #[test]
    fn both_names_empty_is_private_seller() {
        assert_eq!(seller_label(Some(""), Some("")), "Private Seller");
    }

    #[test]
    fn both_names_absent_is_private_seller() {
        assert_eq!(seller_label(None, None), PRIVATE_SELLER);
    }

    #[test]
    fn both_names_are_space_joined() {
        assert_eq!(seller_label(Some("John"), Some("Smith")), "John Smith");
    }

    #[test]
    fn first_name_only_is_single_token() {
        assert_eq!(seller_label(Some("John"), Some("")), "John");
    }

    #[test]
    fn last_name_only_is_single_token() {
        assert_eq!(seller_label(None, Some("Smith")), "Smith");
    }
}
