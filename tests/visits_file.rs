//! Loads visits from files and checks them with the default rules.

use visit_rules::input::{LoadError, VisitsFile};
use visit_rules::validation::{FieldError, Pipeline};
use visit_rules::{check_visits, Rejection};

use pretty_assertions::assert_eq;

mod common;

const VISITS_TOML: &str = concat!(
    "[[visits]]\n",
    "id = 1\n",
    "pet_id = 7\n",
    "date = \"2024-01-06\"\n",
    "description = \"rabies shot\"\n",
    "\n",
    "[[visits]]\n",
    "id = 2\n",
    "pet_id = 7\n",
    "date = \"2024-01-07\"\n",
    "description = \"neutered\"\n",
    "\n",
    "[[visits]]\n",
    "pet_id = 8\n",
);

#[test]
fn test_check_toml_file() {
    let file = common::write_temp_file(".toml", VISITS_TOML);
    let visits = VisitsFile::from_path(file.path()).expect("file should be valid");

    assert_eq!(visits.len(), 3);
    assert_eq!(
        check_visits(visits.visits(), &Pipeline::visits()),
        vec![
            Rejection {
                index: 1,
                id: Some(2),
                errors: {
                    let mut errors = visit_rules::validation::Errors::new();
                    errors.push(FieldError::new(
                        "date",
                        "sunday.not.allowed",
                        "Visits on Sundays are not allowed",
                    ));
                    errors
                },
            },
            Rejection {
                index: 2,
                id: None,
                errors: {
                    let mut errors = visit_rules::validation::Errors::new();
                    errors.reject_value("date", "required", "is required");
                    errors.reject_value("description", "required", "is required");
                    errors
                },
            },
        ]
    );
}

#[test]
fn test_check_json_file() {
    let file = common::write_temp_file(
        ".json",
        r#"{ "visits": [{ "id": 5, "date": "2023-12-31", "description": "checkup" }] }"#,
    );
    let visits = VisitsFile::from_path(file.path()).expect("file should be valid");
    let rejections = check_visits(visits.visits(), &Pipeline::visits());

    assert_eq!(
        serde_json::to_value(&rejections).unwrap(),
        serde_json::json!([{
            "index": 0,
            "id": 5,
            "errors": [{
                "field": "date",
                "code": "sunday.not.allowed",
                "message": "Visits on Sundays are not allowed",
            }],
        }])
    );
}

#[test]
fn test_invalid_date_in_file() {
    let file = common::write_temp_file(".toml", "[[visits]]\ndate = \"2024-02-30\"\n");

    assert!(matches!(
        VisitsFile::from_path(file.path()),
        Err(LoadError::Toml(_))
    ));
}

#[test]
fn test_unsupported_extension() {
    let file = common::write_temp_file(".yaml", "visits: []\n");

    assert!(matches!(
        VisitsFile::from_path(file.path()),
        Err(LoadError::UnsupportedExtension { .. })
    ));
}
