//! Serde roundtrip and JsonSchema validation tests for the persisted and wire types.

use chrono::Utc;
use lex_core::api::*;
use lex_core::menu::{MenuDocument, MenuEntry};
use lex_core::page::{PageContent, PageUpdate};
use lex_core::sync::*;
use schemars::schema_for;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn firm_menu() -> Vec<MenuEntry> {
    vec![
        MenuEntry::new("home", "Home", "/", 1),
        MenuEntry::new("practice", "Practice Areas", "/practice-areas/", 2).with_children(vec![
            MenuEntry::new("family", "Family Law", "/practice-areas/family/", 1),
            MenuEntry::new("labor", "Labor Law", "/practice-areas/labor/", 2),
        ]),
        MenuEntry::new("contact", "Contact", "/contact/", 3),
    ]
}

roundtrip_and_validate!(
    menu_document_roundtrip,
    MenuDocument,
    MenuDocument {
        main_menu: firm_menu(),
        last_updated: Some(Utc::now()),
        last_synced_at: None,
    }
);

roundtrip_and_validate!(
    sync_report_roundtrip,
    SyncReport,
    SyncReport::from_discrepancies(
        vec![
            MenuDiscrepancy::new(DiscrepancyKind::TitleMismatch, "team", "Title differs")
                .with_values("Team", "Our Team"),
            MenuDiscrepancy::new(DiscrepancyKind::ChildrenCountMismatch, "practice", "")
                .with_values(3usize, 2usize),
        ],
        3,
        3,
        Utc::now(),
    )
);

roundtrip_and_validate!(
    menu_response_roundtrip,
    MenuResponse,
    MenuResponse {
        document: MenuDocument::new(firm_menu()),
        sync_status: Some(SyncSummary {
            is_in_sync: true,
            issue_count: 0,
            last_checked: Utc::now(),
        }),
    }
);

roundtrip_and_validate!(
    sync_response_roundtrip,
    SyncResponse,
    SyncResponse {
        success: true,
        message: "Added 1 item".into(),
        added_items: vec![MenuEntry::new("about", "About Us", "/about/", 2)],
    }
);

roundtrip_and_validate!(
    page_content_roundtrip,
    PageContent,
    PageContent {
        title: "Cohen & Levi | Law Office".into(),
        h1: "Cohen & Levi".into(),
        meta_description: "Boutique litigation firm in Tel Aviv".into(),
        main_content: "<section data-region=\"hero\"></section>".into(),
    }
);

roundtrip_and_validate!(
    page_update_roundtrip,
    PageUpdate,
    PageUpdate {
        h1: Some("משרד עורכי דין".into()),
        ..PageUpdate::default()
    }
);

#[test]
fn menu_document_schema_rejects_missing_main_menu() {
    let schema = serde_json::to_value(schema_for!(MenuDocument)).unwrap();
    let errors = validate_against_schema(&schema, &serde_json::json!({"menu": []}));
    assert!(!errors.is_empty());
}
