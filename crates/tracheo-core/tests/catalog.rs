use std::collections::HashSet;

use tracheo_core::catalog::{self, field};
use tracheo_core::models::field::{FieldType, FieldValue};
use tracheo_core::models::section::SectionId;

#[test]
fn every_section_field_is_defined_in_its_own_section() {
    for section in catalog::sections() {
        for name in section.field_names {
            let def = catalog::field(name).unwrap_or_else(|| panic!("{name} missing from catalog"));
            assert_eq!(def.section, section.id, "{name} listed under the wrong section");
        }
    }
}

#[test]
fn field_ids_are_unique() {
    let mut seen = HashSet::new();
    for def in catalog::fields() {
        assert!(seen.insert(def.id), "duplicate field id {}", def.id);
    }
    let listed: usize = catalog::sections().iter().map(|s| s.field_names.len()).sum();
    assert_eq!(listed, catalog::fields().len());
}

#[test]
fn enum_fields_carry_options() {
    for def in catalog::fields() {
        match def.field_type {
            FieldType::Enum | FieldType::MultiEnum => {
                assert!(!def.options.is_empty(), "{} has no options", def.id)
            }
            FieldType::Text | FieldType::Date => assert!(def.options.is_empty()),
        }
    }
}

#[test]
fn section_ordinals_walk_the_wizard() {
    assert_eq!(SectionId::FIRST.ordinal(), 1);
    assert_eq!(SectionId::LAST.ordinal(), 8);
    assert_eq!(SectionId::Child.prev(), None);
    assert_eq!(SectionId::Services.next(), None);
    assert_eq!(SectionId::Guardian.next(), Some(SectionId::Address));
    assert_eq!(SectionId::Guardian.prev(), Some(SectionId::Birth));
    for id in SectionId::ALL {
        assert_eq!(SectionId::from_ordinal(id.ordinal()).unwrap(), id);
        assert_eq!(catalog::section(id).id, id);
    }
    assert!(SectionId::from_ordinal(0).is_err());
    assert!(SectionId::from_ordinal(9).is_err());
}

#[test]
fn empty_values_match_field_types() {
    assert_eq!(FieldType::Text.empty_value(), FieldValue::text(""));
    assert_eq!(FieldType::MultiEnum.empty_value(), FieldValue::Tags(Vec::new()));
    assert!(FieldType::Date.empty_value().is_empty());
}

#[test]
fn field_value_matching() {
    let tags = FieldValue::tags(["nurse", "other"]);
    assert!(tags.matches("other"));
    assert!(!tags.matches("mother"));
    assert!(FieldValue::text(" yes ").matches("yes"));
    assert!(FieldValue::text("   ").is_empty());
}

#[test]
fn field_values_serialize_untagged() {
    let text: FieldValue = serde_json::from_str("\"15/03/2024\"").unwrap();
    assert_eq!(text, FieldValue::text("15/03/2024"));
    let tags: FieldValue = serde_json::from_str("[\"mother\"]").unwrap();
    assert_eq!(tags, FieldValue::tags(["mother"]));
    assert_eq!(serde_json::to_string(&FieldValue::tags(["a"])).unwrap(), "[\"a\"]");
}

#[test]
fn require_field_reports_unknown_ids() {
    assert!(catalog::require_field(field::HEALTH_ID).is_ok());
    assert!(catalog::require_field("favourite_colour").is_err());
}

#[test]
fn sections_contain_exactly_their_fields() {
    for def in catalog::fields() {
        for section in catalog::sections() {
            assert_eq!(section.contains(def.id), section.id == def.section, "{}", def.id);
        }
    }
    assert!(!catalog::section(SectionId::Child).contains("nickname"));
}
