//! Name resolution and hierarchy tests

use crate::utils::{ARRAY_TYPE, BAR, FOO, FOO_INTERFACE, MY_CLASS, NS, TYPE, fixture_table};
use doctype_metadata::{MetadataError, SymbolTable};
use doctype_types::{NameResolver, SymbolOracle, TypeSystem};
use serde_json::json;

mod imports {
    use super::*;

    #[test]
    fn aliases_match_case_insensitively() {
        let table = fixture_table();
        let resolver = table.resolver(MY_CLASS).unwrap();
        assert_eq!(resolver.resolve("arraytype").unwrap(), ARRAY_TYPE);
        assert_eq!(resolver.resolve("TYPE").unwrap(), TYPE);
    }

    #[test]
    fn unaliased_names_are_namespace_relative() {
        let table = fixture_table();
        let resolver = table.resolver(MY_CLASS).unwrap();
        assert_eq!(resolver.namespace(), NS);
        assert_eq!(resolver.resolve("Foo").unwrap(), FOO);
        assert_eq!(
            resolver.resolve(r"Sub\Thing").unwrap(),
            format!("{NS}\\Sub\\Thing")
        );
    }

    #[test]
    fn context_resolver_drives_the_parser() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let resolver = table.resolver(MY_CLASS).unwrap();
        let parsed = types
            .type_of("ArrayType|Bar|\\Hediet\\Types\\Type", Some(resolver))
            .unwrap();
        assert_eq!(parsed.name(), format!("{BAR}|{TYPE}"));
    }
}

mod hierarchy {
    use super::*;

    #[test]
    fn oracle_answers_follow_the_manifest() {
        let table = fixture_table();
        assert!(table.class_exists(FOO));
        assert!(!table.class_exists(FOO_INTERFACE));
        assert!(table.interface_exists(FOO_INTERFACE));
        assert!(table.is_subtype_of(BAR, FOO_INTERFACE));
        assert!(!table.is_subtype_of(FOO, FOO));
        assert!(table.implements(BAR, FOO_INTERFACE));
        assert!(table.is_abstract(TYPE));
        assert!(!table.is_abstract(ARRAY_TYPE));
        assert_eq!(table.parent_of(BAR).unwrap(), Some(FOO));
        assert_eq!(table.implemented_interfaces(BAR).unwrap(), [FOO_INTERFACE]);
    }

    #[test]
    fn unknown_supertypes_are_rejected() {
        let err = SymbolTable::from_json_str(
            &json!({ "classes": [{ "name": "App\\A", "implements": ["App\\Missing"] }] })
                .to_string(),
        )
        .unwrap_err();
        assert!(matches!(err, MetadataError::UnknownSupertype { .. }));
    }

    #[test]
    fn inheritance_cycles_are_rejected() {
        let manifest = json!({
            "interfaces": [
                { "name": "App\\I", "extends": ["App\\J"] },
                { "name": "App\\J", "extends": ["App\\I"] }
            ]
        });
        let err = SymbolTable::from_json_str(&manifest.to_string()).unwrap_err();
        assert!(matches!(err, MetadataError::InheritanceCycle { .. }));
    }
}
