//! Assignability and equality tests
//!
//! Tests covering type-to-type relations across the fixture hierarchy, and the
//! invariant that equality coincides with name equality.

use crate::utils::{ARRAY_TYPE, BAR, FOO, FOO_INTERFACE, INVOKER, MY_CLASS, TYPE, fixture_table, ty};
use doctype_types::{SymbolOracle, Type, TypeSystem};

mod object_types {
    use super::*;

    #[test]
    fn subclasses_are_assignable_to_parents() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        assert!(types.is_assignable_from(&ty(&types, TYPE), &ty(&types, ARRAY_TYPE)));
        assert!(!types.is_assignable_from(&ty(&types, ARRAY_TYPE), &ty(&types, TYPE)));
        assert!(types.is_assignable_from(&ty(&types, FOO), &ty(&types, BAR)));
    }

    #[test]
    fn interfaces_accept_implementors_transitively() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let foo_interface = ty(&types, FOO_INTERFACE);
        assert!(types.is_assignable_from(&foo_interface, &ty(&types, FOO)));
        assert!(types.is_assignable_from(&foo_interface, &ty(&types, BAR)));
        assert!(!types.is_assignable_from(&ty(&types, FOO), &foo_interface));
        assert!(!types.is_assignable_from(&foo_interface, &ty(&types, MY_CLASS)));
    }

    #[test]
    fn object_accepts_object_types_and_their_unions() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        assert!(types.is_assignable_from(&Type::object(), &ty(&types, FOO_INTERFACE)));
        let classes = ty(&types, &format!("{FOO}|{TYPE}"));
        assert!(types.is_assignable_from(&Type::object(), &classes));
        let nullable = types.nullable_of(ty(&types, FOO));
        assert!(!types.is_assignable_from(&Type::object(), &nullable));
    }

    #[test]
    fn callable_accepts_invocable_object_types() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        assert!(types.is_assignable_from(&Type::callable(), &ty(&types, INVOKER)));
        assert!(!types.is_assignable_from(&Type::callable(), &ty(&types, FOO)));
        assert!(!types.is_assignable_from(&Type::callable(), &Type::string()));
    }
}

mod unions {
    use super::*;

    #[test]
    fn union_with_interface_accepts_implementor_and_members() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let target = types
            .union_of([ty(&types, FOO_INTERFACE), Type::boolean()])
            .unwrap();
        assert!(types.is_assignable_from(&target, &ty(&types, FOO)));
        assert!(types.is_assignable_from(&target, &Type::boolean()));
    }

    #[test]
    fn union_with_class_rejects_its_interface() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let target = types.union_of([ty(&types, FOO), Type::boolean()]).unwrap();
        assert!(!types.is_assignable_from(&target, &ty(&types, FOO_INTERFACE)));
    }

    #[test]
    fn wider_union_is_not_assignable_to_narrower() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let narrow = types.union_of([ty(&types, FOO), Type::boolean()]).unwrap();
        let wide = types
            .union_of([ty(&types, FOO), Type::boolean(), Type::null()])
            .unwrap();
        assert!(!types.is_assignable_from(&narrow, &wide));
        let reordered = types.union_of([Type::boolean(), ty(&types, FOO)]).unwrap();
        assert!(types.is_assignable_from(&wide, &reordered));
    }

    #[test]
    fn union_members_accept_subtypes_of_members() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let target = ty(&types, &format!("{TYPE}|string"));
        let candidate = ty(&types, &format!("{ARRAY_TYPE}|string"));
        assert!(types.is_assignable_from(&target, &candidate));
        assert!(!types.is_assignable_from(&candidate, &target));
        assert!(!types.equals(&target, &candidate));
    }

    #[test]
    fn mixed_is_not_assignable_to_a_union() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let target = ty(&types, "int|string|null");
        assert!(!types.is_assignable_from(&target, &Type::mixed()));
        assert!(types.is_assignable_from(&Type::mixed(), &target));
    }
}

mod equality {
    use super::*;

    #[test]
    fn equality_matches_names_across_the_fixture() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let samples: Vec<Type> = [
            FOO.to_string(),
            BAR.to_string(),
            FOO_INTERFACE.to_string(),
            TYPE.to_string(),
            MY_CLASS.to_string(),
            format!("{FOO}|{FOO_INTERFACE}"),
            format!("{FOO}|bool"),
            format!("bool|{FOO}|null"),
            format!("{TYPE}[]"),
            format!("{ARRAY_TYPE}[]"),
            "object".to_string(),
            "mixed".to_string(),
            "callable".to_string(),
            "array".to_string(),
            "mixed[]".to_string(),
            "array<int,string>".to_string(),
        ]
        .iter()
        .map(|text| ty(&types, text))
        .collect();

        for a in &samples {
            for b in &samples {
                assert_eq!(types.equals(a, b), a.name() == b.name(), "`{a}` vs `{b}`");
            }
        }
    }

    #[test]
    fn array_and_mixed_array_are_the_same_type() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        assert!(types.equals(&ty(&types, "array"), &ty(&types, "mixed[]")));
        assert!(types.equals(&ty(&types, "array<mixed,mixed>"), &ty(&types, "array")));
    }

    #[test]
    fn generic_parameters_never_equal_anything() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let param = Type::generic_parameter("T", ty(&types, MY_CLASS));
        assert!(!types.equals(&param, &param));
        assert!(!types.is_assignable_from(&param, &Type::mixed()));
        assert!(types.is_assignable_from(&Type::mixed(), &param));
    }

    /// Reports two classes as subclasses of each other.
    struct CyclicOracle;

    impl SymbolOracle for CyclicOracle {
        fn class_exists(&self, name: &str) -> bool {
            matches!(name, "A" | "B")
        }

        fn interface_exists(&self, _name: &str) -> bool {
            false
        }

        fn is_subtype_of(&self, name: &str, of_name: &str) -> bool {
            name != of_name && self.class_exists(name) && self.class_exists(of_name)
        }

        fn implements(&self, _class_name: &str, _interface_name: &str) -> bool {
            false
        }

        fn has_invocation_method(&self, _object_type_name: &str) -> bool {
            false
        }
    }

    #[test]
    #[should_panic(expected = "type algebra invariant violated")]
    fn inconsistent_oracle_breaks_the_invariant_loudly() {
        let oracle = CyclicOracle;
        let types = TypeSystem::new(&oracle);
        let a = types.class_of("A").unwrap();
        let b = types.class_of("B").unwrap();
        let _ = types.equals(&a, &b);
    }
}
