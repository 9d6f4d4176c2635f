//! Union canonicalization tests
//!
//! Tests verifying that unions are flattened, deduplicated, ordered and free of
//! covered members, whatever order they are built in.

use crate::utils::{ARRAY_TYPE, BAR, FOO, FOO_INTERFACE, MY_CLASS, TYPE, fixture_table, ty};
use doctype_types::{Type, TypeSystem};

/// All orderings of `items`.
fn permutations(items: &[Type]) -> Vec<Vec<Type>> {
    if items.len() <= 1 {
        return vec![items.to_vec()];
    }
    let mut result = Vec::new();
    for (idx, head) in items.iter().enumerate() {
        let mut rest = items.to_vec();
        rest.remove(idx);
        for mut tail in permutations(&rest) {
            tail.insert(0, head.clone());
            result.push(tail);
        }
    }
    result
}

mod ordering {
    use super::*;

    #[test]
    fn object_types_then_primitives_then_null() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let union = types
            .union_of([Type::string(), Type::null(), ty(&types, MY_CLASS)])
            .unwrap();
        assert_eq!(union.name(), format!("{MY_CLASS}|string|null"));
    }

    #[test]
    fn name_is_independent_of_construction_order() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let members = vec![
            Type::integer(),
            Type::null(),
            ty(&types, FOO),
            Type::array_of(Type::string()),
            Type::string(),
        ];
        let expected = format!("{FOO}|string[]|integer|string|null");
        for order in permutations(&members) {
            assert_eq!(types.union_of(order).unwrap().name(), expected);
        }
    }
}

mod covered_members {
    use super::*;

    #[test]
    fn class_is_covered_by_its_interface() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let foo_interface = ty(&types, FOO_INTERFACE);
        let union = types
            .union_of([foo_interface.clone(), ty(&types, FOO)])
            .unwrap();
        assert_eq!(union, foo_interface);
        assert!(types.equals(&union, &foo_interface));
    }

    #[test]
    fn subclass_is_covered_transitively() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let union = ty(&types, &format!("{BAR}|{FOO}|{FOO_INTERFACE}"));
        assert_eq!(union.name(), FOO_INTERFACE);
        let union = ty(&types, &format!("{ARRAY_TYPE}|{TYPE}|null"));
        assert_eq!(union.name(), format!("{TYPE}|null"));
    }

    #[test]
    fn no_member_is_assignable_from_another() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let union = ty(
            &types,
            &format!("{BAR}|{MY_CLASS}|{TYPE}|{ARRAY_TYPE}|object|callable|int|string[]|null"),
        );
        let members = union.as_union().expect("union").members();
        for (i, a) in members.iter().enumerate() {
            for (j, b) in members.iter().enumerate() {
                if i != j {
                    assert!(
                        !types.is_assignable_from(a, b),
                        "`{a}` should not cover `{b}` in `{union}`"
                    );
                }
            }
        }
    }

    #[test]
    fn object_covers_classes_but_not_primitives() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let union = ty(&types, &format!("{FOO}|object|string"));
        assert_eq!(union.name(), "object|string");
    }
}

mod structure {
    use super::*;

    #[test]
    fn nested_unions_are_flattened_and_deduplicated() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let inner = types.nullable_of(Type::integer());
        let outer = types
            .union_of([inner.clone(), Type::string(), inner, Type::integer()])
            .unwrap();
        let members = outer.as_union().expect("union").members();
        assert_eq!(members.len(), 3);
        assert!(members.iter().all(|m| m.as_union().is_none()));
    }

    #[test]
    fn uniting_a_union_with_itself_is_identity() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let union = ty(&types, &format!("{MY_CLASS}|bool|null"));
        assert_eq!(types.union_of([union.clone()]).unwrap(), union);
        assert_eq!(types.union_of([union.clone(), union.clone()]).unwrap(), union);
    }

    #[test]
    fn nested_union_equals_flat_union() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let (a, b, c) = (ty(&types, MY_CLASS), Type::string(), Type::null());
        let inner = types.union_of([a.clone(), b.clone()]).unwrap();
        let nested = types.union_of([inner, c.clone()]).unwrap();
        let flat = types.union_of([a, b, c]).unwrap();
        assert_eq!(nested, flat);
        assert!(types.equals(&nested, &flat));
    }

    #[test]
    fn nullable_is_union_with_null() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let my_class = ty(&types, MY_CLASS);
        let nullable = types.nullable_of(my_class.clone());
        let union = types.union_of([my_class, Type::null()]).unwrap();
        assert!(types.equals(&nullable, &union));
        assert_eq!(nullable.name(), format!("{MY_CLASS}|null"));
    }

    #[test]
    fn empty_union_is_an_error() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        assert!(matches!(
            types.union_of(std::iter::empty()),
            Err(doctype_types::TypeError::EmptyUnion)
        ));
    }
}
