//! Value membership tests

use crate::utils::{BAR, FOO, FOO_INTERFACE, INVOKER, MY_CLASS, TYPE, fixture_table, ty};
use doctype_types::{ArrayKey, Type, TypeSystem, Value};

fn strings(items: &[&str]) -> Value {
    Value::list(items.iter().map(|s| Value::String((*s).to_string())))
}

mod membership {
    use super::*;

    #[test]
    fn string_list_accepts_only_strings() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let string_list = ty(&types, "string[]");
        assert!(types.is_assignable_from_value(&string_list, &strings(&["str1", "str2"])));
        assert!(!types.is_assignable_from_value(
            &string_list,
            &Value::list([Value::Int(1), Value::Int(2)])
        ));
        assert!(types.is_assignable_from_value(&string_list, &Value::Array(Vec::new())));
        assert!(!types.is_assignable_from_value(&string_list, &Value::String("str".into())));
    }

    #[test]
    fn keyed_arrays_check_their_keys() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let by_name = ty(&types, "array<string,int>");
        let named = Value::Array(vec![(ArrayKey::String("a".into()), Value::Int(1))]);
        let indexed = Value::list([Value::Int(1)]);
        assert!(types.is_assignable_from_value(&by_name, &named));
        assert!(!types.is_assignable_from_value(&by_name, &indexed));
    }

    #[test]
    fn instances_belong_to_their_supertypes() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let bar = Value::object(BAR);
        assert!(types.is_assignable_from_value(&ty(&types, BAR), &bar));
        assert!(types.is_assignable_from_value(&ty(&types, FOO), &bar));
        assert!(types.is_assignable_from_value(&ty(&types, FOO_INTERFACE), &bar));
        assert!(!types.is_assignable_from_value(&ty(&types, TYPE), &bar));
        assert!(types.is_assignable_from_value(&Type::object(), &bar));
        assert!(!types.is_assignable_from_value(&ty(&types, FOO), &Value::Null));
    }

    #[test]
    fn nullable_types_accept_null() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        let nullable = ty(&types, &format!("{MY_CLASS}|null"));
        assert!(types.is_assignable_from_value(&nullable, &Value::Null));
        assert!(!types.is_assignable_from_value(&nullable, &Value::Bool(false)));
    }

    #[test]
    fn callables_are_closures_and_invocable_instances() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        assert!(types.is_assignable_from_value(&Type::callable(), &Value::Closure));
        assert!(types.is_assignable_from_value(&Type::callable(), &Value::object(INVOKER)));
        assert!(!types.is_assignable_from_value(&Type::callable(), &Value::object(FOO)));
        assert!(!types.is_assignable_from_value(&Type::callable(), &Value::String("strlen".into())));
    }
}

mod classification {
    use super::*;

    #[test]
    fn values_classify_into_their_types() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        assert_eq!(types.type_of_value(&Value::Int(3)).unwrap(), Type::integer());
        assert_eq!(types.type_of_value(&strings(&["a"])).unwrap().name(), "array");
        assert_eq!(
            types.type_of_value(&Value::object(&format!("\\{BAR}"))).unwrap(),
            ty(&types, BAR)
        );
        assert_eq!(types.type_of_value(&Value::Closure).unwrap(), Type::callable());
    }

    #[test]
    fn classified_type_accepts_its_value() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        for value in [
            Value::Null,
            Value::Bool(true),
            Value::Float(0.5),
            Value::Resource(7),
            Value::Closure,
            Value::object(INVOKER),
            strings(&["x", "y"]),
        ] {
            let classified = types.type_of_value(&value).unwrap();
            assert!(
                types.is_assignable_from_value(&classified, &value),
                "`{classified}` should accept {}",
                value.kind()
            );
        }
    }

    #[test]
    fn unknown_classes_cannot_be_classified() {
        let table = fixture_table();
        let types = TypeSystem::new(&table);
        assert!(types.type_of_value(&Value::object(r"App\Missing")).is_err());
    }
}
