//! Default style is the identity; underscore style is a one-to-one
//! character substitution on the identifier only.

use crate::common::*;
use displayname::{ClassRecord, DefaultStyle, NamingStrategy, UnderscoreStyle};
use proptest::prelude::*;

fn identifier() -> impl Strategy<Value = String> {
    "[a-zA-Z_$][a-zA-Z0-9_$]{0,40}"
}

fn parameter_types() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Z][a-zA-Z0-9]{0,12}(\\[\\])?", 0..4)
}

fn owner() -> ClassRecord {
    ClassRecord::new("demo.Owner", ident("Owner"))
}

proptest! {
    #[test]
    fn default_style_returns_class_name_unchanged(name in identifier()) {
        let record = ClassRecord::new("demo.Generated", ident(&name));
        prop_assert_eq!(DefaultStyle.name_for_class(&record).unwrap(), name.clone());
        prop_assert_eq!(DefaultStyle.name_for_nested_class(&record).unwrap(), name);
    }

    #[test]
    fn default_style_appends_parameter_list(name in identifier(), params in parameter_types()) {
        let refs: Vec<&str> = params.iter().map(String::as_str).collect();
        let generated = DefaultStyle.name_for_method(&owner(), &sig(&name, &refs)).unwrap();
        prop_assert_eq!(generated, format!("{}({})", name, params.join(", ")));
    }

    #[test]
    fn underscore_style_is_one_to_one(name in identifier()) {
        let record = ClassRecord::new("demo.Generated", ident(&name));
        let generated = UnderscoreStyle.name_for_class(&record).unwrap();

        prop_assert!(!generated.contains('_'));
        prop_assert_eq!(generated.chars().count(), name.chars().count());
        for (original, replaced) in name.chars().zip(generated.chars()) {
            if original == '_' {
                prop_assert_eq!(replaced, ' ');
            } else {
                prop_assert_eq!(replaced, original);
            }
        }
    }

    #[test]
    fn underscore_style_leaves_names_without_underscores_alone(name in "[a-zA-Z$][a-zA-Z0-9$]{0,40}") {
        let record = ClassRecord::new("demo.Generated", ident(&name));
        prop_assert_eq!(UnderscoreStyle.name_for_class(&record).unwrap(), name);
    }

    #[test]
    fn underscore_style_preserves_parameter_suffix(name in identifier(), params in parameter_types()) {
        let refs: Vec<&str> = params.iter().map(String::as_str).collect();
        let signature = sig(&name, &refs);
        let generated = UnderscoreStyle.name_for_method(&owner(), &signature).unwrap();

        let suffix = format!("({})", params.join(", "));
        prop_assert!(generated.ends_with(&suffix));
        prop_assert_eq!(&generated[..generated.len() - suffix.len()], name.replace('_', " "));
    }
}
