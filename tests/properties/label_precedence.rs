//! A non-blank explicit label is returned as declared, whatever the style.

use crate::common::*;
use displayname::Artifact;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn explicit_label_always_wins(
        label in "[a-zA-Z@#][a-zA-Z0-9 _@#]{0,30}",
        method in "[a-z][a-zA-Z0-9_]{0,20}",
    ) {
        let (assembler, _) = scenario_fixture().assembler();

        for class in [DEFAULT_STYLE, UNDERSCORE_STYLE, NO_NAME_STYLE, UNDERSCORE_INHERITED, STACK] {
            let artifact = Artifact::method(class, sig(&method, &[])).with_label(label.clone());
            prop_assert_eq!(assembler.assemble(&artifact).unwrap(), label.clone());
        }
    }

    #[test]
    fn assembly_is_idempotent(method in "[a-z][a-zA-Z0-9_]{0,20}") {
        let (assembler, _) = scenario_fixture().assembler();

        for class in [DEFAULT_STYLE, UNDERSCORE_STYLE, NO_NAME_STYLE, NEW_STACK] {
            let artifact = Artifact::method(class, sig(&method, &[]));
            prop_assert_eq!(
                assembler.assemble(&artifact).unwrap(),
                assembler.assemble(&artifact).unwrap()
            );
        }
    }
}
