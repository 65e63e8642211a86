//! Shared test utilities for the integration test suites.
//!
//! `Fixture` stands in for the discovery collaborator: it registers class
//! records, remembers which methods and nested classes each class has, and
//! produces the artifacts discovery would hand to the engine.
//! Import via `mod common;` from any test's main.rs.

#![allow(dead_code)]

use displayname::{
    Artifact, ClassId, ClassRecord, ClassRegistry, DisplayNameAssembler, Identifier,
    MethodSignature, NamingStrategy, StrategyConfig, StrategyResult, Style, TypeName,
};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Strategies
// ============================================================================

/// Names everything "nn"
#[derive(Debug)]
pub struct NoNameStrategy;

impl NamingStrategy for NoNameStrategy {
    fn name(&self) -> &str {
        "no-name"
    }

    fn name_for_class(&self, _class: &ClassRecord) -> StrategyResult<String> {
        Ok("nn".to_string())
    }

    fn name_for_nested_class(&self, _nested: &ClassRecord) -> StrategyResult<String> {
        Ok("nn".to_string())
    }

    fn name_for_method(
        &self,
        _class: &ClassRecord,
        _method: &MethodSignature,
    ) -> StrategyResult<String> {
        Ok("nn".to_string())
    }
}

// ============================================================================
// Builders
// ============================================================================

pub fn ident(name: &str) -> Identifier {
    Identifier::new(name).unwrap()
}

pub fn sig(name: &str, params: &[&str]) -> MethodSignature {
    MethodSignature::new(
        ident(name),
        params.iter().map(|p| TypeName::new(*p).unwrap()).collect(),
    )
}

#[derive(Debug, Clone)]
struct MethodEntry {
    signature: MethodSignature,
    label: Option<String>,
}

#[derive(Debug, Clone, Default)]
struct ClassEntry {
    label: Option<String>,
    superclass: Option<ClassId>,
    methods: Vec<MethodEntry>,
    nested: Vec<ClassId>,
}

/// Registry plus the discovery-side view of each class
#[derive(Debug, Default)]
pub struct Fixture {
    registry: ClassRegistry,
    entries: HashMap<ClassId, ClassEntry>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a class; `label` is its explicit display name, if any
    pub fn class(&mut self, record: ClassRecord, label: Option<&str>) -> &mut Self {
        let id = record.id().clone();
        if let Some(outer) = record.enclosing() {
            self.entries
                .entry(outer.clone())
                .or_default()
                .nested
                .push(id.clone());
        }
        let entry = self.entries.entry(id).or_default();
        entry.label = label.map(str::to_string);
        entry.superclass = record.superclass().cloned();
        self.registry.register(record).unwrap();
        self
    }

    /// Declare a test method on a class
    pub fn method(&mut self, class: &str, signature: MethodSignature, label: Option<&str>) -> &mut Self {
        self.entries
            .entry(ClassId::new(class))
            .or_default()
            .methods
            .push(MethodEntry {
                signature,
                label: label.map(str::to_string),
            });
        self
    }

    /// Freeze the registry and build an assembler over it
    pub fn assembler(self) -> (DisplayNameAssembler, Discovery) {
        let assembler = DisplayNameAssembler::new(Arc::new(self.registry));
        (
            assembler,
            Discovery {
                entries: self.entries,
            },
        )
    }
}

/// Discovery-side view, kept after the registry is frozen
#[derive(Debug)]
pub struct Discovery {
    entries: HashMap<ClassId, ClassEntry>,
}

impl Discovery {
    /// Artifacts for a selected top-level class and everything under it
    pub fn discover(&self, class: &str) -> Vec<Artifact> {
        let mut artifacts = Vec::new();
        self.collect(&ClassId::new(class), false, &mut artifacts);
        artifacts
    }

    fn collect(&self, id: &ClassId, nested: bool, out: &mut Vec<Artifact>) {
        let entry = self.entries.get(id).cloned().unwrap_or_default();

        let mut container = if nested {
            Artifact::nested_class(id.clone())
        } else {
            Artifact::class(id.clone())
        };
        if let Some(label) = &entry.label {
            container = container.with_label(label.clone());
        }
        out.push(container);

        // Inherited methods are discovered in the subclass
        let mut current = Some(id.clone());
        while let Some(class) = current {
            let declaring = self.entries.get(&class).cloned().unwrap_or_default();
            for method in &declaring.methods {
                let mut artifact = Artifact::method(id.clone(), method.signature.clone());
                if let Some(label) = &method.label {
                    artifact = artifact.with_label(label.clone());
                }
                out.push(artifact);
            }
            current = declaring.superclass;
        }

        for child in &entry.nested {
            self.collect(child, true, out);
        }
    }
}

/// Describe every discovered artifact as "TYPE: name" and sort the lines
pub fn describe_sorted(
    assembler: &DisplayNameAssembler,
    discovery: &Discovery,
    class: &str,
) -> Vec<String> {
    let mut lines: Vec<String> = discovery
        .discover(class)
        .iter()
        .map(|artifact| assembler.describe(artifact).unwrap().to_string())
        .collect();
    lines.sort();
    lines
}

// ============================================================================
// Scenario classes
// ============================================================================

pub const ABSTRACT: &str = "demo.NamingScenarios$AbstractTestCase";
pub const DEFAULT_STYLE: &str = "demo.NamingScenarios$DefaultStyleTestCase";
pub const UNDERSCORE_STYLE: &str = "demo.NamingScenarios$UnderscoreStyleTestCase";
pub const NO_NAME_STYLE: &str = "demo.NamingScenarios$NoNameStyleTestCase";
pub const UNDERSCORE_INHERITED: &str =
    "demo.NamingScenarios$UnderscoreStyleInheritedFromSuperClassTestCase";
pub const STACK: &str = "demo.NamingScenarios$StackTestCase";
pub const NEW_STACK: &str = "demo.NamingScenarios$StackTestCase$A_new_stack";
pub const AFTER_PUSHING: &str =
    "demo.NamingScenarios$StackTestCase$A_new_stack$After_pushing_an_element_to_an_empty_stack";

/// Binary name without the package
fn simple(id: &str) -> Identifier {
    ident(id.trim_start_matches("demo."))
}

/// The scenario class tree
///
/// One abstract base configured with the constant-name strategy and six test
/// methods; subclasses overriding the configuration with each built-in style
/// and with the constant-name strategy again; a subclass inheriting the
/// underscore style; and a labelled stack class with two levels of nested
/// classes.
pub fn scenario_fixture() -> Fixture {
    let no_name = StrategyConfig::custom(NoNameStrategy);
    let mut fixture = Fixture::new();

    fixture
        .class(
            ClassRecord::new(ABSTRACT, simple(ABSTRACT)).with_configuration(no_name.clone()),
            None,
        )
        .method(ABSTRACT, sig("test", &[]), None)
        .method(ABSTRACT, sig("test", &["TestInfo"]), None)
        .method(ABSTRACT, sig("testUsingCamelCaseStyle", &[]), None)
        .method(ABSTRACT, sig("testUsingCamelCase_and_also_UnderScores", &[]), None)
        .method(ABSTRACT, sig("test_with_underscores", &[]), None)
        .method(
            ABSTRACT,
            sig("testDisplayNamePrevails", &[]),
            Some("@DisplayName prevails"),
        );

    fixture
        .class(
            ClassRecord::new(DEFAULT_STYLE, simple(DEFAULT_STYLE))
                .extends(ABSTRACT)
                .with_configuration(StrategyConfig::from(Style::Default)),
            None,
        )
        .class(
            ClassRecord::new(UNDERSCORE_STYLE, simple(UNDERSCORE_STYLE))
                .extends(ABSTRACT)
                .with_configuration(StrategyConfig::from(Style::Underscore)),
            None,
        )
        .class(
            ClassRecord::new(NO_NAME_STYLE, simple(NO_NAME_STYLE))
                .extends(ABSTRACT)
                .with_configuration(no_name),
            None,
        )
        .class(
            ClassRecord::new(UNDERSCORE_INHERITED, simple(UNDERSCORE_INHERITED))
                .extends(UNDERSCORE_STYLE),
            None,
        );

    fixture
        .class(
            ClassRecord::new(STACK, simple(STACK))
                .with_configuration(StrategyConfig::from(Style::Underscore)),
            Some("A stack"),
        )
        .method(STACK, sig("is_instantiated_using_its_noarg_constructor", &[]), None)
        .class(
            ClassRecord::new(NEW_STACK, ident("A_new_stack")).nested_in(STACK),
            None,
        )
        .method(NEW_STACK, sig("is_empty", &[]), None)
        .method(NEW_STACK, sig("throws_an_EmptyStackException_when_popped", &[]), None)
        .method(NEW_STACK, sig("throws_an_EmptyStackException_when_peeked", &[]), None)
        .class(
            ClassRecord::new(
                AFTER_PUSHING,
                ident("After_pushing_an_element_to_an_empty_stack"),
            )
            .nested_in(NEW_STACK),
            None,
        )
        .method(AFTER_PUSHING, sig("the_stack_is_no_longer_empty", &[]), None)
        .method(
            AFTER_PUSHING,
            sig("pop_returns_that_element_and_leaves_an_empty_stack", &[]),
            None,
        )
        .method(
            AFTER_PUSHING,
            sig("peek_returns_that_element_without_removing_it_from_the_stack", &[]),
            None,
        );

    fixture
}
