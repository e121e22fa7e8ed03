use crate::operation::tests::test_utils;
use crate::operation::FieldChain;
use crate::operation::QueryCompileError;
use crate::operation::Selector;
use crate::operation::SelectorTranslator;
use crate::CompilerConfig;
use crate::EmptySelectionPolicy;

type Result<T> = std::result::Result<T, QueryCompileError>;

fn translate(config: &CompilerConfig, selector: &Selector) -> Result<Vec<String>> {
    let registry = test_utils::transit_registry();
    let trip_type = registry.object_type("Trip").unwrap();
    let nodes = SelectorTranslator::new(&registry, config)
        .translate(trip_type, selector)?;
    Ok(nodes.iter().map(ToString::to_string).collect())
}

#[test]
fn single_chain_aliases_only_the_outermost_step() -> Result<()> {
    let selector = Selector::SingleChain(
        FieldChain::from_path("RouteId", "route.gtfsId"),
    );

    assert_eq!(
        translate(&CompilerConfig::default(), &selector)?,
        vec!["RouteId: route { gtfsId }"],
    );
    Ok(())
}

#[test]
fn single_step_leaf_chain() -> Result<()> {
    let selector = Selector::SingleChain(FieldChain::from_path("Id", "gtfsId"));

    assert_eq!(translate(&CompilerConfig::default(), &selector)?, vec!["Id: gtfsId"]);
    Ok(())
}

#[test]
fn composite_innermost_step_is_expanded_one_level() -> Result<()> {
    let selector = Selector::SingleChain(FieldChain::from_path("Op", "route.agency"));

    // Only the agency's leaf fields; `routes` is not followed.
    assert_eq!(
        translate(&CompilerConfig::default(), &selector)?,
        vec!["Op: route { agency { gtfsId name url } }"],
    );
    Ok(())
}

#[test]
fn chains_walk_through_collections() -> Result<()> {
    let selector = Selector::SingleChain(
        FieldChain::new("StopNames", ["StoptimesForDate", "Stop", "Name"]),
    );

    assert_eq!(
        translate(&CompilerConfig::default(), &selector)?,
        vec!["StopNames: stoptimesForDate { stop { name } }"],
    );
    Ok(())
}

#[test]
fn constructed_selector_yields_one_field_per_chain() -> Result<()> {
    let selector = Selector::Constructed(vec![
        FieldChain::from_path("Headsign", "tripHeadsign"),
        FieldChain::from_path("RouteName", "route.shortName"),
        FieldChain::from_path("Agency", "route.agency.name"),
    ]);

    assert_eq!(
        translate(&CompilerConfig::default(), &selector)?,
        vec![
            "Headsign: tripHeadsign",
            "RouteName: route { shortName }",
            "Agency: route { agency { name } }",
        ],
    );
    Ok(())
}

#[test]
fn duplicate_constructed_aliases_are_rejected() {
    let selector = Selector::Constructed(vec![
        FieldChain::from_path("Name", "tripHeadsign"),
        FieldChain::from_path("Name", "route.shortName"),
    ]);

    match translate(&CompilerConfig::default(), &selector) {
        Err(QueryCompileError::DuplicateSelectorAlias { alias }) =>
            assert_eq!(alias, "Name"),
        other => panic!("Expected DuplicateSelectorAlias, got {other:?}"),
    }
}

#[test]
fn invalid_alias_is_rejected() {
    let selector = Selector::SingleChain(FieldChain::from_path("route id", "route"));

    assert!(matches!(
        translate(&CompilerConfig::default(), &selector),
        Err(QueryCompileError::InvalidAlias { .. }),
    ));
}

#[test]
fn unsupported_selector_shapes_are_rejected() {
    let empty_chain = Selector::SingleChain(
        FieldChain::new("Nothing", Vec::<String>::new()),
    );
    let empty_constructed = Selector::Constructed(vec![]);

    for selector in [empty_chain, empty_constructed] {
        let result = translate(&CompilerConfig::default(), &selector);
        assert!(
            matches!(result, Err(QueryCompileError::UnsupportedSelector { .. })),
            "Expected UnsupportedSelector, got {result:?}",
        );
    }
}

#[test]
fn undefined_step_names_path_and_type() {
    let selector = Selector::SingleChain(FieldChain::from_path("X", "route.color"));

    match translate(&CompilerConfig::default(), &selector) {
        Err(QueryCompileError::UndefinedField { path, segment, type_name }) => {
            assert_eq!(path, "route.color");
            assert_eq!(segment, "color");
            assert_eq!(type_name, "Route");
        },
        other => panic!("Expected UndefinedField, got {other:?}"),
    }
}

#[test]
fn step_after_a_leaf_is_rejected() {
    let selector = Selector::SingleChain(
        FieldChain::from_path("X", "tripHeadsign.length"),
    );

    assert!(matches!(
        translate(&CompilerConfig::default(), &selector),
        Err(QueryCompileError::PathContinuesPastLeaf { .. }),
    ));
}

#[test]
fn empty_innermost_type_follows_policy() -> Result<()> {
    let selector = Selector::SingleChain(FieldChain::from_path("A", "route.alerts"));

    assert!(matches!(
        translate(&CompilerConfig::default(), &selector),
        Err(QueryCompileError::EmptySelectionSet { .. }),
    ));

    let render_empty = CompilerConfig::default()
        .with_empty_selection(EmptySelectionPolicy::RenderEmpty);
    assert_eq!(translate(&render_empty, &selector)?, vec!["A: route { alerts { } }"]);

    let omit = CompilerConfig::default()
        .with_empty_selection(EmptySelectionPolicy::Omit);
    assert!(translate(&omit, &selector)?.is_empty());
    Ok(())
}
