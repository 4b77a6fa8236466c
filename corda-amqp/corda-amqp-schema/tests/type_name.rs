use corda_amqp_schema::{List, Map, ParseError, type_name};

#[test]
fn list_type_splits_outer_and_element() {
    let (outer, param) = List::list_type("java.util.list<int>").unwrap();
    assert_eq!(outer, "java.util.list");
    assert_eq!(param, "int");
}

#[test]
fn list_type_round_trips_nested_parameters() {
    for name in [
        "java.util.List<java.lang.String>",
        "java.util.List<java.util.List<int>>",
        "java.util.List<java.util.Map<java.util.Pair<int, int>, java.util.List<string>>>",
        "java.util.List< padded >",
    ] {
        let (outer, param) = List::list_type(name).unwrap();
        assert_eq!(format!("{outer}<{param}>"), name);
    }
}

#[test]
fn list_type_rejects_two_parameters() {
    let err = List::list_type("java.util.List<int, string>").unwrap_err();
    assert_eq!(
        err,
        ParseError::ParameterCount {
            name: "java.util.List<int, string>".to_string(),
            expected: 1,
            found: 2,
        }
    );
}

#[test]
fn map_type_simple() {
    let (map, key, value) = Map::map_type("java.util.Map<int, string>").unwrap();
    assert_eq!(map, "java.util.Map");
    assert_eq!(key, "int");
    assert_eq!(value, "string");
}

#[test]
fn map_type_nested_value() {
    let (map, key, value) = Map::map_type("java.util.Map<int, java.util.List<string>>").unwrap();
    assert_eq!(map, "java.util.Map");
    assert_eq!(key, "int");
    assert_eq!(value, "java.util.List<string>");
}

#[test]
fn map_type_splits_on_top_level_comma_only() {
    let (map, key, value) =
        Map::map_type("java.util.Map<java.util.Pair<int,int>,java.util.List<string>>").unwrap();
    assert_eq!(map, "java.util.Map");
    assert_eq!(key, "java.util.Pair<int,int>");
    assert_eq!(value, "java.util.List<string>");

    let (_, key, value) =
        Map::map_type("java.util.Map<java.util.Pair<int, int>, java.util.List<string>>").unwrap();
    assert_eq!(key, "java.util.Pair<int, int>");
    assert_eq!(value, "java.util.List<string>");
}

#[test]
fn map_type_deep_nesting() {
    let (_, key, value) = Map::map_type(
        "Map<Map<List<List<a>>, Map<b, c>>, List<Map<d, List<e>>>>",
    )
    .unwrap();
    assert_eq!(key, "Map<List<List<a>>, Map<b, c>>");
    assert_eq!(value, "List<Map<d, List<e>>>");
}

#[test]
fn map_type_without_separator_is_an_error() {
    let err = Map::map_type("java.util.Map<java.util.Pair<int, int>>").unwrap_err();
    assert!(matches!(err, ParseError::MissingSeparator { .. }));
}

#[test]
fn unbalanced_brackets_are_errors() {
    for name in [
        "java.util.Map<int, string",
        "java.util.Map<int, List<string>",
        "java.util.Map<int>, string>",
    ] {
        let err = Map::map_type(name).unwrap_err();
        assert!(
            matches!(err, ParseError::Unbalanced { .. }),
            "{name}: {err:?}"
        );
    }
}

#[test]
fn missing_parameter_list_is_an_error() {
    assert!(matches!(
        List::list_type("java.lang.String"),
        Err(ParseError::MissingParameters { .. })
    ));
}

#[test]
fn empty_parameters_are_errors() {
    assert!(matches!(
        List::list_type("java.util.List<>"),
        Err(ParseError::EmptyParameter { .. })
    ));
    assert!(matches!(
        Map::map_type("java.util.Map<int, >"),
        Err(ParseError::EmptyParameter { .. })
    ));
}

#[test]
fn split_generic_returns_all_parameters() {
    let (outer, params) = type_name::split_generic("Triple<a, List<b>, Map<c, d>>").unwrap();
    assert_eq!(outer, "Triple");
    assert_eq!(params, vec!["a", "List<b>", "Map<c, d>"]);
}

#[test]
fn array_element_strips_suffix() {
    assert_eq!(type_name::array_element("int[p]"), Some("int"));
    assert_eq!(type_name::array_element("java.lang.String[]"), Some("java.lang.String"));
    assert_eq!(type_name::array_element("java.util.List<int>"), None);
    assert_eq!(type_name::array_element("[]"), None);
}
