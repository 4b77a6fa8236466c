
use corda_amqp_schema::{
    Composite, Dependency, Field, TypeNotation, dependency_order, depends_on,
};
use test_helpers::{composite, enumeration, info, list, map};

#[test]
fn dependency_codes() {
    assert_eq!(Dependency::None.code(), 0);
    assert_eq!(Dependency::Backward.code(), 1);
    assert_eq!(Dependency::Forward.code(), 2);
    assert_eq!(Dependency::Backward.flip(), Dependency::Forward);
    assert_eq!(Dependency::None.flip(), Dependency::None);
}

// ── restricted × restricted ──────────────────────────────────────────────────

#[test]
fn list_referenced_by_list() {
    let a = list("java.util.List<T>");
    let b = list("java.util.List<java.util.List<T>>");
    assert_eq!(depends_on(&a, &b), Dependency::Backward);
    assert_eq!(depends_on(&b, &a), Dependency::Forward);
}

#[test]
fn unrelated_lists() {
    let a = list("java.util.List<int>");
    let b = list("java.util.List<string>");
    assert_eq!(depends_on(&a, &b), Dependency::None);
    assert_eq!(depends_on(&b, &a), Dependency::None);
}

#[test]
fn list_referenced_by_map_key_or_value() {
    let l = list("java.util.List<int>");
    let by_value = map("java.util.Map<string, java.util.List<int>>");
    let by_key = map("java.util.Map<java.util.List<int>, string>");
    assert_eq!(depends_on(&l, &by_value), Dependency::Backward);
    assert_eq!(depends_on(&l, &by_key), Dependency::Backward);
    assert_eq!(depends_on(&by_value, &l), Dependency::Forward);
}

#[test]
fn list_of_map() {
    let m = map("java.util.Map<string, int>");
    let l = list("java.util.List<java.util.Map<string, int>>");
    assert_eq!(depends_on(&l, &m), Dependency::Forward);
    assert_eq!(depends_on(&m, &l), Dependency::Backward);
}

#[test]
fn map_of_map() {
    let inner = map("java.util.Map<string, int>");
    let outer = map("java.util.Map<string, java.util.Map<string, int>>");
    assert_eq!(depends_on(&inner, &outer), Dependency::Backward);
    assert_eq!(depends_on(&outer, &inner), Dependency::Forward);
}

#[test]
fn list_of_enum() {
    let e = enumeration("net.corda.Colour", &["RED", "GREEN"]);
    let l = list("java.util.List<net.corda.Colour>");
    assert_eq!(depends_on(&l, &e), Dependency::Forward);
    assert_eq!(depends_on(&e, &l), Dependency::Backward);
}

#[test]
fn enum_labels_never_reference_lists() {
    let l = list("java.util.List<int>");
    let e = enumeration("net.corda.Odd", &["java.util.List<int>", "int"]);
    assert_eq!(depends_on(&e, &l), Dependency::None);
    assert_eq!(depends_on(&l, &e), Dependency::None);
}

#[test]
fn map_keyed_by_enum() {
    let e = enumeration("net.corda.Colour", &["RED"]);
    let m = map("java.util.Map<net.corda.Colour, int>");
    assert_eq!(depends_on(&m, &e), Dependency::Forward);
    assert_eq!(depends_on(&e, &m), Dependency::Backward);
}

#[test]
fn enums_are_always_unrelated() {
    let a = enumeration("A", &["B", "X"]);
    let b = enumeration("B", &["A", "Y"]);
    let same = enumeration("A", &["A"]);
    assert_eq!(depends_on(&a, &b), Dependency::None);
    assert_eq!(depends_on(&b, &a), Dependency::None);
    assert_eq!(depends_on(&a, &same), Dependency::None);
}

// ── restricted × composite ───────────────────────────────────────────────────

#[test]
fn composite_field_references_list() {
    let l = list("java.util.List<int>");
    let c = composite("net.corda.Foo", &[("a", "int"), ("xs", "java.util.List<int>")]);
    assert_eq!(depends_on(&l, &c), Dependency::Backward);
    assert_eq!(depends_on(&c, &l), Dependency::Forward);
}

#[test]
fn list_of_composite() {
    let c = composite("net.corda.Foo", &[("a", "int")]);
    let l = list("java.util.List<net.corda.Foo>");
    assert_eq!(depends_on(&l, &c), Dependency::Forward);
    assert_eq!(depends_on(&c, &l), Dependency::Backward);
}

#[test]
fn composite_field_references_enum() {
    let e = enumeration("net.corda.Colour", &["RED"]);
    let c = composite("net.corda.Car", &[("colour", "net.corda.Colour")]);
    assert_eq!(depends_on(&e, &c), Dependency::Backward);
    assert_eq!(depends_on(&c, &e), Dependency::Forward);
}

#[test]
fn mutual_reference_prefers_restricted_depending_on_composite() {
    let node = composite("net.corda.Node", &[("children", "java.util.List<net.corda.Node>")]);
    let children = list("java.util.List<net.corda.Node>");

    let forward = depends_on(&children, &node);
    assert_eq!(forward, Dependency::Forward);
    assert_eq!(depends_on(&node, &children), Dependency::Backward);
    assert_ne!(forward, Dependency::None);
}

#[test]
fn any_field_resolves_through_requires() {
    let l = list("java.util.List<int>");
    let c: TypeNotation = Composite::new(
        info("net.corda.Holder"),
        vec![Field::new("value", "*").with_requires(["java.util.List<int>"])],
    )
    .into();
    assert_eq!(depends_on(&l, &c), Dependency::Backward);
}

// ── composite × composite ────────────────────────────────────────────────────

#[test]
fn nested_composites() {
    let inner = composite("net.corda.Inner", &[("x", "int")]);
    let outer = composite("net.corda.Outer", &[("inner", "net.corda.Inner")]);
    assert_eq!(depends_on(&inner, &outer), Dependency::Backward);
    assert_eq!(depends_on(&outer, &inner), Dependency::Forward);
}

#[test]
fn mutually_referencing_composites_resolve_to_one_direction() {
    let a = composite("A", &[("b", "B")]);
    let b = composite("B", &[("a", "A")]);
    assert_eq!(depends_on(&a, &b), Dependency::Forward);
    assert_eq!(depends_on(&b, &a), Dependency::Forward);
}

// ── ordering ─────────────────────────────────────────────────────────────────

#[test]
fn order_places_dependencies_first() {
    let types = vec![
        composite("net.corda.Outer", &[("inners", "java.util.List<net.corda.Inner>")]),
        list("java.util.List<net.corda.Inner>"),
        composite("net.corda.Inner", &[("x", "int")]),
    ];
    assert_eq!(dependency_order(&types), vec![2, 1, 0]);
}

#[test]
fn order_keeps_unrelated_types_in_declaration_order() {
    let types = vec![
        composite("C", &[("x", "int")]),
        list("java.util.List<int>"),
        enumeration("E", &["ONE"]),
        map("java.util.Map<string, string>"),
    ];
    assert_eq!(dependency_order(&types), vec![0, 1, 2, 3]);
}

#[test]
fn order_breaks_cycles_at_earliest_type() {
    let types = vec![
        composite("A", &[("b", "B")]),
        composite("B", &[("c", "C")]),
        composite("C", &[("a", "A")]),
    ];
    assert_eq!(dependency_order(&types), vec![0, 2, 1]);
}

#[test]
fn order_accepts_self_reference() {
    let types = vec![
        composite("net.corda.Node", &[("next", "net.corda.Node")]),
        list("java.util.List<net.corda.Node>"),
    ];
    assert_eq!(dependency_order(&types), vec![0, 1]);
}
