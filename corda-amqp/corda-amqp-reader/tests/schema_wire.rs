
use corda_amqp_core::{BinaryCursor, Cursor, DecodeError, Kind};
use corda_amqp_schema::{
    NotationKind, Restricted, SchemaDescriptor, SchemaError, TypeNotation, wire,
};
use test_helpers::*;

fn sample_schema() -> Vec<u8> {
    schema(vec![
        composite_type(
            "net.corda.Car",
            vec![
                field("name", "string", &[], true),
                field("colour", "net.corda.Colour", &[], false),
                field("wheels", "java.util.List<int>", &[], false),
                field("extra", "*", &["net.corda.Part"], false),
            ],
        ),
        restricted_type("net.corda.Colour", "list", &["RED", "GREEN"]),
        restricted_type("java.util.List<int>", "list", &[]),
        restricted_type("java.util.Map<string, java.util.List<int>>", "map", &[]),
    ])
}

#[test]
fn read_schema_parses_all_notation_kinds() {
    let bytes = sample_schema();
    let mut cursor = BinaryCursor::new(&bytes);
    let schema = wire::read_schema(&mut cursor).unwrap();

    let kinds: Vec<NotationKind> = schema.iter().map(TypeNotation::kind).collect();
    assert_eq!(
        kinds,
        vec![
            NotationKind::Composite,
            NotationKind::Enum,
            NotationKind::List,
            NotationKind::Map,
        ]
    );

    let car = schema.get("net.corda.Car").unwrap().as_composite().unwrap();
    assert_eq!(car.descriptor().name(), Some("net.corda:net.corda.Car"));
    assert_eq!(car.descriptor().code(), None);
    let names: Vec<&str> = car.fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["name", "colour", "wheels", "extra"]);
    assert!(car.fields()[0].mandatory);
    assert!(!car.fields()[1].mandatory);
    assert_eq!(car.fields()[3].resolved_type(), "net.corda.Part");

    let Some(Restricted::Enum(colour)) = schema.get("net.corda.Colour").and_then(TypeNotation::as_restricted) else {
        panic!("expected enum");
    };
    assert_eq!(colour.labels().collect::<Vec<_>>(), vec!["RED", "GREEN"]);

    let Some(Restricted::Map(m)) = schema
        .get("java.util.Map<string, java.util.List<int>>")
        .and_then(TypeNotation::as_restricted)
    else {
        panic!("expected map");
    };
    assert_eq!(m.map_of(), ("string", "java.util.List<int>"));

    assert!(!cursor.has_current());
}

#[test]
fn read_schema_leaves_cursor_on_next_sibling() {
    let bytes = [sample_schema(), int(7)].concat();
    let mut cursor = BinaryCursor::new(&bytes);
    wire::read_schema(&mut cursor).unwrap();
    assert_eq!(cursor.kind().unwrap(), Kind::Int);
    assert_eq!(cursor.get::<i32>().unwrap(), 7);
}

#[test]
fn read_schema_orders_by_dependency() {
    let bytes = sample_schema();
    let schema = wire::read_schema(&mut BinaryCursor::new(&bytes)).unwrap();
    let ordered: Vec<&str> = schema.ordered().into_iter().map(TypeNotation::name).collect();
    assert_eq!(
        ordered,
        vec![
            "net.corda.Colour",
            "java.util.List<int>",
            "net.corda.Car",
            "java.util.Map<string, java.util.List<int>>",
        ]
    );
}

#[test]
fn numeric_descriptors_are_read() {
    let notation = described(
        ulong(SchemaDescriptor::CompositeType.code()),
        list(vec![
            string("net.corda.Numbered"),
            string("a label"),
            list(vec![string("java.io.Serializable")]),
            descriptor(None, Some(0x42)),
            list(vec![field("x", "int", &[], false)]),
        ]),
    );
    let bytes = schema(vec![notation]);
    let schema = wire::read_schema(&mut BinaryCursor::new(&bytes)).unwrap();
    let numbered = schema.get("net.corda.Numbered").unwrap();
    assert_eq!(numbered.descriptor().code(), Some(0x42));
    assert_eq!(numbered.info().label.as_deref(), Some("a label"));
    assert_eq!(numbered.info().provides, vec!["java.io.Serializable"]);
}

#[test]
fn unknown_restricted_source_is_reported() {
    let bytes = schema(vec![restricted_type("java.util.Set<int>", "set", &[])]);
    let err = wire::read_schema(&mut BinaryCursor::new(&bytes)).unwrap_err();
    assert_eq!(
        err,
        SchemaError::UnknownSource {
            name: "java.util.Set<int>".to_string(),
            origin: "set".to_string(),
        }
    );
}

#[test]
fn wrong_descriptor_is_reported() {
    let bytes = described(ulong(SchemaDescriptor::Envelope.code()), list(vec![]));
    let err = wire::read_schema(&mut BinaryCursor::new(&bytes)).unwrap_err();
    assert!(matches!(err, SchemaError::UnexpectedDescriptor { .. }), "{err:?}");
}

#[test]
fn undescribed_schema_is_a_mismatch() {
    let bytes = list(vec![]);
    let err = wire::read_schema(&mut BinaryCursor::new(&bytes)).unwrap_err();
    assert!(matches!(
        err,
        SchemaError::Decode(DecodeError::SchemaMismatch {
            found: Kind::List,
            ..
        })
    ));
}

#[test]
fn type_notation_failure_advances_past_element() {
    let bytes = [
        restricted_type("java.util.Map<int>", "map", &[]),
        restricted_type("java.util.List<int>", "list", &[]),
    ]
    .concat();
    let mut cursor = BinaryCursor::new(&bytes);
    let err = wire::read_type_notation(&mut cursor).unwrap_err();
    assert!(matches!(err, SchemaError::TypeName(_)));

    let next = wire::read_type_notation(&mut cursor).unwrap();
    assert_eq!(next.name(), "java.util.List<int>");
}

#[test]
fn peek_descriptor_does_not_move() {
    let bytes = object("net.corda.X", list(vec![]));
    let mut cursor = BinaryCursor::new(&bytes);
    let descriptor = wire::peek_descriptor(&mut cursor).unwrap().unwrap();
    assert_eq!(descriptor.try_symbol().unwrap(), Some("net.corda:net.corda.X"));
    assert_eq!(cursor.kind().unwrap(), Kind::Described);
    assert_eq!(cursor.depth(), 0);

    let bytes = int(1);
    assert_eq!(wire::peek_descriptor(&mut BinaryCursor::new(&bytes)).unwrap(), None);
}

#[test]
fn read_schema_accepts_symbolic_element_descriptors() {
    let element = |which: SchemaDescriptor, items: Vec<Vec<u8>>| {
        described(symbol(which.symbol()), list(items))
    };
    let field = element(
        SchemaDescriptor::Field,
        vec![
            string("x"),
            string("int"),
            list(vec![]),
            null(),
            null(),
            boolean(true),
            boolean(false),
        ],
    );
    let point = element(
        SchemaDescriptor::CompositeType,
        vec![
            string("net.corda.Point"),
            null(),
            list(vec![]),
            element(
                SchemaDescriptor::ObjectDescriptor,
                vec![symbol("net.corda:net.corda.Point"), null()],
            ),
            list(vec![field]),
        ],
    );
    let bytes = element(SchemaDescriptor::Schema, vec![list(vec![point])]);

    let mut cursor = BinaryCursor::new(&bytes);
    let schema = wire::read_schema(&mut cursor).unwrap();
    let point = schema.get("net.corda.Point").unwrap().as_composite().unwrap();
    assert_eq!(point.fields().len(), 1);
    assert!(point.fields()[0].mandatory);
}

#[test]
fn empty_schema_with_symbolic_descriptor() {
    let bytes = described(symbol("net.corda:schema"), list(vec![list(vec![])]));
    let mut cursor = BinaryCursor::new(&bytes);
    assert!(wire::read_schema(&mut cursor).unwrap().is_empty());
}
