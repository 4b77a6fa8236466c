use corda_amqp_core::{AutoEnter, AutoNext, BinaryCursor, Cursor, DecodeError, Kind, Scalar};

#[test]
fn walks_top_level_scalars() {
    // smallint 5, str8 "hi", true
    let data = [0x54, 0x05, 0xa1, 0x02, b'h', b'i', 0x41];
    let mut c = BinaryCursor::new(&data);

    assert_eq!(c.kind().unwrap(), Kind::Int);
    assert_eq!(c.get::<i32>().unwrap(), 5);
    assert!(c.next());
    assert_eq!(c.kind().unwrap(), Kind::String);
    assert_eq!(c.get::<String>().unwrap(), "hi");
    assert!(c.next());
    assert!(c.get::<bool>().unwrap());
    assert!(!c.next());
    assert!(!c.has_current());
    assert!(matches!(c.kind(), Err(DecodeError::Exhausted { .. })));
}

#[test]
fn descend_and_ascend_restore_the_parent_position() {
    // list8 [1, 2], null
    let data = [0xc0, 0x05, 0x02, 0x54, 0x01, 0x54, 0x02, 0x40];
    let mut c = BinaryCursor::new(&data);

    c.descend().unwrap();
    assert_eq!(c.depth(), 1);
    assert_eq!(c.get::<i32>().unwrap(), 1);
    assert!(c.next());
    assert_eq!(c.get::<i32>().unwrap(), 2);
    assert!(!c.next());

    assert!(c.ascend());
    assert_eq!(c.depth(), 0);
    assert_eq!(c.kind().unwrap(), Kind::List);
    assert!(c.next());
    assert_eq!(c.kind().unwrap(), Kind::Null);
    assert!(!c.ascend());
}

#[test]
fn described_value_has_descriptor_and_value_children() {
    // described(:foo) list0
    let data = [0x00, 0xa3, 0x03, b'f', b'o', b'o', 0x45];
    let mut c = BinaryCursor::new(&data);
    assert_eq!(c.kind().unwrap(), Kind::Described);

    let mut described = AutoEnter::new(&mut c).unwrap();
    assert_eq!(described.scalar().unwrap(), Scalar::symbol("foo"));
    assert!(described.next());
    assert_eq!(described.kind().unwrap(), Kind::List);

    let list = AutoEnter::new(&mut *described).unwrap();
    assert!(!list.has_current());
    drop(list);
    drop(described);

    assert_eq!(c.depth(), 0);
    assert!(!c.next());
}

#[test]
fn described_descriptor_is_skipped_as_one_element() {
    // described(described(:a, null), smallint 7), null
    let data = [0x00, 0x00, 0xa3, 0x01, b'a', 0x40, 0x54, 0x07, 0x40];
    let mut c = BinaryCursor::new(&data);
    assert!(c.next());
    assert_eq!(c.offset(), 8);
    assert_eq!(c.kind().unwrap(), Kind::Null);
}

#[test]
fn long_run_of_described_constructors_is_truncated() {
    let data = vec![0u8; 1_000_000];

    let mut c = BinaryCursor::new(&data);
    assert_eq!(
        c.descend(),
        Err(DecodeError::Truncated {
            offset: data.len(),
            needed: 1,
        })
    );
    assert_eq!(c.depth(), 0);
    assert!(!c.next());
    assert!(!c.has_current());
}

#[test]
fn map_children_alternate_keys_and_values() {
    // map8 { "k": 7 }
    let data = [0xc1, 0x06, 0x02, 0xa1, 0x01, b'k', 0x54, 0x07];
    let mut c = BinaryCursor::new(&data);
    assert_eq!(c.kind().unwrap(), Kind::Map);

    c.descend().unwrap();
    assert_eq!(c.get::<String>().unwrap(), "k");
    assert!(c.next());
    assert_eq!(c.get::<i32>().unwrap(), 7);
    assert!(!c.next());
}

#[test]
fn array_elements_share_one_constructor() {
    let mut data = vec![0xe0, 14, 3, 0x71];
    for v in [1i32, 2, 3] {
        data.extend_from_slice(&v.to_be_bytes());
    }
    let mut c = BinaryCursor::new(&data);
    assert_eq!(c.kind().unwrap(), Kind::Array);

    c.descend().unwrap();
    let mut seen = Vec::new();
    while c.has_current() {
        assert_eq!(c.kind().unwrap(), Kind::Int);
        seen.push(c.get::<i32>().unwrap());
        c.next();
    }
    assert_eq!(seen, vec![1, 2, 3]);
}

#[test]
fn list32_and_compact_integer_encodings() {
    // list32 [int 9], ulong0, smallulong 7, uint0
    let data = [
        0xd0, 0, 0, 0, 9, 0, 0, 0, 1, 0x71, 0, 0, 0, 9, 0x44, 0x53, 0x07, 0x43,
    ];
    let mut c = BinaryCursor::new(&data);

    c.descend().unwrap();
    assert_eq!(c.get::<i32>().unwrap(), 9);
    assert!(!c.next());
    c.ascend();

    assert!(c.next());
    assert_eq!(c.get::<u64>().unwrap(), 0);
    assert!(c.next());
    assert_eq!(c.get::<u64>().unwrap(), 7);
    assert!(c.next());
    assert_eq!(c.get::<u32>().unwrap(), 0);
}

#[test]
fn truncated_string_is_reported_and_exhausts_the_level() {
    let data = [0xa1, 0x05, b'a'];
    let mut c = BinaryCursor::new(&data);

    assert!(matches!(c.scalar(), Err(DecodeError::Truncated { .. })));
    assert!(!c.next());
    assert!(!c.has_current());
}

#[test]
fn invalid_format_code_is_an_error() {
    let data = [0x01];
    let c = BinaryCursor::new(&data);
    assert!(matches!(
        c.kind(),
        Err(DecodeError::InvalidFormatCode { code: 0x01, .. })
    ));
}

#[test]
fn descending_into_a_scalar_fails() {
    let data = [0x54, 0x01];
    let mut c = BinaryCursor::new(&data);
    assert!(matches!(
        c.descend(),
        Err(DecodeError::NotCompound { kind: Kind::Int })
    ));
    assert_eq!(c.depth(), 0);
}

#[test]
fn get_rejects_the_wrong_scalar_type() {
    let data = [0x54, 0x01];
    let c = BinaryCursor::new(&data);
    assert!(matches!(c.get::<String>(), Err(DecodeError::ValueType(_))));
    assert_eq!(c.get::<Option<i32>>().unwrap(), Some(1));
}

fn read_string_from_list(c: &mut BinaryCursor<'_>) -> Result<String, DecodeError> {
    let mut c = AutoNext::new(c);
    let entered = AutoEnter::new(&mut *c)?;
    entered.get::<String>()
}

#[test]
fn guards_restore_position_on_error_paths() {
    // list8 [1], null
    let data = [0xc0, 0x03, 0x01, 0x54, 0x01, 0x40];
    let mut c = BinaryCursor::new(&data);

    let err = read_string_from_list(&mut c).expect_err("int is not a string");
    assert!(matches!(err, DecodeError::ValueType(_)));
    assert_eq!(c.depth(), 0);
    assert_eq!(c.kind().unwrap(), Kind::Null);
}

#[test]
fn guards_advance_past_a_failed_descend() {
    // int 1, null
    let data = [0x54, 0x01, 0x40];
    let mut c = BinaryCursor::new(&data);

    assert!(read_string_from_list(&mut c).is_err());
    assert_eq!(c.depth(), 0);
    assert_eq!(c.kind().unwrap(), Kind::Null);
}

#[test]
fn cloned_cursor_is_independent() {
    let data = [0x54, 0x01, 0x54, 0x02];
    let mut c = BinaryCursor::new(&data);
    let saved = c.clone();

    c.next();
    assert_eq!(c.get::<i32>().unwrap(), 2);
    assert_eq!(saved.get::<i32>().unwrap(), 1);
    assert_eq!(saved.offset(), 0);
}
