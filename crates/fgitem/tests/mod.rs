use fgitem::{Error, Item, Result, Tag, Value, ValueKind, tags};

const SEQ: Tag = tags::PER_FRAME_FUNCTIONAL_GROUPS_SEQUENCE;

/// Helper to build a dataset with a sequence of `count` items, each carrying its index.
fn dataset_with_frames(count: u32) -> Result<Item> {
    let mut dataset = Item::new();
    for i in 0..count {
        let frame = dataset.find_or_create_sequence_item(SEQ, i as usize)?;
        frame.put_uints(tags::FRAME_ACQUISITION_NUMBER, &[i]);
    }
    Ok(dataset)
}

#[test]
fn test_empty_item() {
    let item = Item::new();
    assert!(item.is_empty());
    assert_eq!(item.len(), 0);
    assert!(matches!(item.find_sequence(SEQ), Err(Error::SequenceNotFound(tag)) if tag == SEQ));
}

#[test]
fn test_tag_display() {
    assert_eq!(tags::PIXEL_MEASURES_SEQUENCE.to_string(), "(0028,9110)");
    assert_eq!(Tag::from((0x0062, 0x000A)).to_string(), "(0062,000A)");
    assert!(Tag::new(0x0020, 0x0032) < Tag::new(0x0020, 0x0037));
}

#[test]
fn test_find_or_create_grows_sequence() -> Result<()> {
    let mut dataset = Item::new();

    dataset.find_or_create_sequence_item(SEQ, 3)?;
    assert_eq!(dataset.find_sequence(SEQ)?.len(), 4);

    // Existing item is returned, not recreated
    dataset
        .find_or_create_sequence_item(SEQ, 1)?
        .put_string(tags::STACK_ID, "1");
    assert_eq!(dataset.find_sequence(SEQ)?.len(), 4);
    assert_eq!(dataset.sequence_item(SEQ, 1)?.get_string(tags::STACK_ID, 0)?, "1");

    Ok(())
}

#[test]
fn test_sequence_item_out_of_range() -> Result<()> {
    let dataset = dataset_with_frames(2)?;

    let err = dataset.sequence_item(SEQ, 2).unwrap_err();
    assert!(matches!(
        err,
        Error::ItemIndexOutOfRange { index: 2, len: 2, .. }
    ));

    Ok(())
}

#[test]
fn test_not_a_sequence() {
    let mut item = Item::new();
    item.put_floats(tags::IMAGE_POSITION_PATIENT, &[1.0, 2.0, 3.0]);

    assert!(matches!(
        item.find_sequence(tags::IMAGE_POSITION_PATIENT),
        Err(Error::NotASequence(_))
    ));
    assert!(matches!(
        item.find_or_create_sequence_item(tags::IMAGE_POSITION_PATIENT, 0),
        Err(Error::NotASequence(_))
    ));
}

#[test]
fn test_insert_empty() -> Result<()> {
    let mut dataset = dataset_with_frames(3)?;

    let result = dataset.insert_empty(SEQ, ValueKind::Sequence, false);
    assert!(matches!(result, Err(Error::ElementExists(_))));
    assert_eq!(dataset.find_sequence(SEQ)?.len(), 3);

    dataset.insert_empty(SEQ, ValueKind::Sequence, true)?;
    assert!(dataset.find_sequence(SEQ)?.is_empty());

    Ok(())
}

#[test]
fn test_insert_sequence_item_at_index() -> Result<()> {
    let mut dataset = dataset_with_frames(2)?;

    let mut middle = Item::new();
    middle.put_uints(tags::FRAME_ACQUISITION_NUMBER, &[99]);
    dataset.insert_sequence_item(SEQ, 1, middle)?;

    let numbers: Vec<u32> = dataset
        .find_sequence(SEQ)?
        .iter()
        .map(|item| item.get_uint(tags::FRAME_ACQUISITION_NUMBER, 0))
        .collect::<Result<_>>()?;
    assert_eq!(numbers, vec![0, 99, 1]);

    let result = dataset.insert_sequence_item(SEQ, 10, Item::new());
    assert!(matches!(result, Err(Error::ItemIndexOutOfRange { index: 10, len: 3, .. })));

    Ok(())
}

#[test]
fn test_elements_iterate_in_tag_order() {
    let mut item = Item::new();
    item.put_floats(tags::PIXEL_SPACING, &[0.5, 0.5]);
    item.insert(tags::PLANE_POSITION_SEQUENCE, Value::Sequence(vec![]));
    item.put_string(tags::STACK_ID, "A");

    let kinds: Vec<_> = item.elements().map(|(tag, value)| (tag, value.kind())).collect();
    assert_eq!(
        kinds,
        vec![
            (tags::STACK_ID, ValueKind::Strings),
            (tags::PLANE_POSITION_SEQUENCE, ValueKind::Sequence),
            (tags::PIXEL_SPACING, ValueKind::Floats),
        ]
    );
}

#[test]
fn test_typed_access_errors() {
    let mut item = Item::new();
    item.put_floats(tags::IMAGE_ORIENTATION_PATIENT, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    assert!(matches!(
        item.get_strings(tags::IMAGE_ORIENTATION_PATIENT),
        Err(Error::WrongValueKind {
            found: ValueKind::Floats,
            expected: ValueKind::Strings,
            ..
        })
    ));
    assert!(matches!(
        item.get_float(tags::IMAGE_ORIENTATION_PATIENT, 6),
        Err(Error::ValueCountMismatch {
            expected: 7,
            actual: 6,
            ..
        })
    ));
    assert!(matches!(
        item.get_uints(tags::DIMENSION_INDEX_VALUES),
        Err(Error::ElementNotFound(_))
    ));
}

#[test]
fn test_clone_is_deep() -> Result<()> {
    let original = dataset_with_frames(2)?;
    let mut copy = original.clone();

    copy.find_or_create_sequence_item(SEQ, 0)?
        .put_uints(tags::FRAME_ACQUISITION_NUMBER, &[42]);

    assert_eq!(
        original.sequence_item(SEQ, 0)?.get_uint(tags::FRAME_ACQUISITION_NUMBER, 0)?,
        0
    );
    assert_ne!(original, copy);

    Ok(())
}
