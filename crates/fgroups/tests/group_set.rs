mod common;

use common::{TestGroup, value_of};
use fgroups::{
    DuplicateGroup, Error, FunctionalGroup, GroupRegistry, GroupSet, GroupType, PixelMeasures,
    PlanePosition, Result, SharingMode, Tag, tags,
};

fn anatomy(value: &str) -> Box<dyn FunctionalGroup> {
    Box::new(TestGroup::new(
        GroupType::FrameAnatomy,
        SharingMode::MayBeEither,
        value,
    ))
}

#[test]
fn test_insert_and_find() -> Result<()> {
    let mut groups = GroupSet::new();
    assert!(groups.is_empty());

    groups.insert(Box::new(PlanePosition::new([1.0, 2.0, 3.0])), false)?;
    groups.insert(anatomy("left"), false)?;

    assert_eq!(groups.len(), 2);
    assert!(groups.contains(GroupType::PlanePosition));
    assert!(!groups.contains(GroupType::PixelMeasures));
    assert_eq!(value_of(groups.find(GroupType::FrameAnatomy).unwrap()), "left");
    assert!(groups.find(GroupType::PixelMeasures).is_none());

    Ok(())
}

#[test]
fn test_duplicate_insert_hands_group_back() -> Result<()> {
    let mut groups = GroupSet::new();
    groups.insert(anatomy("first"), false)?;

    let DuplicateGroup { group } = groups.insert(anatomy("second"), false).unwrap_err();
    assert_eq!(value_of(group.as_ref()), "second");
    assert_eq!(value_of(groups.find(GroupType::FrameAnatomy).unwrap()), "first");

    let duplicate = groups.insert(group, false).unwrap_err();
    assert_eq!(duplicate.to_string(), "Functional group Frame Anatomy already exists");
    let err: Error = duplicate.into();
    assert!(matches!(err, Error::DuplicateGroup(GroupType::FrameAnatomy)));

    Ok(())
}

#[test]
fn test_insert_replaces_old() -> Result<()> {
    let mut groups = GroupSet::new();
    groups.insert(anatomy("first"), false)?;
    groups.insert(anatomy("second"), true)?;

    assert_eq!(groups.len(), 1);
    assert_eq!(value_of(groups.find(GroupType::FrameAnatomy).unwrap()), "second");

    Ok(())
}

#[test]
fn test_find_mut_remove_clear() -> Result<()> {
    let mut groups = GroupSet::new();
    groups.insert(Box::new(PlanePosition::default()), false)?;
    groups.insert(Box::new(PixelMeasures::new([1.0, 1.0], None)), false)?;

    let group = groups.find_mut(GroupType::PlanePosition).unwrap();
    group.read(&{
        let mut item = fgroups::Item::new();
        PlanePosition::new([4.0, 5.0, 6.0]).write(&mut item)?;
        item
    })?;
    assert!(
        groups
            .find(GroupType::PlanePosition)
            .unwrap()
            .content_eq(&PlanePosition::new([4.0, 5.0, 6.0]))
    );

    let removed = groups.remove(GroupType::PlanePosition).unwrap();
    assert_eq!(removed.group_type(), GroupType::PlanePosition);
    assert!(groups.remove(GroupType::PlanePosition).is_none());
    assert_eq!(groups.len(), 1);

    groups.clear();
    assert!(groups.is_empty());

    Ok(())
}

#[test]
fn test_iteration_follows_type_order() -> Result<()> {
    let mut groups = GroupSet::new();
    groups.insert(Box::new(PlanePosition::default()), false)?;
    groups.insert(Box::new(PixelMeasures::default()), false)?;
    groups.insert(anatomy("v"), false)?;

    let types: Vec<_> = groups.types().collect();
    let mut sorted = types.clone();
    sorted.sort();
    assert_eq!(types, sorted);
    assert_eq!(
        groups.iter().map(|group| group.group_type()).collect::<Vec<_>>(),
        types
    );

    Ok(())
}

#[test]
fn test_content_eq() -> Result<()> {
    let mut a = GroupSet::new();
    let mut b = GroupSet::new();
    assert!(a.content_eq(&b));

    a.insert(anatomy("v"), false)?;
    assert!(!a.content_eq(&b));
    assert!(!b.content_eq(&a));

    b.insert(anatomy("w"), false)?;
    assert!(!a.content_eq(&b));

    b.insert(anatomy("v"), true)?;
    assert!(a.content_eq(&b));

    a.insert(Box::new(PlanePosition::default()), false)?;
    b.insert(Box::new(PixelMeasures::default()), false)?;
    assert!(!a.content_eq(&b));

    Ok(())
}

#[test]
fn test_standard_registry() {
    let registry = GroupRegistry::standard();
    assert_eq!(registry.len(), 4);
    assert!(registry.contains(tags::FRAME_CONTENT_SEQUENCE));
    assert!(registry.contains(tags::PLANE_POSITION_SEQUENCE));
    assert!(!registry.contains(tags::CT_EXPOSURE_SEQUENCE));

    let group = registry.resolve(tags::PIXEL_MEASURES_SEQUENCE).unwrap();
    assert_eq!(group.group_type(), GroupType::PixelMeasures);
    assert!(registry.resolve(Tag::new(0x0009, 0x0010)).is_none());

    for tag in [
        tags::FRAME_CONTENT_SEQUENCE,
        tags::PIXEL_MEASURES_SEQUENCE,
        tags::PLANE_ORIENTATION_SEQUENCE,
        tags::PLANE_POSITION_SEQUENCE,
    ] {
        let group = registry.resolve(tag).unwrap();
        assert_eq!(group.group_type().sequence_tag(), Some(tag));
    }

    assert!(GroupRegistry::empty().is_empty());
}

#[test]
fn test_register_default() -> Result<()> {
    let mut registry = GroupRegistry::empty();
    registry.register_default::<PlanePosition>()?;

    assert_eq!(registry.len(), 1);
    let group = registry.resolve(tags::PLANE_POSITION_SEQUENCE).unwrap();
    assert!(group.content_eq(&PlanePosition::default()));

    Ok(())
}

#[test]
fn test_register_custom_codec() {
    let mut registry = GroupRegistry::empty();
    registry.register(tags::FRAME_ANATOMY_SEQUENCE, || anatomy("default"));

    let group = registry.resolve(tags::FRAME_ANATOMY_SEQUENCE).unwrap();
    assert_eq!(value_of(group.as_ref()), "default");

    // Every resolve creates a fresh codec
    let again = registry.resolve(tags::FRAME_ANATOMY_SEQUENCE).unwrap();
    assert!(group.content_eq(again.as_ref()));
}
