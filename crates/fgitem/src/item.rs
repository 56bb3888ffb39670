use std::collections::BTreeMap;

use log::trace;

use crate::{Error, Result, Tag, Value, ValueKind};

/// Tag-indexed set of elements, iterated in ascending tag order.
///
/// An item owns its nested sequences. There is no link back to an enclosing
/// item, so any derived context (e.g. the character set of the dataset) must be
/// looked up by the caller before handing nested items to other threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Item {
    elements: BTreeMap<Tag, Value>,
}

impl Item {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements in the item.
    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn contains(&self, tag: Tag) -> bool {
        self.elements.contains_key(&tag)
    }

    #[inline]
    pub fn get(&self, tag: Tag) -> Option<&Value> {
        self.elements.get(&tag)
    }

    #[inline]
    pub fn get_mut(&mut self, tag: Tag) -> Option<&mut Value> {
        self.elements.get_mut(&tag)
    }

    /// Inserts an element, returning the value it replaced.
    #[inline]
    pub fn insert(&mut self, tag: Tag, value: Value) -> Option<Value> {
        self.elements.insert(tag, value)
    }

    #[inline]
    pub fn remove(&mut self, tag: Tag) -> Option<Value> {
        self.elements.remove(&tag)
    }

    /// Iterates elements with their tag, in ascending tag order.
    pub fn elements(&self) -> impl Iterator<Item = (Tag, &Value)> {
        self.elements.iter().map(|(&tag, value)| (tag, value))
    }

    /// Inserts an empty element of the given kind.
    ///
    /// Returns `Error::ElementExists` if the tag is present and `replace_old` is false.
    pub fn insert_empty(&mut self, tag: Tag, kind: ValueKind, replace_old: bool) -> Result<()> {
        if !replace_old && self.contains(tag) {
            return Err(Error::ElementExists(tag));
        }
        self.insert(tag, Value::empty(kind));
        Ok(())
    }

    /// Returns the items of the sequence with the given tag.
    pub fn find_sequence(&self, tag: Tag) -> Result<&[Item]> {
        match self.get(tag) {
            Some(Value::Sequence(items)) => Ok(items),
            Some(_) => Err(Error::NotASequence(tag)),
            None => Err(Error::SequenceNotFound(tag)),
        }
    }

    pub fn find_sequence_mut(&mut self, tag: Tag) -> Result<&mut Vec<Item>> {
        match self.get_mut(tag) {
            Some(Value::Sequence(items)) => Ok(items),
            Some(_) => Err(Error::NotASequence(tag)),
            None => Err(Error::SequenceNotFound(tag)),
        }
    }

    /// Returns item `index` of the sequence with the given tag.
    pub fn sequence_item(&self, tag: Tag, index: usize) -> Result<&Item> {
        let items = self.find_sequence(tag)?;
        items.get(index).ok_or(Error::ItemIndexOutOfRange {
            tag,
            index,
            len: items.len(),
        })
    }

    /// Returns item `index` of the sequence with the given tag, creating the
    /// sequence and any missing items up to `index` on the way.
    pub fn find_or_create_sequence_item(&mut self, tag: Tag, index: usize) -> Result<&mut Item> {
        if !self.contains(tag) {
            self.insert(tag, Value::Sequence(vec![]));
        }
        let items = self.find_sequence_mut(tag)?;
        if index >= items.len() {
            trace!("Growing sequence {tag} from {} to {} item(s)", items.len(), index + 1);
            items.resize_with(index + 1, Item::default);
        }
        Ok(&mut items[index])
    }

    /// Inserts `item` at position `index` of the sequence, shifting later items.
    ///
    /// The sequence is created if absent. `index` may be at most the current length.
    pub fn insert_sequence_item(&mut self, tag: Tag, index: usize, item: Item) -> Result<()> {
        if !self.contains(tag) {
            self.insert(tag, Value::Sequence(vec![]));
        }
        let items = self.find_sequence_mut(tag)?;
        if index > items.len() {
            return Err(Error::ItemIndexOutOfRange {
                tag,
                index,
                len: items.len(),
            });
        }
        items.insert(index, item);
        Ok(())
    }

    // Typed accessors

    pub fn get_strings(&self, tag: Tag) -> Result<&[String]> {
        match self.get(tag) {
            Some(Value::Strings(values)) => Ok(values),
            Some(value) => Err(Self::wrong_kind(tag, value, ValueKind::Strings)),
            None => Err(Error::ElementNotFound(tag)),
        }
    }

    pub fn get_string(&self, tag: Tag, pos: usize) -> Result<&str> {
        let values = self.get_strings(tag)?;
        values
            .get(pos)
            .map(String::as_str)
            .ok_or(Error::ValueCountMismatch {
                tag,
                expected: pos + 1,
                actual: values.len(),
            })
    }

    pub fn put_string(&mut self, tag: Tag, value: &str) {
        self.insert(tag, Value::Strings(vec![value.to_owned()]));
    }

    pub fn put_strings(&mut self, tag: Tag, values: &[String]) {
        self.insert(tag, Value::Strings(values.to_vec()));
    }

    pub fn get_floats(&self, tag: Tag) -> Result<&[f64]> {
        match self.get(tag) {
            Some(Value::Floats(values)) => Ok(values),
            Some(value) => Err(Self::wrong_kind(tag, value, ValueKind::Floats)),
            None => Err(Error::ElementNotFound(tag)),
        }
    }

    pub fn get_float(&self, tag: Tag, pos: usize) -> Result<f64> {
        let values = self.get_floats(tag)?;
        values.get(pos).copied().ok_or(Error::ValueCountMismatch {
            tag,
            expected: pos + 1,
            actual: values.len(),
        })
    }

    pub fn put_floats(&mut self, tag: Tag, values: &[f64]) {
        self.insert(tag, Value::Floats(values.to_vec()));
    }

    pub fn get_uints(&self, tag: Tag) -> Result<&[u32]> {
        match self.get(tag) {
            Some(Value::UInts(values)) => Ok(values),
            Some(value) => Err(Self::wrong_kind(tag, value, ValueKind::UInts)),
            None => Err(Error::ElementNotFound(tag)),
        }
    }

    pub fn get_uint(&self, tag: Tag, pos: usize) -> Result<u32> {
        let values = self.get_uints(tag)?;
        values.get(pos).copied().ok_or(Error::ValueCountMismatch {
            tag,
            expected: pos + 1,
            actual: values.len(),
        })
    }

    pub fn put_uints(&mut self, tag: Tag, values: &[u32]) {
        self.insert(tag, Value::UInts(values.to_vec()));
    }

    #[inline]
    fn wrong_kind(tag: Tag, value: &Value, expected: ValueKind) -> Error {
        Error::WrongValueKind {
            tag,
            found: value.kind(),
            expected,
        }
    }
}

impl FromIterator<(Tag, Value)> for Item {
    fn from_iter<T: IntoIterator<Item = (Tag, Value)>>(iter: T) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}
