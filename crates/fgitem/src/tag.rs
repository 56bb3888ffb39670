use std::fmt;

/// Attribute tag made of a group and an element number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tag {
    group: u16,
    element: u16,
}

impl Tag {
    #[inline]
    pub const fn new(group: u16, element: u16) -> Self {
        Self { group, element }
    }

    #[inline(always)]
    pub const fn group(&self) -> u16 {
        self.group
    }

    #[inline(always)]
    pub const fn element(&self) -> u16 {
        self.element
    }
}

impl From<(u16, u16)> for Tag {
    fn from((group, element): (u16, u16)) -> Self {
        Self::new(group, element)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.group, self.element)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
