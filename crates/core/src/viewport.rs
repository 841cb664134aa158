use std::collections::BTreeMap;

/// Identifies one split-screen view. Single-screen hosts only ever use
/// [`ViewportId::PRIMARY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ViewportId(pub u8);

impl ViewportId {
    pub const PRIMARY: Self = Self(0);
}

/// One independent value per viewport, created with `T::default()` on first use.
#[derive(Debug, Clone, Default)]
pub struct PerViewport<T> {
    values: BTreeMap<ViewportId, T>,
}

impl<T: Default> PerViewport<T> {
    pub fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// The value for `viewport`, if that viewport was ever touched.
    pub fn get(&self, viewport: ViewportId) -> Option<&T> {
        self.values.get(&viewport)
    }

    pub fn get_mut(&mut self, viewport: ViewportId) -> &mut T {
        self.values.entry(viewport).or_default()
    }

    /// Replace the value for `viewport`, returning the old one.
    pub fn set(&mut self, viewport: ViewportId, value: T) -> T {
        std::mem::replace(self.get_mut(viewport), value)
    }
}
