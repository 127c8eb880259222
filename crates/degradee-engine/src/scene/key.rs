/// Paint layer. Commands on a higher layer cover those on lower ones.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(layer: i32) -> Self {
        Self(layer)
    }
}

/// Ordering of a recorded command: layer first, then recording order.
///
/// The derived `Ord` compares fields top to bottom, which is exactly the
/// back-to-front paint order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
