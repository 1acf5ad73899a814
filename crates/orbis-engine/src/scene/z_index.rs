/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values. Items sharing a z-index keep
/// their insertion order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
