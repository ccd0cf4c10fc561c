//! Conversions between edge labels and the integer values of the text formats.

/// An edge label that can be built from (and optionally written back as) the integer
/// value attached to an adjacency-list token.
pub trait EdgeValue: Sized {
    /// Returns `None` when `value` is not representable by this label type.
    fn from_value(value: i64) -> Option<Self>;

    fn value(&self) -> Option<i64> {
        None
    }
}

impl EdgeValue for () {
    fn from_value(_: i64) -> Option<Self> {
        Some(())
    }
}

impl EdgeValue for i64 {
    fn from_value(value: i64) -> Option<Self> {
        Some(value)
    }

    fn value(&self) -> Option<i64> {
        Some(*self)
    }
}

impl EdgeValue for i32 {
    fn from_value(value: i64) -> Option<Self> {
        i32::try_from(value).ok()
    }

    fn value(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl EdgeValue for u32 {
    fn from_value(value: i64) -> Option<Self> {
        u32::try_from(value).ok()
    }

    fn value(&self) -> Option<i64> {
        Some(i64::from(*self))
    }
}

impl EdgeValue for u64 {
    fn from_value(value: i64) -> Option<Self> {
        u64::try_from(value).ok()
    }

    fn value(&self) -> Option<i64> {
        i64::try_from(*self).ok()
    }
}
