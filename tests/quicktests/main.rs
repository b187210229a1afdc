mod linear;
mod tree;

use quickcheck::{Arbitrary, Gen};

/// The operations a quicktest can apply to the linear containers. Each
/// container maps them onto its own API and is checked against a `VecDeque`.
#[derive(Copy, Clone, Debug)]
pub enum ListOp<T> {
    /// Add the T at the front (list) or top (stack)
    PushFront(T),
    /// Add the T at the back (list) or rear (queue)
    PushBack(T),
    /// Take from the front
    PopFront,
    /// Take from the back
    PopBack,
    /// Insert the T at a position. The position is taken modulo `len + 2`
    /// so that some inserts land one past the end and must be rejected.
    Insert(u8, T),
    /// Remove at a position, taken modulo `len + 1`.
    Remove(u8),
}

impl<T> Arbitrary for ListOp<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3, 4, 5]).copied() {
            Some(0) => ListOp::PushFront(T::arbitrary(g)),
            Some(1) => ListOp::PushBack(T::arbitrary(g)),
            Some(2) => ListOp::PopFront,
            Some(3) => ListOp::PopBack,
            Some(4) => ListOp::Insert(u8::arbitrary(g), T::arbitrary(g)),
            _ => ListOp::Remove(u8::arbitrary(g)),
        }
    }
}
