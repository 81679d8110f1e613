mod ordered;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<E> {
    /// Insert one occurrence of E
    Insert(E),
    /// Delete one occurrence of E
    Delete(E),
}

impl<E> Arbitrary for Op<E>
where
    E: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(E::arbitrary(g))
        } else {
            Op::Delete(E::arbitrary(g))
        }
    }
}
