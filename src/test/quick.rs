use quickcheck::{Arbitrary, Gen};

use crate::Order;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<E> {
    /// Insert one occurrence of E
    Insert(E),
    /// Delete one occurrence of E
    Delete(E),
    /// Compare a traversal against the model
    Traverse(Order),
}

impl<E> Arbitrary for Op<E>
where
    E: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are weighted so trees
    /// actually grow before deletes empty them again.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).copied() {
            Some(0) => Op::Insert(E::arbitrary(g)),
            Some(1) => Op::Delete(E::arbitrary(g)),
            _ => Op::Traverse(Order::arbitrary(g)),
        }
    }
}

impl Arbitrary for Order {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&[Order::In, Order::Pre, Order::Post]).unwrap()
    }
}
