use ordered_tree::{OrderedTree, SearchTree, TreeErrorKind};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a multiset model.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same elements, with the same multiplicities, in both.
fn do_ops<E, T>(ops: &[Op<E>], tree: &mut T, model: &mut BTreeMap<E, usize>) -> bool
where
    E: Ord + Clone,
    T: SearchTree<E>,
{
    for op in ops {
        match op {
            Op::Insert(e) => {
                tree.insert(e.clone());
                *model.entry(e.clone()).or_default() += 1;
            }
            Op::Delete(e) => {
                let removed = match tree.delete(e) {
                    Ok(removed) => removed,
                    Err(err) => {
                        if err.kind() != TreeErrorKind::EmptyTree || !model.is_empty() {
                            return false;
                        }
                        continue;
                    }
                };
                match model.get_mut(e) {
                    Some(count) if *count > 1 => *count -= 1,
                    Some(_) => {
                        model.remove(e);
                    }
                    None if removed => return false,
                    None => {}
                }
            }
        }
    }

    true
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::<i8>::new();
    let mut model = BTreeMap::new();

    if !do_ops(&ops, &mut tree, &mut model) {
        return false;
    }

    let expected = format!(
        "[{}]",
        model
            .keys()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );
    tree.size() == model.values().sum::<usize>()
        && tree.is_empty() == model.is_empty()
        && tree.in_order() == expected
}

#[quickcheck]
fn size_counts_every_insert(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    tree.size() == xs.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    xs.iter()
        .all(|x| tree.contains(x) == Ok(true) && tree.search(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    let size = tree.size();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let nots: Vec<_> = nots.difference(&added).copied().collect();

    if added.is_empty() {
        return nots
            .iter()
            .all(|x| tree.contains(x).map_err(|e| e.kind()) == Err(TreeErrorKind::EmptyTree));
    }

    nots.iter().all(|x| {
        tree.contains(x) == Ok(false)
            && tree.search(x).map_err(|e| e.kind()) == Err(TreeErrorKind::NotFound)
            && tree.delete(x) == Ok(false)
    }) && tree.size() == size
        && added.iter().all(|x| tree.contains(x) == Ok(true))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        // Each delete only removes one occurrence, so repeat until it's gone.
        while tree.delete(delete) == Ok(true) {}
    }

    let mut still_present = xs;
    still_present.retain(|x| !deletes.contains(x));

    tree.size() == still_present.len()
        && deletes
            .iter()
            .all(|x| tree.is_empty() || tree.contains(x) == Ok(false))
        && still_present.iter().all(|x| tree.contains(x) == Ok(true))
}

#[quickcheck]
fn delete_k_times_after_k_inserts(x: i8, k: u8) -> bool {
    let k = usize::from(k % 16) + 1;
    let mut tree = OrderedTree::new();
    for _ in 0..k {
        tree.insert(x);
    }

    for remaining in (0..k).rev() {
        if tree.delete(&x) != Ok(true) || tree.size() != remaining {
            return false;
        }
    }

    tree.contains(&x).map_err(|e| e.kind()) == Err(TreeErrorKind::EmptyTree)
}
