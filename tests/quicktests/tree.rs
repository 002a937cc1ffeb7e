use plain_bst::{Order, Tree};

use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set, checking every
/// step against the set. This way we can ensure that after a random
/// smattering of inserts and deletes we have the same elements in both.
fn do_ops<T>(ops: &[Op<T>], bst: &mut Tree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone + std::fmt::Debug,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                assert_eq!(bst.insert(x.clone()).is_ok(), set.insert(x.clone()));
            }
            Op::Remove(x) => {
                assert_eq!(bst.delete(x), set.take(x));
            }
            Op::Iter => {
                assert!(bst.iter().eq(set.iter()));
            }
        }
        assert_eq!(bst.len(), set.len());
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.get(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.delete(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn duplicates_leave_tree_unchanged(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    let before: Vec<i8> = tree.traversal(Order::PreOrder).map(|n| *n.data()).collect();
    let len = tree.len();

    let all_refused = xs.iter().all(|x| tree.insert(*x).is_err());
    let after: Vec<i8> = tree.traversal(Order::PreOrder).map(|n| *n.data()).collect();

    all_refused && before == after && tree.len() == len
}

#[quickcheck]
fn insert_then_delete_restores_len(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<i8> = xs.into_iter().filter(|y| *y != x).collect();
    let len = tree.len();

    tree.insert(x).is_ok()
        && tree.delete(&x) == Some(x)
        && tree.find(&x).is_none()
        && tree.len() == len
}

#[quickcheck]
fn traversals_visit_every_node_once(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();

    [Order::PreOrder, Order::InOrder, Order::PostOrder]
        .into_iter()
        .all(|order| {
            let mut visited = Vec::new();
            tree.traverse(order, |node| visited.push(*node.data()));
            visited.sort_unstable();
            visited.iter().eq(tree.iter())
        })
}

#[quickcheck]
fn clear_empties_everything(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    tree.clear();

    let emptied = tree.is_empty() && tree.len() == 0 && xs.iter().all(|x| !tree.contains(x));

    tree.extend(ys.iter().copied());
    let fresh: BTreeSet<i8> = ys.into_iter().collect();

    emptied && tree.iter().eq(fresh.iter())
}
