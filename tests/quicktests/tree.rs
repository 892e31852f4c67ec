use ordered_tree::{Node, OrderedTree};
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a sorted vector.
/// This way we can ensure that after a random smattering of inserts
/// and removes we hold the same values, with the same multiplicity.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, model: &mut Vec<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(x) => {
                tree.insert(x.clone());
                let pos = model.partition_point(|y| y <= x);
                model.insert(pos, x.clone());
            }
            Op::Remove(x) => {
                tree.remove(x);
                if let Ok(pos) = model.binary_search(x) {
                    model.remove(pos);
                }
            }
            Op::Iter => {
                assert!(tree.dfs_in_order().into_iter().eq(model.iter()));
                assert!(tree.iter().eq(model.iter()));
            }
        }
    }
}

fn sort<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values
}

/// Checks the ordering invariant at every node by carrying the bounds each subtree must respect.
fn is_ordered<T: Ord>(node: Option<&Node<T>>, lower: Option<&T>, upper: Option<&T>) -> bool {
    match node {
        None => true,
        Some(n) => {
            lower.map_or(true, |lo| n.value() >= lo)
                && upper.map_or(true, |hi| n.value() < hi)
                && is_ordered(n.left(), lower, Some(n.value()))
                && is_ordered(n.right(), Some(n.value()), upper)
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    tree.dfs_in_order().into_iter().eq(model.iter()) && is_ordered(tree.root(), None, None)
}

#[quickcheck]
fn in_order_is_sorted(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    let mut sorted = xs;
    sorted.sort();
    tree.dfs_in_order().into_iter().eq(sorted.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| {
        tree.find(x).map(Node::value) == Some(x)
            && tree.find_recursively(x).map(Node::value) == Some(x)
    })
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x).is_none() && tree.find_recursively(x).is_none())
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.insert(*x);
    }
    for remove in &removes {
        tree.remove(remove);
    }

    let mut still_present = xs;
    for remove in &removes {
        // Each remove only takes out a single copy of a value.
        if let Some(pos) = still_present.iter().position(|x| x == remove) {
            still_present.swap_remove(pos);
        }
    }

    removes
        .iter()
        .filter(|x| !still_present.contains(x))
        .all(|x| tree.find(x).is_none())
        && still_present.iter().all(|x| tree.find(x).is_some())
        && is_ordered(tree.root(), None, None)
}

#[quickcheck]
fn insert_forms_build_the_same_tree(xs: Vec<i8>) -> bool {
    let mut iterative = OrderedTree::new();
    let mut recursive = OrderedTree::new();
    for x in &xs {
        iterative.insert(*x);
        recursive.insert_recursively(*x);
    }

    iterative.dfs_pre_order() == recursive.dfs_pre_order() && iterative.bfs() == recursive.bfs()
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    let mut sorted = xs;
    sorted.sort();
    sort(tree.dfs_pre_order()).into_iter().eq(sorted.iter())
        && sort(tree.dfs_post_order()).into_iter().eq(sorted.iter())
        && sort(tree.bfs()).into_iter().eq(sorted.iter())
}

#[quickcheck]
fn second_highest_follows_spine(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_> = xs.iter().copied().collect();

    // Every copy of the maximum sits on the rightmost spine, so the answer is
    // always the second to last value in sorted order.
    let mut sorted = xs;
    sorted.sort();
    let expected = if sorted.len() < 2 {
        None
    } else {
        sorted.get(sorted.len() - 2)
    };
    tree.find_second_highest() == expected
}
