use binary_tree::data_gen::{generate_distinct_i32, generate_normal_i32, generate_sorted_i32};
use binary_tree::{DuplicateValueError, NodeRef, Side, Tree};
use rand::Rng;
use rand::thread_rng;
use std::collections::BTreeSet;

fn collect_forward(tree: &Tree<i32>) -> Vec<i32> {
    let mut cursor = tree.cursor();
    let mut values = Vec::new();
    while cursor.move_next() {
        values.push(*cursor.current().unwrap());
    }
    values
}

fn nodes(tree: &Tree<i32>) -> Vec<NodeRef<'_, i32>> {
    let mut out = Vec::new();
    let mut stack: Vec<_> = tree.root().into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node);
        stack.extend(node.left());
        stack.extend(node.right());
    }
    out
}

fn subtree_values(node: Option<NodeRef<'_, i32>>) -> Vec<i32> {
    binary_tree::PreOrder::new(node).copied().collect()
}

#[test]
fn sorted_scenario() {
    let tree = Tree::from_values([8, 3, 10, 1, 6, 4, 7, 14, 16]).unwrap();
    assert_eq!(collect_forward(&tree), vec![1, 3, 4, 6, 7, 8, 10, 14, 16]);
}

#[test]
fn duplicate_scenario() {
    let mut tree = Tree::new();
    tree.add(5).unwrap();
    let err: DuplicateValueError<i32> = tree.add(5).unwrap_err();
    assert_eq!(*err.value(), 5);
    assert_eq!(tree.len(), 1);
    assert_eq!(collect_forward(&tree), vec![5]);
    assert!(tree.root().unwrap().is_leaf());
}

#[test]
fn traversal_scenario() {
    let tree = Tree::from_values([2, 1, 3]).unwrap();
    assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), vec![2, 1, 3]);
    assert_eq!(tree.reverse_order().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn backward_scenario() {
    let tree = Tree::from_values([8, 3, 10, 1, 6, 4, 7, 14, 16]).unwrap();
    let mut cursor = tree.cursor();
    for _ in 0..9 {
        assert!(cursor.move_next());
    }
    let mut values = Vec::new();
    for _ in 0..8 {
        assert!(cursor.move_previous());
        values.push(*cursor.current().unwrap());
    }
    assert_eq!(values, vec![14, 10, 8, 7, 6, 4, 3, 1]);
    assert!(!cursor.move_previous());
}

#[test]
fn empty_scenario() {
    let tree: Tree<i32> = Tree::new();
    let mut cursor = tree.cursor();
    assert!(!cursor.move_next());
    assert_eq!(cursor.current(), None);
    assert!(tree.root().is_none());
}

#[test]
fn invariants_hold_for_random_insertions() {
    let mut rng = thread_rng();
    for _ in 0..25 {
        let count = rng.gen_range(0..400);
        let values = generate_distinct_i32(count, -10_000, 10_000);
        let tree = Tree::from_values(values.iter().copied()).unwrap();

        let expected: Vec<i32> = values.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        assert_eq!(collect_forward(&tree), expected);

        for node in nodes(&tree) {
            let value = *node.value();
            assert!(subtree_values(node.left()).iter().all(|&v| v < value));
            assert!(subtree_values(node.right()).iter().all(|&v| v > value));

            match node.parent() {
                None => {
                    assert_eq!(node.side(), Side::Root);
                    assert_eq!(tree.root(), Some(node));
                }
                Some(parent) => {
                    let is_left = parent.left() == Some(node);
                    let is_right = parent.right() == Some(node);
                    assert!(is_left ^ is_right);
                    assert_eq!(node.side(), if is_left { Side::Left } else { Side::Right });
                }
            }
        }
    }
}

#[test]
fn rejected_duplicates_leave_shape_unchanged() {
    let mut tree = Tree::new();
    let mut oracle = BTreeSet::new();
    for value in generate_normal_i32(2_000, 0.0, 100.0).unwrap() {
        let before = (tree.len(), tree.height(), tree.render());
        match tree.add(value) {
            Ok(id) => {
                assert!(oracle.insert(value));
                assert_eq!(tree.value(id), Some(&value));
                assert!(tree.node(id).unwrap().is_leaf());
            }
            Err(err) => {
                assert!(oracle.contains(&value));
                assert_eq!(err.into_value(), value);
                assert_eq!((tree.len(), tree.height(), tree.render()), before);
            }
        }
    }
    assert_eq!(tree.len(), oracle.len());
}

#[test]
fn round_trip_walk_on_degenerate_tree() {
    let values = generate_sorted_i32(3_000);
    let tree = Tree::from_values(values.iter().rev().copied()).unwrap();
    let mut cursor = tree.cursor();
    while cursor.move_next() {}
    let mut descending = Vec::new();
    while cursor.move_previous() {
        descending.push(*cursor.current().unwrap());
    }
    descending.reverse();
    assert_eq!(descending, values);
}

#[test]
fn into_iterator_for_reference() {
    let tree = Tree::from_values(["m", "c", "x"]).unwrap();
    let mut seen = Vec::new();
    for value in &tree {
        seen.push(*value);
    }
    assert_eq!(seen, vec!["c", "m", "x"]);
}
