use binary_tree::Tree;
use binary_tree::data_gen::{generate_shuffled_i32, generate_smooth_i32};

fn main() {
    let empty: Tree<i32> = Tree::new();
    empty.pretty_print();

    let mut tree = Tree::new();
    for value in [50, 25, 75, 12, 37, 62, 87] {
        tree.add(value).expect("demo values are distinct");
    }
    tree.pretty_print();
    println!("pre-order: {:?}", tree.pre_order().collect::<Vec<_>>());
    println!("reverse:   {:?}", tree.reverse_order().collect::<Vec<_>>());

    // unbalanced tree
    let chain = Tree::from_values([1, 2, 3, 4, 5]).expect("demo values are distinct");
    chain.pretty_print();
    println!("height of sorted insertion: {}", chain.height());

    let shuffled = Tree::from_values(generate_shuffled_i32(1000)).expect("shuffle keeps values distinct");
    println!("height of 1000 shuffled values: {}", shuffled.height());

    // normally distributed input repeats values; those are rejected
    let mut smooth = Tree::new();
    let mut rejected = 0;
    for value in generate_smooth_i32(Some(200)).expect("std dev derived from a non-zero count") {
        if let Err(err) = smooth.add(value) {
            println!("{err}");
            rejected += 1;
        }
    }
    println!("kept {} values, rejected {rejected}", smooth.len());
}
