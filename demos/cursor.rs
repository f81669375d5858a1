use binary_tree::Tree;

fn main() {
    let tree = Tree::from_values([8, 3, 10, 1, 6, 4, 7, 14, 16]).expect("demo values are distinct");
    tree.pretty_print();

    let mut cursor = tree.cursor();
    print!("forward: ");
    while cursor.move_next() {
        if let Some(node) = cursor.current_node() {
            print!("{}:{} ", node.value(), node.side());
        }
    }
    println!();

    print!("backward:");
    while cursor.move_previous() {
        if let Some(value) = cursor.current() {
            print!(" {value}");
        }
    }
    println!();

    // stop half way, then turn around
    cursor.reset();
    for _ in 0..5 {
        cursor.move_next();
    }
    println!("fifth value: {:?}", cursor.current());
    cursor.move_previous();
    println!("one back:    {:?}", cursor.current());
}
