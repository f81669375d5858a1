use anyhow::{Context, Result};
use binary_tree::Tree;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const MENU: &str = "\
Choose an action:
1. Add a new node
2. Print values in sorted order
3. Print the tree in pre-order
4. Print the tree in reverse order (right subtree first)
5. Print the tree in central order (left subtree first)
6. Print the tree shape
7. Step through the tree with a cursor
0. Exit";

fn main() -> Result<()> {
    env_logger::init();
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock())
}

/// Menu loop over a tree of `i32`. Ends on `0` or when input runs out.
fn run(mut input: impl BufRead, mut out: impl Write) -> Result<()> {
    let mut tree = Tree::new();
    writeln!(out, "Binary tree:")?;

    loop {
        writeln!(out, "\n{MENU}")?;
        let Some(choice) = prompt(&mut input, &mut out, "Enter action number: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => {
                let Some(line) = prompt(&mut input, &mut out, "Enter the value of the new node: ")? else {
                    break;
                };
                match line.parse::<i32>() {
                    Ok(value) => match tree.add(value) {
                        Ok(_) => writeln!(out, "New node added.")?,
                        Err(err) => writeln!(out, "Cannot add node: {err}.")?,
                    },
                    Err(_) => writeln!(out, "Invalid node value: {line:?}.")?,
                }
            }
            "2" => {
                writeln!(out, "Sorted values:")?;
                write_values(&mut out, tree.iter())?;
            }
            "3" => {
                writeln!(out, "Pre-order traversal:")?;
                write_values(&mut out, tree.pre_order())?;
            }
            "4" => {
                writeln!(out, "Reverse traversal:")?;
                write_values(&mut out, tree.reverse_order())?;
            }
            "5" => {
                writeln!(out, "Central traversal:")?;
                write_values(&mut out, tree.in_order())?;
            }
            "6" => {
                if tree.is_empty() {
                    writeln!(out, "(empty tree)")?;
                } else {
                    write!(out, "{}", tree.render())?;
                }
            }
            "7" => {
                writeln!(out, "Cursor over {} values:", tree.len())?;
                step_cursor(&tree, &mut input, &mut out)?;
            }
            "0" => {
                writeln!(out, "Exiting.")?;
                return Ok(());
            }
            other => {
                log::debug!("unknown menu choice {other:?}");
                writeln!(out, "Invalid choice.")?;
            }
        }
    }
    Ok(())
}

fn step_cursor(tree: &Tree<i32>, input: &mut impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut cursor = tree.cursor();
    loop {
        let Some(command) = prompt(input, out, "[n]ext, [p]revious, [q]uit: ")? else {
            return Ok(());
        };
        let moved = match command.as_str() {
            "n" => cursor.move_next(),
            "p" => cursor.move_previous(),
            "q" => return Ok(()),
            _ => {
                writeln!(out, "Unknown command.")?;
                continue;
            }
        };
        match (moved, cursor.current_node()) {
            (true, Some(node)) => writeln!(out, "{} ({})", node.value(), node.side())?,
            _ => writeln!(out, "No more values in that direction.")?,
        }
    }
}

/// Prints `message` and reads one trimmed line; `None` at end of input.
fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush().context("failed to flush output")?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("failed to read input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn write_values<T: Display>(out: &mut impl Write, values: impl Iterator<Item = T>) -> Result<()> {
    for value in values {
        write!(out, "{value} ")?;
    }
    writeln!(out)?;
    Ok(())
}
