//! Build script to embed the idiom dictionary and kanji pool
//!
//! Compresses the idiom list into `OUT_DIR` and generates a const array for the kanji pool.
//! The pool keeps only kanji from the largest strongly connected component of the
//! dictionary graph, so every question drawn from it has a chain.

use flate2::Compression;
use flate2::write::GzEncoder;
use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    compress_dictionary("data/idioms.txt", &Path::new(&out_dir).join("idioms.txt.gz"));

    let graph = read_graph("data/idioms.txt");
    let linked = largest_component(&graph);

    generate_kanji_pool(
        "data/kanji.txt",
        &linked,
        &Path::new(&out_dir).join("kanji.rs"),
        "KANJI",
        "Kanji drawn as question endpoints",
    );

    // Rebuild if data files change
    println!("cargo:rerun-if-changed=data/idioms.txt");
    println!("cargo:rerun-if-changed=data/kanji.txt");
}

fn compress_dictionary(input_path: &str, output_path: &Path) {
    let content =
        fs::read(input_path).unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let mut encoder = GzEncoder::new(output, Compression::best());
    encoder.write_all(&content).unwrap();
    encoder.finish().unwrap();
}

type Graph = BTreeMap<char, BTreeSet<char>>;

fn read_graph(input_path: &str) -> Graph {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let mut graph = Graph::new();
    for line in content.trim().lines() {
        let mut chars = line.chars();
        if let (Some(from), Some(to)) = (chars.next(), chars.next()) {
            graph.entry(from).or_default().insert(to);
            graph.entry(to).or_default();
        }
    }
    graph
}

/// Kosaraju's algorithm with explicit stacks
fn largest_component(graph: &Graph) -> BTreeSet<char> {
    let mut order = Vec::with_capacity(graph.len());
    let mut seen = BTreeSet::new();

    for &root in graph.keys() {
        if !seen.insert(root) {
            continue;
        }
        let mut stack = vec![(root, graph[&root].iter())];
        while let Some((node, next)) = stack.last_mut() {
            if let Some(&child) = next.next() {
                if seen.insert(child) {
                    stack.push((child, graph[&child].iter()));
                }
            } else {
                order.push(*node);
                stack.pop();
            }
        }
    }

    let mut reversed = Graph::new();
    for (&from, targets) in graph {
        reversed.entry(from).or_default();
        for &to in targets {
            reversed.entry(to).or_default().insert(from);
        }
    }

    let mut assigned = BTreeSet::new();
    let mut best = BTreeSet::new();

    for &root in order.iter().rev() {
        if !assigned.insert(root) {
            continue;
        }
        let mut component = BTreeSet::from([root]);
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            for &prev in &reversed[&node] {
                if assigned.insert(prev) {
                    component.insert(prev);
                    stack.push(prev);
                }
            }
        }
        if component.len() > best.len() {
            best = component;
        }
    }

    best
}

fn generate_kanji_pool(
    input_path: &str,
    linked: &BTreeSet<char>,
    output_path: &Path,
    const_name: &str,
    doc_comment: &str,
) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let kanji: Vec<char> = content
        .chars()
        .filter(|c| !c.is_whitespace() && linked.contains(c))
        .collect();
    assert!(kanji.len() > 1, "{input_path} shares fewer than two kanji with the linked dictionary");
    let count = kanji.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated kanji pool").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[char] = &[").unwrap();

    for c in kanji {
        writeln!(output, "    '{c}',").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of kanji in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
