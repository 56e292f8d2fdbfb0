// src/output/tree.rs

//! Renders the selected paths as a directory tree.

use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Default)]
struct Node {
    children: BTreeMap<String, Node>,
}

/// Renders the tree section from the selected root-relative paths.
///
/// Directories are derived from the path components, so the tree shows
/// exactly what the artifact contains. BTreeMap ordering keeps the
/// rendering deterministic.
pub fn render_tree(paths: &[PathBuf]) -> String {
    let mut root = Node::default();
    for path in paths {
        let mut node = &mut root;
        for component in path.iter() {
            node = node
                .children
                .entry(component.to_string_lossy().into_owned())
                .or_default();
        }
    }
    let mut out = String::new();
    render(&root, "", &mut out);
    out
}

fn render(node: &Node, prefix: &str, out: &mut String) {
    let count = node.children.len();
    for (index, (name, child)) in node.children.iter().enumerate() {
        let last = index + 1 == count;
        out.push_str(prefix);
        out.push_str(if last { "└── " } else { "├── " });
        out.push_str(name);
        out.push('\n');

        let child_prefix = if last {
            format!("{}    ", prefix)
        } else {
            format!("{}│   ", prefix)
        };
        render(child, &child_prefix, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(items: &[&str]) -> Vec<PathBuf> {
        items.iter().map(PathBuf::from).collect()
    }

    #[test]
    fn test_flat_listing() {
        let rendered = render_tree(&paths(&["a.txt", "b.txt"]));
        assert_eq!(rendered, "├── a.txt\n└── b.txt\n");
    }

    #[test]
    fn test_nested_listing_with_prefixes() {
        let rendered = render_tree(&paths(&["a.txt", "sub/c.txt", "sub/d.txt"]));
        let expected = "\
├── a.txt
└── sub
    ├── c.txt
    └── d.txt
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_intermediate_branch_uses_bar_prefix() {
        let rendered = render_tree(&paths(&["sub/inner/x.txt", "z.txt"]));
        let expected = "\
├── sub
│   └── inner
│       └── x.txt
└── z.txt
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_empty_selection_renders_nothing() {
        assert_eq!(render_tree(&[]), "");
    }

    #[test]
    fn test_rendering_is_sorted_regardless_of_input_order() {
        let forward = render_tree(&paths(&["a.txt", "b.txt"]));
        let reversed = render_tree(&paths(&["b.txt", "a.txt"]));
        assert_eq!(forward, reversed);
    }
}
