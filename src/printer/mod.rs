//! Tree dump of a parsed program.
//!
//! One stanza per node, children indented under their parent and siblings
//! printed in chain order at the same indentation. The dump is read-only and
//! deterministic, so it doubles as a golden output for tests.

pub mod printer;

pub use printer::{print_tree, tree_to_string};
