//! Utility macros for the compiler.
//!
//! This module defines helper macros used throughout the compiler:
//!
//! - `MK_HANDLE!` - Creates a copyable arena handle type
//!
//! Handles are how the tree and the symbol table refer to each other without
//! owning one another.

/// Creates a strongly typed index into one of the compiler's arenas.
///
/// The generated type is `Copy`, ordered and hashable, and prints as
/// `Name(n)` in debug output.
///
/// # Arguments
///
/// * `$name` - The name of the handle type
///
/// # Example
///
/// ```ignore
/// MK_HANDLE!(NodeId);
/// let id = NodeId::from_raw(3);
/// assert_eq!(id.index(), 3);
/// ```
#[macro_export]
macro_rules! MK_HANDLE {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(u32);

        impl $name {
            pub const fn from_raw(raw: u32) -> Self {
                $name(raw)
            }

            pub const fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }
    };
}
