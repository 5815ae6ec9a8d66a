//! Lazy, zero-copy splitting of borrowed strings.
//!
//! ```
//! use strsplit::StrSplit;
//!
//! let parts: Vec<&str> = StrSplit::new("a,b,", ",").unwrap().collect();
//! assert_eq!(parts, ["a", "b", ""]);
//! ```

pub mod delimiter;
pub mod error;
pub mod split_strings;

pub use delimiter::Delimiter;
pub use error::SplitError;
pub use split_strings::{split, until_char, StrSplit};
