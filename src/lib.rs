//! Construct Finder - discover type declarations in PHP source trees.
//!
//! Scans directories of PHP files and catalogs every named class,
//! interface, trait, and enum declaration with its fully-qualified name,
//! without loading or executing any of the scanned code. Useful for
//! plugin/service registries, autoload validation, and static inventory
//! where including code is unsafe or undesirable.
//!
//! # Quick Start
//!
//! ```no_run
//! use construct_finder::ConstructFinder;
//!
//! let constructs = ConstructFinder::located_in(["./src", "./lib"])
//!     .exclude(["*Test.php"])
//!     .find_all()
//!     .unwrap();
//!
//! for construct in constructs {
//!     println!("{}: {}", construct.kind(), construct.name());
//! }
//! ```
//!
//! # Modules
//!
//! - [`construct`] - The construct value model and its kind
//! - [`lexer`] - Minimal PHP tokenizer
//! - [`scanner`] - Single-pass declaration classifier
//! - [`exclude`] - Wildcard path exclusion
//! - [`walker`] - Source file collection
//! - [`finder`] - Fluent finder API
//!
//! # How it works
//!
//! Each file is tokenized into a flat stream with comments and whitespace
//! filtered out, then scanned once: the current namespace is tracked across
//! the stream, declaration keywords emit constructs, and anonymous classes
//! (`new class ...`) are skipped via one-token lookbehind. No parse tree,
//! no symbol resolution.

pub mod construct;
pub mod errors;
pub mod exclude;
pub mod finder;
pub mod lexer;
pub mod scanner;
pub mod walker;

// Re-export key types at crate root for convenience
pub use construct::{Construct, ConstructKind, UnknownKind};
pub use errors::FinderError;
pub use exclude::ExcludeSet;
pub use finder::ConstructFinder;
pub use scanner::{scan, ScanOptions};
