//! Format interoperability for marklet documents
//!
//!     This crate provides a uniform interface for converting between Markdown source, the parsed
//!     document tree from `marklet-core`, and the output formats built on it (HTML, structural
//!     JSON, and the tag and treeviz inspection dumps).
//!
//!     This is a pure lib, that is, it powers the marklet cli but is shell agnostic: no code
//!     here supposes a shell environment, be it printing, env vars or exit codes.
//!
//! Architecture
//!
//!     .
//!     ├── error.rs                # FormatError
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # Built-in formats by name and extension
//!     ├── formats
//!     │   ├── <format>
//!     │   │   ├── parser.rs       # Parser implementation
//!     │   │   ├── serializer.rs   # Serializer implementation
//!     │   │   └── mod.rs
//!     │   ├── common              # Uniform node view for the diagnostic formats
//!     │   └── icons.rs            # Icons shared by tree views
//!     └── lib.rs
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs
//!     └── <format>
//!         ├── mod.rs
//!         └── <testname>.rs
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include
//!     these in the mod.
//!
//! Formats
//!
//!     Format specific capabilities are implemented with the Format trait: a name, file extensions,
//!     and parse() and/or serialize(). See the trait def [./format.rs].
//!
//!     | Format   | Parse | Serialize | Parameters              |
//!     |----------|-------|-----------|-------------------------|
//!     | markdown | yes   | yes       |                         |
//!     | html     |       | yes       | standalone, title       |
//!     | json     |       | yes       | pretty                  |
//!     | tag      |       | yes       |                         |
//!     | treeviz  |       | yes       | max-width               |

pub mod error;
pub mod format;
pub mod formats;
pub mod registry;

pub use error::FormatError;
pub use format::Format;
pub use registry::FormatRegistry;
