//! luabind Package Builder
//!
//! Turns the MoSync API headers into a tolua package and runs tolua on it.
//!
//! ## Modules
//!
//! - `substitute` - Typed pointer to `void*` rewriting
//! - `concat` - Joining headers and writing the package file
//! - `tolua` - Running the tolua binding generator
//! - `scan` - Finding pointer types the substitution table misses
//! - `pipeline` - The three steps wired together

pub mod concat;
pub mod pipeline;
pub mod scan;
pub mod substitute;
pub mod tolua;

pub use pipeline::{BindingPipeline, PipelineReport};
pub use scan::{scan_pointer_types, PointerScanner, PointerUse};
pub use substitute::{read_transformed, PatternTable, TransformedHeader};
pub use tolua::ToluaInvoker;
