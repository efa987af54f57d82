// Runtime numeric value core
//
// The value representation and arithmetic contract used by a tree-walking
// expression interpreter. The front-end (lexer, parser, evaluator dispatch)
// lives elsewhere; this crate owns the scalar value, the arithmetic between
// values, and the runtime diagnostics those operations produce.

// Public modules
pub mod context;
pub mod error;
pub mod value;

// Re-export commonly used items
pub use context::{ContextId, Frame, Frames};
pub use error::{ErrorKind, RuntimeError, Span};
pub use value::NumericValue;
