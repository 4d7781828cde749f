//! Block-structured configuration text for tfsync
//!
//! Reading side: [`scan`] builds a [`DefinitionIndex`] of what a configuration
//! file already declares. Writing side: a [`Record`] projected through a
//! [`Shape`] is rendered by [`emit`].

pub mod emitter;
pub mod error;
pub mod normalize;
pub mod scanner;
pub mod shape;
pub mod value;

pub use emitter::emit;
pub use error::{Error, Result};
pub use normalize::{normalize, replace_special_chars};
pub use scanner::{DefinitionIndex, DefinitionKind, scan};
pub use shape::{Field, FieldKind, Nesting, ScalarKind, Shape, ShapeRegistry};
pub use value::{Record, Scalar, Value};
