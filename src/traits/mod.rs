pub mod postprocessor;

pub use postprocessor::{Postprocessor, PostprocessorKind};
