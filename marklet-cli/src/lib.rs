//! Library half of the `marklet` binary: the argument definition and the inspect transforms.

pub mod cli;
pub mod transforms;
