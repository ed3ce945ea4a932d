//! Column vocabulary shared by the loaders, transformations and pipeline.

pub mod columns;
