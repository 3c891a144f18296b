//! Reflex Test (workspace facade crate).
//!
//! Re-exports the workspace crates as `reflex_test::{core,engine,input,term,types}`
//! so the binary, integration tests and benchmarks share one import path.

pub use reflex_test_core as core;
pub use reflex_test_engine as engine;
pub use reflex_test_input as input;
pub use reflex_test_term as term;
pub use reflex_test_types as types;
