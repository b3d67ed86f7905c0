//! This is a documentation-only module with several sub-modules describing how to use
//! this crate.
//!
//! Table of contents:
//!  - [Tokens, postfix form and evaluation](./p01_expressions/index.html)
//!  - [Generating truth tables](./p02_truth_tables/index.html)
//!

pub mod p01_expressions;
pub mod p02_truth_tables;
