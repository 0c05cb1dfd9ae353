// tests/support/mod.rs
// Mocks and builders are shared by multiple integration test binaries, and
// individual binaries use different subsets of them. Allow dead_code and
// unused_imports at the module level to keep test output clean.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod builders;

#[allow(unused_imports)]
pub use mocks::*;

#[allow(unused_imports)]
pub use builders::*;
