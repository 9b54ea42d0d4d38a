pub mod mock;

pub use test_log::test;
