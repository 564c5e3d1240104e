pub mod harness_test;
