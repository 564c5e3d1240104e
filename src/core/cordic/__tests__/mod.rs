pub mod tables_test;
