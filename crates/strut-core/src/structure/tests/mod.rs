pub mod scanner_tests;
