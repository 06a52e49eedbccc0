//! Integration tests for the syntaxview binary.

mod cli_test;
mod config_test;
mod copy_test;
mod helpers;
mod highlight_test;
mod raw_test;
