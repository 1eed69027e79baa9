//! Integration tests for Sumi-Scribe

mod crawl_tests;
