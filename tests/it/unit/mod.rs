//! Unit tests for chart-drawings.

mod registry_tests;
