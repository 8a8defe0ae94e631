//! Unit tests for title validation and disambiguation.
