//! Tests for the token service

mod contract_tests;
