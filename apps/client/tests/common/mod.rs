#![allow(dead_code)]

// tests/common/mod.rs

// Logging is auto-installed for every test binary that pulls in `common`.
#[ctor::ctor]
fn init_logging() {
    client_test_support::test_logging::init();
}
