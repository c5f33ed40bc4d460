//! Cinelog API integration tests
//!
//! Routes are driven through the composed routers with tower `oneshot`
//! requests. The persistence pool is constructed lazily against an
//! unreachable address, so any test that must not touch the store would
//! surface a store error if it did - and the soft-failure paths are
//! exercised for real. Tests that need a live Postgres are `#[ignore]`d
//! and read `TEST_DATABASE_URL`.

mod common;

mod accounts;
mod auth;
mod catalog;
