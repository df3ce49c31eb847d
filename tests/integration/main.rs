//! Black-box integration tests driving the HTTP router.

mod helpers;

mod auth_test;
