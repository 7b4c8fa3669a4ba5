//! Integration tests against a live VinylDNS instance.
//!
//! These tests are ignored by default and skip themselves when credentials
//! are missing.
//!
//! # Running Tests
//!
//! 1. Create a `.env` file in the project root (see `.env.example`)
//! 2. Run with: `cargo test -- --ignored`
//!
//! # Environment Variables
//!
//! | Variable | Required | Description |
//! |----------|----------|-------------|
//! | `VINYLDNS_HOST` | Yes | API base URL, e.g. `http://localhost:9000` |
//! | `VINYLDNS_ACCESS_KEY` | Yes | Access key |
//! | `VINYLDNS_SECRET_KEY` | Yes | Secret key |
//! | `VINYLDNS_TEST_ZONE` | No | Zone name used by the batch change test |
