//! Smoke suites that exercise CI pass/fail reporting.
//!
//! There is no production code in this crate; the lib target exists so the
//! pipeline has a build step. The suites under `tests/` cover both
//! reporting paths:
//!
//! - `pipeline_pass_test` runs by default and must stay green.
//! - `pipeline_fail_test` and `pipeline_fail2_test` each carry one
//!   intentionally failing comparison and are `#[ignore]`d. Run
//!   `cargo test -- --ignored` to watch the pipeline surface the failures.
