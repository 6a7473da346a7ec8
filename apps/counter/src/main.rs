//! # Brew Counter Entry Point
//!
//! Thin binary wrapper: all setup and the run loop live in the library
//! crate so they stay testable.

fn main() {
    brew_counter_lib::run();
}
