//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `ticklist_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    // Tiny probe validating core crate wiring independently from the
    // mobile/FFI runtime setup.
    println!("ticklist_core ping={}", ticklist_core::ping());
    println!("ticklist_core version={}", ticklist_core::core_version());
}
