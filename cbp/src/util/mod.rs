/// Checks registry invariants, used in `debug_assert!` calls
pub mod assertions;
