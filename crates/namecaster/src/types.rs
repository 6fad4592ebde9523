//! # Common Types

/// Integer index type for vocabulary entries.
///
/// Encoded surnames are sequences of `CharToken` values; the classifier's
/// embedding table is indexed by them.
pub type CharToken = u32;

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type NCHashMap<K, V> = ahash::AHashMap<K, V>;
    } else {
        /// Type Alias for hash maps in this crate.
        pub type NCHashMap<K, V> = std::collections::HashMap<K, V>;
    }
}

/// Statically check that a value's type is `Send`.
pub fn check_is_send<T: Send>(_value: &T) {}

/// Statically check that a value's type is `Sync`.
pub fn check_is_sync<T: Sync>(_value: &T) {}
