use shared_types::{short_hex, Hash, IdentityKey};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("Malformed witness: {siblings} siblings and {path_bits} path bits, expected {expected}")]
    MalformedWitness {
        siblings: usize,
        path_bits: usize,
        expected: usize,
    },

    #[error("Witness key mismatch: expected {expected:?}, witness encodes {computed:?}")]
    KeyMismatch {
        expected: IdentityKey,
        computed: IdentityKey,
    },

    #[error("Root mismatch: expected {}, computed {}", short_hex(expected), short_hex(computed))]
    RootMismatch { expected: Hash, computed: Hash },
}

pub type MapResult<T> = Result<T, MapError>;
