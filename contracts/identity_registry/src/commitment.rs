use soroban_sdk::{Bytes, BytesN, Env};

/// Keccak-256 of `data`, the form in which e-mail and personal info are
/// submitted to the registry.
pub fn commitment(e: &Env, data: &Bytes) -> BytesN<32> {
    e.crypto().keccak256(data).to_bytes()
}
