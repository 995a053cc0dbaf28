use soroban_sdk::{Address, BytesN, Env, String, Symbol};

use crate::types::RegistryConfig;

/// Emitted once, when the registry is deployed.
///
/// # Topics
/// * `Symbol` - "registry_initialized"
///
/// # Data
/// * `Address` - The deployer, inserted as first admin
pub fn emit_initialized(e: &Env, deployer: &Address) {
    e.events()
        .publish((Symbol::new(e, "registry_initialized"),), deployer.clone());
}

/// Emitted when a new registrant enters the pending sequence.
///
/// # Topics
/// * `Symbol` - "user_registered"
/// * `Address` - The registrant
///
/// # Data
/// * `BytesN<32>` - E-mail commitment
/// * `u64` - Registration timestamp
pub fn emit_registered(e: &Env, user: &Address, email_hash: &BytesN<32>, registered_at: u64) {
    let topics = (Symbol::new(e, "user_registered"), user.clone());
    e.events().publish(topics, (email_hash.clone(), registered_at));
}

/// Emitted when a rejected registrant resubmits.
///
/// # Topics
/// * `Symbol` - "user_reregistered"
/// * `Address` - The registrant
///
/// # Data
/// * `BytesN<32>` - E-mail commitment
/// * `u64` - Submission timestamp
pub fn emit_reregistered(e: &Env, user: &Address, email_hash: &BytesN<32>, submitted_at: u64) {
    let topics = (Symbol::new(e, "user_reregistered"), user.clone());
    e.events().publish(topics, (email_hash.clone(), submitted_at));
}

/// Emitted when a registrant is verified.
///
/// # Topics
/// * `Symbol` - "user_verified"
/// * `Address` - The registrant
///
/// # Data
/// * `Address` - The reviewing verifier or admin
pub fn emit_verified(e: &Env, user: &Address, verifier: &Address) {
    let topics = (Symbol::new(e, "user_verified"), user.clone());
    e.events().publish(topics, verifier.clone());
}

/// Emitted when a registrant is rejected.
///
/// # Topics
/// * `Symbol` - "user_rejected"
/// * `Address` - The registrant
///
/// # Data
/// * `Address` - The rejecting admin
/// * `String` - Reason supplied by the admin
pub fn emit_rejected(e: &Env, user: &Address, admin: &Address, reason: &String) {
    let topics = (Symbol::new(e, "user_rejected"), user.clone());
    e.events().publish(topics, (admin.clone(), reason.clone()));
}

/// Emitted when an admin grants or revokes the verifier role.
///
/// # Topics
/// * `Symbol` - "verifier_set"
/// * `Address` - The affected account
///
/// # Data
/// * `bool` - `true` if granted, `false` if revoked
pub fn emit_verifier_set(e: &Env, account: &Address, enabled: bool) {
    let topics = (Symbol::new(e, "verifier_set"), account.clone());
    e.events().publish(topics, enabled);
}

/// Emitted when an admin grants or revokes the admin role.
///
/// # Topics
/// * `Symbol` - "admin_set"
/// * `Address` - The affected account
///
/// # Data
/// * `bool` - `true` if granted, `false` if revoked
pub fn emit_admin_set(e: &Env, account: &Address, enabled: bool) {
    let topics = (Symbol::new(e, "admin_set"), account.clone());
    e.events().publish(topics, enabled);
}

/// Emitted when an admin replaces the registry config.
///
/// # Topics
/// * `Symbol` - "config_updated"
/// * `Address` - The admin who made the change
///
/// # Data
/// * `RegistryConfig` - The new config
pub fn emit_config_updated(e: &Env, admin: &Address, config: &RegistryConfig) {
    let topics = (Symbol::new(e, "config_updated"), admin.clone());
    e.events().publish(topics, config.clone());
}
