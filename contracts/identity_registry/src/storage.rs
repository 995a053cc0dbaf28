//! Per-user state and the pending sequence.
//!
//! | Key                      | Tier           |
//! |--------------------------|----------------|
//! | `DataKey::Config`        | `instance()`   |
//! | `DataKey::PendingList`   | `persistent()` |
//! | `DataKey::User(addr)`    | `persistent()` |
//! | `DataKey::EmailOwner(h)` | `persistent()` |
//! | `DataKey::History(addr)` | `persistent()` |
//!
//! Persistent entries have their own TTL and are bumped on every write and
//! every read that finds them. The instance entry is bumped by every
//! mutating entrypoint through [`extend_instance`].

use soroban_sdk::{Address, BytesN, Env, Vec};

use crate::types::{DataKey, RegistryConfig, UserRecord, VerificationEntry};

/// Minimum ledger TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;

fn bump(e: &Env, key: &DataKey) {
    e.storage()
        .persistent()
        .extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

/// Keeps the instance entry (role sets, config) alive alongside the records.
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(BUMP_THRESHOLD, BUMP_TARGET);
}

// ─── Records ───────────────────────────────────────────────────────────────

pub fn load_user(e: &Env, user: &Address) -> Option<UserRecord> {
    let key = DataKey::User(user.clone());
    let record = e.storage().persistent().get::<_, UserRecord>(&key);
    if record.is_some() {
        bump(e, &key);
    }
    record
}

pub fn save_user(e: &Env, record: &UserRecord) {
    let key = DataKey::User(record.address.clone());
    e.storage().persistent().set(&key, record);
    bump(e, &key);
}

// ─── E-mail index ──────────────────────────────────────────────────────────

pub fn email_owner(e: &Env, email_hash: &BytesN<32>) -> Option<Address> {
    let key = DataKey::EmailOwner(email_hash.clone());
    let owner = e.storage().persistent().get::<_, Address>(&key);
    if owner.is_some() {
        bump(e, &key);
    }
    owner
}

pub fn bind_email(e: &Env, email_hash: &BytesN<32>, owner: &Address) {
    let key = DataKey::EmailOwner(email_hash.clone());
    e.storage().persistent().set(&key, owner);
    bump(e, &key);
}

pub fn release_email(e: &Env, email_hash: &BytesN<32>) {
    e.storage()
        .persistent()
        .remove(&DataKey::EmailOwner(email_hash.clone()));
}

// ─── Verification history ──────────────────────────────────────────────────

pub fn history(e: &Env, user: &Address) -> Vec<VerificationEntry> {
    let key = DataKey::History(user.clone());
    match e.storage().persistent().get::<_, Vec<VerificationEntry>>(&key) {
        Some(entries) => {
            bump(e, &key);
            entries
        }
        None => Vec::new(e),
    }
}

pub fn append_history(e: &Env, user: &Address, entry: VerificationEntry) {
    let key = DataKey::History(user.clone());
    let mut entries = history(e, user);
    entries.push_back(entry);
    e.storage().persistent().set(&key, &entries);
    bump(e, &key);
}

// ─── Pending sequence ──────────────────────────────────────────────────────

// Kept out of `instance()`: `register` is unprivileged, so this list grows
// with outside traffic and must not inflate the instance entry.

pub fn pending(e: &Env) -> Vec<Address> {
    let key = DataKey::PendingList;
    match e.storage().persistent().get::<_, Vec<Address>>(&key) {
        Some(list) => {
            bump(e, &key);
            list
        }
        None => Vec::new(e),
    }
}

fn save_pending(e: &Env, list: &Vec<Address>) {
    let key = DataKey::PendingList;
    e.storage().persistent().set(&key, list);
    bump(e, &key);
}

pub fn push_pending(e: &Env, user: &Address) {
    let mut list = pending(e);
    list.push_back(user.clone());
    save_pending(e, &list);
}

/// Removes `user` while keeping the remaining entries in submission order.
pub fn remove_pending(e: &Env, user: &Address) {
    let mut list = pending(e);
    if let Some(index) = list.first_index_of(user.clone()) {
        list.remove(index);
        save_pending(e, &list);
    }
}

// ─── Config ────────────────────────────────────────────────────────────────

pub fn config(e: &Env) -> RegistryConfig {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .unwrap_or_default()
}

pub fn set_config(e: &Env, config: &RegistryConfig) {
    e.storage().instance().set(&DataKey::Config, config);
}
