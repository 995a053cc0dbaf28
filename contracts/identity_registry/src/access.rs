//! Admin and verifier role sets.
//!
//! Membership is a per-address flag so checks stay O(1); the parallel list
//! keeps insertion order for enumeration.

use identity_errors::ContractError;
use soroban_sdk::{Address, Env, Vec};

use crate::types::{DataKey, Role};

pub fn is_admin(e: &Env, account: &Address) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Admin(account.clone()))
        .unwrap_or(false)
}

pub fn is_verifier(e: &Env, account: &Address) -> bool {
    e.storage()
        .instance()
        .get(&DataKey::Verifier(account.clone()))
        .unwrap_or(false)
}

pub fn admins(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&DataKey::AdminList)
        .unwrap_or_else(|| Vec::new(e))
}

pub fn verifiers(e: &Env) -> Vec<Address> {
    e.storage()
        .instance()
        .get(&DataKey::VerifierList)
        .unwrap_or_else(|| Vec::new(e))
}

/// Admin outranks verifier; anyone else is a plain user.
pub fn role_of(e: &Env, account: &Address) -> Role {
    if is_admin(e, account) {
        Role::Admin
    } else if is_verifier(e, account) {
        Role::Verifier
    } else {
        Role::User
    }
}

/// Authenticates `caller` and checks it is in the admin set.
pub fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if !is_admin(e, caller) {
        return Err(ContractError::NotAnAdmin);
    }
    Ok(())
}

/// Authenticates `caller` and checks it may review registrants.
/// Admins pass as well as verifiers.
pub fn require_reviewer(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if !is_admin(e, caller) && !is_verifier(e, caller) {
        return Err(ContractError::NotAVerifier);
    }
    Ok(())
}

/// Inserts the first admin. Only called while the contract is constructed.
pub fn seed_admin(e: &Env, account: &Address) {
    set_membership(
        e,
        DataKey::Admin(account.clone()),
        DataKey::AdminList,
        account,
        false,
        true,
    );
}

/// Adds or removes `account` from the admin set. Idempotent.
///
/// Fails with `LastAdmin` if the removal would leave no admin.
pub fn set_admin(e: &Env, account: &Address, enabled: bool) -> Result<(), ContractError> {
    let existing = is_admin(e, account);
    if !enabled && existing && admins(e).len() <= 1 {
        return Err(ContractError::LastAdmin);
    }
    set_membership(
        e,
        DataKey::Admin(account.clone()),
        DataKey::AdminList,
        account,
        existing,
        enabled,
    );
    Ok(())
}

/// Adds or removes `account` from the verifier set. Idempotent.
pub fn set_verifier(e: &Env, account: &Address, enabled: bool) {
    let existing = is_verifier(e, account);
    set_membership(
        e,
        DataKey::Verifier(account.clone()),
        DataKey::VerifierList,
        account,
        existing,
        enabled,
    );
}

fn set_membership(
    e: &Env,
    flag_key: DataKey,
    list_key: DataKey,
    account: &Address,
    existing: bool,
    enabled: bool,
) {
    if enabled == existing {
        return;
    }

    let mut list: Vec<Address> = e
        .storage()
        .instance()
        .get(&list_key)
        .unwrap_or_else(|| Vec::new(e));

    if enabled {
        e.storage().instance().set(&flag_key, &true);
        list.push_back(account.clone());
    } else {
        e.storage().instance().remove(&flag_key);
        if let Some(index) = list.first_index_of(account.clone()) {
            list.remove(index);
        }
    }

    e.storage().instance().set(&list_key, &list);
}
