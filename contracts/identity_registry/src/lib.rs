#![no_std]

//! # Identity Registry Contract
//!
//! Tracks wallet-holding registrants through a review lifecycle and gates the
//! review behind admin and verifier roles.
//!
//! ## Lifecycle
//! ```text
//! NotRegistered --register()----> Pending
//! Pending       --verify_user()-> Verified   (terminal)
//! Pending       --reject_user()-> Rejected
//! Rejected      --reregister()--> Pending    (only if config allows)
//! ```
//!
//! ## Security
//! - The first admin is set by the constructor, atomically with deployment
//! - Every mutating entrypoint authenticates its caller with `require_auth`
//! - Role checks run before state checks, state checks before any write
//! - E-mail and personal info are accepted only as 32-byte commitments
//! - The pending list is visible to reviewers only
//! - The admin set can never be emptied
//! - Events are emitted for every state change

mod access;
mod commitment;
mod events;
mod storage;
mod types;

pub use identity_errors::{ContractError, ErrorCategory, ErrorExt};
pub use types::{RegistryConfig, Role, UserInfo, UserRecord, UserStatus, VerificationEntry};

use soroban_sdk::{contract, contractimpl, Address, Bytes, BytesN, Env, String, Vec};

#[contract]
pub struct IdentityRegistry;

#[contractimpl]
impl IdentityRegistry {
    /// Create the registry with `deployer` as first admin.
    ///
    /// Runs once, in the same transaction as the deployment, so the first
    /// admin seat cannot be claimed by another account.
    ///
    /// # Events
    /// Emits `registry_initialized` with the deployer address
    pub fn __constructor(e: Env, deployer: Address) {
        storage::set_config(&e, &RegistryConfig::default());
        access::seed_admin(&e, &deployer);
        storage::extend_instance(&e);

        events::emit_initialized(&e, &deployer);
    }

    // ── Registration ───────────────────────────────────────────────────────

    /// Register `caller` with commitments of their e-mail and personal info.
    ///
    /// # Returns
    /// The created `UserRecord`, in `Pending` status
    ///
    /// # Errors
    /// * `AlreadyRegistered` - If `caller` already holds a record
    /// * `EmailTaken` - If `email_hash` belongs to another record
    ///
    /// # Events
    /// Emits `user_registered`
    pub fn register(
        e: Env,
        caller: Address,
        email_hash: BytesN<32>,
        info_hash: BytesN<32>,
    ) -> Result<UserRecord, ContractError> {
        caller.require_auth();

        if storage::load_user(&e, &caller).is_some() {
            return Err(ContractError::AlreadyRegistered);
        }
        if storage::email_owner(&e, &email_hash).is_some() {
            return Err(ContractError::EmailTaken);
        }

        let now = e.ledger().timestamp();
        let record = UserRecord {
            address: caller.clone(),
            email_hash: email_hash.clone(),
            info_hash,
            registered_at: now,
            submitted_at: now,
            status: UserStatus::Pending,
        };

        storage::save_user(&e, &record);
        storage::bind_email(&e, &email_hash, &caller);
        storage::push_pending(&e, &caller);
        storage::extend_instance(&e);

        events::emit_registered(&e, &caller, &email_hash, now);
        Ok(record)
    }

    /// Resubmit after a rejection. `registered_at` is kept; `submitted_at`
    /// moves to now and the caller rejoins the end of the pending sequence.
    ///
    /// # Errors
    /// * `ReregistrationDisabled` - If the registry config forbids it
    /// * `NotFound` - If `caller` has never registered
    /// * `InvalidState` - If the caller's record is not `Rejected`
    /// * `EmailTaken` - If `email_hash` belongs to a different record
    ///
    /// # Events
    /// Emits `user_reregistered`
    pub fn reregister(
        e: Env,
        caller: Address,
        email_hash: BytesN<32>,
        info_hash: BytesN<32>,
    ) -> Result<UserRecord, ContractError> {
        caller.require_auth();

        if !storage::config(&e).allow_reregistration {
            return Err(ContractError::ReregistrationDisabled);
        }

        let mut record = storage::load_user(&e, &caller).ok_or(ContractError::NotFound)?;
        if record.status != UserStatus::Rejected {
            return Err(ContractError::InvalidState);
        }
        if let Some(owner) = storage::email_owner(&e, &email_hash) {
            if owner != caller {
                return Err(ContractError::EmailTaken);
            }
        }

        if record.email_hash != email_hash {
            storage::release_email(&e, &record.email_hash);
            storage::bind_email(&e, &email_hash, &caller);
        }

        let now = e.ledger().timestamp();
        record.email_hash = email_hash.clone();
        record.info_hash = info_hash;
        record.submitted_at = now;
        record.status = UserStatus::Pending;

        storage::save_user(&e, &record);
        storage::push_pending(&e, &caller);
        storage::extend_instance(&e);

        events::emit_reregistered(&e, &caller, &email_hash, now);
        Ok(record)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Full record of `user` with its derived role and verified flag.
    ///
    /// # Errors
    /// * `NotFound` - If `user` has no record
    pub fn get_user_info(e: Env, user: Address) -> Result<UserInfo, ContractError> {
        let record = storage::load_user(&e, &user).ok_or(ContractError::NotFound)?;
        Ok(UserInfo {
            role: access::role_of(&e, &user),
            is_verified: record.status == UserStatus::Verified,
            record,
        })
    }

    /// `(info_hash, verified)` projection of `user`'s record.
    ///
    /// # Errors
    /// * `NotFound` - If `user` has no record
    pub fn get_user_summary(e: Env, user: Address) -> Result<(BytesN<32>, bool), ContractError> {
        let record = storage::load_user(&e, &user).ok_or(ContractError::NotFound)?;
        let verified = record.status == UserStatus::Verified;
        Ok((record.info_hash, verified))
    }

    /// `(exists, is_verified, is_pending)` for `user`. Never fails.
    pub fn get_user_status(e: Env, user: Address) -> (bool, bool, bool) {
        match Self::get_status(e, user) {
            UserStatus::NotRegistered => (false, false, false),
            UserStatus::Pending => (true, false, true),
            UserStatus::Verified => (true, true, false),
            UserStatus::Rejected => (true, false, false),
        }
    }

    /// Lifecycle stage of `user`; `NotRegistered` when no record exists.
    pub fn get_status(e: Env, user: Address) -> UserStatus {
        storage::load_user(&e, &user)
            .map(|record| record.status)
            .unwrap_or(UserStatus::NotRegistered)
    }

    /// Every review action taken on `user`, oldest first.
    pub fn get_verification_history(e: Env, user: Address) -> Vec<VerificationEntry> {
        storage::history(&e, &user)
    }

    /// Addresses awaiting review, in submission order.
    ///
    /// # Errors
    /// * `NotAVerifier` - If `caller` is neither verifier nor admin
    pub fn get_pending_users(e: Env, caller: Address) -> Result<Vec<Address>, ContractError> {
        access::require_reviewer(&e, &caller)?;
        Ok(storage::pending(&e))
    }

    /// Records of every pending registrant, in submission order.
    ///
    /// # Errors
    /// * `NotAVerifier` - If `caller` is neither verifier nor admin
    /// * `NotFound` - If a pending address has lost its record
    pub fn get_pending_records(e: Env, caller: Address) -> Result<Vec<UserRecord>, ContractError> {
        access::require_reviewer(&e, &caller)?;

        let mut records = Vec::new(&e);
        for user in storage::pending(&e).iter() {
            let record = storage::load_user(&e, &user).ok_or(ContractError::NotFound)?;
            records.push_back(record);
        }
        Ok(records)
    }

    // ── Review ─────────────────────────────────────────────────────────────

    /// Mark a pending registrant as verified.
    ///
    /// # Errors
    /// * `NotAVerifier` - If `caller` is neither verifier nor admin
    /// * `NotFound` - If `user` has no record
    /// * `AlreadyVerified` - If `user` is already verified
    /// * `InvalidState` - If `user` was rejected
    ///
    /// # Events
    /// Emits `user_verified`
    pub fn verify_user(e: Env, caller: Address, user: Address) -> Result<(), ContractError> {
        access::require_reviewer(&e, &caller)?;

        let mut record = storage::load_user(&e, &user).ok_or(ContractError::NotFound)?;
        match record.status {
            UserStatus::Pending => {}
            UserStatus::Verified => return Err(ContractError::AlreadyVerified),
            _ => return Err(ContractError::InvalidState),
        }

        record.status = UserStatus::Verified;
        storage::save_user(&e, &record);
        storage::remove_pending(&e, &user);
        storage::append_history(
            &e,
            &user,
            VerificationEntry {
                timestamp: e.ledger().timestamp(),
                verifier: caller.clone(),
                result: true,
                reason: None,
            },
        );
        storage::extend_instance(&e);

        events::emit_verified(&e, &user, &caller);
        Ok(())
    }

    /// Reject a pending registrant.
    ///
    /// # Errors
    /// * `NotAnAdmin` - If `caller` is not an admin
    /// * `NotFound` - If `user` has no record
    /// * `InvalidState` - If `user` is not pending
    ///
    /// # Events
    /// Emits `user_rejected` with the admin and reason
    pub fn reject_user(
        e: Env,
        caller: Address,
        user: Address,
        reason: String,
    ) -> Result<(), ContractError> {
        access::require_admin(&e, &caller)?;

        let mut record = storage::load_user(&e, &user).ok_or(ContractError::NotFound)?;
        if record.status != UserStatus::Pending {
            return Err(ContractError::InvalidState);
        }

        record.status = UserStatus::Rejected;
        storage::save_user(&e, &record);
        storage::remove_pending(&e, &user);
        storage::append_history(
            &e,
            &user,
            VerificationEntry {
                timestamp: e.ledger().timestamp(),
                verifier: caller.clone(),
                result: false,
                reason: Some(reason.clone()),
            },
        );
        storage::extend_instance(&e);

        events::emit_rejected(&e, &user, &caller, &reason);
        Ok(())
    }

    // ── Roles ──────────────────────────────────────────────────────────────

    /// Grant or revoke the verifier role. Idempotent.
    ///
    /// # Errors
    /// * `NotAnAdmin` - If `caller` is not an admin
    pub fn set_verifier(
        e: Env,
        caller: Address,
        account: Address,
        enabled: bool,
    ) -> Result<(), ContractError> {
        access::require_admin(&e, &caller)?;
        access::set_verifier(&e, &account, enabled);
        storage::extend_instance(&e);
        events::emit_verifier_set(&e, &account, enabled);
        Ok(())
    }

    /// Grant or revoke the admin role. Idempotent.
    ///
    /// # Errors
    /// * `NotAnAdmin` - If `caller` is not an admin
    /// * `LastAdmin` - If the call would remove the only remaining admin
    pub fn set_admin(
        e: Env,
        caller: Address,
        account: Address,
        enabled: bool,
    ) -> Result<(), ContractError> {
        access::require_admin(&e, &caller)?;
        access::set_admin(&e, &account, enabled)?;
        storage::extend_instance(&e);
        events::emit_admin_set(&e, &account, enabled);
        Ok(())
    }

    pub fn is_admin(e: Env, account: Address) -> bool {
        access::is_admin(&e, &account)
    }

    pub fn is_verifier(e: Env, account: Address) -> bool {
        access::is_verifier(&e, &account)
    }

    pub fn get_role(e: Env, account: Address) -> Role {
        access::role_of(&e, &account)
    }

    pub fn get_admins(e: Env) -> Vec<Address> {
        access::admins(&e)
    }

    pub fn get_verifiers(e: Env) -> Vec<Address> {
        access::verifiers(&e)
    }

    // ── Configuration ──────────────────────────────────────────────────────

    /// Replace the registry config.
    ///
    /// # Errors
    /// * `NotAnAdmin` - If `caller` is not an admin
    pub fn set_config(
        e: Env,
        caller: Address,
        config: RegistryConfig,
    ) -> Result<(), ContractError> {
        access::require_admin(&e, &caller)?;
        storage::set_config(&e, &config);
        storage::extend_instance(&e);
        events::emit_config_updated(&e, &caller, &config);
        Ok(())
    }

    pub fn get_config(e: Env) -> RegistryConfig {
        storage::config(&e)
    }

    /// Keccak-256 commitment of `data`, matching what `register` expects.
    pub fn compute_commitment(e: Env, data: Bytes) -> BytesN<32> {
        commitment::commitment(&e, &data)
    }
}



#[cfg(test)]
mod test_access;
