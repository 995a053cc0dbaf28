#![no_std]

use soroban_sdk::contracterror;

/// @title  ErrorCategory
/// @notice Groups errors by domain for monitoring and client-side messaging.
/// @dev    Off-chain consumers should switch on this value first, then on the
///         specific `ContractError` code for fine-grained handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Caller role and permission errors (codes 100-199).
    Authorization,
    /// Record existence and uniqueness errors (codes 200-202).
    Registry,
    /// Wrong lifecycle stage for the attempted transition (codes 203-299).
    Lifecycle,
}

/// @title  ContractError
/// @notice Canonical error enum for the identity registry.
/// @dev    Codes are wire-stable. Never renumber a variant after deployment.
///         Append new variants at the end of their category block only.
///
/// Error Code Layout:
///   1   -  99 : Reserved
///   100 - 199 : Authorization
///   200 - 202 : Registry
///   203 - 299 : Lifecycle
#[contracterror]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u32)]
pub enum ContractError {
    // --- Authorization (100-199) ---
    /// Caller is not in the admin set.
    /// Entrypoints: reject_user, set_verifier, set_admin, set_config
    NotAnAdmin = 100,

    /// Caller is neither a verifier nor an admin.
    /// Entrypoints: verify_user, get_pending_users, get_pending_records
    NotAVerifier = 101,

    /// The call would leave the admin set empty.
    /// Entrypoints: set_admin
    LastAdmin = 102,

    // --- Registry (200-202) ---
    /// Caller already holds a record.
    AlreadyRegistered = 200,

    /// The e-mail commitment is bound to another record.
    EmailTaken = 201,

    /// No record exists for the given address.
    NotFound = 202,

    // --- Lifecycle (203-299) ---
    /// Target has already been verified.
    AlreadyVerified = 203,

    /// Target is not in the lifecycle stage the transition requires.
    InvalidState = 204,

    /// Re-registration after rejection is switched off in the registry config.
    ReregistrationDisabled = 205,
}

/// @title  ErrorExt
/// @notice Provides category() and description() on every ContractError variant.
pub trait ErrorExt {
    /// @return The ErrorCategory bucket this error belongs to.
    fn category(&self) -> ErrorCategory;

    /// @return A static string description safe for logging or display.
    fn description(&self) -> &'static str;
}

impl ErrorExt for ContractError {
    fn category(&self) -> ErrorCategory {
        match self {
            ContractError::NotAnAdmin | ContractError::NotAVerifier | ContractError::LastAdmin => {
                ErrorCategory::Authorization
            }

            ContractError::AlreadyRegistered
            | ContractError::EmailTaken
            | ContractError::NotFound => ErrorCategory::Registry,

            ContractError::AlreadyVerified
            | ContractError::InvalidState
            | ContractError::ReregistrationDisabled => ErrorCategory::Lifecycle,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            ContractError::NotAnAdmin => "Not an admin",
            ContractError::NotAVerifier => "Not a verifier",
            ContractError::LastAdmin => "At least one admin must remain",
            ContractError::AlreadyRegistered => "Already registered",
            ContractError::EmailTaken => "Email already registered",
            ContractError::NotFound => "User not registered",
            ContractError::AlreadyVerified => "Already verified",
            ContractError::InvalidState => "User is not in the required review state",
            ContractError::ReregistrationDisabled => "Re-registration is disabled",
        }
    }
}
