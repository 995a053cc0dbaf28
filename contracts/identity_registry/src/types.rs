use soroban_sdk::{contracttype, Address, BytesN, String};

// ─── Lifecycle ─────────────────────────────────────────────────────────────

/// Review stage of a registrant.
///
/// `NotRegistered` is never written to storage; it is what the status views
/// report when no record exists for an address.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum UserStatus {
    NotRegistered = 0,
    Pending = 1,
    Verified = 2,
    Rejected = 3,
}

/// Effective role of an address, derived from the role sets.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Role {
    User = 0,
    Verifier = 1,
    Admin = 2,
}

// ─── Records ───────────────────────────────────────────────────────────────

/// One registrant. PII is held only as 32-byte commitments.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserRecord {
    /// The registrant's address.
    pub address: Address,
    /// Commitment of the e-mail; unique across all records.
    pub email_hash: BytesN<32>,
    /// Commitment of the personal attestation data.
    pub info_hash: BytesN<32>,
    /// Ledger timestamp of the first registration. Never changes.
    pub registered_at: u64,
    /// Ledger timestamp of the latest submission (differs from
    /// `registered_at` only after a re-registration).
    pub submitted_at: u64,
    pub status: UserStatus,
}

/// Read view returned by `get_user_info`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserInfo {
    pub record: UserRecord,
    pub role: Role,
    pub is_verified: bool,
}

/// A single verify/reject action against a registrant.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VerificationEntry {
    pub timestamp: u64,
    /// Address that performed the review.
    pub verifier: Address,
    /// `true` for verification, `false` for rejection.
    pub result: bool,
    /// Rejection reason; `None` for verifications.
    pub reason: Option<String>,
}

// ─── Configuration ─────────────────────────────────────────────────────────

/// Admin-managed registry settings.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct RegistryConfig {
    /// Whether a rejected registrant may resubmit through `reregister`.
    pub allow_reregistration: bool,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

/// Keys for each logical piece of contract state.
///
/// Role sets and config are small, admin-controlled and always needed, so
/// they live in `instance()`. Per-user data and the pending sequence grow
/// with the number of registrants and live in `persistent()`.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// RegistryConfig. Stored in `instance()`.
    Config,
    /// Admin membership flag. Stored in `instance()`.
    Admin(Address),
    /// Ordered admin addresses. Stored in `instance()`.
    AdminList,
    /// Verifier membership flag. Stored in `instance()`.
    Verifier(Address),
    /// Ordered verifier addresses. Stored in `instance()`.
    VerifierList,
    /// Addresses awaiting review, in submission order. Stored in `persistent()`.
    PendingList,
    /// Address -> UserRecord. Stored in `persistent()`.
    User(Address),
    /// E-mail commitment -> owning Address. Stored in `persistent()`.
    EmailOwner(BytesN<32>),
    /// Address -> Vec<VerificationEntry>. Stored in `persistent()`.
    History(Address),
}
