#![cfg(test)]

use crate::test_helpers::*;
use crate::{ContractError, RegistryConfig, Role};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

#[test]
fn test_admin_sets_verifier() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let verifier = Address::generate(&e);

    client.set_verifier(&admin, &verifier, &true);

    assert!(client.is_verifier(&verifier));
    assert_eq!(client.get_role(&verifier), Role::Verifier);
    assert_eq!(client.get_verifiers().len(), 1);
}

#[test]
fn test_set_verifier_is_idempotent() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let verifier = Address::generate(&e);

    client.set_verifier(&admin, &verifier, &true);
    client.set_verifier(&admin, &verifier, &true);
    assert_eq!(client.get_verifiers().len(), 1);

    client.set_verifier(&admin, &verifier, &false);
    client.set_verifier(&admin, &verifier, &false);
    assert!(!client.is_verifier(&verifier));
    assert_eq!(client.get_verifiers().len(), 0);
}

#[test]
fn test_non_admin_cannot_set_verifier() {
    let e = Env::default();
    let (client, _admin) = setup(&e);
    let outsider = Address::generate(&e);
    let verifier = Address::generate(&e);

    assert_eq!(
        client.try_set_verifier(&outsider, &verifier, &true),
        Err(Ok(ContractError::NotAnAdmin))
    );
    assert!(!client.is_verifier(&verifier));
}

#[test]
fn test_verifier_cannot_manage_roles() {
    let e = Env::default();
    let (client, _admin, verifier) = setup_with_verifier(&e);
    let other = Address::generate(&e);

    assert_eq!(
        client.try_set_verifier(&verifier, &other, &true),
        Err(Ok(ContractError::NotAnAdmin))
    );
    assert_eq!(
        client.try_set_admin(&verifier, &other, &true),
        Err(Ok(ContractError::NotAnAdmin))
    );
}

#[test]
fn test_admin_sets_admin() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let second = Address::generate(&e);

    client.set_admin(&admin, &second, &true);

    assert!(client.is_admin(&second));
    let admins = client.get_admins();
    assert_eq!(admins.len(), 2);
    assert_eq!(admins.get(0).unwrap(), admin);
    assert_eq!(admins.get(1).unwrap(), second);
}

#[test]
fn test_non_admin_cannot_set_admin() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let u2 = Address::generate(&e);
    let u3 = Address::generate(&e);

    assert_eq!(
        client.try_set_admin(&u2, &u3, &true),
        Err(Ok(ContractError::NotAnAdmin))
    );
    assert!(!client.is_admin(&u3));
    let admins = client.get_admins();
    assert_eq!(admins.len(), 1);
    assert_eq!(admins.get(0).unwrap(), admin);
}

#[test]
fn test_last_admin_cannot_remove_self() {
    let e = Env::default();
    let (client, admin) = setup(&e);

    assert_eq!(
        client.try_set_admin(&admin, &admin, &false),
        Err(Ok(ContractError::LastAdmin))
    );
    assert!(client.is_admin(&admin));
}

#[test]
fn test_admin_can_step_down_when_another_remains() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let successor = Address::generate(&e);

    client.set_admin(&admin, &successor, &true);
    client.set_admin(&admin, &admin, &false);

    assert!(!client.is_admin(&admin));
    assert!(client.is_admin(&successor));
    assert_eq!(
        client.try_set_admin(&successor, &successor, &false),
        Err(Ok(ContractError::LastAdmin))
    );
    assert_eq!(
        client.try_set_verifier(&admin, &successor, &true),
        Err(Ok(ContractError::NotAnAdmin))
    );
}

#[test]
fn test_removing_non_admin_is_noop_even_with_single_admin() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let stranger = Address::generate(&e);

    client.set_admin(&admin, &stranger, &false);
    assert_eq!(client.get_admins().len(), 1);
}

#[test]
fn test_admin_outranks_verifier_role() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let both = Address::generate(&e);

    client.set_verifier(&admin, &both, &true);
    client.set_admin(&admin, &both, &true);
    assert_eq!(client.get_role(&both), Role::Admin);

    client.set_admin(&admin, &both, &false);
    assert_eq!(client.get_role(&both), Role::Verifier);
}

#[test]
fn test_role_without_registration() {
    let e = Env::default();
    let (client, _admin, verifier) = setup_with_verifier(&e);

    assert!(client.is_verifier(&verifier));
    assert_eq!(client.get_user_status(&verifier), (false, false, false));
}

#[test]
fn test_outsider_cannot_verify() {
    let e = Env::default();
    let (client, _admin) = setup(&e);
    let user = register_user(&client, &e, "u1@example.com");
    let u2 = Address::generate(&e);

    assert_eq!(
        client.try_verify_user(&u2, &user),
        Err(Ok(ContractError::NotAVerifier))
    );
    assert_eq!(client.get_user_status(&user), (true, false, true));
}

#[test]
fn test_role_check_precedes_existence_check() {
    let e = Env::default();
    let (client, _admin) = setup(&e);
    let outsider = Address::generate(&e);
    let stranger = Address::generate(&e);

    assert_eq!(
        client.try_verify_user(&outsider, &stranger),
        Err(Ok(ContractError::NotAVerifier))
    );
    assert_eq!(
        client.try_reject_user(&outsider, &stranger, &String::from_str(&e, "x")),
        Err(Ok(ContractError::NotAnAdmin))
    );
}

#[test]
fn test_verifier_cannot_reject() {
    let e = Env::default();
    let (client, _admin, verifier) = setup_with_verifier(&e);
    let user = register_user(&client, &e, "u1@example.com");

    assert_eq!(
        client.try_reject_user(&verifier, &user, &String::from_str(&e, "no")),
        Err(Ok(ContractError::NotAnAdmin))
    );
    assert_eq!(client.get_user_status(&user), (true, false, true));
}

#[test]
fn test_revoked_verifier_loses_access() {
    let e = Env::default();
    let (client, admin, verifier) = setup_with_verifier(&e);
    let user = register_user(&client, &e, "u1@example.com");

    client.set_verifier(&admin, &verifier, &false);
    assert_eq!(
        client.try_verify_user(&verifier, &user),
        Err(Ok(ContractError::NotAVerifier))
    );
}

#[test]
fn test_pending_list_restricted_to_reviewers() {
    let e = Env::default();
    let (client, admin, verifier) = setup_with_verifier(&e);
    let user = register_user(&client, &e, "u1@example.com");

    assert_eq!(
        client.try_get_pending_users(&user),
        Err(Ok(ContractError::NotAVerifier))
    );
    assert_eq!(
        client.try_get_pending_records(&user),
        Err(Ok(ContractError::NotAVerifier))
    );
    assert_eq!(client.get_pending_users(&admin).len(), 1);
    assert_eq!(client.get_pending_records(&verifier).len(), 1);
}

#[test]
fn test_only_admin_sets_config() {
    let e = Env::default();
    let (client, admin, verifier) = setup_with_verifier(&e);
    let enabled = RegistryConfig {
        allow_reregistration: true,
    };

    assert_eq!(
        client.try_set_config(&verifier, &enabled),
        Err(Ok(ContractError::NotAnAdmin))
    );
    assert!(!client.get_config().allow_reregistration);

    client.set_config(&admin, &enabled);
    assert_eq!(client.get_config(), enabled);
}
