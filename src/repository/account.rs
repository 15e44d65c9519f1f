//! Account Repository
//!
//! Create, update and look up accounts by name. Each operation runs
//! exactly one store transaction and one codec call.

use crate::codec;
use crate::domain::{Account, User};
use crate::store::{Store, ACCOUNT_BUCKET};

use super::AccountError;

// =========================================================================
// Create
// =========================================================================

/// Create the account for `user` and return it as committed.
///
/// The duplicate check and the put run in the same write transaction,
/// so no concurrent create of the same name can slip in between.
///
/// # Errors
/// - `AccountError::DuplicateAccount` if the name is already stored
/// - `AccountError::Encoding` if the account cannot be encoded
/// - `AccountError::StoreWrite` if the store rejects the write
pub fn create<S: Store>(store: &S, user: &User) -> Result<Account, AccountError> {
    let account = Account::new(user.username());
    let name = account.name();

    store
        .update(|tx| {
            if tx.get(ACCOUNT_BUCKET, name.as_bytes())?.is_some() {
                return Err(AccountError::DuplicateAccount(name.to_string()));
            }

            let encoded = codec::encode(&account).map_err(|source| AccountError::Encoding {
                name: name.to_string(),
                source,
            })?;

            tx.put(ACCOUNT_BUCKET, name.as_bytes(), &encoded)?;
            Ok(())
        })
        .map_err(|e| e.in_write(name))?;

    tracing::debug!("Account created: {}", name);
    Ok(account)
}

// =========================================================================
// Update
// =========================================================================

/// Replace the stored account with `account`, refreshing `last_seen`.
///
/// There is no existence check: updating a name that was never created
/// stores it, which `create` would have guarded with a duplicate check.
///
/// # Errors
/// - `AccountError::Encoding` if the account cannot be encoded
/// - `AccountError::StoreWrite` if the store rejects the write
pub fn update<S: Store>(store: &S, account: &mut Account) -> Result<(), AccountError> {
    account.touch();
    let account: &Account = account;
    let name = account.name();

    store
        .update(|tx| {
            let encoded = codec::encode(account).map_err(|source| AccountError::Encoding {
                name: name.to_string(),
                source,
            })?;

            tx.put(ACCOUNT_BUCKET, name.as_bytes(), &encoded)?;
            Ok(())
        })
        .map_err(|e| e.in_write(name))?;

    tracing::debug!("Account updated: {} (last seen {})", name, account.last_seen());
    Ok(())
}

// =========================================================================
// FindByName
// =========================================================================

/// Load the account stored under `name` from a consistent snapshot.
///
/// # Errors
/// - `AccountError::NotFound` if nothing is stored under `name`
/// - `AccountError::Decoding` if the stored bytes are corrupt
/// - `AccountError::StoreRead` if the store fails the lookup
pub fn find_by_name<S: Store>(store: &S, name: &str) -> Result<Account, AccountError> {
    store
        .view(|tx| {
            let encoded = tx
                .get(ACCOUNT_BUCKET, name.as_bytes())?
                .ok_or_else(|| AccountError::NotFound(name.to_string()))?;

            codec::decode(&encoded).map_err(|source| AccountError::Decoding {
                name: name.to_string(),
                source,
            })
        })
        .map_err(|e| e.in_read(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Currency, Item, Saving, TimePeriod};
    use crate::store::{MemoryStore, StoreError};
    use rust_decimal_macros::dec;

    fn store() -> MemoryStore {
        MemoryStore::new(&[ACCOUNT_BUCKET])
    }

    #[test]
    fn test_create_then_find() {
        let store = store();

        let created = create(&store, &User::new("alice")).unwrap();
        assert_eq!(created.name(), "alice");
        assert!(created.incomes.is_empty());
        assert!(created.expenses.is_empty());
        assert_eq!(created.saving, Saving::default());
        assert_eq!(created.note, "");

        let found = find_by_name(&store, "alice").unwrap();
        assert_eq!(found, created);
    }

    #[test]
    fn test_create_duplicate() {
        let store = store();
        let first = create(&store, &User::new("alice")).unwrap();

        let err = create(&store, &User::new("alice")).unwrap_err();
        assert!(matches!(err, AccountError::DuplicateAccount(ref name) if name == "alice"));

        let stored = find_by_name(&store, "alice").unwrap();
        assert_eq!(stored, first);
    }

    #[test]
    fn test_create_empty_name_is_store_write_error() {
        let store = store();

        let err = create(&store, &User::new("")).unwrap_err();
        assert!(matches!(
            err,
            AccountError::StoreWrite { source: StoreError::KeyRequired, .. }
        ));
    }

    #[test]
    fn test_create_on_read_only_store() {
        let store = store();
        store.set_read_only(true);

        let err = create(&store, &User::new("alice")).unwrap_err();
        assert!(matches!(
            err,
            AccountError::StoreWrite { ref name, source: StoreError::ReadOnly } if name == "alice"
        ));

        store.set_read_only(false);
        assert!(matches!(
            find_by_name(&store, "alice"),
            Err(AccountError::NotFound(_))
        ));
    }

    #[test]
    fn test_find_missing() {
        let store = store();
        create(&store, &User::new("alice")).unwrap();

        let err = find_by_name(&store, "bob").unwrap_err();
        assert!(matches!(err, AccountError::NotFound(ref name) if name == "bob"));
    }

    #[test]
    fn test_find_corrupt_payload() {
        let store = store();
        store
            .update(|tx| tx.put(ACCOUNT_BUCKET, b"alice", b"{not json"))
            .unwrap();

        let err = find_by_name(&store, "alice").unwrap_err();
        assert!(matches!(err, AccountError::Decoding { ref name, .. } if name == "alice"));
    }

    #[test]
    fn test_find_store_failure_names_account() {
        // no bucket provisioned, so the lookup itself fails
        let store = MemoryStore::new(&[]);

        let err = find_by_name(&store, "alice").unwrap_err();
        assert!(matches!(
            err,
            AccountError::StoreRead { ref name, source: StoreError::BucketNotFound(_) } if name == "alice"
        ));
    }

    #[test]
    fn test_find_rejects_over_precise_amount() {
        let store = store();
        let mut account = create(&store, &User::new("alice")).unwrap();
        account.incomes.push(Item::new(
            "Salary",
            Amount::new(dec!(1.5)),
            Currency::Usd,
            TimePeriod::Month,
            "wallet",
        ));
        update(&store, &mut account).unwrap();

        // rewrite the stored amount with more digits than a Decimal holds
        let raw = store.view(|tx| tx.get(ACCOUNT_BUCKET, b"alice")).unwrap().unwrap();
        let tampered = String::from_utf8(raw)
            .unwrap()
            .replace("\"1.5\"", "\"1.00000000000000000000000000001\"");
        store
            .update(|tx| tx.put(ACCOUNT_BUCKET, b"alice", tampered.as_bytes()))
            .unwrap();

        let err = find_by_name(&store, "alice").unwrap_err();
        assert!(matches!(err, AccountError::Decoding { ref name, .. } if name == "alice"));
    }

    #[test]
    fn test_update_replaces_record() {
        let store = store();
        let created = create(&store, &User::new("alice")).unwrap();

        let mut account = find_by_name(&store, "alice").unwrap();
        account.incomes.push(Item::new(
            "Salary",
            Amount::new(dec!(4200.00)),
            Currency::Usd,
            TimePeriod::Month,
            "wallet",
        ));
        account.expenses.push(Item::new(
            "Rent",
            Amount::new(dec!(1300.50)),
            Currency::Eur,
            TimePeriod::Month,
            "home",
        ));
        account.saving = Saving {
            amount: 250_000,
            currency: Currency::Rub,
            interest: 7.5,
            deposit: true,
            capitalization: true,
        };
        account.note = "moving in spring".to_string();

        update(&store, &mut account).unwrap();
        assert!(account.last_seen() >= created.last_seen());

        let stored = find_by_name(&store, "alice").unwrap();
        assert_eq!(stored, account);
    }

    #[test]
    fn test_update_last_seen_never_decreases() {
        let store = store();
        let mut account = create(&store, &User::new("alice")).unwrap();

        let mut previous = account.last_seen();
        for _ in 0..20 {
            update(&store, &mut account).unwrap();
            let stored = find_by_name(&store, "alice").unwrap();
            assert!(stored.last_seen() >= previous);
            previous = stored.last_seen();
        }
    }

    #[test]
    fn test_update_creates_missing_record() {
        let store = store();
        let mut ghost = Account::new("ghost");

        update(&store, &mut ghost).unwrap();
        assert_eq!(find_by_name(&store, "ghost").unwrap(), ghost);

        // create still refuses the name afterwards
        assert!(matches!(
            create(&store, &User::new("ghost")),
            Err(AccountError::DuplicateAccount(_))
        ));
    }

    #[test]
    fn test_update_encoding_failure_keeps_old_record() {
        let store = store();
        let created = create(&store, &User::new("alice")).unwrap();

        let mut account = created.clone();
        account.note = "changed".to_string();
        account.saving.interest = f64::NAN;

        let err = update(&store, &mut account).unwrap_err();
        assert!(matches!(err, AccountError::Encoding { ref name, .. } if name == "alice"));

        assert_eq!(find_by_name(&store, "alice").unwrap(), created);
    }

    #[test]
    fn test_example_alice() {
        let store = store();

        let alice = create(&store, &User::new("alice")).unwrap();
        assert_eq!(alice.saving.amount, 0);
        assert_eq!(alice.saving.currency, Currency::Usd);
        assert_eq!(alice.saving.interest, 0.0);
        assert!(!alice.saving.deposit);
        assert!(!alice.saving.capitalization);

        assert_eq!(find_by_name(&store, "alice").unwrap(), alice);
        assert!(matches!(
            find_by_name(&store, "bob"),
            Err(AccountError::NotFound(_))
        ));
    }

    #[test]
    fn test_concurrent_create_single_winner() {
        let store = store();

        let results: Vec<Result<Account, AccountError>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| s.spawn(|| create(&store, &User::new("alice"))))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        let winners: Vec<&Account> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        assert_eq!(winners.len(), 1);
        assert!(results
            .iter()
            .filter(|r| r.is_err())
            .all(|r| matches!(r, Err(AccountError::DuplicateAccount(_)))));

        assert_eq!(&find_by_name(&store, "alice").unwrap(), winners[0]);
    }
}
