use phonebook_core::domain::ContactId;
use phonebook_core::rules::{NameError, PhoneError};
use phonebook_core::CoreError;
use phonebook_store::error::{StoreError, StoreErrorKind};
use phonebook_store::repo::{ContactNew, ContactUpdate};
use phonebook_store::Store;

fn ids(store: &Store) -> Vec<ContactId> {
    store.contacts().list().iter().map(|c| c.id).collect()
}

#[test]
fn seeded_store_starts_with_two_contacts() {
    let store = Store::seeded().expect("seed store");
    let contacts = store.contacts().list();
    assert_eq!(contacts.len(), 2);
    assert_eq!(contacts[0].name, "Анна Петрова");
    assert_eq!(contacts[0].phone.as_str(), "+79123456789");
    assert_eq!(contacts[1].name, "Иван Смирнов");
    assert_eq!(contacts[1].phone.as_str(), "+79876543210");
}

#[test]
fn create_appends_normalized_contact() {
    let store = Store::seeded().expect("seed store");
    let before = store.contacts().list();

    let contact = store
        .contacts()
        .create(
            1_700_000_000_000,
            ContactNew {
                name: "Ольга Кузнецова".to_string(),
                phone: "89001234567".to_string(),
            },
        )
        .expect("create contact");

    let after = store.contacts().list();
    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(after[..2], before[..]);
    let last = after.last().expect("last contact");
    assert_eq!(last, &contact);
    assert_eq!(last.phone.as_str(), "+79001234567");
    assert_eq!(last.name, "Ольга Кузнецова");
}

#[test]
fn rapid_creates_get_distinct_ids() {
    let store = Store::empty();
    let now = 1_700_000_000_000;
    for name in ["Anna", "Boris", "Clara"] {
        store
            .contacts()
            .create(
                now,
                ContactNew {
                    name: name.to_string(),
                    phone: "+79001234567".to_string(),
                },
            )
            .expect("create contact");
    }
    let ids = ids(&store);
    assert_eq!(ids, vec![ContactId(now), ContactId(now + 1), ContactId(now + 2)]);
}

#[test]
fn create_rejects_invalid_input_without_mutating() {
    let store = Store::seeded().expect("seed store");
    let snapshot = store.snapshot();

    let err = store
        .contacts()
        .create(
            1,
            ContactNew {
                name: "A".to_string(),
                phone: "89001234567".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::InvalidName(NameError::TooShort))
    ));

    let err = store
        .contacts()
        .create(
            1,
            ContactNew {
                name: "Anna".to_string(),
                phone: "123".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        StoreError::Core(CoreError::InvalidPhone(PhoneError::DigitCount))
    ));

    assert_eq!(store.snapshot(), snapshot);
}

#[test]
fn update_keeps_id_and_position() {
    let store = Store::seeded().expect("seed store");
    let target = ContactId(1);

    let updated = store
        .contacts()
        .update(
            target,
            ContactUpdate {
                name: None,
                phone: Some("71234567890".to_string()),
            },
        )
        .expect("update contact");
    assert_eq!(updated.id, target);
    assert_eq!(updated.phone.as_str(), "+71234567890");
    assert_eq!(updated.name, "Анна Петрова");

    let contacts = store.contacts().list();
    assert_eq!(contacts[0], updated);
    assert_eq!(contacts[1].id, ContactId(2));
}

#[test]
fn update_unknown_contact_is_not_found() {
    let store = Store::seeded().expect("seed store");
    let snapshot = store.snapshot();
    let err = store
        .contacts()
        .update(
            ContactId(99),
            ContactUpdate {
                name: Some("Ghost".to_string()),
                phone: None,
            },
        )
        .unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::NotFound);
    assert_eq!(store.snapshot(), snapshot);
}

#[test]
fn delete_preserves_remaining_order() {
    let store = Store::seeded().expect("seed store");
    let added = store
        .contacts()
        .create(
            10_000,
            ContactNew {
                name: "Ольга Кузнецова".to_string(),
                phone: "89001234567".to_string(),
            },
        )
        .expect("create contact");

    store.contacts().delete(ContactId(2)).expect("delete contact");
    assert_eq!(ids(&store), vec![ContactId(1), added.id]);
    assert!(store.contacts().get(ContactId(2)).is_none());

    let err = store.contacts().delete(ContactId(2)).unwrap_err();
    assert_eq!(err.kind(), StoreErrorKind::NotFound);
}

#[test]
fn new_ids_sort_after_seeded_ids() {
    let store = Store::seeded().expect("seed store");
    let contact = store
        .contacts()
        .create(
            0,
            ContactNew {
                name: "Anna".to_string(),
                phone: "89001234567".to_string(),
            },
        )
        .expect("create contact");
    assert_eq!(contact.id, ContactId(3));
}

#[test]
fn bootstrap_appends_extra_contacts_after_seed() {
    let store = Store::bootstrap(
        true,
        vec![ContactNew {
            name: "Anna Smith".to_string(),
            phone: "+1 415 555 1212".to_string(),
        }],
        500,
    )
    .expect("bootstrap");
    let contacts = store.contacts().list();
    assert_eq!(contacts.len(), 3);
    assert_eq!(contacts[2].phone.as_str(), "+14155551212");
    assert_eq!(contacts[2].id, ContactId(500));

    let empty = Store::bootstrap(false, Vec::new(), 0).expect("bootstrap");
    assert_eq!(empty.contacts().count(), 0);
}
