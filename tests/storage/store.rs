//! Integration tests for ObjectStore operations

use hbnb_foundation::{ErrorKind, Value};

use crate::temp_store;

// =============================================================================
// Create / find / delete
// =============================================================================

#[test]
fn create_then_find() {
    let (_dir, mut store) = temp_store();
    let id = store.create("Amenity", Vec::new()).unwrap().id().to_string();

    let found = store.find_by_id("Amenity", &id).unwrap();
    assert_eq!(found.id().as_str(), id);
    assert_eq!(found.key(), format!("Amenity.{id}"));
}

#[test]
fn find_checks_kind_before_id() {
    let (_dir, mut store) = temp_store();
    let id = store.create("State", Vec::new()).unwrap().id().to_string();

    assert!(matches!(
        store.find_by_id("Ghost", &id).unwrap_err().kind,
        ErrorKind::UnknownKind(_)
    ));
    assert!(matches!(
        store.find_by_id("City", &id).unwrap_err().kind,
        ErrorKind::InstanceNotFound { .. }
    ));
}

#[test]
fn delete_removes_exactly_one() {
    let (_dir, mut store) = temp_store();
    let keep = store.create("City", Vec::new()).unwrap().id().to_string();
    let gone = store.create("City", Vec::new()).unwrap().id().to_string();

    let removed = store.delete_by_id("City", &gone).unwrap();
    assert_eq!(removed.id().as_str(), gone);
    assert_eq!(store.len(), 1);
    assert!(store.find_by_id("City", &keep).is_ok());
    assert!(store.delete_by_id("City", &gone).is_err());
}

#[test]
fn find_all_filters_and_keeps_insertion_order() {
    let (_dir, mut store) = temp_store();
    let first = store.create("User", Vec::new()).unwrap().id().clone();
    store.create("Place", Vec::new()).unwrap();
    let second = store.create("User", Vec::new()).unwrap().id().clone();

    let users: Vec<_> = store
        .find_all(Some("User"))
        .unwrap()
        .into_iter()
        .map(|entity| entity.id().clone())
        .collect();
    assert_eq!(users, vec![first, second]);
    assert_eq!(store.find_all(None).unwrap().len(), 3);
    assert_eq!(store.count("Place").unwrap(), 1);
    assert_eq!(store.count("Review").unwrap(), 0);
    assert!(store.find_all(Some("Ghost")).is_err());
}

// =============================================================================
// Updates
// =============================================================================

#[test]
fn update_advances_updated_at_only() {
    let (_dir, mut store) = temp_store();
    let id = store.create("State", Vec::new()).unwrap().id().to_string();
    let before = store.find_by_id("State", &id).unwrap().clone();

    store
        .update_field("State", &id, "name", Value::from("Texas"))
        .unwrap();

    let after = store.find_by_id("State", &id).unwrap();
    assert_eq!(after.get("name"), Some(&Value::from("Texas")));
    assert_eq!(after.id(), before.id());
    assert_eq!(after.created_at(), before.created_at());
    assert!(after.updated_at() > before.updated_at());
}

#[test]
fn repeated_updates_stay_monotonic() {
    let (_dir, mut store) = temp_store();
    let id = store.create("Review", Vec::new()).unwrap().id().to_string();

    let mut last = store.find_by_id("Review", &id).unwrap().updated_at();
    for n in 0..20 {
        store
            .update_field("Review", &id, "text", Value::from(format!("v{n}")))
            .unwrap();
        let now = store.find_by_id("Review", &id).unwrap().updated_at();
        assert!(now > last);
        last = now;
    }
}

#[test]
fn update_rejections_leave_entity_unchanged() {
    let (_dir, mut store) = temp_store();
    let id = store.create("Place", Vec::new()).unwrap().id().to_string();
    let before = store.find_by_id("Place", &id).unwrap().clone();

    let cases = [
        ("created_at", Value::from("2020-01-01T00:00:00.000000")),
        ("__class__", Value::from("User")),
        ("color", Value::from("blue")),
        ("number_rooms", Value::from("several")),
    ];
    for (field, value) in cases {
        assert!(store.update_field("Place", &id, field, value).is_err(), "{field}");
    }

    let err = store
        .update_fields(
            "Place",
            &id,
            vec![
                ("name".to_string(), Value::from("Loft")),
                ("max_guest".to_string(), Value::from("lots")),
            ],
        )
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidValue { .. }));
    assert_eq!(store.find_by_id("Place", &id).unwrap(), &before);
}

#[test]
fn update_coerces_to_schema_type() {
    let (_dir, mut store) = temp_store();
    let id = store.create("Place", Vec::new()).unwrap().id().to_string();

    store
        .update_fields(
            "Place",
            &id,
            vec![
                ("price_by_night".to_string(), Value::from("120")),
                ("latitude".to_string(), Value::from("37.77")),
                ("amenity_ids".to_string(), Value::from(vec![Value::from("a1")])),
            ],
        )
        .unwrap();

    let place = store.find_by_id("Place", &id).unwrap();
    assert_eq!(place.get("price_by_night"), Some(&Value::Int(120)));
    assert_eq!(place.get("latitude"), Some(&Value::Float(37.77)));
    assert_eq!(
        place.get("amenity_ids"),
        Some(&Value::from(vec![Value::from("a1")]))
    );
}
