//! # Stale and Forged Witnesses
//!
//! The message box holds roots only, so every attack on it is an attack
//! on the witness a caller supplies. Each test asserts the refusal and
//! that roots and counters are untouched.

#[cfg(test)]
mod tests {
    use crate::harness::{payload, random_participant, BoxHarness};
    use dd_01_authenticated_map::{MapError, MapWitness, SparseMerkleMap, EMPTY, MEMBER};
    use dd_02_message_box::{MapKind, MessageBoxApi, MessageBoxError};
    use shared_crypto::derive_identity_key;

    fn assert_mismatch(err: MessageBoxError, expected_map: MapKind) {
        match err {
            MessageBoxError::WitnessMismatch { map, .. } => assert_eq!(map, expected_map),
            other => panic!("expected witness mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_address_witness_from_before_another_insert() {
        let mut h = BoxHarness::new(10);
        let late = random_participant();
        let stale = h.addresses.witness(&derive_identity_key(&late));

        h.allow_many(1);
        let root = h.service.addresses_root();

        let err = h.service.store_address(&h.admin, &late, &stale).unwrap_err();
        assert_mismatch(err, MapKind::Addresses);
        assert_eq!(h.service.addresses_root(), root);
        assert_eq!(h.service.address_count(), 1);
    }

    #[test]
    fn test_witness_for_another_identity() {
        let h = BoxHarness::new(10);
        let target = random_participant();
        let other = h.addresses.witness(&derive_identity_key(&random_participant()));

        let err = h.service.store_address(&h.admin, &target, &other).unwrap_err();
        match err {
            MessageBoxError::WitnessMismatch { source, .. } => {
                assert!(matches!(source, MapError::KeyMismatch { .. }))
            }
            other => panic!("expected key mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_restoring_member_refused() {
        let mut h = BoxHarness::new(10);
        let member = h.allow_many(1)[0];

        // A fresh witness proves MEMBER, not EMPTY.
        let err = h.allow(&member).unwrap_err();
        assert_mismatch(err, MapKind::Addresses);
        assert_eq!(h.service.address_count(), 1);
    }

    #[test]
    fn test_self_made_membership_proof() {
        let mut h = BoxHarness::new(10);
        h.allow_many(2);
        let outsider = random_participant();
        let key = derive_identity_key(&outsider);

        // The outsider builds a private tree in which they are a member.
        let mut forged_tree = SparseMerkleMap::new();
        forged_tree.set(key, MEMBER);
        let forged = forged_tree.witness(&key);
        let messages = h.messages.witness(&key);

        let err = h
            .service
            .deposit_message(&outsider, &outsider, &forged, &messages, payload(0, 1))
            .unwrap_err();
        assert_mismatch(err, MapKind::Addresses);
        assert_eq!(h.service.message_count(), 0);
    }

    #[test]
    fn test_deposit_replay_with_pre_deposit_witness() {
        let mut h = BoxHarness::new(10);
        let who = h.allow_many(1)[0];
        let key = derive_identity_key(&who);
        let pre_deposit = h.messages.witness(&key);

        h.deposit(&who, payload(0, 10)).unwrap();
        let root = h.service.messages_root();

        let address_witness = h.addresses.witness(&key);
        let err = h
            .service
            .deposit_message(&who, &who, &address_witness, &pre_deposit, payload(0, 11))
            .unwrap_err();
        assert_mismatch(err, MapKind::Messages);
        assert_eq!(h.service.messages_root(), root);
        assert_eq!(h.service.message_count(), 1);
        assert!(h.confirm(&who, &payload(0, 10)));
    }

    #[test]
    fn test_tampered_sibling() {
        let mut h = BoxHarness::new(10);
        h.allow_many(3);
        let target = random_participant();
        let tampered = h
            .addresses
            .witness(&derive_identity_key(&target))
            .with_sibling(0, [0xee; 32]);

        let err = h.service.store_address(&h.admin, &target, &tampered).unwrap_err();
        assert_mismatch(err, MapKind::Addresses);
        assert_eq!(h.service.address_count(), 3);
    }

    #[test]
    fn test_truncated_witness() {
        let h = BoxHarness::new(10);
        let target = random_participant();
        let truncated = MapWitness::new(Default::default(), Vec::new(), EMPTY);

        let err = h.service.store_address(&h.admin, &target, &truncated).unwrap_err();
        match err {
            MessageBoxError::WitnessMismatch { source, .. } => {
                assert!(matches!(source, MapError::MalformedWitness { siblings: 0, .. }))
            }
            other => panic!("expected malformed witness, got {:?}", other),
        }
    }

    #[test]
    fn test_depositing_for_someone_else() {
        let mut h = BoxHarness::new(10);
        let m = h.allow_many(2);
        let key = derive_identity_key(&m[1]);

        let err = h
            .service
            .deposit_message(
                &m[0],
                &m[1],
                &h.addresses.witness(&key),
                &h.messages.witness(&key),
                payload(0, 5),
            )
            .unwrap_err();
        assert!(matches!(err, MessageBoxError::Unauthorized { .. }));
        assert_eq!(h.service.message_count(), 0);
    }

    #[test]
    fn test_check_message_with_forged_tree() {
        let mut h = BoxHarness::new(10);
        let who = h.allow_many(1)[0];
        h.deposit(&who, payload(0, 10)).unwrap();

        let key = derive_identity_key(&who);
        let mut forged_tree = SparseMerkleMap::new();
        forged_tree.set(key, payload(0, 99));

        assert!(!h
            .service
            .check_message(&forged_tree.witness(&key), &who, &payload(0, 99)));
    }
}
