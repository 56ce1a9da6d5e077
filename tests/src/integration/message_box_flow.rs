//! # Message Box Flow
//!
//! Admin allow-lists members, members deposit flagged payloads, anyone
//! checks a deposit against the public root.
//!
//! ```text
//! admin ──store_address──→ addresses root ──eligibility──→ deposit_message ──→ messages root
//!                                                                                │
//!                                                              check_message ←───┘
//! ```

#[cfg(test)]
mod tests {
    use crate::harness::{payload, random_participant, BoxHarness};
    use dd_02_message_box::{MessageBoxApi, MessageBoxError, PayloadFlags, MAX_ADDRESSES};

    // =========================================================================
    // CAPACITY
    // =========================================================================

    #[test]
    fn test_101st_address_rejected() {
        let mut h = BoxHarness::new(MAX_ADDRESSES);
        h.allow_many(MAX_ADDRESSES as usize);
        assert_eq!(h.service.address_count(), 100);

        let root_before = h.service.addresses_root();
        let err = h.allow(&random_participant()).unwrap_err();

        assert!(matches!(err, MessageBoxError::CapacityExceeded { capacity: 100 }));
        assert_eq!(h.service.address_count(), 100);
        assert_eq!(h.service.addresses_root(), root_before);
    }

    #[test]
    fn test_capacity_checked_before_witness() {
        let mut h = BoxHarness::new(1);
        h.allow_many(1);

        // Garbage witness still reports capacity, not a mismatch.
        let stranger = random_participant();
        let bogus = h
            .addresses
            .witness(&shared_crypto::derive_identity_key(&random_participant()));
        let err = h
            .service
            .store_address(&h.admin, &stranger, &bogus)
            .unwrap_err();

        assert!(matches!(err, MessageBoxError::CapacityExceeded { .. }));
    }

    // =========================================================================
    // FLAG RULES
    // =========================================================================

    #[test]
    fn test_all_flag_combinations_through_deposit() {
        let mut h = BoxHarness::new(64);
        let members = h.allow_many(64);

        for (mask, who) in members.iter().enumerate() {
            let mask = mask as u8;
            let f = PayloadFlags::from_mask(mask);
            let expected = !(f.f1 && (f.f2 || f.f3 || f.f4 || f.f5 || f.f6))
                && (!f.f2 || f.f3)
                && !(f.f4 && (f.f5 || f.f6));

            let result = h.deposit(who, payload(mask, 1 + mask as u64));
            assert_eq!(result.is_ok(), expected, "mask {:06b}", mask);
            if !expected {
                assert!(matches!(
                    result,
                    Err(MessageBoxError::PayloadRuleViolation { .. })
                ));
            }
        }

        let accepted = (0u8..64)
            .filter(|m| PayloadFlags::from_mask(*m).is_valid())
            .count() as u32;
        assert_eq!(h.service.message_count(), accepted);
        assert_eq!(h.events.event_count(), accepted as usize);
    }

    #[test]
    fn test_named_flag_examples() {
        let mut h = BoxHarness::new(5);
        let m = h.allow_many(5);

        assert!(h.deposit(&m[0], payload(0b00_0001, 7)).is_ok()); // f1 alone
        assert!(h.deposit(&m[1], payload(0b00_0011, 7)).is_err()); // f1, f2
        assert!(h.deposit(&m[2], payload(0b00_0010, 7)).is_err()); // f2 without f3
        assert!(h.deposit(&m[3], payload(0b00_0110, 7)).is_ok()); // f2, f3
        assert!(h.deposit(&m[4], payload(0b01_1000, 7)).is_err()); // f4, f5
    }

    // =========================================================================
    // UNIQUENESS AND ELIGIBILITY
    // =========================================================================

    #[test]
    fn test_second_deposit_refused_for_any_payload() {
        let mut h = BoxHarness::new(10);
        let who = h.allow_many(1)[0];
        h.deposit(&who, payload(0, 42)).unwrap();

        for (mask, content) in [(0u8, 42u64), (0, 43), (0b00_0001, 1), (0b00_0011, 9)] {
            let err = h.deposit(&who, payload(mask, content)).unwrap_err();
            assert!(
                matches!(err, MessageBoxError::DuplicateDeposit { .. }),
                "mask {:06b}: {:?}",
                mask,
                err
            );
        }
        assert_eq!(h.service.message_count(), 1);
        assert!(h.confirm(&who, &payload(0, 42)));
    }

    #[test]
    fn test_unlisted_identity_never_deposits() {
        let mut h = BoxHarness::new(10);
        h.allow_many(3);
        let outsider = random_participant();

        for mask in 0u8..64 {
            let err = h.deposit(&outsider, payload(mask, 5)).unwrap_err();
            assert!(matches!(err, MessageBoxError::NotEligible { .. }));
        }
        assert_eq!(h.service.message_count(), 0);
    }

    #[test]
    fn test_only_admin_stores() {
        let mut h = BoxHarness::new(10);
        let member = h.allow_many(1)[0];
        let target = random_participant();
        let witness = h
            .addresses
            .witness(&shared_crypto::derive_identity_key(&target));

        let err = h
            .service
            .store_address(&member, &target, &witness)
            .unwrap_err();
        assert!(matches!(err, MessageBoxError::Unauthorized { .. }));
        assert_eq!(h.service.address_count(), 1);
    }

    // =========================================================================
    // CHECK MESSAGE AND MONOTONICITY
    // =========================================================================

    #[test]
    fn test_check_message_matches_exact_payload() {
        let mut h = BoxHarness::new(10);
        let m = h.allow_many(2);
        let p = payload(0b00_0110, 0xdead);
        h.deposit(&m[0], p).unwrap();

        assert!(h.confirm(&m[0], &p));
        assert!(!h.confirm(&m[0], &payload(0b00_0110, 0xbeef)));
        assert!(!h.confirm(&m[1], &p));
    }

    #[test]
    fn test_counters_never_decrease() {
        let mut h = BoxHarness::new(20);
        let members: Vec<_> = (0..20).map(|_| random_participant()).collect();
        let mut last = (0, 0);

        for (i, who) in members.iter().enumerate() {
            let _ = h.allow(who);
            // Every third member sends an invalid payload, then everyone retries.
            let mask = if i % 3 == 0 { 0b00_0011 } else { 0b00_0001 };
            let p = payload(mask, i as u64 + 1);
            let _ = h.deposit(who, p);
            let _ = h.deposit(who, p);

            let now = (h.service.address_count(), h.service.message_count());
            assert!(now.0 >= last.0 && now.1 >= last.1);
            last = now;
        }

        assert_eq!(last.0, 20);
        assert_eq!(last.1, 13);
    }

    #[test]
    fn test_events_carry_sequence_and_depositor() {
        let mut h = BoxHarness::new(10);
        let m = h.allow_many(3);
        for who in &m {
            h.deposit(who, payload(0, 1)).unwrap();
        }

        let events = h.events.get_events();
        assert_eq!(events.len(), 3);
        for (i, (event, who)) in events.iter().zip(&m).enumerate() {
            assert_eq!(event.sequence, i as u32);
            assert_eq!(event.depositor, shared_crypto::derive_identity_key(who));
        }
    }
}
