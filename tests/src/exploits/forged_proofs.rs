//! # Forged Accumulator Proofs
//!
//! The state adapter and the prover both trust only proofs that verify
//! under the prover key and descend from the zero base case.

#[cfg(test)]
mod tests {
    use crate::harness::ChainHarness;
    use dd_03_agent_reports::{
        AccumulatorError, AccumulatorProof, AdapterError, AgentReport, HighestMessageApi,
        ProofError, ProofStatement, ReportProver,
    };
    use shared_crypto::Ed25519KeyPair;

    const SEED: [u8; 32] = [0x61; 32];

    fn chain(h: &ChainHarness, numbers: &[u64]) -> AccumulatorProof {
        let reports: Vec<_> = numbers
            .iter()
            .map(|n| AgentReport::with_checksum(*n, 4, 200, 7000))
            .collect();
        h.prover
            .fold(h.prover.base_case().unwrap(), &reports)
            .unwrap()
            .proof
    }

    fn assert_refused(h: &ChainHarness, proof: &AccumulatorProof, before: u64) -> ProofError {
        let err = h.adapter.update_highest_message_no(proof).unwrap_err();
        assert_eq!(h.adapter.highest_message_no().unwrap(), before);
        match err {
            AdapterError::ProofRejected(e) => e,
            other => panic!("expected proof rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_inflated_output() {
        let h = ChainHarness::new(SEED);
        let honest = chain(&h, &[1, 2]);
        h.adapter.update_highest_message_no(&honest).unwrap();

        let mut forged = honest.clone();
        forged.statement.public_output = u64::MAX;

        let err = assert_refused(&h, &forged, 2);
        assert!(matches!(err, ProofError::BadSignature(_)));
    }

    #[test]
    fn test_signature_transplant() {
        let h = ChainHarness::new(SEED);
        let short = chain(&h, &[1]);
        let long = chain(&h, &[1, 2, 3]);

        let spliced = AccumulatorProof {
            statement: long.statement.clone(),
            signature: short.signature,
        };

        assert!(matches!(
            assert_refused(&h, &spliced, 0),
            ProofError::BadSignature(_)
        ));
    }

    #[test]
    fn test_self_signed_chain() {
        let h = ChainHarness::new(SEED);
        let rogue = ReportProver::new(Ed25519KeyPair::from_seed([0x62; 32]));
        let proof = rogue
            .fold(
                rogue.base_case().unwrap(),
                &[AgentReport::with_checksum(1_000_000, 4, 200, 7000)],
            )
            .unwrap()
            .proof;

        assert!(matches!(
            assert_refused(&h, &proof, 0),
            ProofError::BadSignature(_)
        ));
    }

    #[test]
    fn test_head_start_base() {
        let h = ChainHarness::new(SEED);
        let head_start = h.prover.base_case_at(5_000).unwrap();
        let extended = h
            .prover
            .step(&head_start, &AgentReport::with_checksum(5_001, 4, 200, 7000))
            .unwrap()
            .proof;

        assert!(matches!(
            assert_refused(&h, &extended, 0),
            ProofError::NonCanonicalBase { .. }
        ));
    }

    #[test]
    fn test_inconsistent_statement_under_trusted_key() {
        let h = ChainHarness::new(SEED);
        let key = Ed25519KeyPair::from_seed(SEED);

        let shrinking = ProofStatement {
            public_input: 9,
            public_output: 3,
            steps: 2,
            ..ProofStatement::base(0)
        };
        let proof = AccumulatorProof::sign(shrinking, &key).unwrap();
        assert!(matches!(
            assert_refused(&h, &proof, 0),
            ProofError::Malformed { .. }
        ));

        let fake_base = ProofStatement {
            public_output: 12,
            ..ProofStatement::base(0)
        };
        let proof = AccumulatorProof::sign(fake_base, &key).unwrap();
        assert!(matches!(
            assert_refused(&h, &proof, 0),
            ProofError::Malformed { .. }
        ));
    }

    #[test]
    fn test_prover_refuses_forged_prior() {
        let h = ChainHarness::new(SEED);
        let mut forged = chain(&h, &[1]);
        forged.statement.public_output = 50;

        let err = h
            .prover
            .step(&forged, &AgentReport::with_checksum(51, 4, 200, 7000))
            .unwrap_err();
        assert!(matches!(
            err,
            AccumulatorError::InvalidPriorProof(ProofError::BadSignature(_))
        ));
    }

    #[test]
    fn test_prover_refuses_foreign_prior() {
        let h = ChainHarness::new(SEED);
        let rogue = ReportProver::new(Ed25519KeyPair::from_seed([0x63; 32]));

        let err = h
            .prover
            .step(
                &rogue.base_case().unwrap(),
                &AgentReport::with_checksum(1, 4, 200, 7000),
            )
            .unwrap_err();
        assert!(matches!(err, AccumulatorError::InvalidPriorProof(_)));
    }
}
