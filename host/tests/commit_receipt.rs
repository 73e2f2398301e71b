// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use sha2::Digest as _;
use sigil_host::{digest_from_hex, run_commit, Receipt, SimPlatform};
use sigil_kernel::arena::WordArena;
use sigil_kernel::commit::Committer;
use sigil_kernel::digest::Digest;

#[test]
fn test_golden_receipt() {
    let receipt = run_commit(&[0, 1, 2, 3], &Digest::ZERO, 0).unwrap();

    assert_eq!(receipt.journal, "00010203");
    assert_eq!(
        receipt.journal_digest,
        "054edec1d0211f624fed0cbca9d4f9400b0e491c43742af2c5b0abebf0c990d8"
    );
    assert_eq!(
        receipt.output_digest,
        "d20c7834d17d51f28a7127371b658260b7dfab816498ee8449b59a9ca2057cd0"
    );
    assert_eq!(receipt.tag, "risc0.Output");
    assert_eq!(
        receipt.assumptions_digest,
        "0000000000000000000000000000000000000000000000000000000000000000"
    );
}

#[test]
fn test_journal_digest_matches_sha2() {
    let journal = b"arbitrary guest output, any length";
    let receipt = run_commit(journal, &Digest::ZERO, 0).unwrap();

    let expected: [u8; 32] = sha2::Sha256::digest(journal).into();
    assert_eq!(receipt.journal_digest, hex::encode(expected));
}

#[test]
fn test_receipt_round_trips_through_json() {
    let receipt = run_commit(b"round trip", &Digest::ZERO, 3).unwrap();
    let json = serde_json::to_string(&receipt).unwrap();
    let back: Receipt = serde_json::from_str(&json).unwrap();
    assert_eq!(back, receipt);
}

#[test]
fn test_streaming_guest_produces_same_receipt_digests() {
    let mut arena = WordArena::new();
    let mut platform = SimPlatform::new();

    let mut committer = Committer::new();
    committer.commit(&mut platform, b"stream");
    committer.commit(&mut platform, b"ed output");
    let commitment = committer
        .exit(&mut arena, &mut platform, &Digest::ZERO, 0)
        .unwrap();

    let receipt = run_commit(b"streamed output", &Digest::ZERO, 0).unwrap();
    assert_eq!(
        digest_from_hex(&receipt.output_digest).unwrap(),
        commitment.output_digest
    );
    assert_eq!(platform.journal(), b"streamed output");
    assert_eq!(platform.halted(), Some((0, commitment.output_digest)));
}

#[test]
fn test_nonzero_assumptions_bind_the_output() {
    let assumptions =
        digest_from_hex("054edec1d0211f624fed0cbca9d4f9400b0e491c43742af2c5b0abebf0c990d8")
            .unwrap();
    let with = run_commit(&[0, 1, 2, 3], &assumptions, 0).unwrap();
    let without = run_commit(&[0, 1, 2, 3], &Digest::ZERO, 0).unwrap();

    assert_eq!(with.journal_digest, without.journal_digest);
    assert_ne!(with.output_digest, without.output_digest);
}
