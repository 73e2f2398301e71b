// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::arena::WordArena;
use crate::commit::{commit_and_halt, Committer};
use crate::config::JOURNAL_CHANNEL;
use crate::digest::Digest;
use crate::sha::engine;
use crate::tests::TestPlatform;

const JOURNAL: [u8; 4] = [0, 1, 2, 3];

const JOURNAL_DIGEST: Digest = Digest::from_words([
    0x054edec1, 0xd0211f62, 0x4fed0cbc, 0xa9d4f940,
    0x0b0e491c, 0x43742af2, 0xc5b0abeb, 0xf0c990d8,
]);

// Golden vector: journal {0,1,2,3}, all-zero assumptions digest, tag
// "risc0.Output".
const OUTPUT_DIGEST: Digest = Digest::from_words([
    0xd20c7834, 0xd17d51f2, 0x8a712737, 0x1b658260,
    0xb7dfab81, 0x6498ee84, 0x49b59a9c, 0xa2057cd0,
]);

#[test]
fn test_one_shot_golden_vector() {
    let mut arena = WordArena::new();
    let mut platform = TestPlatform::new();

    let commitment =
        commit_and_halt(&mut arena, &mut platform, &JOURNAL, &Digest::ZERO, 0).unwrap();

    assert_eq!(commitment.journal_digest, JOURNAL_DIGEST);
    assert_eq!(commitment.output_digest, OUTPUT_DIGEST);
    assert_eq!(platform.channel(JOURNAL_CHANNEL), JOURNAL.to_vec());
    assert_eq!(platform.halted, Some((0, OUTPUT_DIGEST)));
}

#[test]
fn test_streaming_matches_one_shot() {
    let mut arena = WordArena::new();
    let mut platform = TestPlatform::new();

    let mut committer = Committer::new();
    committer.commit(&mut platform, &JOURNAL[..2]);
    committer.commit(&mut platform, &JOURNAL[2..]);
    let commitment = committer
        .exit(&mut arena, &mut platform, &Digest::ZERO, 7)
        .unwrap();

    assert_eq!(commitment.journal_digest, JOURNAL_DIGEST);
    assert_eq!(commitment.output_digest, OUTPUT_DIGEST);
    assert_eq!(platform.channel(JOURNAL_CHANNEL), JOURNAL.to_vec());
    assert_eq!(platform.halted, Some((7, OUTPUT_DIGEST)));
}

#[test]
fn test_raw_exit_skips_tagged_struct() {
    let mut arena = WordArena::new();
    let mut platform = TestPlatform::new();

    let mut committer = Committer::new();
    committer.commit(&mut platform, &JOURNAL);
    let digest = committer.exit_raw(&mut arena, &mut platform, 0).unwrap();

    // The raw mode halts with the plain journal digest.
    assert_eq!(digest, JOURNAL_DIGEST);
    assert_eq!(platform.halted, Some((0, JOURNAL_DIGEST)));
}

#[test]
fn test_assumptions_change_output() {
    let mut arena = WordArena::new();
    let mut platform = TestPlatform::new();
    let assumptions = engine::digest(&mut arena, &mut platform, b"assume").unwrap();

    let mut platform = TestPlatform::new();
    let commitment =
        commit_and_halt(&mut arena, &mut platform, &JOURNAL, &assumptions, 0).unwrap();

    assert_eq!(commitment.journal_digest, JOURNAL_DIGEST);
    assert_ne!(commitment.output_digest, OUTPUT_DIGEST);
}

#[test]
fn test_empty_journal_commits() {
    let mut arena = WordArena::new();
    let mut platform = TestPlatform::new();

    let commitment =
        commit_and_halt(&mut arena, &mut platform, &[], &Digest::ZERO, 0).unwrap();

    assert_eq!(
        commitment.journal_digest,
        Digest::from_words([
            0xe3b0c442, 0x98fc1c14, 0x9afbf4c8, 0x996fb924,
            0x27ae41e4, 0x649b934c, 0xa495991b, 0x7852b855,
        ])
    );
    assert!(platform.channel(JOURNAL_CHANNEL).is_empty());
    assert!(platform.halted.is_some());
}
