//! Property-based tests for the sequence primitives and splicer

use proptest::prelude::*;

use seqderive::{reverse_complement, splice, transcribe, translate, Alphabet};

proptest! {
    #[test]
    fn reverse_complement_dna_round_trips(seq in "[ACGTacgt]{0,200}") {
        let rc = reverse_complement(&seq, Alphabet::Dna).unwrap();
        prop_assert_eq!(reverse_complement(&rc, Alphabet::Dna).unwrap(), seq);
    }

    #[test]
    fn reverse_complement_rna_round_trips(seq in "[ACGUacgu]{0,200}") {
        let rc = reverse_complement(&seq, Alphabet::Rna).unwrap();
        prop_assert_eq!(reverse_complement(&rc, Alphabet::Rna).unwrap(), seq);
    }

    #[test]
    fn reverse_complement_preserves_length(seq in "[ACGTacgt]{0,200}") {
        let rc = reverse_complement(&seq, Alphabet::Dna).unwrap();
        prop_assert_eq!(rc.len(), seq.len());
    }

    #[test]
    fn transcribe_changes_only_t(seq in "[ACGTNacgtn]{0,200}") {
        let rna = transcribe(&seq);
        prop_assert_eq!(rna.len(), seq.len());
        for (dna_base, rna_base) in seq.chars().zip(rna.chars()) {
            match dna_base {
                'T' => prop_assert_eq!(rna_base, 'U'),
                't' => prop_assert_eq!(rna_base, 'u'),
                other => prop_assert_eq!(rna_base, other),
            }
        }
    }

    #[test]
    fn translate_consumes_whole_codons(seq in "[ACGU]{0,99}") {
        // Every triplet over {A,C,G,U} is in the 64-entry table, so
        // translation succeeds exactly when the length is a multiple of 3
        match translate(&seq) {
            Ok(protein) => {
                prop_assert_eq!(seq.len() % 3, 0);
                prop_assert_eq!(protein.len(), seq.len() / 3);
            }
            Err(_) => prop_assert_ne!(seq.len() % 3, 0),
        }
    }

    #[test]
    fn splice_full_window_bound_is_identity(
        seq in "[ACGU]{1,100}",
        origin in 1u64..10_000,
    ) {
        let end = origin + seq.len() as u64 - 1;
        let spliced = splice(&seq, &[(origin, end)], origin, false).unwrap();
        prop_assert_eq!(spliced, seq);
    }

    #[test]
    fn splice_reverse_equals_reverse_complement_of_forward(
        seq in "[ACGU]{10,100}",
        origin in 1u64..10_000,
    ) {
        // Two interior bounds relative to the window
        let end = origin + seq.len() as u64 - 1;
        let mid = origin + (seq.len() as u64) / 2;
        let bounds = [(origin, mid - 1), (mid + 1, end)];

        let forward = splice(&seq, &bounds, origin, false).unwrap();
        let window = reverse_complement(&seq, Alphabet::Rna).unwrap();
        let reverse = splice(&window, &bounds, origin, true).unwrap();
        prop_assert_eq!(reverse, reverse_complement(&forward, Alphabet::Rna).unwrap());
    }
}
