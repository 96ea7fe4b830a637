// crates/engine/tests/property_tests.rs
use advcounter_engine::{MemorySource, Stattext, TextAnalyzer, TextSource, collect_report};
use advcounter_shared_kernel::Precision;
use proptest::prelude::*;

fn lines_of(text: &str) -> u64 {
    let mut source = MemorySource::new(text);
    Stattext::default().total_lines(&mut source).unwrap()
}

proptest! {
    #[test]
    fn line_count_matches_breaks(
        lines in prop::collection::vec("[a-z !.]{0,20}", 0..20),
        trailing_newline in any::<bool>(),
    ) {
        let mut text = lines.join("\n");
        if trailing_newline && !text.is_empty() {
            text.push('\n');
        }
        let breaks = text.matches('\n').count() as u64;
        let partial = u64::from(!text.is_empty() && !text.ends_with('\n'));
        prop_assert_eq!(lines_of(&text), breaks + partial);
    }

    #[test]
    fn punctuation_only_text_has_no_words(text in "[!?.,;:\\- \n]{0,200}") {
        let mut source = MemorySource::new(text);
        let mut engine = Stattext::new(Precision::new(2));
        prop_assert_eq!(engine.total_words(&mut source).unwrap(), 0);
        source.rewind().unwrap();
        prop_assert_eq!(engine.avg_letters_per_word(&mut source).unwrap(), 0.0);
    }

    #[test]
    fn ranking_is_case_insensitive(text in "[a-zA-Z ]{0,100}") {
        let mut upper = MemorySource::new(text.to_uppercase());
        let mut lower = MemorySource::new(text.to_lowercase());
        let a = Stattext::default().most_common_letter(&mut upper).unwrap();
        let b = Stattext::default().most_common_letter(&mut lower).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn fresh_engines_agree(text in "\\PC{0,300}", digits in 0u32..5) {
        let mut source = MemorySource::new(text);
        let first = collect_report(&mut Stattext::new(Precision::new(digits)), &mut source).unwrap();
        let second = collect_report(&mut Stattext::new(Precision::new(digits)), &mut source).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn letters_never_fewer_than_words_allow(text in "[a-z0-9 ]{0,200}") {
        let mut source = MemorySource::new(text);
        let mut engine = Stattext::default();
        let words = engine.total_words(&mut source).unwrap();
        source.rewind().unwrap();
        let letters = engine.total_letters(&mut source).unwrap();
        prop_assert!(letters >= words);
    }
}
