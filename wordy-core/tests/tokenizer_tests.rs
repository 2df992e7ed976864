//! Tokenizer behavior through the public API

use std::io::Cursor;
use wordy_core::tokenizer::{scan_words, ScanStats, Split, WordScanner};

#[test]
fn test_split_vectors_at_end_of_input() {
    let cases: Vec<(&str, usize, Option<&str>)> = vec![
        ("tacos ", 6, Some("tacos")),
        ("1231 ", 5, None),
        ("     ", 5, None),
        ("blar's", 6, Some("blars")),
        ("well, ", 6, Some("well")),
        ("\\n", 2, Some("n")),
    ];

    for (input, advance, token) in cases {
        let split = scan_words(input.as_bytes(), true);
        assert_eq!(split.advance(), advance, "input {input:?}");
        assert_eq!(split.token(), token, "input {input:?}");
    }
}

#[test]
fn test_final_split_variant() {
    match scan_words(b"yum", true) {
        Split::Final { advance, token, .. } => {
            assert_eq!(advance, 3);
            assert_eq!(token, "yum");
        }
        other => panic!("expected Final, got {other:?}"),
    }
}

#[test]
fn test_restart_from_advance() {
    let data = b"  they're so yum";
    let mut offset = 0;
    let mut tokens = Vec::new();

    loop {
        let split = scan_words(&data[offset..], true);
        offset += split.advance();
        if let Some(token) = split.token() {
            tokens.push(token.to_string());
        }
        if offset == data.len() {
            break;
        }
    }

    assert_eq!(tokens, vec!["theyre", "so", "yum"]);
}

#[test]
fn test_scanner_over_multiline_text() {
    let text = "It was the best of times,\nit was the worst of times;\n\n1859 -- Dickens\n";
    let tokens: Vec<String> = WordScanner::new(Cursor::new(text))
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(
        tokens,
        vec![
            "It", "was", "the", "best", "of", "times", "it", "was", "the", "worst", "of",
            "times", "Dickens"
        ]
    );
}

#[test]
fn test_scanner_stats_after_exhaustion() {
    let text = "¡Hola, señor! ¿Qué tal?";
    let mut scanner = WordScanner::new(Cursor::new(text));
    let tokens: Vec<String> = scanner.by_ref().collect::<Result<_, _>>().unwrap();

    assert_eq!(tokens, vec!["Hola", "señor", "Qué", "tal"]);
    assert_eq!(
        scanner.stats(),
        ScanStats {
            bytes_read: text.len(),
            tokens: 4,
            // ¡ and ¿ are two bytes each
            punctuation_bytes: 2 + 1 + 1 + 2 + 1,
        }
    );
}
