//! Tests for paragraph chunking.

use compliance_rag::{Chunker, Document, ParagraphChunker, RagError};
use proptest::prelude::*;

fn chunk(text: &str, max_chunk_size: usize) -> Vec<String> {
    let chunker = ParagraphChunker::new(max_chunk_size).unwrap();
    chunker.chunk(&Document::new("doc", text)).into_iter().map(|c| c.text).collect()
}

#[test]
fn empty_document_has_no_chunks() {
    assert!(chunk("", 1000).is_empty());
}

#[test]
fn whitespace_only_document_has_no_chunks() {
    assert!(chunk("\n  \n\t\n", 1000).is_empty());
    assert!(Document::new("blank", " \n ").is_empty());
}

#[test]
fn zero_chunk_size_is_rejected() {
    let err = ParagraphChunker::new(0).unwrap_err();
    assert!(matches!(err, RagError::InvalidConfiguration(_)));
}

#[test]
fn short_document_is_a_single_chunk() {
    let text = "Mutual funds carry risk.\n\
                Past performance does not guarantee future results.\n\
                Invest wisely.";
    assert_eq!(chunk(text, 1000), vec![text.to_string()]);
}

#[test]
fn paragraphs_that_do_not_fit_together_are_split() {
    let first = "a".repeat(600);
    let second = "b".repeat(600);
    let text = format!("{first}\n{second}");
    assert_eq!(chunk(&text, 1000), vec![first, second]);
}

#[test]
fn oversized_paragraph_is_kept_whole() {
    let long = "x".repeat(50);
    let text = format!("short\n{long}\ntail");
    assert_eq!(chunk(&text, 10), vec!["short".to_string(), long, "tail".to_string()]);
}

#[test]
fn joining_newline_counts_toward_the_budget() {
    // 5 + 1 + 5 = 11 > 10
    assert_eq!(chunk("aaaaa\nbbbbb", 10), vec!["aaaaa", "bbbbb"]);
    assert_eq!(chunk("aaaaa\nbbbbb", 11), vec!["aaaaa\nbbbbb"]);
}

#[test]
fn lengths_are_counted_in_characters() {
    // Four characters each, but eight bytes.
    assert_eq!(chunk("éééé\nüüüü", 9), vec!["éééé\nüüüü"]);
}

#[test]
fn blank_lines_are_preserved() {
    let text = "\nfirst\n\nsecond\n";
    assert_eq!(chunk(text, 1000).join("\n"), text);
}

#[test]
fn leading_blank_line_stays_with_an_oversized_paragraph() {
    let text = format!("\n{}", "a".repeat(1000));
    let chunks = chunk(&text, 1000);
    assert_eq!(chunks, vec![text.clone()]);
}

#[test]
fn trailing_blank_line_stays_with_the_last_chunk() {
    let text = format!("{}\n", "a".repeat(1000));
    assert_eq!(chunk(&text, 1000), vec![text.clone()]);
}

#[test]
fn blank_lines_between_full_chunks_move_to_the_next_chunk() {
    assert_eq!(chunk("aa\n\n\nbb", 2), vec!["aa", "\n\nbb"]);
}

#[test]
fn no_chunk_is_blank() {
    let chunker = ParagraphChunker::new(4).unwrap();
    let chunks = chunker.chunk(&Document::new("doc", "\n\nabcd\n\n\nefgh\n\n"));
    assert_eq!(chunks.len(), 2);
    assert!(chunks.iter().all(|c| !c.text.trim().is_empty()));
    assert_eq!(chunks[0].char_len(), 6);
}

#[test]
fn chunks_carry_index_and_ids() {
    let chunker = ParagraphChunker::new(3).unwrap();
    let chunks = chunker.chunk(&Document::new("guide", "one\ntwo\nsix"));
    assert_eq!(chunks.len(), 3);
    for (i, c) in chunks.iter().enumerate() {
        assert_eq!(c.index, i);
        assert_eq!(c.id, format!("guide_{i}"));
        assert_eq!(c.document_id, "guide");
    }
}

fn arb_document() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-zé ]{0,40}", 0..12).prop_map(|lines| lines.join("\n"))
}

/// **Property 1: Chunking preserves the document and respects the budget**
/// *For any* document and positive budget, joining the chunks with newlines
/// SHALL give back the document, no chunk SHALL be blank, every chunk SHALL
/// fit the budget unless it holds a single non-blank paragraph, and there
/// SHALL be no chunks exactly when the document is blank.
mod prop_chunking {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn chunks_reconstruct_document_within_budget(
            text in arb_document(),
            max_chunk_size in 1usize..80,
        ) {
            let chunks = chunk(&text, max_chunk_size);

            prop_assert_eq!(chunks.is_empty(), text.trim().is_empty());
            if !chunks.is_empty() {
                prop_assert_eq!(chunks.join("\n"), text.clone());
            }
            for c in &chunks {
                let lines: Vec<&str> = c.split('\n').collect();
                let content: Vec<usize> = (0..lines.len())
                    .filter(|&i| !lines[i].trim().is_empty())
                    .collect();
                prop_assert!(!content.is_empty(), "blank chunk {:?}", c);

                // Trailing blank lines only ever close the document.
                let last = content[content.len() - 1];
                let body_len = lines[..=last].join("\n").chars().count();
                let single_paragraph = content.len() == 1;
                prop_assert!(
                    body_len <= max_chunk_size || single_paragraph,
                    "chunk of {} chars exceeds budget {}",
                    body_len,
                    max_chunk_size,
                );
            }
        }

        #[test]
        fn chunking_is_deterministic(text in arb_document(), max_chunk_size in 1usize..80) {
            prop_assert_eq!(chunk(&text, max_chunk_size), chunk(&text, max_chunk_size));
        }
    }
}
