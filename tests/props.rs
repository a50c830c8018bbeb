use cord::{CharSeq, Cord, Strand};
use proptest::prelude::*;

// The expected value for slice(), computed the slow way through std.
fn char_substring(text: &str, start: usize, end: usize) -> String {
    text.chars().take(end).skip(start).collect()
}

// A cord of `chunk`-char leaves, so properties run over multi-leaf trees
// instead of a single leaf.
fn chunked_cord(text: &str, chunk: usize) -> Cord {
    let mut cord = Cord::default();
    let mut rest = text;
    while !rest.is_empty() {
        let cut = rest
            .char_indices()
            .nth(chunk)
            .map(|(at, _)| at)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(cut);
        cord = cord.concat(&Cord::from(head));
        rest = tail;
    }
    cord
}

fn arb_text() -> impl Strategy<Value = String> {
    "\\PC{0,48}"
}

fn text_with_range() -> impl Strategy<Value = (String, usize, usize)> {
    arb_text()
        .prop_flat_map(|text| {
            let len = text.chars().count();
            (Just(text), 0..=len, 0..=len)
        })
        .prop_map(|(text, a, b)| if a <= b { (text, a, b) } else { (text, b, a) })
}

proptest! {
    #[test]
    fn prop_lengths_match_std(text in arb_text(), chunk in 1usize..5) {
        let chars = text.chars().count();

        let strand = Strand::from(text.as_str());
        prop_assert_eq!(strand.len_chars(), chars);
        prop_assert_eq!(strand.len_bytes(), text.len());

        let cord = chunked_cord(&text, chunk);
        prop_assert_eq!(cord.len_chars(), chars);
        prop_assert_eq!(cord.len_bytes(), text.len());
    }

    #[test]
    fn prop_char_at_matches_std(text in arb_text(), chunk in 1usize..5) {
        let strand = Strand::from(text.as_str());
        let cord = chunked_cord(&text, chunk);

        for (i, expected) in text.chars().enumerate() {
            prop_assert_eq!(strand.char_at(i).unwrap(), expected);
            prop_assert_eq!(cord.char_at(i).unwrap(), expected);
        }
        let len = text.chars().count();
        prop_assert!(strand.char_at(len).is_err());
        prop_assert!(cord.char_at(len).is_err());
    }

    #[test]
    fn prop_concat_matches_std(a in arb_text(), b in arb_text()) {
        let expected = format!("{a}{b}");
        let chars = expected.chars().count();

        let strand = Strand::from(a.as_str()).concat(&Strand::from(b.as_str()));
        prop_assert_eq!(strand.len_chars(), chars);
        prop_assert_eq!(strand.to_string(), expected.clone());

        let cord = Cord::from(a.as_str()).concat(&Cord::from(b.as_str()));
        prop_assert_eq!(cord.len_chars(), chars);
        prop_assert_eq!(cord.to_string(), expected);
    }

    #[test]
    fn prop_slice_matches_std((text, start, end) in text_with_range(), chunk in 1usize..5) {
        let expected = char_substring(&text, start, end);

        let strand = Strand::from(text.as_str()).slice(start..end).unwrap();
        prop_assert_eq!(strand.len_chars(), end - start);
        prop_assert_eq!(strand.to_string(), expected.clone());

        let cord = chunked_cord(&text, chunk).slice(start..end).unwrap();
        prop_assert_eq!(cord.len_chars(), end - start);
        prop_assert_eq!(cord.to_string(), expected);
    }

    #[test]
    fn prop_split_and_rejoin_is_identity(text in arb_text(), chunk in 1usize..5) {
        let len = text.chars().count();
        let split = chunk.min(len);

        let strand = Strand::from(text.as_str());
        let rejoined = strand
            .slice(0..split)
            .unwrap()
            .concat(&strand.slice(split..len).unwrap());
        prop_assert_eq!(rejoined.to_string(), text.clone());

        let cord = chunked_cord(&text, chunk);
        let rejoined = cord
            .slice(0..split)
            .unwrap()
            .concat(&cord.slice(split..len).unwrap());
        prop_assert_eq!(rejoined.to_string(), text);
    }

    #[test]
    fn prop_iterators_match_std(text in arb_text(), chunk in 1usize..5) {
        let strand = Strand::from(text.as_str());
        prop_assert_eq!(strand.chars().collect::<String>(), text.clone());

        let cord = chunked_cord(&text, chunk);
        prop_assert_eq!(cord.chars().collect::<String>(), text.clone());
        let flat = cord.to_text();
        prop_assert_eq!(flat.as_str(), text.as_str());
    }
}
