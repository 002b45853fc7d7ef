use fixme_core::constants::placeholder_token;
use fixme_mask::{mask, unmask};
use proptest::prelude::*;

// ── Round trip: unmask(mask(t)) == t ──────────────────────────────────────

proptest! {
    #[test]
    fn round_trip_arbitrary_text(text in "\\PC{0,300}") {
        // Placeholder-shaped literals are outside the round-trip law.
        prop_assume!(!text.contains('⟦'));
        let masked = mask(&text);
        prop_assert_eq!(unmask(&masked.text, &masked.placeholders), text);
    }

    #[test]
    fn round_trip_text_with_urls(
        words in proptest::collection::vec("[a-z]{1,8}", 0..10),
        hosts in proptest::collection::vec("[a-z]{2,10}\\.(com|org|io)", 1..6),
        paths in proptest::collection::vec("(/[a-z0-9_-]{1,8}){0,3}", 1..6)
    ) {
        let mut parts: Vec<String> = words;
        for (host, path) in hosts.iter().zip(paths.iter()) {
            parts.push(format!("https://{host}{path}"));
        }
        let text = parts.join(" ");
        let masked = mask(&text);
        prop_assert_eq!(unmask(&masked.text, &masked.placeholders), text);
    }
}

// ── No URLs → identity with an empty map ──────────────────────────────────

proptest! {
    #[test]
    fn text_without_urls_is_untouched(text in "[a-zA-Z0-9 ,.;:!?()\\n]{0,300}") {
        prop_assume!(!text.to_lowercase().contains("www."));
        let masked = mask(&text);
        prop_assert_eq!(&masked.text, &text);
        prop_assert!(masked.placeholders.is_empty());
    }
}

// ── k URLs → keys ⟦URL_1⟧ … ⟦URL_k⟧ ───────────────────────────────────────

proptest! {
    #[test]
    fn placeholders_are_numbered_one_to_k(
        hosts in proptest::collection::vec("[a-z]{2,10}\\.com", 1..15)
    ) {
        let text = hosts
            .iter()
            .map(|h| format!("see http://{h} now"))
            .collect::<Vec<_>>()
            .join("\n");
        let masked = mask(&text);
        prop_assert_eq!(masked.placeholders.len(), hosts.len());
        for (i, entry) in masked.placeholders.iter().enumerate() {
            prop_assert_eq!(&entry.token, &placeholder_token(i + 1));
            prop_assert_eq!(&entry.original, &format!("http://{}", hosts[i]));
        }
        prop_assert!(!masked.text.contains("http://"));
    }
}
