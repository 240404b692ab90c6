//! Content optimizer: bounds worst-case overflow before layout ever runs.
//!
//! Each text element is truncated to a hard character ceiling using a
//! readability-preserving cascade: whole sentences first, then whole words,
//! then a plain character cut. Excess bullets are dropped, not truncated.

use crate::deck::Slide;

pub const MAX_TITLE_CHARS: usize = 60;
pub const MAX_SUBTITLE_CHARS: usize = 80;
pub const MAX_BODY_CHARS: usize = 200;
pub const MAX_BULLET_CHARS: usize = 60;
pub const MAX_BULLETS: usize = 6;

const ELLIPSIS: &str = "...";

/// Return a copy of the slide with every text element under its ceiling.
pub fn optimize(slide: &Slide) -> Slide {
    let mut out = slide.clone();
    out.title = out.title.map(|t| cap(t, MAX_TITLE_CHARS));
    out.subtitle = out.subtitle.map(|s| cap(s, MAX_SUBTITLE_CHARS));
    out.body = out.body.map(|b| cap(b, MAX_BODY_CHARS));
    out.bullets = out
        .bullets
        .into_iter()
        .take(MAX_BULLETS)
        .map(|b| cap(b, MAX_BULLET_CHARS))
        .collect();
    out
}

fn cap(text: String, max_len: usize) -> String {
    if text.chars().count() > max_len {
        truncate(&text, max_len)
    } else {
        text
    }
}

/// Truncate `text` to at most `max_len` characters, preferring sentence
/// boundaries, then word boundaries, then a hard cut. Three characters are
/// reserved for the ellipsis.
pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let budget = max_len.saturating_sub(ELLIPSIS.len());

    // Whole sentences while they fit.
    let sentences: Vec<&str> = text.split(". ").collect();
    if sentences.len() > 1 {
        let mut result = sentences[0].to_string();
        for sentence in &sentences[1..] {
            if result.chars().count() + 2 + sentence.chars().count() <= budget {
                result.push_str(". ");
                result.push_str(sentence);
            } else {
                break;
            }
        }
        if result.chars().count() < budget {
            return result + ELLIPSIS;
        }
    }

    // Whole words under the same budget, one character per joining space.
    let mut kept: Vec<&str> = Vec::new();
    let mut char_count = 0usize;
    for word in text.split_whitespace() {
        if char_count + word.chars().count() + kept.len() <= budget {
            char_count += word.chars().count();
            kept.push(word);
        } else {
            break;
        }
    }
    if !kept.is_empty() {
        return kept.join(" ") + ELLIPSIS;
    }

    // Not even one word fits.
    let cut: String = text.chars().take(budget).collect();
    cut + ELLIPSIS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Slide;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate("hello", 60), "hello");
        assert_eq!(truncate("", 10), "");
    }

    #[test]
    fn prefers_sentence_boundary() {
        // "A. B. C." is 8 chars; only the first sentence fits a budget of 3.
        assert_eq!(truncate("A. B. C.", 6), "A...");
    }

    #[test]
    fn accumulates_whole_sentences() {
        let text = "First part. Second part. Third part that is fairly long.";
        let out = truncate(text, 30);
        assert_eq!(out, "First part. Second part...");
    }

    #[test]
    fn falls_back_to_word_boundary() {
        // No ". " separator anywhere, so the sentence pass cannot apply.
        let text = "alpha beta gamma delta epsilon zeta";
        let out = truncate(text, 20);
        assert!(out.ends_with("..."));
        assert!(out.chars().count() <= 20);
        // Never splits a word when a word boundary is reachable.
        let kept = out.trim_end_matches("...");
        for word in kept.split_whitespace() {
            assert!(text.contains(word));
        }
        assert_eq!(out, "alpha beta gamma...");
    }

    #[test]
    fn hard_cuts_when_no_word_fits() {
        let out = truncate("supercalifragilistic", 10);
        assert_eq!(out, "superca...");
    }

    #[test]
    fn output_never_exceeds_budget() {
        let samples = [
            "A. B. C.",
            "one two three four five six seven eight nine ten",
            "word",
            "averyveryverylongsingletokenwithoutspaces",
            "Sentence one is short. Sentence two is a bit longer. Three.",
        ];
        for text in samples {
            for max_len in 4..40 {
                let out = truncate(text, max_len);
                assert!(
                    out.chars().count() <= max_len,
                    "truncate({text:?}, {max_len}) -> {out:?} too long"
                );
            }
        }
    }

    #[test]
    fn optimize_enforces_all_ceilings() {
        let long = "x".repeat(500);
        let slide = Slide::new(1)
            .with_title(&long)
            .with_subtitle(&long)
            .with_body(&long)
            .with_bullets(vec![long.clone(); 10]);
        let out = optimize(&slide);
        assert!(out.title.unwrap().chars().count() <= MAX_TITLE_CHARS);
        assert!(out.subtitle.unwrap().chars().count() <= MAX_SUBTITLE_CHARS);
        assert!(out.body.unwrap().chars().count() <= MAX_BODY_CHARS);
        assert_eq!(out.bullets.len(), MAX_BULLETS);
        for bullet in &out.bullets {
            assert!(bullet.chars().count() <= MAX_BULLET_CHARS);
        }
    }

    #[test]
    fn optimize_does_not_mutate_input() {
        let slide = Slide::new(1).with_title("t".repeat(100));
        let before = slide.clone();
        let _ = optimize(&slide);
        assert_eq!(slide, before);
    }
}
