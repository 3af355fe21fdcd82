//! Signal-to-product matching.
//!
//! The ranker joins trend/event signals against products. The primary join
//! is an explicit one (trend `matched_skus`, event category membership);
//! keyword matching is the fallback, and compares full phrases
//! case-insensitively in both containment directions. A shared first word
//! alone is not a match.

/// True when the keyword and any of the signal tags overlap as full phrases,
/// case-insensitively, in either containment direction.
pub fn phrase_overlap(keyword: &str, signal_tags: &[String]) -> bool {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return false;
    }
    signal_tags.iter().any(|tag| {
        let tag = tag.trim().to_lowercase();
        !tag.is_empty() && (keyword.contains(&tag) || tag.contains(&keyword))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_phrase_matches() {
        assert!(phrase_overlap(
            "protein ice cream",
            &tags(&["protein ice cream", "overnight oats protein"])
        ));
    }

    #[test]
    fn test_containment_either_direction() {
        assert!(phrase_overlap("hyrox", &tags(&["hyrox training"])));
        assert!(phrase_overlap("hyrox training plan", &tags(&["hyrox training"])));
    }

    #[test]
    fn test_case_insensitive() {
        assert!(phrase_overlap("Marathon Rotterdam", &tags(&["marathon rotterdam"])));
    }

    #[test]
    fn test_shared_first_word_alone_does_not_match() {
        assert!(!phrase_overlap("hyrox training", &tags(&["hyrox cologne"])));
    }

    #[test]
    fn test_empty_inputs() {
        assert!(!phrase_overlap("", &tags(&["protein"])));
        assert!(!phrase_overlap("protein", &tags(&[])));
        assert!(!phrase_overlap("protein", &tags(&[""])));
    }
}
