// Reply formatting for matched topics

use super::base::TopicEntry;

/// Fixed professional-help disclaimer appended to every knowledge reply
pub const DISCLAIMER: &str =
    "*If you need professional support, please reach out to a mental health professional.*";

/// Render a matched topic into the final reply text: response, then the tip
/// list (when present) joined by newlines, then the disclaimer.
pub fn format_with_tips(entry: &TopicEntry) -> String {
    let mut response = entry.response.clone();

    if !entry.tips.is_empty() {
        response.push_str("\n\n");
        response.push_str(&entry.tips.join("\n"));
    }

    response.push_str("\n\n");
    response.push_str(DISCLAIMER);
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_tips() {
        let entry = TopicEntry {
            keywords: vec!["sleep".to_string()],
            response: "Sleep matters.".to_string(),
            tips: vec!["Keep a schedule.".to_string(), "No caffeine late.".to_string()],
        };

        let text = format_with_tips(&entry);
        assert_eq!(
            text,
            format!(
                "Sleep matters.\n\nKeep a schedule.\nNo caffeine late.\n\n{}",
                DISCLAIMER
            )
        );
    }

    #[test]
    fn test_response_is_prefix_and_disclaimer_is_suffix() {
        let entry = TopicEntry {
            keywords: vec!["anger".to_string()],
            response: "Anger is valid.".to_string(),
            tips: vec!["Breathe.".to_string()],
        };

        let text = format_with_tips(&entry);
        assert!(text.starts_with(&entry.response));
        assert!(text.ends_with(DISCLAIMER));
    }

    #[test]
    fn test_empty_tips_skip_tip_section() {
        let entry = TopicEntry {
            keywords: vec!["hello".to_string()],
            response: "Hello!".to_string(),
            tips: vec![],
        };

        let text = format_with_tips(&entry);
        assert_eq!(text, format!("Hello!\n\n{}", DISCLAIMER));
    }
}
