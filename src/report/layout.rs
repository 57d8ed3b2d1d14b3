//! Line wrapping and pagination

/// Greedy word wrap; words longer than `width` get a line of their own
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap with a hanging indent: continuation lines align under the first word
pub fn wrap_hanging(prefix: &str, text: &str, width: usize) -> Vec<String> {
    let indent = " ".repeat(prefix.chars().count());
    let body_width = width.saturating_sub(indent.len()).max(1);

    wrap(text, body_width)
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            if i == 0 {
                format!("{}{}", prefix, line)
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect()
}

/// Split lines into pages of at most `lines_per_page`, never emitting zero pages
pub fn paginate(lines: Vec<String>, lines_per_page: usize) -> Vec<Vec<String>> {
    let per_page = lines_per_page.max(1);
    if lines.is_empty() {
        return vec![Vec::new()];
    }
    lines.chunks(per_page).map(|chunk| chunk.to_vec()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(lines, vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]);
        assert!(lines.iter().all(|l| l.len() <= 10));
    }

    #[test]
    fn test_wrap_long_word() {
        assert_eq!(wrap("a verylongword b", 5), vec!["a", "verylongword", "b"]);
        assert!(wrap("   ", 5).is_empty());
    }

    #[test]
    fn test_wrap_hanging() {
        let lines = wrap_hanging("- ", "one two three four", 10);
        assert_eq!(lines, vec!["- one two", "  three", "  four"]);
    }

    #[test]
    fn test_paginate() {
        let lines: Vec<String> = (0..7).map(|i| i.to_string()).collect();
        let pages = paginate(lines, 3);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[2], vec!["6".to_string()]);
        assert_eq!(paginate(Vec::new(), 3).len(), 1);
    }
}
