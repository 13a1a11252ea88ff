//! Table formatting utilities for CLI output.

use postlist_core::ListState;

const ID_WIDTH: usize = 26;
const TITLE_WIDTH: usize = 50;

/// Truncates a string to a maximum number of characters, adding "..." if
/// needed.
///
/// # Examples
///
/// ```rust
/// use postlist_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Render a settled list state as a plain-text table.
pub fn format_posts_table(state: &ListState) -> String {
    let mut lines = Vec::new();

    if let Some(error) = &state.error {
        lines.push(format!("Error: {error}"));
    }

    lines.push(format!(
        "Page {} of {} ({} post(s))",
        state.page,
        state.total_pages,
        state.posts.len()
    ));

    if state.posts.is_empty() {
        lines.push("No posts found.".to_string());
    } else {
        lines.push(String::new());
        lines.push(format!("{:<ID_WIDTH$} Title", "ID"));
        lines.push("-".repeat(ID_WIDTH + TITLE_WIDTH + 1));
        for post in &state.posts {
            lines.push(format!(
                "{:<ID_WIDTH$} {}",
                truncate_string(post.id.as_str(), ID_WIDTH - 1),
                truncate_string(post.title().unwrap_or("--"), TITLE_WIDTH)
            ));
        }

        let mut hints = Vec::new();
        if state.has_previous_page() {
            hints.push("--prev");
        }
        if state.has_next_page() {
            hints.push("--next");
        }
        if !hints.is_empty() {
            lines.push(String::new());
            lines.push(format!("More pages: {}", hints.join(", ")));
        }
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use postlist_core::Post;

    fn state(posts: Vec<Post>, page: u32, total_pages: u32) -> ListState {
        ListState {
            posts,
            loading: false,
            error: None,
            page,
            total_pages,
        }
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("short", 10), "short");
        assert_eq!(truncate_string("exactly ten", 11), "exactly ten");
        assert_eq!(truncate_string("a longer title here", 10), "a longe...");
    }

    #[test]
    fn test_truncate_string_multibyte() {
        assert_eq!(truncate_string("日本語のタイトルです", 6), "日本語...");
    }

    #[test]
    fn test_table_lists_posts() {
        let posts = vec![
            Post::new("1").with_field("title", "First"),
            Post::new("2"),
        ];
        let table = format_posts_table(&state(posts, 2, 3));

        assert!(table.starts_with("Page 2 of 3 (2 post(s))"));
        assert!(table.contains("First"));
        assert!(table.contains("--\n"));
        assert!(table.contains("More pages: --prev, --next"));
    }

    #[test]
    fn test_table_exact_layout() {
        let posts = vec![Post::new("1").with_field("title", "First")];
        let table = format_posts_table(&state(posts, 1, 1));

        let expected = format!(
            "Page 1 of 1 (1 post(s))\n\n{:<26} Title\n{}\n{:<26} First\n",
            "ID",
            "-".repeat(77),
            "1"
        );
        assert_eq!(table, expected);
    }

    #[test]
    fn test_table_empty_with_error() {
        let mut failed = state(Vec::new(), 1, 1);
        failed.error = Some("Failed to fetch posts".to_string());

        let table = format_posts_table(&failed);
        assert!(table.starts_with("Error: Failed to fetch posts\n"));
        assert!(table.contains("No posts found."));
        assert!(!table.contains("More pages"));
    }
}
