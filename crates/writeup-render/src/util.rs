//! Text measurement and padding helpers used by the console renderer.
//!
//! Width here means character count, not terminal display columns. The
//! renderers make no attempt at locale-aware measurement; a `char` is one
//! unit of width regardless of what a terminal would do with it.

/// Returns the width of a string in characters.
///
/// # Example
///
/// ```rust
/// use writeup_render::text_width;
///
/// assert_eq!(text_width("hello"), 5);
/// assert_eq!(text_width(""), 0);
/// ```
pub fn text_width(s: &str) -> usize {
    s.chars().count()
}

/// Pads a string with spaces on the left to reach `width` characters.
///
/// Strings already at or beyond `width` are returned unchanged.
///
/// # Example
///
/// ```rust
/// use writeup_render::pad_left;
///
/// assert_eq!(pad_left("95", 5), "   95");
/// assert_eq!(pad_left("too long", 3), "too long");
/// ```
pub fn pad_left(s: &str, width: usize) -> String {
    let current = text_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = " ".repeat(width - current);
    out.push_str(s);
    out
}

/// Pads a string with spaces on the right to reach `width` characters.
///
/// # Example
///
/// ```rust
/// use writeup_render::pad_right;
///
/// assert_eq!(pad_right("Alice", 7), "Alice  ");
/// ```
pub fn pad_right(s: &str, width: usize) -> String {
    let current = text_width(s);
    if current >= width {
        return s.to_string();
    }
    let mut out = s.to_string();
    out.push_str(&" ".repeat(width - current));
    out
}
