//! Terminal output sanitization utilities
//!
//! # Security: Terminal Injection Prevention
//!
//! Titles and identifiers come from hand-edited YAML files and are echoed in the
//! progress notices. They are passed through [`single_line`] before printing so that
//! ANSI escape sequences cannot restyle the terminal and embedded line breaks cannot
//! split one notice across several lines. The YAML output keeps the original text.

/// Strips ANSI escape codes from a string
///
/// Removes ANSI CSI (Control Sequence Introducer) escape codes that could
/// affect terminal display. This prevents terminal injection attacks where
/// malicious data contains escape sequences.
///
/// # Examples
///
/// ```
/// use question_index::utils::terminal::strip_ansi_codes;
///
/// let text = "\x1b[31mRed text\x1b[0m";
/// assert_eq!(strip_ansi_codes(text), "Red text");
/// ```
///
/// # Security Note
///
/// This function removes common ANSI CSI sequences (ESC[...m for colors/styles,
/// ESC[...H for cursor movement, etc.). It also removes other control characters
/// like bell (\x07) and backspace (\x08).
pub fn strip_ansi_codes(text: &str) -> String {
    // Remove ANSI CSI sequences: ESC [ ... (letter)
    // Pattern: \x1b\[([0-9;]*)[A-Za-z]
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // Check for CSI sequence: ESC [
            if chars.peek() == Some(&'[') {
                chars.next(); // consume '['
                // Skip until we find a letter (end of CSI sequence)
                while let Some(&next_ch) = chars.peek() {
                    chars.next();
                    if next_ch.is_ascii_alphabetic() {
                        break;
                    }
                }
                continue;
            }
        }

        // Filter out other control characters (except tab, newline, carriage return)
        if ch.is_control() && ch != '\t' && ch != '\n' && ch != '\r' {
            continue;
        }

        result.push(ch);
    }

    result
}

/// Sanitizes text for a one-line console notice
///
/// Strips escape codes like [`strip_ansi_codes`] and replaces any remaining
/// line breaks and tabs with spaces.
///
/// # Examples
///
/// ```
/// use question_index::utils::terminal::single_line;
///
/// assert_eq!(single_line("Two\nlines"), "Two lines");
/// ```
pub fn single_line(text: &str) -> String {
    strip_ansi_codes(text)
        .chars()
        .map(|ch| if matches!(ch, '\n' | '\r' | '\t') { ' ' } else { ch })
        .collect()
}
