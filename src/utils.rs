use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Shortens `s` to at most `max_width` terminal columns, ending in "..." when cut.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let budget = max_width.saturating_sub(3);
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > budget {
            break;
        }
        out.push(ch);
        width += w;
    }
    out.push_str("...");
    out
}

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Greedy word wrap to `width` columns. Words wider than a line are split.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in s.split_whitespace() {
        let word_width = word.width();
        let needed = if line.is_empty() { word_width } else { line_width + 1 + word_width };
        if needed <= width {
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
            continue;
        }

        if !line.is_empty() {
            lines.push(std::mem::take(&mut line));
            line_width = 0;
        }
        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if line_width + w > width && !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            line.push(ch);
            line_width += w;
        }
    }

    if !line.is_empty() || lines.is_empty() {
        lines.push(line);
    }
    lines
}

pub fn format_accuracy(accuracy: f64) -> String {
    format!("{:.1}%", accuracy)
}

/// Letter label for an option index: 0 -> 'A', 1 -> 'B', ...
pub fn option_label(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// Maps a key press ('a'..'z', 'A'..'Z' or '1'..'9') to an option index.
pub fn option_index(key: char) -> Option<usize> {
    match key {
        'a'..='z' => Some(key as usize - 'a' as usize),
        'A'..='Z' => Some(key as usize - 'A' as usize),
        '1'..='9' => Some(key as usize - '1' as usize),
        _ => None,
    }
}
