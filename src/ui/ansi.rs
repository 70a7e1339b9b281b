use crate::ui::span::Span;
use crate::ui::style::Color;
use crossterm::Command;
use crossterm::style::{
    Attribute, Color as CrosstermColor, ResetColor, SetAttribute, SetBackgroundColor,
    SetForegroundColor,
};
use std::fmt::{self, Write};

/// Encode a line as text with ANSI styling sequences.
pub fn encode_line(line: &[Span]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_line(&mut out, line);
    out
}

pub fn write_line(out: &mut impl Write, line: &[Span]) -> fmt::Result {
    for span in line {
        let style = span.style;

        if let Some(fg) = style.color {
            SetForegroundColor(map_color(fg)).write_ansi(out)?;
        }
        if let Some(bg) = style.background {
            SetBackgroundColor(map_color(bg)).write_ansi(out)?;
        }
        if style.bold {
            SetAttribute(Attribute::Bold).write_ansi(out)?;
        }
        if style.dim {
            SetAttribute(Attribute::Dim).write_ansi(out)?;
        }
        if style.underline {
            SetAttribute(Attribute::Underlined).write_ansi(out)?;
        }

        out.write_str(&span.text)?;

        if !style.is_plain() {
            SetAttribute(Attribute::Reset).write_ansi(out)?;
            ResetColor.write_ansi(out)?;
        }
    }
    Ok(())
}

fn map_color(color: Color) -> CrosstermColor {
    match color {
        Color::Reset => CrosstermColor::Reset,
        Color::Black => CrosstermColor::Black,
        Color::DarkGrey => CrosstermColor::DarkGrey,
        Color::Grey => CrosstermColor::Grey,
        Color::Red => CrosstermColor::Red,
        Color::Green => CrosstermColor::Green,
        Color::Yellow => CrosstermColor::Yellow,
        Color::Blue => CrosstermColor::Blue,
        Color::Magenta => CrosstermColor::Magenta,
        Color::Cyan => CrosstermColor::Cyan,
        Color::White => CrosstermColor::White,
    }
}

#[cfg(test)]
mod tests {
    use super::encode_line;
    use crate::ui::span::Span;
    use crate::ui::style::{Color, Style};

    #[test]
    fn plain_spans_have_no_escapes() {
        let line = vec![Span::new("1"), Span::new(" "), Span::new("2")];
        assert_eq!(encode_line(&line), "1 2");
    }

    #[test]
    fn styled_span_is_wrapped_and_reset() {
        let line = vec![Span::styled("3", Style::new().color(Color::White).bold())];
        let encoded = encode_line(&line);
        assert!(encoded.starts_with('\u{1b}'));
        assert!(encoded.contains('3'));
        assert!(encoded.ends_with("\u{1b}[0m"));
    }
}
