//! Terminal rendering
//!
//! Turns a [`CommandResult`] into text for a character terminal: styled
//! segments become ANSI escapes via crossterm, and a graphic is laid out in
//! a column to the right of the text.

use crossterm::style::{style, Attribute, Color, Stylize};

use crate::commands::{CommandResult, Output, StyledSegment};

/// Spaces between the text column and the graphic column.
const COLUMN_GAP: usize = 4;

/// A run of text that fits on one line, with the style it came from.
struct Piece<'a> {
    text: &'a str,
    segment: Option<&'a StyledSegment>,
}

/// `#rrggbb` to an RGB color.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
    Some(Color::Rgb {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

fn split_lines(output: &Output) -> Vec<Vec<Piece<'_>>> {
    let mut lines = vec![Vec::new()];
    match output {
        Output::Plain(text) => {
            return text
                .split('\n')
                .map(|line| vec![Piece { text: line, segment: None }])
                .collect();
        }
        Output::Styled(segments) => {
            for segment in segments {
                for (idx, part) in segment.text.split('\n').enumerate() {
                    if idx > 0 {
                        lines.push(Vec::new());
                    }
                    if !part.is_empty() {
                        if let Some(line) = lines.last_mut() {
                            line.push(Piece { text: part, segment: Some(segment) });
                        }
                    }
                }
            }
        }
    }
    lines
}

fn ansi_piece(piece: &Piece<'_>) -> String {
    let Some(segment) = piece.segment else {
        return piece.text.to_string();
    };

    let mut styled = style(piece.text);
    if let Some(color) = segment.color.as_deref().and_then(parse_hex_color) {
        styled = styled.with(color);
    }
    if let Some(color) = segment.background_color.as_deref().and_then(parse_hex_color) {
        styled = styled.on(color);
    }
    if segment.bold {
        styled = styled.attribute(Attribute::Bold);
    }
    if segment.italic {
        styled = styled.attribute(Attribute::Italic);
    }
    if segment.underline {
        styled = styled.attribute(Attribute::Underlined);
    }

    match &segment.link {
        // OSC 8 hyperlink; terminals without support show the bare text.
        Some(url) => format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", url, styled),
        None => styled.to_string(),
    }
}

fn plain_piece(piece: &Piece<'_>) -> String {
    piece.text.to_string()
}

fn layout(result: &CommandResult, render: fn(&Piece<'_>) -> String) -> String {
    let lines = split_lines(&result.text);
    let rendered: Vec<(String, usize)> = lines
        .iter()
        .map(|pieces| {
            let width = pieces.iter().map(|p| p.text.chars().count()).sum::<usize>();
            let line: String = pieces.iter().map(render).collect();
            (line, width)
        })
        .collect();

    let Some(graphic) = result.graphic.as_ref().filter(|g| !g.is_empty()) else {
        return rendered.into_iter().map(|(line, _)| line).collect::<Vec<_>>().join("\n");
    };

    let column = rendered.iter().map(|(_, width)| *width).max().unwrap_or(0) + COLUMN_GAP;
    let rows = rendered.len().max(graphic.len());
    (0..rows)
        .map(|row| {
            let (text, width) = rendered
                .get(row)
                .map(|(line, width)| (line.as_str(), *width))
                .unwrap_or(("", 0));
            match graphic.get(row) {
                Some(art) => format!("{}{}{}", text, " ".repeat(column - width), art),
                None => text.to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render with ANSI colors, attributes and hyperlinks.
pub fn to_ansi(result: &CommandResult) -> String {
    layout(result, ansi_piece)
}

/// Render without any escape sequences.
pub fn to_plain(result: &CommandResult) -> String {
    layout(result, plain_piece)
}
