//! Screen layout. Given a title, content lines and the terminal geometry, [`layout`] builds a
//! bordered screen with the title centred in the top border and the content centred both ways
//! inside it. [`draw`] puts that screen into a ratatui frame. Widths are terminal cells.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const HORIZ: char = '─';
pub const VERT: &str = "│";
pub const UPPER_LEFT: char = '┌';
pub const UPPER_RIGHT: char = '┐';
pub const LOWER_LEFT: char = '└';
pub const LOWER_RIGHT: char = '┘';
pub const ELLIPSIS: &str = "...";

/// Day title.
pub const HEADING: Style = Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);
/// Dish name.
pub const EMPHASIS: Style = Style::new().fg(Color::Green).add_modifier(Modifier::BOLD);

/// Lays out `lines` under `title` for a terminal of `rows` x `cols` cells.
///
/// Lines wider than the interior are cut short with [`ELLIPSIS`]; lines that do not fit
/// vertically are dropped from the bottom. When the free space cannot be split evenly the
/// extra cell goes after the text (horizontally) or above it (vertically). A line's own style
/// is moved onto its text; borders and padding stay unstyled.
pub fn layout(title: &str, lines: &[Line<'_>], rows: u16, cols: u16) -> Vec<Line<'static>> {
    let (rows, cols) = (usize::from(rows), usize::from(cols));
    if rows == 0 || cols == 0 {
        return vec![];
    }
    let width = cols.saturating_sub(2);
    let height = rows.saturating_sub(2);
    let visible = &lines[..lines.len().min(height)];
    let free = height - visible.len();
    let top_pad = free / 2 + free % 2;
    let bottom_pad = free / 2;

    let mut screen = Vec::with_capacity(rows);
    screen.push(top_border(title, width));
    screen.extend((0..top_pad).map(|_| content_row(&Line::default(), width)));
    screen.extend(visible.iter().map(|line| content_row(line, width)));
    screen.extend((0..bottom_pad).map(|_| content_row(&Line::default(), width)));
    screen.push(Line::raw(format!(
        "{LOWER_LEFT}{}{LOWER_RIGHT}",
        repeat(HORIZ, width)
    )));
    screen.truncate(rows);
    screen
}

/// Renders the laid out screen over the whole frame.
pub fn draw(frame: &mut Frame, title: &str, lines: &[Line<'_>]) {
    let area = frame.area();
    let screen = layout(title, lines, area.height, area.width);
    frame.render_widget(Paragraph::new(screen), area);
}

fn top_border(title: &str, width: usize) -> Line<'static> {
    let (pad, title) = center(title, width, HORIZ);
    let rule = repeat(HORIZ, pad);
    Line::raw(format!("{UPPER_LEFT}{rule}{title}{rule}{UPPER_RIGHT}"))
}

fn content_row(line: &Line<'_>, width: usize) -> Line<'static> {
    let text = line.to_string();
    let style = if text.is_empty() {
        Style::default()
    } else {
        line.style
    };
    let (pad, text) = center(&text, width, ' ');
    let spacing = repeat(' ', pad);
    Line::from(vec![
        Span::raw(VERT),
        Span::styled(format!("{spacing}{text}{spacing}"), style),
        Span::raw(VERT),
    ])
}

/// Returns the padding to put on each side of the returned text so that together they fill
/// exactly `width` cells. An odd remainder is absorbed by appending one `filler`.
fn center(text: &str, width: usize, filler: char) -> (usize, String) {
    let mut text = truncate(text, width);
    let used = text.as_str().width();
    if (width - used) % 2 != 0 {
        text.push(filler);
    }
    let pad = (width - used) / 2;
    (pad, text)
}

/// Cuts `text` to at most `width` cells, ending in [`ELLIPSIS`] when anything was dropped. A
/// double-width character that would straddle the cut is dropped whole.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_owned();
    }
    let room = width.saturating_sub(ELLIPSIS.len());
    let mut out = String::with_capacity(text.len());
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > room {
            break;
        }
        used += w;
        out.push(c);
    }
    out.extend(ELLIPSIS.chars().take(width - used));
    out
}

fn repeat(c: char, n: usize) -> String {
    std::iter::repeat(c).take(n).collect()
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;

    fn text(line: &Line<'_>) -> String {
        line.to_string()
    }

    /// Left and right padding of an interior row's text span.
    fn pads(line: &Line<'_>) -> (usize, usize) {
        let middle = &line.spans[1].content;
        let left = middle.chars().take_while(|c| *c == ' ').count();
        let right = middle.chars().rev().take_while(|c| *c == ' ').count();
        (left, right)
    }

    fn render(title: &str, lines: &[Line<'_>], rows: u16, cols: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(cols, rows)).unwrap();
        terminal.draw(|frame| draw(frame, title, lines)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[test]
    fn test_every_row_spans_the_terminal() {
        let lines = [Line::styled("Måndag 8/4", HEADING), Line::raw("Soppa")];
        let screen = layout("[Restaurang Inspira]", &lines, 12, 41);
        assert_eq!(screen.len(), 12);
        for (i, line) in screen.iter().enumerate() {
            assert_eq!(line.width(), 41, "row {i}");
        }
    }

    #[test]
    fn test_draw_fills_the_buffer() {
        let lines = [Line::styled("Tisdag", HEADING), Line::raw("Soppa")];
        let buffer = render("[Kvarnen]", &lines, 6, 14);
        let rows: Vec<String> = (0..6).map(|y| row(&buffer, y)).collect();
        assert_eq!(
            rows,
            [
                "┌─[Kvarnen]──┐",
                "│            │",
                "│   Tisdag   │",
                "│   Soppa    │",
                "│            │",
                "└────────────┘",
            ]
        );
        assert_eq!(buffer[(4, 2)].fg, Color::Yellow);
        assert!(buffer[(4, 2)].modifier.contains(Modifier::BOLD));
        assert_eq!(buffer[(0, 2)].fg, Color::Reset);
        assert_eq!(buffer[(4, 3)].fg, Color::Reset);
    }

    #[test]
    fn test_centering_is_symmetric() {
        for cols in 10..=13 {
            for s in ["a", "ab", "abc", "Köttbullar"] {
                let screen = layout("", &[Line::raw(s)], 3, cols);
                let (left, right) = pads(&screen[1]);
                assert!(left.abs_diff(right) <= 1, "{s:?} in {cols}: {left} {right}");
                assert!(left <= right);
            }
        }
    }

    #[test]
    fn test_odd_remainder() {
        // interior 10, text 3: one extra space after the text, 3 on each side
        let screen = layout("", &[Line::raw("abc")], 3, 12);
        assert_eq!(text(&screen[1]), "│   abc    │");
    }

    #[test]
    fn test_truncation() {
        let screen = layout("", &[Line::raw("Pannbiff med lök och gräddsås")], 3, 12);
        assert_eq!(screen[1].spans[1].content, "Pannbif...");
        assert_eq!(text(&screen[1]), "│Pannbif...│");
    }

    #[test]
    fn test_truncation_narrower_than_ellipsis() {
        let screen = layout("", &[Line::raw("Soppa")], 3, 4);
        assert_eq!(text(&screen[1]), "│..│");
    }

    #[test]
    fn test_wide_characters_take_two_cells() {
        let lines = [Line::raw("🌱 Vegetarisk")];
        let screen = layout("t", &lines, 3, 20);
        // 13 cells of text in an interior of 18
        assert_eq!(text(&screen[1]), "│  🌱 Vegetarisk   │");
        assert_eq!(screen[1].width(), 20);

        let buffer = render("t", &lines, 3, 20);
        assert_eq!(buffer[(0, 1)].symbol(), VERT);
        assert_eq!(buffer[(3, 1)].symbol(), "🌱");
        assert_eq!(buffer[(19, 1)].symbol(), VERT);
    }

    #[test]
    fn test_wide_characters_are_truncated_by_width() {
        let screen = layout("", &[Line::raw("🌱🌱🌱🌱")], 3, 8);
        assert_eq!(screen[1].spans[1].content, "🌱... ");
        assert_eq!(screen[1].width(), 8);
    }

    #[test]
    fn test_combining_marks_take_no_cells() {
        // "Smörgås" with decomposed ö and å
        let lines = [Line::raw("Smo\u{308}rga\u{30a}s")];
        let screen = layout("t", &lines, 3, 20);
        assert_eq!(screen[1].width(), 20);
        assert_eq!(pads(&screen[1]), (5, 6));

        let buffer = render("t", &lines, 3, 20);
        assert_eq!(buffer[(0, 1)].symbol(), VERT);
        assert_eq!(buffer[(19, 1)].symbol(), VERT);
    }

    #[test]
    fn test_title_in_border() {
        let screen = layout("[Inspira]", &[], 3, 20);
        // interior 18, title 9: one extra rule after the title
        assert_eq!(text(&screen[0]), "┌────[Inspira]─────┐");
        assert_eq!(text(&screen[2]), format!("└{}┘", "─".repeat(18)));
    }

    #[test]
    fn test_long_title_is_truncated_in_border() {
        let screen = layout("[A very long restaurant name]", &[], 3, 12);
        assert_eq!(text(&screen[0]), "┌[A very...┐");
        assert_eq!(screen[0].width(), 12);
    }

    #[test]
    fn test_vertical_padding_prefers_top() {
        let lines = [Line::raw("x"), Line::raw("y")];
        // 9 rows: 7 interior, 2 content, 5 free: 3 above, 2 below
        let screen = layout("", &lines, 9, 5);
        let texts: Vec<String> = screen.iter().map(text).collect();
        assert_eq!(texts.len(), 9);
        assert_eq!(texts[4], "│ x │");
        assert_eq!(texts[5], "│ y │");
        assert_eq!(texts[1], "│   │");
        assert_eq!(texts[7], "│   │");
        assert_eq!(texts[8], "└───┘");
    }

    #[test]
    fn test_styles_only_on_text() {
        let lines = [
            Line::styled("Tisdag", HEADING),
            Line::styled("", EMPHASIS),
            Line::raw("desc"),
        ];
        let screen = layout("", &lines, 7, 20);
        let styles: Vec<Style> = screen[1..6].iter().map(|line| line.spans[1].style).collect();
        assert_eq!(
            styles,
            [
                Style::default(),
                HEADING,
                Style::default(),
                Style::default(),
                Style::default()
            ]
        );
        assert_eq!(screen[2].spans[0].style, Style::default());
        assert_eq!(screen[2].style, Style::default());
    }

    #[test]
    fn test_too_many_lines_are_clipped() {
        let lines: Vec<Line> = (0..10).map(|i| Line::raw(i.to_string())).collect();
        let screen = layout("t", &lines, 5, 10);
        assert_eq!(screen.len(), 5);
        assert_eq!(text(&screen[1]).trim_matches('│').trim(), "0");
        assert_eq!(text(&screen[3]).trim_matches('│').trim(), "2");
    }

    #[test]
    fn test_degenerate_geometry() {
        assert!(layout("t", &[Line::raw("x")], 0, 10).is_empty());
        assert!(layout("t", &[Line::raw("x")], 10, 0).is_empty());
        assert_eq!(layout("t", &[], 1, 2).len(), 1);
    }
}
