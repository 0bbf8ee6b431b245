use crate::terminal::CursorPos;
use crate::ui::document::{Document, Element, Role};
use crate::ui::span::{Span, SpanLine};
use crate::ui::style::{Color, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

#[derive(Debug, Default, Clone)]
pub struct RenderFrame {
    pub lines: Vec<SpanLine>,
    pub cursor: Option<CursorPos>,
}

pub struct Renderer;

impl Renderer {
    pub fn render(document: &Document) -> RenderFrame {
        let mut frame = RenderFrame::default();

        for element in document.elements() {
            let row = frame.lines.len() as u16;
            let (line, cursor_col) = draw_element(element);
            if frame.cursor.is_none() && element.focused {
                frame.cursor = cursor_col.map(|col| CursorPos { col, row });
            }
            frame.lines.push(line);
        }

        frame
    }
}

fn focus_marker(focused: bool) -> &'static str {
    if focused { ">" } else { " " }
}

fn draw_element(element: &Element) -> (SpanLine, Option<u16>) {
    match element.role {
        Role::Heading => (
            vec![Span::styled(
                element.text.clone(),
                Style::new().color(Color::Cyan).bold(),
            )],
            None,
        ),
        Role::TextBox => {
            let prefix = format!(
                "{} {}: ",
                focus_marker(element.focused),
                element.label.as_deref().unwrap_or_default()
            );
            let value = element.value.clone().unwrap_or_default();
            let col = element.cursor.map(|cursor| {
                let value_width: usize = value
                    .chars()
                    .take(cursor)
                    .map(|ch| UnicodeWidthChar::width(ch).unwrap_or(0))
                    .sum();
                (UnicodeWidthStr::width(prefix.as_str()) + value_width) as u16
            });
            let label_style = if element.focused {
                Style::new().bold()
            } else {
                Style::default()
            };
            (
                vec![
                    Span::styled(prefix, label_style),
                    Span::new(value),
                ],
                col,
            )
        }
        Role::Button => {
            let style = if element.focused {
                Style::new()
                    .color(Color::White)
                    .background(Color::Blue)
                    .bold()
            } else {
                Style::new().color(Color::DarkGrey)
            };
            (
                vec![
                    Span::new(format!("{} ", focus_marker(element.focused))),
                    Span::styled(format!("[ {} ]", element.text), style),
                ],
                None,
            )
        }
        Role::Alert => (
            vec![Span::styled(
                format!("    {}", element.text),
                Style::new().color(Color::Red),
            )],
            None,
        ),
        Role::Text => (vec![Span::new(element.text.clone())], None),
    }
}
