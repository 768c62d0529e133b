//! Confirmation popup before handing off to WhatsApp.

use crate::links;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

pub struct WhatsAppModal<'a> {
    number: &'a str,
}

impl<'a> WhatsAppModal<'a> {
    pub fn new(number: &'a str) -> Self {
        Self { number }
    }
}

impl Widget for WhatsAppModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 48.min(area.width.saturating_sub(4));
        let height = 7.min(area.height.saturating_sub(2));
        let popup_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };

        Clear.render(popup_area, buf);

        let block = Block::default()
            .title(" Chat on WhatsApp ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Green));

        let lines = vec![
            Line::from("Start a chat with"),
            Line::from(Span::styled(
                links::format_phone(self.number),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Enter", Style::default().fg(Color::Yellow)),
                Span::raw(": Open  "),
                Span::styled("Esc", Style::default().fg(Color::Yellow)),
                Span::raw(": Cancel"),
            ]),
        ];

        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .render(popup_area, buf);
    }
}
