//! Popup that pages through a project's screenshots.
//!
//! Shows the filter chips, the current image's details, a position counter
//! and one dot per image in the active filter.

use crate::core::gallery::GalleryModal;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct GalleryModalView<'a> {
    modal: &'a GalleryModal,
}

impl<'a> GalleryModalView<'a> {
    pub fn new(modal: &'a GalleryModal) -> Self {
        Self { modal }
    }

    fn chip_line(&self) -> Line<'a> {
        let mut spans = Vec::new();
        for chip in self.modal.chips() {
            let style = if self.modal.is_chip_active(chip) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            spans.push(Span::styled(format!(" {} ", chip.label), style));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn dot_line(&self) -> Line<'a> {
        let current = self.modal.state().current_index();
        let labels = self.modal.dot_labels();
        let mut dots: Vec<Span> = (0..labels.len())
            .map(|i| {
                if i == current {
                    Span::styled("● ", Style::default().fg(Color::Cyan))
                } else {
                    Span::styled("○ ", Style::default().fg(Color::DarkGray))
                }
            })
            .collect();
        // Name the dot under the cursor
        if let Some(label) = labels.get(current) {
            dots.push(Span::styled(format!(" {}", label), Style::default().fg(Color::DarkGray)));
        }
        Line::from(dots)
    }
}

impl Widget for GalleryModalView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let width = 76.min(area.width.saturating_sub(4));
        let height = 20.min(area.height.saturating_sub(2));
        let popup_area = Rect {
            x: area.x + (area.width.saturating_sub(width)) / 2,
            y: area.y + (area.height.saturating_sub(height)) / 2,
            width,
            height,
        };
        if width < 10 || height < 8 {
            return;
        }

        Clear.render(popup_area, buf);

        let mut block = Block::default()
            .title(format!(" {} ", self.modal.title()))
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(Color::Cyan));
        if let Some((position, total)) = self.modal.position() {
            block = block.title_top(
                Line::from(format!(" {} / {} ", position, total))
                    .style(Style::default().fg(Color::Yellow))
                    .right_aligned(),
            );
        }
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        Paragraph::new(self.chip_line()).render(Rect::new(inner.x, inner.y, inner.width, 1), buf);

        // Image details, between the chips and the dots/help rows
        let body = Rect::new(inner.x + 1, inner.y + 2, inner.width.saturating_sub(2), inner.height.saturating_sub(5));
        match self.modal.current_image() {
            Ok(image) => {
                let lines = vec![
                    Line::from(vec![
                        Span::styled("◀ ", Style::default().fg(Color::Yellow)),
                        Span::styled(
                            image.title.clone(),
                            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(" ▶", Style::default().fg(Color::Yellow)),
                    ]),
                    Line::from(""),
                    Line::from(image.description.clone()),
                    Line::from(""),
                    Line::from(Span::styled(image.url.clone(), Style::default().fg(Color::DarkGray))),
                ];
                Paragraph::new(lines).wrap(Wrap { trim: true }).render(body, buf);
            }
            Err(_) => {
                Paragraph::new("No screenshots in this category")
                    .style(Style::default().fg(Color::DarkGray))
                    .render(body, buf);
            }
        }

        let dots_y = popup_area.y + popup_area.height - 3;
        Paragraph::new(self.dot_line()).render(Rect::new(inner.x + 1, dots_y, inner.width.saturating_sub(2), 1), buf);

        let help_text = Line::from(vec![
            Span::styled(" ←→", Style::default().fg(Color::Yellow)),
            Span::raw(": Browse  "),
            Span::styled("Tab", Style::default().fg(Color::Yellow)),
            Span::raw(": Filter  "),
            Span::styled("1-9", Style::default().fg(Color::Yellow)),
            Span::raw(": Jump  "),
            Span::styled("o", Style::default().fg(Color::Yellow)),
            Span::raw(": Open  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Close "),
        ]);
        let help_area = Rect {
            x: popup_area.x + 2,
            y: popup_area.y + popup_area.height - 2,
            width: popup_area.width - 4,
            height: 1,
        };
        Paragraph::new(help_text)
            .style(Style::default().fg(Color::Gray))
            .render(help_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gallery::{GalleryCategory, GalleryImage};

    fn modal() -> GalleryModal {
        let images = vec![
            GalleryImage {
                url: "https://example.com/a.png".to_string(),
                title: "Login".to_string(),
                description: "Sign in screen".to_string(),
                category: "auth".to_string(),
            },
            GalleryImage {
                url: "https://example.com/b.png".to_string(),
                title: "Tasks".to_string(),
                description: "Task list".to_string(),
                category: "tasks".to_string(),
            },
        ];
        let categories = vec![
            GalleryCategory::new("auth", "Auth"),
            GalleryCategory::new("tasks", "Tasks"),
            GalleryCategory::new("profile", "Profile"),
        ];
        GalleryModal::new("TaskMate", &categories, &images).unwrap()
    }

    fn render(modal: &GalleryModal) -> String {
        let area = Rect::new(0, 0, 80, 24);
        let mut buf = Buffer::empty(area);
        GalleryModalView::new(modal).render(area, &mut buf);
        buf.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_current_image_and_position() {
        let text = render(&modal());
        assert!(text.contains("TaskMate"));
        assert!(text.contains("Login"));
        assert!(text.contains("1 / 2"));
        assert!(text.contains("View Login"));
    }

    #[test]
    fn test_renders_empty_state() {
        let mut modal = modal();
        modal
            .select_filter(crate::core::gallery::CategoryFilter::from_id("profile"))
            .unwrap();
        let text = render(&modal);
        assert!(text.contains("No screenshots in this category"));
        assert!(!text.contains("1 / 2"));
    }

    #[test]
    fn test_tiny_area_is_skipped() {
        let area = Rect::new(0, 0, 8, 4);
        let mut buf = Buffer::empty(area);
        GalleryModalView::new(&modal()).render(area, &mut buf);
    }
}
