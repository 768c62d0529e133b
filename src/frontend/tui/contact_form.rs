//! Inline contact form shown in the Contact section.
//!
//! Text editing lives in `tui-textarea` fields; every edit is mirrored into
//! the core `ContactForm`, which owns validation and the pending flag.

use crate::core::contact::{ContactField, ContactForm, NoticeKind};
use crate::core::input_router::route_input;
use crate::core::menu_actions::MenuAction;
use crate::data::ui_state::InputMode;
use crossterm::event::KeyEvent;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};
use tui_textarea::{Input, TextArea};

/// Focus slot of the send button, after the four text fields
const SEND_BUTTON: usize = 4;
const MESSAGE_ROWS: u16 = 4;

pub struct ContactFormWidget {
    fields: [TextArea<'static>; 4],
    focused: usize,
}

impl ContactFormWidget {
    pub fn new() -> Self {
        Self {
            fields: ContactField::ALL.map(|field| Self::make_textarea(field, "")),
            focused: 0,
        }
    }

    fn make_textarea(field: ContactField, value: &str) -> TextArea<'static> {
        let mut textarea = TextArea::from(value.split('\n').map(str::to_string).collect::<Vec<_>>());
        textarea.set_cursor_line_style(Style::default());
        textarea.set_placeholder_text(field.placeholder());
        textarea.move_cursor(tui_textarea::CursorMove::Bottom);
        textarea.move_cursor(tui_textarea::CursorMove::End);
        textarea
    }

    /// Field with keyboard focus, `None` while the send button is focused
    pub fn focused_field(&self) -> Option<ContactField> {
        ContactField::ALL.get(self.focused).copied()
    }

    /// Move focus to next field
    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % (SEND_BUTTON + 1);
    }

    /// Move focus to previous field
    pub fn focus_prev(&mut self) {
        self.focused = if self.focused == 0 {
            SEND_BUTTON
        } else {
            self.focused - 1
        };
    }

    /// Handle a key while the form has focus.
    ///
    /// Returns the action the core must apply (`Submit`, `Cancel`, `Quit`);
    /// plain text keys are consumed here.
    pub fn handle_key(&mut self, key: KeyEvent, form: &mut ContactForm) -> Option<MenuAction> {
        match route_input(key, &InputMode::ContactForm) {
            MenuAction::NextField => {
                self.focus_next();
                None
            }
            MenuAction::PreviousField => {
                self.focus_prev();
                None
            }
            MenuAction::Select => match self.focused_field() {
                None => Some(MenuAction::Submit),
                Some(ContactField::Message) => {
                    self.forward(key, form);
                    None
                }
                Some(_) => {
                    self.focus_next();
                    None
                }
            },
            action @ (MenuAction::Submit | MenuAction::Cancel | MenuAction::Quit) => Some(action),
            _ => {
                self.forward(key, form);
                None
            }
        }
    }

    fn forward(&mut self, key: KeyEvent, form: &mut ContactForm) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let textarea = &mut self.fields[self.focused];
        let input: Input = key.into();
        if textarea.input(input) {
            form.set_field(field, textarea.lines().join("\n"));
        } else {
            tracing::trace!("Key not handled by TextArea: {:?}", key);
        }
    }

    /// Insert pasted text into the focused field; newlines only survive in the message
    pub fn paste(&mut self, text: &str, form: &mut ContactForm) {
        let Some(field) = self.focused_field() else {
            return;
        };
        let text = if field == ContactField::Message {
            text.replace("\r\n", "\n")
        } else {
            text.replace(['\r', '\n'], " ")
        };
        let textarea = &mut self.fields[self.focused];
        if textarea.insert_str(text) {
            form.set_field(field, textarea.lines().join("\n"));
        }
    }

    /// Rebuild any text field whose content no longer matches the core form
    pub fn sync(&mut self, form: &ContactForm) {
        for (slot, field) in ContactField::ALL.iter().enumerate() {
            let value = form.field(*field);
            if self.fields[slot].lines().join("\n") != value {
                self.fields[slot] = Self::make_textarea(*field, value);
            }
        }
    }

    pub fn render(&mut self, area: Rect, buf: &mut Buffer, form: &ContactForm, active: bool) {
        self.sync(form);

        let border_color = if active { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(" Send a Message ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);

        let bottom = inner.y + inner.height;
        let mut y = inner.y;
        for (slot, field) in ContactField::ALL.iter().enumerate() {
            let rows = if *field == ContactField::Message { MESSAGE_ROWS } else { 1 };
            if y + rows + 1 > bottom {
                return;
            }
            let focused = active && self.focused == slot;
            self.render_field(*field, slot, focused, Rect::new(inner.x, y, inner.width, rows + 1), buf);
            y += rows + 2;
        }

        if y >= bottom {
            return;
        }
        let button_style = if form.is_pending() {
            Style::default().fg(Color::DarkGray)
        } else if active && self.focused == SEND_BUTTON {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        };
        let button = Line::from(Span::styled(format!("[ {} ]", form.submit_label()), button_style));
        Paragraph::new(button).render(Rect::new(inner.x, y, inner.width, 1), buf);
        y += 2;

        if let Some(notice) = form.notice() {
            if y < bottom {
                let color = match notice.kind {
                    NoticeKind::Success => Color::Green,
                    NoticeKind::Failure => Color::Red,
                    NoticeKind::Hint => Color::Yellow,
                };
                Paragraph::new(notice.text.as_str())
                    .style(Style::default().fg(color))
                    .wrap(Wrap { trim: true })
                    .render(Rect::new(inner.x, y, inner.width, bottom - y), buf);
            }
        }
    }

    fn render_field(&mut self, field: ContactField, slot: usize, focused: bool, area: Rect, buf: &mut Buffer) {
        let label_color = if focused { Color::Rgb(255, 215, 0) } else { Color::Cyan };
        Paragraph::new(field.label())
            .style(Style::default().fg(label_color))
            .render(Rect::new(area.x, area.y, area.width, 1), buf);

        let textarea = &mut self.fields[slot];
        textarea.set_style(Style::default().fg(Color::White));
        textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
        let cursor = if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        textarea.set_cursor_style(cursor);

        let input_area = Rect::new(area.x, area.y + 1, area.width, area.height - 1);
        textarea.render(input_area, buf);
    }
}

impl Default for ContactFormWidget {
    fn default() -> Self {
        Self::new()
    }
}
