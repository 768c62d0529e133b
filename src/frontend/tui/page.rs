//! The single scrolling page: section tabs, the active section and a status
//! line.

use crate::core::AppCore;
use crate::data::portfolio::{Period, Portfolio};
use crate::data::ui_state::{InputMode, Section};
use crate::frontend::tui::contact_form::ContactFormWidget;
use crate::links;
use chrono::NaiveDate;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Tabs, Widget, Wrap},
};

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn muted(text: impl Into<String>) -> Span<'static> {
    Span::styled(text.into(), Style::default().fg(Color::DarkGray))
}

/// "06/2024 - 08/2024 (3 mos)"; malformed periods are shown as written
fn period_line(period: &str, today: NaiveDate) -> Span<'static> {
    match Period::parse(period) {
        Ok(parsed) if parsed.is_current() => {
            muted(format!("{} ({}, ongoing)", period, parsed.duration_label(today)))
        }
        Ok(parsed) => muted(format!("{} ({})", period, parsed.duration_label(today))),
        Err(_) => muted(period.to_string()),
    }
}

pub fn render(
    core: &AppCore,
    contact_form: &mut ContactFormWidget,
    today: NaiveDate,
    area: Rect,
    buf: &mut Buffer,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_tabs(core, chunks[0], buf);

    let body = chunks[1];
    let portfolio = &core.portfolio;
    match core.ui_state.section {
        Section::Hero => section_paragraph(hero_lines(portfolio)).render(body, buf),
        Section::Education => {
            section_paragraph(education_lines(portfolio, today)).render(body, buf)
        }
        Section::Experience => {
            section_paragraph(experience_lines(portfolio, today)).render(body, buf)
        }
        Section::Certifications => {
            section_paragraph(certification_lines(portfolio)).render(body, buf)
        }
        Section::Projects => render_projects(core, body, buf),
        Section::TechStack => section_paragraph(tech_lines(portfolio)).render(body, buf),
        Section::Contact => {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(body);
            section_paragraph(contact_lines(portfolio)).render(columns[0], buf);
            let active = core.ui_state.input_mode == InputMode::ContactForm;
            contact_form.render(columns[1], buf, &core.contact, active);
        }
    }

    Paragraph::new(core.ui_state.status_text.as_str())
        .style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .render(chunks[2], buf);
}

fn render_tabs(core: &AppCore, area: Rect, buf: &mut Buffer) {
    let profile = &core.portfolio.profile;
    let titles: Vec<String> = Section::ALL
        .iter()
        .enumerate()
        .map(|(i, section)| format!("{} {}", i + 1, section.title()))
        .collect();
    let selected = Section::ALL
        .iter()
        .position(|s| *s == core.ui_state.section)
        .unwrap_or(0);

    Tabs::new(titles)
        .block(
            Block::default()
                .title(format!(" {} · {} ", profile.name, profile.headline))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .select(selected)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .render(area, buf);
}

fn section_paragraph(lines: Vec<Line<'static>>) -> Paragraph<'static> {
    Paragraph::new(lines)
        .block(Block::default().borders(Borders::NONE))
        .wrap(Wrap { trim: false })
}

fn hero_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let profile = &portfolio.profile;
    let mut lines = vec![
        Line::from(Span::styled(
            profile.name.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            profile.headline.clone(),
            Style::default().fg(Color::Cyan),
        )),
        Line::from(""),
        Line::from(profile.summary.clone()),
        Line::from(""),
    ];
    if let Some(availability) = &profile.availability {
        lines.push(Line::from(Span::styled(
            format!("● {}", availability),
            Style::default().fg(Color::Green),
        )));
        lines.push(Line::from(""));
    }
    for link in &profile.links {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<10}", link.label), Style::default().fg(Color::Yellow)),
            muted(link.url.clone()),
        ]));
    }
    if profile.resume_url.is_some() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("r", Style::default().fg(Color::Yellow)),
            Span::raw(": Download resume"),
        ]));
    }
    lines
}

fn education_lines(portfolio: &Portfolio, today: NaiveDate) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Education"), Line::from("")];
    for item in &portfolio.education {
        lines.push(Line::from(Span::styled(
            item.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(item.institution.clone()));
        lines.push(Line::from(period_line(&item.period, today)));
        lines.push(Line::from(""));
    }
    lines
}

fn experience_lines(portfolio: &Portfolio, today: NaiveDate) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Experience"), Line::from("")];
    for item in &portfolio.experience {
        lines.push(Line::from(vec![
            Span::styled(item.title.clone(), Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" @ "),
            Span::styled(item.company.clone(), Style::default().fg(Color::Cyan)),
        ]));
        lines.push(Line::from(vec![
            muted(format!("{} · ", item.location)),
            period_line(&item.period, today),
        ]));
        for responsibility in &item.responsibilities {
            lines.push(Line::from(format!("  • {}", responsibility)));
        }
        lines.push(Line::from(""));
    }
    lines
}

fn certification_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Certifications"), Line::from("")];
    for cert in &portfolio.certifications {
        lines.push(Line::from(Span::styled(
            cert.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            cert.issuer.clone(),
            Style::default().fg(Color::Cyan),
        )));
        if !cert.description.is_empty() {
            lines.push(Line::from(cert.description.clone()));
        }
        lines.push(Line::from(muted(cert.url.clone())));
        lines.push(Line::from(""));
    }
    lines
}

fn render_projects(core: &AppCore, area: Rect, buf: &mut Buffer) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(area);

    let selected = core.ui_state.selected_project;
    let list: Vec<Line> = core
        .portfolio
        .projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            let style = if i == selected {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(Span::styled(format!(" {} ", project.title), style))
        })
        .collect();
    Paragraph::new(list)
        .block(
            Block::default()
                .title(" Projects ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .render(columns[0], buf);

    let Some(project) = core.portfolio.project(selected) else {
        return;
    };
    let mut lines = vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(project.description.clone()),
        Line::from(""),
        Line::from(Span::styled(
            project.tags.join(" · "),
            Style::default().fg(Color::Yellow),
        )),
        Line::from(muted(project.link.clone())),
        Line::from(""),
    ];
    if project.mobile_app {
        lines.push(Line::from(Span::styled("Mobile app", Style::default().fg(Color::Magenta))));
    }
    match &project.gallery {
        Some(gallery) => lines.push(Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(format!(": View {} screenshots", gallery.images.len())),
        ])),
        None => lines.push(Line::from(muted("No screenshots"))),
    }
    section_paragraph(lines)
        .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(Color::DarkGray)))
        .render(columns[1], buf);
}

fn tech_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Tech Stack"), Line::from("")];
    for category in &portfolio.tech_stack {
        lines.push(Line::from(Span::styled(
            format!("{} {}", category.icon, category.category),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("  {}", category.skills.join(", "))));
        lines.push(Line::from(""));
    }
    lines
}

fn contact_lines(portfolio: &Portfolio) -> Vec<Line<'static>> {
    let profile = &portfolio.profile;
    let mut lines = vec![
        heading("Get In Touch"),
        Line::from(""),
        Line::from("Have a project in mind? Send a message and I'll get back to you."),
        Line::from(""),
    ];
    if let Some(email) = &profile.email {
        lines.push(Line::from(vec![
            Span::styled("Email     ", Style::default().fg(Color::Yellow)),
            Span::raw(email.clone()),
        ]));
    }
    if let Some(number) = &profile.whatsapp {
        lines.push(Line::from(vec![
            Span::styled("WhatsApp  ", Style::default().fg(Color::Yellow)),
            Span::raw(links::format_phone(number)),
        ]));
    }
    lines
}
