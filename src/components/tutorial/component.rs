// ABOUTME: Tutorial overlay component
// Renders the current step, progress gauge and navigation hints as a centered modal

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

use super::state::TutorialController;
use crate::config::completion::CompletionStore;

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const TRACK_GRAY: Color = Color::Rgb(50, 50, 65);

const MAX_WIDTH: u16 = 64;
const MAX_HEIGHT: u16 = 16;

/// Modal overlay for the first-run tutorial
pub struct TutorialComponent;

impl TutorialComponent {
    pub fn new() -> Self {
        Self
    }

    /// Centered panel area for the overlay inside `area`
    pub fn panel_area(area: Rect) -> Rect {
        let width = MAX_WIDTH.min(area.width);
        let height = MAX_HEIGHT.min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    /// Draw the overlay; draws nothing once the tutorial is closed
    pub fn render<S: CompletionStore>(
        &self,
        frame: &mut Frame,
        area: Rect,
        controller: &TutorialController<S>,
    ) {
        let Some(step) = controller.current_step() else {
            return;
        };

        let panel = Self::panel_area(area);

        // Clear only the panel so the highlighted shell region stays visible
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(CORNFLOWER_BLUE))
            .style(Style::default().bg(PANEL_BG))
            .title(" Getting Started ")
            .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD));

        let inner = block.inner(panel);
        frame.render_widget(block, panel);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(2)
            .constraints([
                Constraint::Length(1), // Step counter + skip
                Constraint::Length(1), // Progress gauge
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Title
                Constraint::Min(2),    // Description
                Constraint::Length(1), // Highlight hint
                Constraint::Length(1), // Navigation
            ])
            .split(inner);

        self.render_header(frame, layout[0], controller);
        self.render_progress(frame, layout[1], controller);

        let title = Paragraph::new(Line::from(Span::styled(
            step.title.as_str(),
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        )));
        frame.render_widget(title, layout[3]);

        let description = Paragraph::new(step.description.as_str())
            .style(Style::default().fg(MUTED_GRAY))
            .wrap(Wrap { trim: true });
        frame.render_widget(description, layout[4]);

        if let Some(highlight) = step.highlight {
            let hint = Paragraph::new(Line::from(vec![
                Span::styled("→ See: ", Style::default().fg(GOLD)),
                Span::styled(highlight.label(), Style::default().fg(SOFT_WHITE)),
            ]));
            frame.render_widget(hint, layout[5]);
        }

        self.render_navigation(frame, layout[6], controller);
    }

    fn render_header<S: CompletionStore>(
        &self,
        frame: &mut Frame,
        area: Rect,
        controller: &TutorialController<S>,
    ) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        let counter = Paragraph::new(Span::styled(
            controller.step_label().unwrap_or_default(),
            Style::default().fg(MUTED_GRAY),
        ));
        frame.render_widget(counter, columns[0]);

        let skip = Paragraph::new(Line::from(vec![
            Span::styled("[", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("Esc", Style::default().fg(GOLD)),
            Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(" Skip", Style::default().fg(MUTED_GRAY)),
        ]))
        .alignment(Alignment::Right);
        frame.render_widget(skip, columns[1]);
    }

    fn render_progress<S: CompletionStore>(
        &self,
        frame: &mut Frame,
        area: Rect,
        controller: &TutorialController<S>,
    ) {
        let ratio = controller.progress_fraction().unwrap_or(0.0).clamp(0.0, 1.0);
        let percent = controller.progress_percent().unwrap_or(0);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(CORNFLOWER_BLUE).bg(TRACK_GRAY))
            .ratio(ratio)
            .label(Span::styled(
                format!("{percent}%"),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ));
        frame.render_widget(gauge, area);
    }

    fn render_navigation<S: CompletionStore>(
        &self,
        frame: &mut Frame,
        area: Rect,
        controller: &TutorialController<S>,
    ) {
        let mut spans = Vec::new();

        if controller.can_go_back() {
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled("←", Style::default().fg(GOLD)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(" Back", Style::default().fg(MUTED_GRAY)));
            spans.push(Span::styled("  |  ", Style::default().fg(SUBDUED_BORDER)));
        }

        spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled("Enter", Style::default().fg(GOLD)));
        spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
        spans.push(Span::styled(
            format!(" {}", controller.primary_label()),
            Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
        ));

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, area);
    }
}

impl Default for TutorialComponent {
    fn default() -> Self {
        Self::new()
    }
}
