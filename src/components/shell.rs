// ABOUTME: Host shell the tutorial overlay is mounted over
// Draws the header with wallet button, groups panel and dashboard panel

use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::tutorial::Highlight;

const CORNFLOWER_BLUE: Color = Color::Rgb(100, 149, 237);
const GOLD: Color = Color::Rgb(255, 215, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);

/// Screen regions of the shell, addressable by tutorial highlights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellRegions {
    pub header: Rect,
    pub wallet: Rect,
    pub create: Rect,
    pub dashboard: Rect,
    pub footer: Rect,
}

impl ShellRegions {
    pub fn get(&self, highlight: Highlight) -> Rect {
        match highlight {
            Highlight::Wallet => self.wallet,
            Highlight::Create => self.create,
            Highlight::Dashboard => self.dashboard,
        }
    }
}

pub struct ShellComponent;

impl ShellComponent {
    pub fn new() -> Self {
        Self
    }

    pub fn regions(area: Rect) -> ShellRegions {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(5),    // Panels
                Constraint::Length(1), // Footer
            ])
            .split(area);

        let header_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(22)])
            .split(rows[0]);

        let panels = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        ShellRegions {
            header: header_cols[0],
            wallet: header_cols[1],
            create: panels[0],
            dashboard: panels[1],
            footer: rows[2],
        }
    }

    /// Draw the shell, emphasizing the region the tutorial points at
    pub fn render(&self, frame: &mut Frame, area: Rect, highlight: Option<Highlight>) {
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let regions = Self::regions(area);

        let brand = Paragraph::new(Line::from(vec![
            Span::styled(" Soroban ", Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
            Span::styled("Ajo", Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD)),
            Span::styled("  rotational savings on Stellar", Style::default().fg(MUTED_GRAY)),
        ]))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(SUBDUED_BORDER)),
        );
        frame.render_widget(brand, regions.header);

        let wallet = Paragraph::new(Span::styled("Connect Wallet", Style::default().fg(SOFT_WHITE)))
            .alignment(Alignment::Center)
            .block(Self::region_block(" Wallet ", highlight == Some(Highlight::Wallet)));
        frame.render_widget(wallet, regions.wallet);

        let groups = Paragraph::new(vec![
            Line::from(Span::styled("+ Create group", Style::default().fg(SOFT_WHITE))),
            Line::from(Span::styled("  Browse groups", Style::default().fg(MUTED_GRAY))),
        ])
        .wrap(Wrap { trim: false })
        .block(Self::region_block(" Groups ", highlight == Some(Highlight::Create)));
        frame.render_widget(groups, regions.create);

        let dashboard = Paragraph::new(vec![
            Line::from(Span::styled("No groups yet", Style::default().fg(MUTED_GRAY))),
            Line::from(Span::styled(
                "Contributions and payouts appear here",
                Style::default().fg(MUTED_GRAY),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(Self::region_block(" Dashboard ", highlight == Some(Highlight::Dashboard)));
        frame.render_widget(dashboard, regions.dashboard);

        let footer = Paragraph::new(Line::from(vec![
            Span::styled(" [", Style::default().fg(SUBDUED_BORDER)),
            Span::styled("q", Style::default().fg(GOLD)),
            Span::styled("]", Style::default().fg(SUBDUED_BORDER)),
            Span::styled(" Quit", Style::default().fg(MUTED_GRAY)),
        ]));
        frame.render_widget(footer, regions.footer);
    }

    fn region_block(title: &str, highlighted: bool) -> Block<'_> {
        // Highlight is marked by border shape and a title marker, not only color
        let (border_type, color, title) = if highlighted {
            (BorderType::Double, GOLD, format!("▶{title}◀"))
        } else {
            (BorderType::Rounded, CORNFLOWER_BLUE, title.to_string())
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(Style::default().fg(color))
            .title(title)
    }
}

impl Default for ShellComponent {
    fn default() -> Self {
        Self::new()
    }
}
