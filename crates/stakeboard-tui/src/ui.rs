//! UI rendering.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table},
};
use stakeboard_core::{Section, StakeView, VoteChoice, VoteView};

use crate::app::{App, Focus};
use crate::theme::Palette;

/// Safely truncate a string to a maximum number of characters (not bytes).
fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    if max_chars <= 1 {
        return s.chars().take(max_chars).collect();
    }
    let mut out: String = s.chars().take(max_chars - 1).collect();
    out.push('…');
    out
}

/// Render the entire dashboard, sections in their fixed order.
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::vertical([
        Constraint::Length(6),      // Header
        Constraint::Ratio(1, 3),    // Activity
        Constraint::Ratio(1, 3),    // Staking pools
        Constraint::Ratio(1, 3),    // Voting history
    ])
    .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_activity(frame, app, chunks[1]);
    render_stakes(frame, app, chunks[2]);
    render_votes(frame, app, chunks[3]);

    if app.showing_help {
        render_help_modal(frame, app);
    }
}

fn section_block<'a, T>(section: &'a Section<T>, p: &Palette, focused: bool) -> Block<'a> {
    let border_style = if focused {
        Style::default().fg(p.selection)
    } else {
        Style::default().fg(p.border)
    };
    let mut block = Block::default()
        .title(format!(" {} ", section.title))
        .title_style(Style::default().fg(p.accent).bold())
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(nav) = &section.nav {
        block = block.title_bottom(
            Line::from(format!(" {} → ", nav.label))
                .style(Style::default().fg(p.muted))
                .right_aligned(),
        );
    }
    block
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let header = &app.view.header;

    let mut figure_spans: Vec<Span> = Vec::new();
    for (i, figure) in header.figures.iter().enumerate() {
        if i > 0 {
            figure_spans.push(Span::styled("  │  ", Style::default().fg(p.muted)));
        }
        figure_spans.push(Span::styled(
            format!("{}: ", figure.label),
            Style::default().fg(p.fg_dim),
        ));
        figure_spans.push(Span::styled(
            figure.value.clone(),
            Style::default().fg(p.primary).bold(),
        ));
    }

    // "Account " prefix and borders take ~12 columns around the address.
    let address = if (area.width as usize) >= header.identity.address.chars().count() + 12 {
        header.identity.address.clone()
    } else {
        header.identity.short_address()
    };

    let text = vec![
        Line::from(vec![
            Span::styled("Account ", Style::default().fg(p.fg_dim)),
            Span::styled(address, Style::default().fg(p.fg).bold()),
        ]),
        Line::from(Span::styled(
            header.identity.avatar_url.clone(),
            Style::default().fg(p.muted),
        )),
        Line::from(""),
        Line::from(figure_spans),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border))
        .style(Style::default().bg(p.bg));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_activity(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let section = &app.view.activity;
    let focused = app.focus == Focus::Activity;
    let block = section_block(section, p, focused);

    if section.is_empty() {
        let empty = Paragraph::new(Line::from("No recent activity"))
            .style(Style::default().fg(p.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let selected = app.selected[0];
    let mut lines: Vec<Line> = Vec::new();
    for (i, keyed) in section.items.iter().enumerate() {
        let item = &keyed.item;
        let marker = if focused && i == selected { "▸ " } else { "  " };
        let title_style = if focused && i == selected {
            Style::default().fg(p.selection).bold()
        } else {
            Style::default().fg(p.fg).bold()
        };
        lines.push(Line::from(vec![
            Span::raw(marker),
            Span::styled(item.title.clone(), title_style),
        ]));

        let mut detail_spans = vec![
            Span::raw("    "),
            Span::styled(item.subtitle.clone(), Style::default().fg(p.fg_dim)),
        ];
        if let Some(detail) = &item.detail {
            detail_spans.push(Span::styled(
                format!("  [{}: {}]", detail.label, detail.value),
                Style::default().fg(p.primary),
            ));
        }
        if let Some(action) = &item.action {
            detail_spans.push(Span::styled(
                format!("  <{}>", action.label),
                Style::default().fg(p.accent),
            ));
        }
        lines.push(Line::from(detail_spans));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_stakes(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let section = &app.view.stakes;
    let focused = app.focus == Focus::Stakes;
    let block = section_block(section, p, focused);

    if section.is_empty() {
        let mut lines = Vec::new();
        if let Some(cta) = &section.call_to_action {
            lines.push(Line::from(Span::styled(
                cta.title.clone(),
                Style::default().fg(p.fg).bold(),
            )));
            lines.push(Line::from(Span::styled(
                cta.description.clone(),
                Style::default().fg(p.fg_dim),
            )));
            for action in &cta.actions {
                lines.push(Line::from(Span::styled(
                    format!("<{}>", action.label),
                    Style::default().fg(p.accent),
                )));
            }
        } else {
            lines.push(Line::from(Span::styled(
                "No staking pools",
                Style::default().fg(p.muted),
            )));
        }
        let empty = Paragraph::new(lines).alignment(Alignment::Center).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        "Pool", "Rewards", "Fees", "Staked", "Your stake", "Earned", "Ends in",
    ])
    .style(Style::default().fg(p.fg_dim).bold());

    let selected = app.selected[1];
    let rows = section.items.iter().enumerate().map(|(i, keyed)| {
        let row = stake_row(&keyed.item, p);
        if focused && i == selected {
            row.style(Style::default().fg(p.selection))
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(22),
            Constraint::Length(8),
            Constraint::Length(12),
            Constraint::Length(7),
            Constraint::Length(12),
            Constraint::Length(10),
            Constraint::Length(9),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn stake_row<'a>(stake: &'a StakeView, p: &Palette) -> Row<'a> {
    Row::new(vec![
        Cell::from(stake.pool_title.clone()).style(Style::default().fg(p.fg)),
        Cell::from(stake.rewards_label()).style(Style::default().fg(p.success)),
        Cell::from(stake.fee_amount.clone()),
        Cell::from(stake.staked_label()),
        Cell::from(format!("{}", stake.user_staked_amount)),
        Cell::from(format!("{}", stake.user_rewards_amount)),
        Cell::from(stake.time_remaining.clone()).style(Style::default().fg(p.fg_dim)),
    ])
}

fn render_votes(frame: &mut Frame, app: &App, area: Rect) {
    let p = &app.palette;
    let section = &app.view.votes;
    let focused = app.focus == Focus::Votes;
    let block = section_block(section, p, focused);

    if section.is_empty() {
        let empty = Paragraph::new(Line::from("No votes cast"))
            .style(Style::default().fg(p.muted))
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec!["Proposal", "Title", "Vote", "Summary"])
        .style(Style::default().fg(p.fg_dim).bold());

    let summary_width = area.width.saturating_sub(36) as usize;
    let selected = app.selected[2];
    let rows = section.items.iter().enumerate().map(|(i, keyed)| {
        let row = vote_row(&keyed.item, p, summary_width);
        if focused && i == selected {
            row.style(Style::default().fg(p.selection))
        } else {
            row
        }
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(9),
            Constraint::Length(22),
            Constraint::Length(5),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(block);

    frame.render_widget(table, area);
}

fn vote_row<'a>(vote: &'a VoteView, p: &Palette, summary_width: usize) -> Row<'a> {
    let choice_style = match vote.vote_choice {
        VoteChoice::Yes => Style::default().fg(p.success),
        VoteChoice::No => Style::default().fg(p.error),
    };
    Row::new(vec![
        Cell::from(vote.proposal_label()).style(Style::default().fg(p.primary)),
        Cell::from(vote.proposal_title.clone()).style(Style::default().fg(p.fg)),
        Cell::from(vote.vote_choice.label()).style(choice_style),
        Cell::from(truncate_str(&vote.summary, summary_width))
            .style(Style::default().fg(p.fg_dim)),
    ])
}

fn render_help_modal(frame: &mut Frame, app: &App) {
    let p = &app.palette;
    let area = frame.area();

    let width = 44.min(area.width.saturating_sub(4));
    let height = 10;
    let x = (area.width.saturating_sub(width)) / 2;
    let y = (area.height.saturating_sub(height)) / 2;
    let modal_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, modal_area);

    let text = vec![
        Line::from("Keys").style(Style::default().fg(p.accent).bold()),
        Line::from(""),
        Line::from("Tab / Shift-Tab   switch section"),
        Line::from("j / k, ↓ / ↑      move selection"),
        Line::from("?                 toggle this help"),
        Line::from("q / Esc           quit"),
        Line::from(""),
        Line::from("Press any key to close").style(Style::default().fg(p.muted)),
    ];

    let block = Block::default()
        .title(" Help ")
        .title_style(Style::default().fg(p.accent).bold())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(p.border))
        .style(Style::default().bg(p.bg));

    frame.render_widget(
        Paragraph::new(text).block(block).alignment(Alignment::Left),
        modal_area,
    );
}
