//! Panels of the browse screen

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::index::{CategoryView, StationHit};
use crate::period::PeriodClass;

fn class_color(class: PeriodClass) -> Color {
    match class {
        PeriodClass::Early => Color::Green,
        PeriodClass::Middle => Color::Yellow,
        PeriodClass::Late => Color::Magenta,
        PeriodClass::Default => Color::Gray,
    }
}

/// Query input line
pub struct QueryPanel<'a> {
    pub query: &'a str,
}

impl QueryPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(" 🔍 ", Style::default().fg(Color::Cyan)),
            Span::styled(self.query, Style::default().fg(Color::White)),
            Span::styled("▏", Style::default().fg(Color::Cyan)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" 駅名・カード名で検索 ")
            .border_style(Style::default().fg(Color::Blue));

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

/// Search results, one coloured block per period
pub struct ResultsPanel<'a> {
    pub hits: &'a [StationHit],
    pub placeholder: Option<&'a str>,
    pub scroll: u16,
}

impl ResultsPanel<'_> {
    pub fn lines(&self) -> Vec<Line<'static>> {
        if let Some(text) = self.placeholder {
            return vec![Line::from(Span::styled(
                format!(" {}", text),
                Style::default().fg(Color::DarkGray),
            ))];
        }

        let mut lines = Vec::new();
        for hit in self.hits {
            for block in &hit.blocks {
                let style = Style::default()
                    .fg(class_color(block.class))
                    .add_modifier(Modifier::BOLD);
                lines.push(Line::from(Span::styled(
                    format!(" ■ {}", block.header(&hit.display_name)),
                    style,
                )));
                for card in &block.cards {
                    lines.push(Line::from(format!("     ・{}", card)));
                }
            }
            lines.push(Line::from(""));
        }
        lines
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let title = if self.hits.is_empty() {
            " 検索結果 ".to_string()
        } else {
            format!(" 検索結果 ({}駅) ", self.hits.len())
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Blue));

        let paragraph = Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((self.scroll, 0));
        frame.render_widget(paragraph, area);
    }
}

/// Category list; the selected card is highlighted
pub struct CategoryPanel<'a> {
    pub categories: &'a [CategoryView],
    pub selected: Option<(usize, usize)>,
}

impl CategoryPanel<'_> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let mut lines = Vec::new();
        for (ci, category) in self.categories.iter().enumerate() {
            let title = match &category.icon {
                Some(icon) => format!(" {} [{}]", icon, category.name),
                None => format!(" [{}]", category.name),
            };
            lines.push(Line::from(Span::styled(
                title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));

            for (cj, card) in category.cards.iter().enumerate() {
                let style = if self.selected == Some((ci, cj)) {
                    Style::default().fg(Color::Black).bg(Color::Cyan)
                } else {
                    Style::default().fg(Color::Gray)
                };
                lines.push(Line::from(Span::styled(format!("   {}", card), style)));
            }
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" カテゴリ ")
            .border_style(Style::default().fg(Color::Blue));

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

/// One-line key help
pub fn render_help(frame: &mut Frame, area: Rect) {
    let help = Line::from(Span::styled(
        " Tab/Shift+Tab: カテゴリ選択  ↑↓: スクロール  Esc: 終了",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(help), area);
}
