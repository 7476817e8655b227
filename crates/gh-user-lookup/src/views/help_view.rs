//! Key bindings overlay

use crate::actions::Action;
use crate::capabilities::PanelCapabilities;
use crate::state::AppState;
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("Enter", "Search (input) / open repository (list)"),
    ("Tab", "Switch between input and repository list"),
    ("j/k ↓/↑", "Move through repositories"),
    ("g/G", "First / last repository"),
    ("Ctrl+O", "Open profile in browser"),
    ("Ctrl+U", "Clear input"),
    ("F1 / ?", "Toggle this help"),
    ("Esc / q", "Back / quit"),
    ("Ctrl+C", "Quit"),
];

/// Floating panel listing the key bindings
#[derive(Debug, Clone)]
pub struct HelpView;

impl HelpView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HelpView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for HelpView {
    fn view_id(&self) -> ViewId {
        ViewId::Help
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        let theme = &state.theme;

        let popup_width = (u32::from(area.width) * 60 / 100).clamp(40, 70) as u16;
        let popup_width = popup_width.min(area.width);
        let popup_height = (BINDINGS.len() as u16 + 4).min(area.height);
        let popup_area = Rect {
            x: area.x + area.width.saturating_sub(popup_width) / 2,
            y: area.y + area.height.saturating_sub(popup_height) / 2,
            width: popup_width,
            height: popup_height,
        };

        f.render_widget(Clear, popup_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Key Bindings ")
            .title_style(theme.panel_title())
            .title_alignment(ratatui::layout::Alignment::Center)
            .border_style(theme.panel_border().add_modifier(Modifier::BOLD))
            .style(theme.panel_background());
        f.render_widget(block, popup_area);

        let lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(keys, description)| {
                Line::from(vec![
                    Span::styled(format!("{:<10}", keys), theme.key_hint()),
                    Span::styled(*description, theme.key_description()),
                ])
            })
            .collect();

        let inner = popup_area.inner(Margin {
            horizontal: 2,
            vertical: 1,
        });
        f.render_widget(Paragraph::new(lines), inner);
    }

    fn capabilities(&self, _state: &AppState) -> PanelCapabilities {
        PanelCapabilities::empty()
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(action, Action::Global(_))
    }
}
