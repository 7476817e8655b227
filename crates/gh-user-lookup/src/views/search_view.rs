//! Search View
//!
//! The main screen: title, username input with the search action, and the
//! result panel (loading placeholder, error, or profile and repositories).

use crate::actions::{
    Action, GlobalAction, NavigationAction, ResultsAction, SearchAction, TextInputAction,
};
use crate::capabilities::PanelCapabilities;
use crate::state::{AppState, Focus};
use crate::theme::Theme;
use crate::view_models::{
    ProfileViewModel, RepositorySection, ResultsViewModel, SearchBarViewModel,
};
use crate::views::{View, ViewId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Stylize,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const TITLE: &str = " Github Profile Viewer ";
const DESCRIPTION: &str =
    "Search for a GitHub username and view their profile and repositories.";
const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// The username search screen
#[derive(Debug, Clone)]
pub struct SearchView;

impl SearchView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SearchView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SearchView {
    fn view_id(&self) -> ViewId {
        ViewId::Search
    }

    fn render(&self, state: &AppState, area: Rect, f: &mut Frame) {
        render(state, area, f);
    }

    fn capabilities(&self, state: &AppState) -> PanelCapabilities {
        match state.results.focus {
            Focus::Input => PanelCapabilities::TEXT_INPUT,
            Focus::Repositories => PanelCapabilities::ITEM_NAVIGATION,
        }
    }

    fn clone_box(&self) -> Box<dyn View> {
        Box::new(self.clone())
    }

    fn translate_navigation(&self, nav: NavigationAction) -> Option<Action> {
        let action = match nav {
            NavigationAction::Next => ResultsAction::NextRepository,
            NavigationAction::Previous => ResultsAction::PreviousRepository,
            NavigationAction::ToTop => ResultsAction::FirstRepository,
            NavigationAction::ToBottom => ResultsAction::LastRepository,
        };
        Some(Action::Results(action))
    }

    fn translate_text_input(&self, input: TextInputAction) -> Option<Action> {
        let action = match input {
            TextInputAction::Char(c) => SearchAction::Char(c),
            TextInputAction::Backspace => SearchAction::Backspace,
            TextInputAction::ClearLine => SearchAction::ClearField,
            TextInputAction::Confirm => SearchAction::Submit,
            TextInputAction::Escape => return Some(Action::Global(GlobalAction::Quit)),
        };
        Some(Action::Search(action))
    }

    fn accepts_action(&self, action: &Action) -> bool {
        matches!(
            action,
            Action::Search(_)
                | Action::Results(_)
                | Action::Navigate(_)
                | Action::TextInput(_)
                | Action::Global(_)
        )
    }
}

fn render(state: &AppState, area: Rect, f: &mut Frame) {
    let theme = &state.theme;

    let footer_hint = Line::from(vec![
        Span::styled(" Enter", theme.key_hint()),
        Span::styled(" search/open  ", theme.muted()),
        Span::styled("Tab", theme.key_hint()),
        Span::styled(" focus  ", theme.muted()),
        Span::styled("Ctrl+O", theme.key_hint()),
        Span::styled(" profile  ", theme.muted()),
        Span::styled("F1", theme.key_hint()),
        Span::styled(" help  ", theme.muted()),
        Span::styled("Esc", theme.key_hint()),
        Span::styled(" quit ", theme.muted()),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(TITLE)
        .title_style(theme.panel_title())
        .title_alignment(Alignment::Center)
        .title_bottom(footer_hint)
        .border_style(theme.panel_border())
        .style(theme.app_background());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Description
            Constraint::Length(1), // Spacing
            Constraint::Length(3), // Input row
            Constraint::Min(0),    // Results
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Span::styled(DESCRIPTION, theme.text_secondary()))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let search_bar = SearchBarViewModel::new(&state.search_form, &state.lookup);
    render_search_bar(
        &search_bar,
        state.results.focus == Focus::Input,
        theme,
        chunks[2],
        f,
    );

    match ResultsViewModel::new(&state.lookup) {
        ResultsViewModel::Idle => {}
        ResultsViewModel::Loading { username } => {
            let frame = SPINNER[state.tick % SPINNER.len()];
            let line = Line::from(vec![
                Span::styled(format!("{frame} "), theme.loading()),
                Span::styled(format!("Loading {username}..."), theme.loading()),
            ]);
            f.render_widget(
                Paragraph::new(vec![Line::from(""), line]).alignment(Alignment::Center),
                chunks[3],
            );
        }
        ResultsViewModel::Failed { message } => {
            f.render_widget(
                Paragraph::new(vec![Line::from(""), Line::styled(message, theme.error())])
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true }),
                chunks[3],
            );
        }
        ResultsViewModel::Success(profile) => {
            render_profile(
                &profile,
                state.results.focus == Focus::Repositories,
                state.results.selected_repository,
                theme,
                chunks[3],
                f,
            );
        }
    }
}

fn render_search_bar(
    vm: &SearchBarViewModel,
    focused: bool,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    let action_text = format!(" {} ", vm.action_label);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(10),
            Constraint::Length(action_text.chars().count() as u16 + 2),
        ])
        .split(area);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .title(" Username ")
        .border_style(if focused {
            theme.focused_border()
        } else {
            theme.panel_border()
        });

    let mut spans = Vec::with_capacity(2);
    if vm.is_placeholder {
        if focused {
            spans.push(Span::styled("▌", theme.key_hint()));
        }
        spans.push(Span::styled(vm.text.as_str(), theme.muted().italic()));
    } else {
        spans.push(Span::styled(vm.text.as_str(), theme.text()));
        if focused {
            spans.push(Span::styled("▌", theme.key_hint()));
        }
    }
    f.render_widget(Paragraph::new(Line::from(spans)).block(input_block), columns[0]);

    let action_style = if vm.action_enabled {
        theme.action_enabled()
    } else {
        theme.action_disabled()
    };
    f.render_widget(
        Paragraph::new(Span::styled(action_text, action_style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(theme.muted())),
        columns[1],
    );
}

fn render_profile(
    profile: &ProfileViewModel,
    list_focused: bool,
    selected: usize,
    theme: &Theme,
    area: Rect,
    f: &mut Frame,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(3)])
        .split(area);

    let mut counters = Vec::with_capacity(profile.counters.len() * 3);
    for (value, label) in &profile.counters {
        counters.push(Span::styled(value.as_str(), theme.success()));
        counters.push(Span::styled(format!(" {label}"), theme.text()));
        counters.push(Span::raw("    "));
    }

    let card = vec![
        Line::from(Span::styled(profile.avatar_url.as_str(), theme.muted())),
        Line::from(Span::styled(profile.display_name.as_str(), theme.text().bold())),
        Line::from(Span::styled(profile.handle.as_str(), theme.muted())),
        Line::from(Span::styled(profile.bio.as_str(), theme.text_secondary())),
        Line::from(""),
        Line::from(counters),
        Line::from(""),
        Line::from(vec![
            Span::styled(crate::view_models::results_view_model::PROFILE_LINK_LABEL, theme.link()),
            Span::styled(format!("  {}", profile.profile_url), theme.muted()),
        ]),
    ];
    f.render_widget(
        Paragraph::new(card).alignment(Alignment::Center),
        chunks[0],
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Repositories ")
        .title_style(theme.section_header())
        .border_style(if list_focused {
            theme.focused_border()
        } else {
            theme.panel_border()
        });

    match &profile.repositories {
        RepositorySection::Empty { message } => {
            f.render_widget(
                Paragraph::new(Span::styled(*message, theme.muted())).block(block),
                chunks[1],
            );
        }
        RepositorySection::Entries(entries) => {
            let items: Vec<ListItem> = entries
                .iter()
                .map(|entry| {
                    ListItem::new(vec![
                        Line::from(vec![
                            Span::styled(entry.name.as_str(), theme.link()),
                            Span::styled(format!("  {}", entry.url), theme.muted()),
                        ]),
                        Line::from(Span::styled(
                            format!("  {}", entry.description),
                            theme.muted(),
                        )),
                    ])
                })
                .collect();

            let mut list = List::new(items).block(block);
            if list_focused {
                list = list.highlight_style(theme.selected()).highlight_symbol("> ");
            }

            let mut list_state = ListState::default().with_selected(Some(selected));
            f.render_stateful_widget(list, chunks[1], &mut list_state);
        }
    }
}
