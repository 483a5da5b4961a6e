//! Application state: the page orchestrator.
//!
//! `App` owns every component instance for the current page. Entering a page
//! rebuilds the components from the page's surfaces and queues one retrieval
//! per hosted list; the event loop drains that queue and feeds outcomes back
//! through [`App::resolve`].

use crate::actions::ActionId;
use crate::config::TuiConfig;
use crate::keys::{InputMode, KeyAction};
use crate::lists::{
    chat_list, document_list, lawyer_list, ChatList, DocumentList, LawyerList, ListDomain,
    LoadedList,
};
use crate::nav::{Page, Tab};
use crate::notifications::{Toast, ToastState};
use crate::theme::Palette;
use crate::views::overlay::panel_area;
use crate::widgets::card::Card;
use chrono::{DateTime, Utc};
use ratatui::layout::Rect;
use tui_textarea::TextArea;
use wakeel_core::{LayerStack, OptionGroup, SegmentedCode};

/// A surface that can hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Group(usize),
    Code,
    Search,
    List(ListDomain),
}

pub struct App {
    pub config: TuiConfig,
    pub palette: Palette,
    pub page: Page,
    /// Incremented on every page entry; retrievals issued for an older
    /// session are discarded.
    pub session: u64,

    pub groups: Vec<OptionGroup>,
    /// Highlighted (not necessarily active) option per group.
    pub group_cursors: Vec<usize>,
    pub code: Option<SegmentedCode>,
    pub layers: Option<LayerStack>,
    pub lawyers: Option<LawyerList>,
    pub chats: Option<ChatList>,
    pub documents: Option<DocumentList>,
    pub search: Option<TextArea<'static>>,
    pub toast: Option<Toast>,
    pub list_cursor: Option<usize>,
    pub should_quit: bool,

    toast_surface: bool,
    toast_message: Option<&'static str>,
    focus_ring: Vec<FocusTarget>,
    focus: usize,
    pending_loads: Vec<ListDomain>,
}

impl App {
    pub fn new(config: TuiConfig) -> Self {
        let page = config.start_page();
        let mut app = Self {
            config,
            palette: Palette::wakeel(),
            page,
            session: 0,
            groups: Vec::new(),
            group_cursors: Vec::new(),
            code: None,
            layers: None,
            lawyers: None,
            chats: None,
            documents: None,
            search: None,
            toast: None,
            list_cursor: None,
            should_quit: false,
            toast_surface: false,
            toast_message: None,
            focus_ring: Vec::new(),
            focus: 0,
            pending_loads: Vec::new(),
        };
        app.enter_page(page);
        app
    }

    /// Rebuild every component against the surfaces `page` carries.
    pub fn enter_page(&mut self, page: Page) {
        let layout = page.layout();
        self.session += 1;
        self.page = page;

        self.groups = layout
            .groups
            .iter()
            .map(|spec| {
                OptionGroup::observe(
                    spec.name,
                    spec.kind,
                    spec.options.iter().map(|label| label.to_string()).collect(),
                    spec.initially_active,
                )
            })
            .collect();
        self.group_cursors = self
            .groups
            .iter()
            .map(|group| group.active().unwrap_or(0))
            .collect();

        self.code = layout
            .code_cells
            .then(|| SegmentedCode::new(self.config.code_length));
        self.layers = layout
            .backdrop
            .then(|| LayerStack::new(layout.side_sheet, layout.history_sheet));

        let hosts = |domain: ListDomain| layout.lists.contains(&domain);
        self.lawyers = hosts(ListDomain::Lawyers).then(|| lawyer_list(false));
        self.chats = hosts(ListDomain::Chats).then(|| chat_list(false));
        self.documents =
            hosts(ListDomain::Documents).then(|| document_list(layout.document_search));
        self.search = (layout.document_search && self.documents.is_some()).then(TextArea::default);

        self.toast = None;
        self.toast_surface = layout.toast;
        self.toast_message = layout.toast_message;
        self.list_cursor = None;

        self.focus_ring = (0..self.groups.len()).map(FocusTarget::Group).collect();
        if self.code.is_some() {
            self.focus_ring.push(FocusTarget::Code);
        }
        if self.search.is_some() {
            self.focus_ring.push(FocusTarget::Search);
        }
        self.focus_ring
            .extend(layout.lists.iter().copied().map(FocusTarget::List));
        self.focus = 0;

        self.pending_loads = layout.lists;
        tracing::info!(page = %page, session = self.session, "Page entered");
    }

    /// Lists that still need their single retrieval for this session.
    pub fn take_pending_loads(&mut self) -> Vec<ListDomain> {
        std::mem::take(&mut self.pending_loads)
    }

    /// Install a finished retrieval. Outcomes for a previous page session or
    /// for a list the page does not host are ignored.
    pub fn resolve(&mut self, session: u64, list: LoadedList) {
        if session != self.session {
            tracing::debug!(
                session,
                current = self.session,
                domain = list.domain().title(),
                "Discarding stale list"
            );
            return;
        }
        tracing::info!(
            domain = list.domain().title(),
            provenance = %list.provenance(),
            count = list.len(),
            "List bound"
        );
        match list {
            LoadedList::Lawyers(outcome) => {
                if let Some(binding) = self.lawyers.as_mut() {
                    binding.resolve(outcome);
                }
            }
            LoadedList::Chats(outcome) => {
                if let Some(binding) = self.chats.as_mut() {
                    binding.resolve(outcome);
                }
            }
            LoadedList::Documents(outcome) => {
                if let Some(binding) = self.documents.as_mut() {
                    binding.resolve(outcome);
                }
                if let Some(search) = self.search.as_mut() {
                    *search = TextArea::default();
                }
            }
        }
        self.clamp_list_cursor();
    }

    pub fn active_tab(&self) -> Tab {
        self.page.tab()
    }

    pub fn focused(&self) -> Option<FocusTarget> {
        self.focus_ring.get(self.focus).copied()
    }

    pub fn focus_ring(&self) -> &[FocusTarget] {
        &self.focus_ring
    }

    pub fn backdrop_visible(&self) -> bool {
        self.layers
            .as_ref()
            .is_some_and(|layers| layers.backdrop_visible())
    }

    pub fn input_mode(&self) -> InputMode {
        if self.backdrop_visible() {
            return InputMode::Navigate;
        }
        match self.focused() {
            Some(FocusTarget::Code) => InputMode::Code,
            Some(FocusTarget::Search) => InputMode::Text,
            _ => InputMode::Navigate,
        }
    }

    pub fn search_text(&self) -> &str {
        self.search
            .as_ref()
            .and_then(|search| search.lines().first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Rendered cards of a hosted list, or `None` when the page lacks it.
    pub fn cards(&self, domain: ListDomain) -> Option<&[Card]> {
        match domain {
            ListDomain::Lawyers => self.lawyers.as_ref().map(|b| b.surface().items()),
            ListDomain::Chats => self.chats.as_ref().map(|b| b.surface().items()),
            ListDomain::Documents => self.documents.as_ref().map(|b| b.surface().items()),
        }
    }

    // ------------------------------------------------------------------------
    // Actions
    // ------------------------------------------------------------------------

    pub fn dispatch(&mut self, action: ActionId, payload: Option<&str>) {
        tracing::debug!(action = %action, page = %self.page, "Dispatching action");
        (action.handler())(self, payload);
    }

    /// Dispatch by identifier; unknown identifiers are ignored.
    pub fn dispatch_named(&mut self, name: &str, payload: Option<&str>) {
        match name.parse::<ActionId>() {
            Ok(action) => self.dispatch(action, payload),
            Err(()) => tracing::debug!(action = name, "Ignoring unknown action"),
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>, state: ToastState) {
        if !self.toast_surface {
            return;
        }
        self.toast = Some(Toast::new(message, state, self.config.toast_duration_ms));
    }

    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.toast.as_ref().is_some_and(|toast| toast.is_expired(now)) {
            self.toast = None;
        }
    }

    /// A mouse click at (`column`, `row`) within a frame of size `area`.
    /// Clicks outside every visible panel land on the backdrop and dismiss
    /// all layers.
    pub fn click(&mut self, column: u16, row: u16, area: Rect) {
        let Some(layers) = self.layers.as_mut() else {
            return;
        };
        if !layers.backdrop_visible() {
            return;
        }
        let on_panel = layers.visible_panels().into_iter().any(|panel| {
            let rect = panel_area(panel, area);
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        });
        if !on_panel {
            layers.close_all();
        }
    }

    /// Activate `option` in group `group`. Returns `true` when it changed.
    pub fn activate_option(&mut self, group: usize, option: usize) -> bool {
        let Some(target) = self.groups.get_mut(group) else {
            return false;
        };
        let changed = target.activate(option);
        if changed {
            tracing::debug!(group = target.name(), option, "Option activated");
        }
        changed
    }

    // ------------------------------------------------------------------------
    // Keys
    // ------------------------------------------------------------------------

    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Quit => self.should_quit = true,
            KeyAction::Trigger(ActionId::Toast) => {
                let payload = self.toast_message;
                self.dispatch(ActionId::Toast, payload);
            }
            KeyAction::Trigger(action) => self.dispatch(action, None),
            _ if self.backdrop_visible() => {}
            KeyAction::NextFocus => self.cycle_focus(true),
            KeyAction::PrevFocus => self.cycle_focus(false),
            KeyAction::NextPage => self.enter_page(self.page.next()),
            KeyAction::PrevPage => self.enter_page(self.page.previous()),
            KeyAction::SwitchTab(index) => {
                if let Some(tab) = Tab::from_index(index) {
                    self.enter_page(tab.landing_page());
                }
            }
            KeyAction::MoveLeft => self.move_group_cursor(false),
            KeyAction::MoveRight => self.move_group_cursor(true),
            KeyAction::MoveUp => self.move_list_cursor(false),
            KeyAction::MoveDown => self.move_list_cursor(true),
            KeyAction::Select => self.select(),
            KeyAction::CodeInput(ch) => {
                if let Some(code) = self.code.as_mut() {
                    code.keystroke(code.focus(), ch);
                }
            }
            KeyAction::CodeDelete => {
                if let Some(code) = self.code.as_mut() {
                    code.delete(code.focus());
                }
            }
            KeyAction::TextInput(event) => self.search_input(event),
        }
    }

    fn cycle_focus(&mut self, forward: bool) {
        let len = self.focus_ring.len();
        if len == 0 {
            return;
        }
        self.focus = if forward {
            (self.focus + 1) % len
        } else if self.focus == 0 {
            len - 1
        } else {
            self.focus - 1
        };
        self.list_cursor = None;
    }

    fn move_group_cursor(&mut self, forward: bool) {
        let Some(FocusTarget::Group(index)) = self.focused() else {
            return;
        };
        let len = self.groups.get(index).map_or(0, OptionGroup::len);
        if let Some(cursor) = self.group_cursors.get_mut(index) {
            select_adjacent(len, cursor, forward);
        }
    }

    fn move_list_cursor(&mut self, forward: bool) {
        let Some(FocusTarget::List(domain)) = self.focused() else {
            return;
        };
        let len = self.cards(domain).map_or(0, <[Card]>::len);
        if forward {
            select_next(len, &mut self.list_cursor);
        } else {
            select_prev(len, &mut self.list_cursor);
        }
    }

    fn select(&mut self) {
        match self.focused() {
            Some(FocusTarget::Group(index)) => {
                let option = self.group_cursors.get(index).copied().unwrap_or(0);
                self.activate_option(index, option);
            }
            Some(FocusTarget::List(domain)) => {
                let link = self
                    .list_cursor
                    .and_then(|cursor| self.cards(domain).and_then(|cards| cards.get(cursor)))
                    .and_then(|card| card.link);
                if let Some(page) = link {
                    self.enter_page(page);
                }
            }
            _ => {}
        }
    }

    fn search_input(&mut self, event: crossterm::event::KeyEvent) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        if !search.input(event) {
            return;
        }
        let query = search.lines().first().cloned().unwrap_or_default();
        if let Some(documents) = self.documents.as_mut() {
            documents.apply_filter(&query);
        }
        self.clamp_list_cursor();
    }

    fn clamp_list_cursor(&mut self) {
        let len = match self.focused() {
            Some(FocusTarget::List(domain)) => self.cards(domain).map_or(0, <[Card]>::len),
            _ => 0,
        };
        if self.list_cursor.is_some_and(|cursor| cursor >= len) {
            self.list_cursor = len.checked_sub(1);
        }
    }
}

fn select_adjacent(len: usize, cursor: &mut usize, forward: bool) {
    if len == 0 {
        *cursor = 0;
        return;
    }
    *cursor = if forward {
        (*cursor + 1) % len
    } else if *cursor == 0 {
        len - 1
    } else {
        (*cursor - 1).min(len - 1)
    };
}

fn select_next(len: usize, selected: &mut Option<usize>) {
    if len == 0 {
        *selected = None;
        return;
    }
    *selected = Some(match *selected {
        Some(index) if index + 1 < len => index + 1,
        _ => 0,
    });
}

fn select_prev(len: usize, selected: &mut Option<usize>) {
    if len == 0 {
        *selected = None;
        return;
    }
    *selected = Some(match *selected {
        Some(index) if index > 0 && index <= len => index - 1,
        _ => len - 1,
    });
}
