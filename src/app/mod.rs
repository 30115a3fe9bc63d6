//! Application shell.
//!
//! Owns the [`Dashboard`] controller together with purely visual state
//! (selection, form buffers, toast, activity log). Key presses become
//! [`Message`]s, messages become controller calls, and the resulting
//! requests are handed to background workers.

mod dashboard;

pub use dashboard::{Dashboard, Settled};

use std::collections::VecDeque;
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::widgets::ListState;

use crate::api::FoodsApi;
use crate::constants;
use crate::core::worker::{self, ApiOutcome, ApiRequest};
use crate::event::Event;
use crate::message::{Message, ModalKind};
use crate::state::{Dish, DishForm, FormAction, Toast, ToastType};

pub struct App {
    /// Authoritative client-side dish state.
    pub dashboard: Dashboard,
    /// Highlighted row of the dish list.
    pub list_state: ListState,
    pub add_form: DishForm,
    pub edit_form: DishForm,
    pub toast: Option<Toast>,
    /// Most recent activity lines, oldest first.
    pub logs: VecDeque<String>,
    /// Backend address shown in the header.
    pub api_url: String,
    pub should_quit: bool,
    api: Arc<dyn FoodsApi>,
    events: Sender<Event>,
}

impl App {
    pub fn new(api_url: impl Into<String>, api: Arc<dyn FoodsApi>, events: Sender<Event>) -> Self {
        Self {
            dashboard: Dashboard::new(),
            list_state: ListState::default(),
            add_form: DishForm::empty(),
            edit_form: DishForm::empty(),
            toast: None,
            logs: VecDeque::with_capacity(constants::MAX_LOG_LINES),
            api_url: api_url.into(),
            should_quit: false,
            api,
            events,
        }
    }

    /// Logs the banner and issues the one-time list fetch.
    pub fn start(&mut self) {
        self.log(format!(
            "INIT: {} v{} starting...",
            constants::APP_NAME,
            constants::APP_VERSION
        ));
        self.log(format!("IO: Backend at {}", self.api_url));
        let request = self.dashboard.initialize();
        self.dispatch(request);
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Tick => self.on_tick(),
            Event::Resize(_, _) => {}
            Event::Api(outcome) => self.handle_outcome(outcome),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(message) = self.message_for_key(key) {
            self.update(message);
        }
    }

    /// Routes a key to the open modal, or to the list when none is open.
    fn message_for_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Message::Quit);
        }

        if self.dashboard.is_open(ModalKind::Add) {
            return match self.add_form.handle_key(key) {
                FormAction::Submit => Some(Message::SubmitAdd(self.add_form.to_input())),
                FormAction::Dismiss => Some(Message::Dismiss(ModalKind::Add)),
                FormAction::Editing => None,
            };
        }
        if self.dashboard.is_open(ModalKind::Edit) {
            return match self.edit_form.handle_key(key) {
                FormAction::Submit => Some(Message::SubmitEdit(self.edit_form.to_patch())),
                FormAction::Dismiss => Some(Message::Dismiss(ModalKind::Edit)),
                FormAction::Editing => None,
            };
        }

        let selected = self.selected_dish().map(|d| d.id);
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Message::Quit),
            KeyCode::Char('a' | 'n') => Some(Message::AddRequested),
            KeyCode::Char('e') | KeyCode::Enter => selected.map(Message::EditRequested),
            KeyCode::Char('d') | KeyCode::Delete => selected.map(Message::DeleteRequested),
            KeyCode::Char(' ' | 't') => selected.map(Message::ToggleAvailability),
            KeyCode::Down | KeyCode::Char('j') => {
                self.select_next();
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.select_previous();
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                if !self.dashboard.dishes().is_empty() {
                    self.list_state.select(Some(0));
                }
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                let len = self.dashboard.dishes().len();
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
                None
            }
            _ => None,
        }
    }

    /// Single entry point for component messages.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::AddRequested => {
                if !self.dashboard.is_open(ModalKind::Add) {
                    self.add_form = DishForm::empty();
                    self.dashboard.toggle_add_modal();
                }
            }
            Message::EditRequested(id) => {
                if let Some(dish) = self.dashboard.dish(id).cloned() {
                    self.edit_form = DishForm::seeded(&dish);
                    self.dashboard.select_for_edit(dish);
                }
            }
            Message::DeleteRequested(id) => {
                let request = self.dashboard.delete_dish(id);
                self.dispatch(request);
            }
            Message::ToggleAvailability(id) => {
                if let Some(request) = self.dashboard.toggle_available(id) {
                    self.dispatch(request);
                }
            }
            Message::SubmitAdd(input) => {
                if self.add_form.is_submitting() {
                    return;
                }
                self.add_form.mark_submitting();
                let request = self.dashboard.add_dish(input);
                self.dispatch(request);
            }
            Message::SubmitEdit(patch) => {
                if self.edit_form.is_submitting() {
                    return;
                }
                if let Some(request) = self.dashboard.update_dish(patch) {
                    self.edit_form.mark_submitting();
                    self.dispatch(request);
                }
            }
            Message::Dismiss(kind) => {
                if self.dashboard.is_open(kind) {
                    match kind {
                        ModalKind::Add => self.dashboard.toggle_add_modal(),
                        ModalKind::Edit => self.dashboard.toggle_edit_modal(),
                    }
                }
            }
            Message::Quit => self.should_quit = true,
        }
    }

    /// Applies a settled request and reports it to the user.
    pub fn handle_outcome(&mut self, outcome: ApiOutcome) {
        let Settled { notice, closed } = self.dashboard.apply(outcome);

        if let Some(kind) = closed {
            tracing::debug!(?kind, "modal closed after submission settled");
        }
        self.log(format!("{}: {}", level_tag(notice.level), notice.message));
        if notice.level != ToastType::Info {
            self.show_toast(notice.message, notice.level);
        }
        self.clamp_selection();
    }

    /// Expires the toast.
    pub fn on_tick(&mut self) {
        if self
            .toast
            .as_ref()
            .is_some_and(|t| t.is_expired(Instant::now()))
        {
            self.toast = None;
        }
    }

    pub fn selected_dish(&self) -> Option<&Dish> {
        self.list_state
            .selected()
            .and_then(|i| self.dashboard.dishes().get(i))
    }

    pub fn show_toast(&mut self, message: impl Into<String>, toast_type: ToastType) {
        self.toast = Some(Toast::new(message, toast_type, constants::TOAST_DURATION));
    }

    /// Appends to the activity log, dropping the oldest line when full.
    pub fn log(&mut self, line: impl Into<String>) {
        if self.logs.len() == constants::MAX_LOG_LINES {
            self.logs.pop_front();
        }
        self.logs.push_back(line.into());
    }

    fn dispatch(&mut self, request: ApiRequest) {
        let label = request.describe();
        tracing::info!(request = %label, "dispatching request");
        self.log(format!("IO: {label}"));
        worker::spawn_request(Arc::clone(&self.api), request, self.events.clone());
    }

    fn select_next(&mut self) {
        let len = self.dashboard.dishes().len();
        if len == 0 {
            return;
        }
        let next = self.list_state.selected().map_or(0, |i| (i + 1) % len);
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        let len = self.dashboard.dishes().len();
        if len == 0 {
            return;
        }
        let prev = self
            .list_state
            .selected()
            .map_or(len - 1, |i| (i + len - 1) % len);
        self.list_state.select(Some(prev));
    }

    /// Keeps the highlight on a real row after the list changes.
    fn clamp_selection(&mut self) {
        let len = self.dashboard.dishes().len();
        match self.list_state.selected() {
            _ if len == 0 => self.list_state.select(None),
            None => self.list_state.select(Some(0)),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            Some(_) => {}
        }
    }
}

fn level_tag(level: ToastType) -> &'static str {
    match level {
        ToastType::Info => "INFO",
        ToastType::Success => "SUCCESS",
        ToastType::Warning => "WARN",
        ToastType::Error => "ERROR",
    }
}
