//! Application state and view state definitions.
//!
//! `App` is the single writer of the cache. Key handlers start work and
//! return at once; anything that waits on the network runs on a spawned
//! task and reports back through the event channel.

use crate::config::TuiConfig;
use crate::coordinator::{self, MutationCoordinator, PendingDelete, PendingMutation, ASSISTANT_UNAVAILABLE};
use crate::events::TuiEvent;
use crate::keys::{map_confirm_key, map_form_key, map_key, Action, ConfirmAction, FormAction};
use crate::nav::View;
use crate::notifications::{Notification, Notifications};
use crate::persistence::PersistedState;
use crate::theme::Theme;
use crossterm::event::KeyEvent;
use std::sync::Arc;
use taskboard_core::board::cycle_option;
use taskboard_core::dashboard::active_projects;
use taskboard_core::{
    BoardColumn, BoardError, BoardView, Date, DashboardList, FilterOptions, FormFields, LlmError,
    MemberForm, MutationError, Project, ProjectForm, Snapshot, StoreError, TableFilter, Task,
    TaskForm, TeamMember,
};
use taskboard_llm::TaskAssistant;
use taskboard_store::{LoadResult, RemoteStore};
use tokio::sync::mpsc;
use tokio::time::Instant;
use tracing::{debug, warn};

pub struct App {
    pub config: TuiConfig,
    pub theme: Theme,
    pub active_view: View,
    pub coordinator: MutationCoordinator,
    pub assistant: Option<TaskAssistant>,
    pub notifications: Notifications,

    pub dashboard: DashboardViewState,
    pub board: BoardViewState,
    pub table: TableViewState,
    pub projects: ListViewState,
    pub team: ListViewState,

    pub form: Option<FormState>,
    pub pending_delete: Option<PendingDelete>,

    pub loading: bool,
    pub generating: bool,
    pub suggesting: bool,

    events: mpsc::Sender<TuiEvent>,
}

impl App {
    pub fn new(
        config: TuiConfig,
        store: Arc<dyn RemoteStore>,
        assistant: Option<TaskAssistant>,
        events: mpsc::Sender<TuiEvent>,
    ) -> Self {
        let coordinator = MutationCoordinator::new(store, config.reload_delay());
        let notifications = Notifications::new(config.notification_ttl());
        Self {
            config,
            theme: Theme::light(),
            active_view: View::Dashboard,
            coordinator,
            assistant,
            notifications,
            dashboard: DashboardViewState::default(),
            board: BoardViewState::default(),
            table: TableViewState::default(),
            projects: ListViewState::default(),
            team: ListViewState::default(),
            form: None,
            pending_delete: None,
            loading: false,
            generating: false,
            suggesting: false,
            events,
        }
    }

    pub fn apply_persisted(&mut self, state: PersistedState) {
        self.theme = Theme::for_mode(state.dark_mode);
        self.active_view = state.active_view;
    }

    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            dark_mode: self.theme.dark,
            active_view: self.active_view,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        self.coordinator.snapshot()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn today() -> Date {
        chrono::Utc::now().date_naive()
    }

    // ------------------------------------------------------------------------
    // Event dispatch
    // ------------------------------------------------------------------------

    /// Apply one event. Returns true when the app should exit.
    pub fn handle_event(&mut self, event: TuiEvent) -> bool {
        match event {
            TuiEvent::Input(key) => return self.handle_key(key),
            TuiEvent::Tick => self.on_tick(Instant::now()),
            TuiEvent::Resize { .. } => {}
            TuiEvent::LoadFinished(result) => self.on_load_finished(result),
            TuiEvent::MutationFinished { pending, outcome } => {
                self.on_mutation_finished(pending, outcome)
            }
            TuiEvent::GenerationFinished(outcome) => {
                self.generating = false;
                let report = self.coordinator.complete_generation(outcome);
                self.notify(report.notification);
            }
            TuiEvent::SuggestionFinished { task_name, result } => {
                self.on_suggestion_finished(&task_name, result)
            }
        }
        false
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.pending_delete.is_some() {
            match map_confirm_key(key) {
                Some(ConfirmAction::Confirm) => self.confirm_delete(),
                Some(ConfirmAction::Cancel) => self.cancel_delete(),
                None => {}
            }
            return false;
        }
        if self.form.is_some() {
            if let Some(action) = map_form_key(key) {
                self.handle_form_action(action);
            }
            return false;
        }
        match map_key(key) {
            Some(action) => self.handle_action(action),
            None => false,
        }
    }

    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::Quit => return true,
            Action::NextView => self.active_view = self.active_view.next(),
            Action::PrevView => self.active_view = self.active_view.previous(),
            Action::SwitchView(index) => {
                if let Some(view) = View::from_index(index) {
                    self.active_view = view;
                }
            }
            Action::MoveDown => self.select_next(),
            Action::MoveUp => self.select_previous(),
            Action::FocusLeft => self.focus_left(),
            Action::FocusRight => self.focus_right(),
            Action::MoveCardLeft => self.move_selected_card(self.board.column.left()),
            Action::MoveCardRight => self.move_selected_card(self.board.column.right()),
            Action::NewItem => self.open_new_form(),
            Action::EditItem => self.open_edit_form(),
            Action::DeleteItem => self.request_delete(),
            Action::GenerateTasks => {
                if let Some(name) = self.selected_project_name() {
                    self.start_generation(name);
                }
            }
            Action::SuggestSubtasks => {
                if self.selected_task_no().is_some() {
                    self.open_edit_form();
                    self.suggest_for_form();
                }
            }
            Action::CycleFilter => self.cycle_filter(),
            Action::ClearFilters => {
                self.table.filter.clear();
                self.table.selected = 0;
            }
            Action::CycleList => {
                self.dashboard.list = self.dashboard.list.next();
                self.dashboard.selected = 0;
            }
            Action::ToggleTheme => self.theme = self.theme.toggled(),
            Action::Refresh => self.start_load(),
        }
        false
    }

    pub fn on_tick(&mut self, now: Instant) {
        self.notifications.expire(now);
        if self.coordinator.take_due_reload(now) {
            self.start_load();
        }
    }

    // ------------------------------------------------------------------------
    // Loads
    // ------------------------------------------------------------------------

    pub fn start_load(&mut self) {
        let ticket = self.coordinator.begin_load();
        let store = self.coordinator.store();
        let sender = self.events.clone();
        self.loading = true;
        tokio::spawn(async move {
            let result = LoadResult::fetch(store.as_ref(), ticket).await;
            let _ = sender.send(TuiEvent::LoadFinished(result)).await;
        });
    }

    pub fn on_load_finished(&mut self, result: LoadResult) {
        let (report, notifications) = self.coordinator.apply_load(result);
        if report.applied {
            self.loading = false;
        }
        for notification in notifications {
            self.notify(notification);
        }
        self.clamp_selections();
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    fn spawn_mutation(&mut self, pending: PendingMutation) {
        let store = self.coordinator.store();
        let sender = self.events.clone();
        tokio::spawn(async move {
            let outcome = MutationCoordinator::submit(store.as_ref(), &pending).await;
            let _ = sender
                .send(TuiEvent::MutationFinished { pending, outcome })
                .await;
        });
    }

    pub fn on_mutation_finished(
        &mut self,
        pending: PendingMutation,
        outcome: Result<serde_json::Value, StoreError>,
    ) {
        let report = self.coordinator.complete(pending, outcome);
        if let Some(notification) = report.notification {
            self.notify(notification);
        }
        self.clamp_selections();
    }

    fn move_selected_card(&mut self, target: Option<BoardColumn>) {
        if self.active_view != View::Board {
            return;
        }
        let (Some(task_no), Some(target)) = (self.selected_task_no(), target) else {
            return;
        };
        match self.coordinator.begin_move(&task_no, target) {
            Ok(Some(pending)) => {
                self.board.column = target;
                let board = BoardView::build(&self.coordinator.snapshot().tasks);
                self.board.row = board
                    .position_of(&task_no)
                    .map(|(_, row)| row)
                    .unwrap_or(0);
                self.spawn_mutation(pending);
            }
            Ok(None) => {}
            Err(err) => self.notify(Notification::error(err.to_string())),
        }
    }

    fn request_delete(&mut self) {
        let requested = match self.active_view {
            View::Projects => self
                .selected_project_name()
                .map(|key| self.coordinator.request_delete::<Project>(&key)),
            View::Team => self
                .selected_member_name()
                .map(|key| self.coordinator.request_delete::<TeamMember>(&key)),
            _ => self
                .selected_task_no()
                .map(|key| self.coordinator.request_delete::<Task>(&key)),
        };
        match requested {
            Some(Ok(token)) => self.pending_delete = Some(token),
            Some(Err(err)) => self.notify(Notification::error(err.to_string())),
            None => {}
        }
    }

    fn confirm_delete(&mut self) {
        let Some(token) = self.pending_delete.take() else {
            return;
        };
        match self.coordinator.confirm_delete(token) {
            Ok(pending) => self.spawn_mutation(pending),
            Err(err) => self.notify(Notification::error(err.to_string())),
        }
    }

    fn cancel_delete(&mut self) {
        if let Some(token) = self.pending_delete.take() {
            self.coordinator.cancel_delete(token);
        }
    }

    // ------------------------------------------------------------------------
    // Forms
    // ------------------------------------------------------------------------

    fn open_new_form(&mut self) {
        let form = match self.active_view {
            View::Projects => EditForm::Project(ProjectForm::blank()),
            View::Team => EditForm::Member(MemberForm::default()),
            _ => EditForm::Task(TaskForm::blank()),
        };
        self.form = Some(FormState::create(form));
    }

    fn open_edit_form(&mut self) {
        let snapshot = self.coordinator.snapshot();
        let opened = match self.active_view {
            View::Projects => self.selected_project_name().and_then(|key| {
                snapshot
                    .project(&key)
                    .map(|p| FormState::edit(key.clone(), EditForm::Project(ProjectForm::from_project(p))))
            }),
            View::Team => self.selected_member_name().and_then(|key| {
                snapshot
                    .member(&key)
                    .map(|m| FormState::edit(key.clone(), EditForm::Member(MemberForm::from_member(m))))
            }),
            View::Dashboard if self.dashboard.list == DashboardList::ActiveProjects => {
                self.selected_project_name().and_then(|key| {
                    snapshot.project(&key).map(|p| {
                        FormState::edit(key.clone(), EditForm::Project(ProjectForm::from_project(p)))
                    })
                })
            }
            _ => self.selected_task_no().and_then(|key| {
                snapshot
                    .task(&key)
                    .map(|t| FormState::edit(key.clone(), EditForm::Task(TaskForm::from_task(t))))
            }),
        };
        if opened.is_some() {
            self.form = opened;
        }
    }

    fn handle_form_action(&mut self, action: FormAction) {
        match action {
            FormAction::Submit => self.submit_form(),
            FormAction::Cancel => self.form = None,
            FormAction::Suggest => self.suggest_for_form(),
            FormAction::Generate => {
                if let Some(FormState {
                    form: EditForm::Project(project),
                    ..
                }) = &self.form
                {
                    let name = project.project_name.clone();
                    self.start_generation(name);
                }
            }
            FormAction::Input(c) => {
                if let Some(form) = self.form.as_mut() {
                    form.input(c);
                }
            }
            FormAction::Backspace => {
                if let Some(form) = self.form.as_mut() {
                    form.backspace();
                }
            }
            FormAction::NextField => {
                if let Some(form) = self.form.as_mut() {
                    form.next_field();
                }
            }
            FormAction::PrevField => {
                if let Some(form) = self.form.as_mut() {
                    form.prev_field();
                }
            }
        }
    }

    fn submit_form(&mut self) {
        let Some(state) = self.form.take() else {
            return;
        };
        let begun = match (&state.form, state.editing.as_deref()) {
            (EditForm::Task(form), None) => self
                .coordinator
                .begin_create_task(form, coordinator::epoch_millis()),
            (EditForm::Task(form), Some(key)) => self.coordinator.begin_update_task(key, form),
            (EditForm::Project(form), None) => self.coordinator.begin_create_project(form),
            (EditForm::Project(form), Some(key)) => self.coordinator.begin_update_project(key, form),
            (EditForm::Member(form), None) => self.coordinator.begin_create_member(form),
            (EditForm::Member(form), Some(key)) => self.coordinator.begin_update_member(key, form),
        };
        match begun {
            Ok(pending) => self.spawn_mutation(pending),
            Err(err) => {
                self.notify(Notification::error(err.to_string()));
                if matches!(err, MutationError::Validation(_)) {
                    self.form = Some(state);
                }
            }
        }
    }

    // ------------------------------------------------------------------------
    // Assistant
    // ------------------------------------------------------------------------

    fn suggest_for_form(&mut self) {
        let Some(FormState {
            form: EditForm::Task(task),
            ..
        }) = &self.form
        else {
            return;
        };
        let task_name = task.task_name.clone();
        self.start_suggestion(task_name);
    }

    pub fn start_suggestion(&mut self, task_name: String) {
        if self.suggesting {
            debug!("suggestion already running");
            return;
        }
        if task_name.trim().is_empty() {
            self.notify(Notification::warning("Please enter a task name first."));
            return;
        }
        let Some(assistant) = self.assistant.clone() else {
            self.notify(Notification::error(ASSISTANT_UNAVAILABLE));
            return;
        };
        let sender = self.events.clone();
        self.suggesting = true;
        tokio::spawn(async move {
            let result = coordinator::suggest_subtasks(&assistant, &task_name).await;
            let _ = sender
                .send(TuiEvent::SuggestionFinished { task_name, result })
                .await;
        });
    }

    /// Replace the open task form's notes with the suggestion, if the form
    /// still shows the task it was asked for.
    pub fn on_suggestion_finished(&mut self, task_name: &str, result: Result<String, BoardError>) {
        self.suggesting = false;
        match result {
            Ok(text) => match &mut self.form {
                Some(FormState {
                    form: EditForm::Task(task),
                    ..
                }) if task.task_name.trim() == task_name.trim() => task.notes = text,
                _ => debug!(task_name, "form closed before suggestion arrived"),
            },
            Err(BoardError::Validation(_)) => {
                self.notify(Notification::warning("Please enter a task name first."))
            }
            Err(BoardError::Llm(LlmError::ProviderNotConfigured)) => {
                self.notify(Notification::error(ASSISTANT_UNAVAILABLE))
            }
            Err(err) => {
                warn!(task_name, error = %err, "suggestion failed");
                self.notify(Notification::error(
                    "Error generating suggestions. Please try again.",
                ));
            }
        }
    }

    pub fn start_generation(&mut self, project_name: String) {
        if self.generating {
            debug!("generation already running");
            return;
        }
        if project_name.trim().is_empty() {
            self.notify(Notification::warning("Please enter a project name first."));
            return;
        }
        let Some(assistant) = self.assistant.clone() else {
            self.notify(Notification::error(ASSISTANT_UNAVAILABLE));
            return;
        };
        let store = self.coordinator.store();
        let members = self.coordinator.member_names();
        let sender = self.events.clone();
        let millis = coordinator::epoch_millis();
        self.generating = true;
        self.notify(Notification::info(format!(
            "Generating tasks for \"{}\"...",
            project_name.trim()
        )));
        tokio::spawn(async move {
            let outcome = coordinator::run_generation(
                store.as_ref(),
                &assistant,
                project_name.trim().to_string(),
                members,
                millis,
            )
            .await;
            let _ = sender.send(TuiEvent::GenerationFinished(outcome)).await;
        });
    }

    // ------------------------------------------------------------------------
    // Selection
    // ------------------------------------------------------------------------

    /// Tasks listed by the dashboard's lower panel.
    pub fn dashboard_tasks(&self) -> Vec<&Task> {
        self.dashboard.list.tasks(self.snapshot(), Self::today())
    }

    pub fn table_rows(&self) -> Vec<&Task> {
        self.table.filter.apply(&self.snapshot().tasks)
    }

    fn selection_len(&self) -> usize {
        let snapshot = self.snapshot();
        match self.active_view {
            View::Dashboard if self.dashboard.list == DashboardList::ActiveProjects => {
                active_projects(&snapshot.projects).len()
            }
            View::Dashboard => self.dashboard_tasks().len(),
            View::Board => BoardView::build(&snapshot.tasks)
                .column(self.board.column)
                .cards
                .len(),
            View::Table => self.table_rows().len(),
            View::Projects => snapshot.projects.len(),
            View::Team => snapshot.members.len(),
        }
    }

    fn selection_mut(&mut self) -> &mut usize {
        match self.active_view {
            View::Dashboard => &mut self.dashboard.selected,
            View::Board => &mut self.board.row,
            View::Table => &mut self.table.selected,
            View::Projects => &mut self.projects.selected,
            View::Team => &mut self.team.selected,
        }
    }

    pub fn select_next(&mut self) {
        let len = self.selection_len();
        let selected = self.selection_mut();
        *selected = if len == 0 { 0 } else { (*selected + 1) % len };
    }

    pub fn select_previous(&mut self) {
        let len = self.selection_len();
        let selected = self.selection_mut();
        *selected = match (len, *selected) {
            (0, _) => 0,
            (len, 0) => len - 1,
            (_, index) => index - 1,
        };
    }

    fn focus_left(&mut self) {
        match self.active_view {
            View::Board => {
                if let Some(column) = self.board.column.left() {
                    self.board.column = column;
                    self.clamp_selections();
                }
            }
            View::Table => self.table.focus = self.table.focus.previous(),
            _ => {}
        }
    }

    fn focus_right(&mut self) {
        match self.active_view {
            View::Board => {
                if let Some(column) = self.board.column.right() {
                    self.board.column = column;
                    self.clamp_selections();
                }
            }
            View::Table => self.table.focus = self.table.focus.next(),
            _ => {}
        }
    }

    fn cycle_filter(&mut self) {
        if self.active_view != View::Table {
            return;
        }
        let options = FilterOptions::collect(&self.coordinator.snapshot().tasks);
        let filter = &mut self.table.filter;
        match self.table.focus {
            FilterField::Project => filter.project = cycle_option(&filter.project, &options.projects),
            FilterField::Priority => {
                filter.priority = cycle_option(&filter.priority, &options.priorities)
            }
            FilterField::Owner => filter.owner = cycle_option(&filter.owner, &options.owners),
        }
        self.table.selected = 0;
    }

    fn clamp_selections(&mut self) {
        let snapshot = self.coordinator.snapshot();
        let board_len = BoardView::build(&snapshot.tasks)
            .column(self.board.column)
            .cards
            .len();
        let dashboard_len = match self.dashboard.list {
            DashboardList::ActiveProjects => active_projects(&snapshot.projects).len(),
            list => list.tasks(snapshot, Self::today()).len(),
        };
        let table_len = self.table.filter.apply(&snapshot.tasks).len();
        let projects_len = snapshot.projects.len();
        let team_len = snapshot.members.len();

        clamp(&mut self.board.row, board_len);
        clamp(&mut self.dashboard.selected, dashboard_len);
        clamp(&mut self.table.selected, table_len);
        clamp(&mut self.projects.selected, projects_len);
        clamp(&mut self.team.selected, team_len);
    }

    pub fn selected_task_no(&self) -> Option<String> {
        let snapshot = self.snapshot();
        let task = match self.active_view {
            View::Dashboard => self.dashboard_tasks().get(self.dashboard.selected).copied(),
            View::Board => BoardView::build(&snapshot.tasks)
                .column(self.board.column)
                .cards
                .get(self.board.row)
                .copied(),
            View::Table => self.table_rows().get(self.table.selected).copied(),
            View::Projects | View::Team => None,
        };
        task.map(|t| t.task_no.clone())
    }

    pub fn selected_project_name(&self) -> Option<String> {
        let snapshot = self.snapshot();
        let project = match self.active_view {
            View::Projects => snapshot.projects.get(self.projects.selected),
            View::Dashboard if self.dashboard.list == DashboardList::ActiveProjects => {
                active_projects(&snapshot.projects)
                    .get(self.dashboard.selected)
                    .copied()
            }
            _ => None,
        };
        project.map(|p| p.project_name.clone())
    }

    pub fn selected_member_name(&self) -> Option<String> {
        match self.active_view {
            View::Team => self
                .snapshot()
                .members
                .get(self.team.selected)
                .map(|m| m.full_name.clone()),
            _ => None,
        }
    }
}

fn clamp(selected: &mut usize, len: usize) {
    if *selected >= len {
        *selected = len.saturating_sub(1);
    }
}

// ============================================================================
// FORMS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditForm {
    Task(TaskForm),
    Project(ProjectForm),
    Member(MemberForm),
}

impl EditForm {
    pub fn fields(&self) -> &dyn FormFields {
        match self {
            EditForm::Task(form) => form,
            EditForm::Project(form) => form,
            EditForm::Member(form) => form,
        }
    }

    pub fn fields_mut(&mut self) -> &mut dyn FormFields {
        match self {
            EditForm::Task(form) => form,
            EditForm::Project(form) => form,
            EditForm::Member(form) => form,
        }
    }

    pub fn noun(&self) -> &'static str {
        match self {
            EditForm::Task(_) => "Task",
            EditForm::Project(_) => "Project",
            EditForm::Member(_) => "Team Member",
        }
    }
}

/// The open form and the record it edits (`None` for a new record).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub form: EditForm,
    pub editing: Option<String>,
    pub field: usize,
}

impl FormState {
    pub fn create(form: EditForm) -> Self {
        Self {
            form,
            editing: None,
            field: 0,
        }
    }

    pub fn edit(key: String, form: EditForm) -> Self {
        Self {
            form,
            editing: Some(key),
            field: 0,
        }
    }

    pub fn title(&self) -> String {
        match self.editing {
            Some(_) => format!("Edit {}", self.form.noun()),
            None => format!("Add New {}", self.form.noun()),
        }
    }

    pub fn next_field(&mut self) {
        let len = self.form.fields().len();
        if len > 0 {
            self.field = (self.field + 1) % len;
        }
    }

    pub fn prev_field(&mut self) {
        let len = self.form.fields().len();
        if len > 0 {
            self.field = (self.field + len - 1) % len;
        }
    }

    /// The key column (field 0 of every form) is read-only once the record
    /// exists.
    pub fn is_locked(&self, field: usize) -> bool {
        self.editing.is_some() && field == 0
    }

    pub fn input(&mut self, c: char) {
        if self.is_locked(self.field) {
            return;
        }
        if let Some(value) = self.form.fields_mut().value_mut(self.field) {
            value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if self.is_locked(self.field) {
            return;
        }
        if let Some(value) = self.form.fields_mut().value_mut(self.field) {
            value.pop();
        }
    }
}

// ============================================================================
// VIEW STATE DEFINITIONS
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct DashboardViewState {
    pub list: DashboardList,
    pub selected: usize,
}

#[derive(Debug, Clone)]
pub struct BoardViewState {
    pub column: BoardColumn,
    pub row: usize,
}

impl Default for BoardViewState {
    fn default() -> Self {
        Self {
            column: BoardColumn::Todo,
            row: 0,
        }
    }
}

/// Which table filter `f` cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterField {
    #[default]
    Project,
    Priority,
    Owner,
}

impl FilterField {
    pub const ALL: [FilterField; 3] = [FilterField::Project, FilterField::Priority, FilterField::Owner];

    pub fn label(&self) -> &'static str {
        match self {
            FilterField::Project => "Project",
            FilterField::Priority => "Priority",
            FilterField::Owner => "Owner",
        }
    }

    pub fn next(&self) -> FilterField {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn previous(&self) -> FilterField {
        let index = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(index + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableViewState {
    pub filter: TableFilter,
    pub focus: FilterField,
    pub selected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ListViewState {
    pub selected: usize,
}
