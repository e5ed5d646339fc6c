//! Keybinding definitions for the TUI.
//!
//! Keys map differently in the three input modes: browsing, editing a
//! form, and answering the delete confirmation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextView,
    PrevView,
    SwitchView(usize),
    MoveUp,
    MoveDown,
    FocusLeft,
    FocusRight,
    MoveCardLeft,
    MoveCardRight,
    NewItem,
    EditItem,
    DeleteItem,
    GenerateTasks,
    SuggestSubtasks,
    CycleFilter,
    ClearFilters,
    CycleList,
    ToggleTheme,
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Input(char),
    Backspace,
    NextField,
    PrevField,
    Submit,
    Cancel,
    Suggest,
    Generate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    Confirm,
    Cancel,
}

pub fn map_key(event: KeyEvent) -> Option<Action> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('c') => Some(Action::Quit),
            KeyCode::Char('r') => Some(Action::Refresh),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::NextView),
        KeyCode::BackTab => Some(Action::PrevView),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Left => Some(Action::FocusLeft),
        KeyCode::Right => Some(Action::FocusRight),
        KeyCode::Char('h') => Some(Action::MoveCardLeft),
        KeyCode::Char('l') => Some(Action::MoveCardRight),
        KeyCode::Char('n') => Some(Action::NewItem),
        KeyCode::Char('e') | KeyCode::Enter => Some(Action::EditItem),
        KeyCode::Char('d') => Some(Action::DeleteItem),
        KeyCode::Char('g') => Some(Action::GenerateTasks),
        KeyCode::Char('s') => Some(Action::SuggestSubtasks),
        KeyCode::Char('f') => Some(Action::CycleFilter),
        KeyCode::Char('c') => Some(Action::ClearFilters),
        KeyCode::Char('v') => Some(Action::CycleList),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char(c @ '1'..='5') => Some(Action::SwitchView(c as usize - '1' as usize)),
        _ => None,
    }
}

pub fn map_form_key(event: KeyEvent) -> Option<FormAction> {
    let KeyEvent { code, modifiers, .. } = event;

    if modifiers.contains(KeyModifiers::CONTROL) {
        return match code {
            KeyCode::Char('s') => Some(FormAction::Suggest),
            KeyCode::Char('g') => Some(FormAction::Generate),
            KeyCode::Char('c') => Some(FormAction::Cancel),
            _ => None,
        };
    }

    match code {
        KeyCode::Enter => Some(FormAction::Submit),
        KeyCode::Esc => Some(FormAction::Cancel),
        KeyCode::Tab | KeyCode::Down => Some(FormAction::NextField),
        KeyCode::BackTab | KeyCode::Up => Some(FormAction::PrevField),
        KeyCode::Backspace => Some(FormAction::Backspace),
        KeyCode::Char(c) => Some(FormAction::Input(c)),
        _ => None,
    }
}

pub fn map_confirm_key(event: KeyEvent) -> Option<ConfirmAction> {
    match event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Some(ConfirmAction::Confirm),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(ConfirmAction::Cancel),
        _ => None,
    }
}
