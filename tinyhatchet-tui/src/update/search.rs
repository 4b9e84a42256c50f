//! 日志检索更新逻辑

use super::{ignored, Transition};
use crate::backend::Command;
use crate::message::{AppMessage, FormMessage, Outcome};
use crate::model::state::{page_size_for, HomeState, ResultsState, SearchState};
use crate::model::{Screen, Viewport};

pub fn update_form(state: &mut SearchState, viewport: Viewport, msg: AppMessage) -> Transition {
    match msg {
        AppMessage::Form(form) => handle_form(state, form),
        AppMessage::Outcome(outcome) => match outcome {
            Outcome::LogEntries(entries) => {
                let status = format!("Found {} log entries", entries.len());
                let results = ResultsState::new(state.clone(), entries, page_size_for(viewport));
                Transition::goto(Screen::SearchResults(results)).with_status(status)
            }
            Outcome::Failure(message) => {
                state.error = Some(message);
                Transition::stay()
            }
            other => ignored("search", &other),
        },
        AppMessage::GoBack => Transition::goto(Screen::HomeMenu(HomeState::new())),
        _ => Transition::stay(),
    }
}

fn handle_form(state: &mut SearchState, msg: FormMessage) -> Transition {
    match msg {
        FormMessage::NextField => state.focus.next(),
        FormMessage::PrevField => state.focus.prev(),
        FormMessage::Submit if state.on_submit_button() => {
            return match state.validated_query() {
                Some(query) => {
                    log::info!("[search] {query:?}");
                    Transition::run(Command::SearchEntries(query))
                }
                None => Transition::stay(),
            };
        }
        FormMessage::Submit => state.focus.next(),
        edit => {
            for field in state.fields_mut() {
                field.handle(&edit);
            }
            return Transition::stay();
        }
    }
    state.sync_focus();
    Transition::stay()
}

pub fn update_results(state: &mut ResultsState, msg: AppMessage) -> Transition {
    match msg {
        AppMessage::List(list) => {
            state.list.handle(list);
            Transition::stay()
        }
        // Esc 先清除过滤条件，再返回检索表单（保留已输入的条件）
        AppMessage::GoBack => {
            if state.list.has_filter() {
                state.list.clear_filter();
                Transition::stay()
            } else {
                Transition::goto(Screen::SearchForm(state.form.clone()))
            }
        }
        AppMessage::Outcome(outcome) => ignored("results", &outcome),
        _ => Transition::stay(),
    }
}
