//! 账号确认页面更新逻辑

use tinyhatchet_client::MESSAGE_VERIFICATION_REQUIRED;

use super::{ignored, Transition};
use crate::backend::Command;
use crate::message::{AppMessage, FormMessage, Outcome};
use crate::model::state::{ConfirmState, HomeState, LoginState};
use crate::model::{Screen, Session};

pub const MISSING_CODE: &str = "please enter the confirmation code";

pub fn update(state: &mut ConfirmState, session: &Session, msg: AppMessage) -> Transition {
    match msg {
        AppMessage::Form(FormMessage::Submit) => {
            let code = state.code.value().trim().to_string();
            if code.is_empty() {
                state.error = Some(MISSING_CODE.to_string());
                return Transition::stay();
            }
            state.error = None;
            Transition::run(Command::Confirm { code })
        }
        AppMessage::Form(edit) => {
            state.code.handle(&edit);
            Transition::stay()
        }
        AppMessage::Outcome(outcome) => match outcome {
            Outcome::Success => Transition::goto(Screen::HomeMenu(HomeState::new()))
                .with_status("Account confirmed"),
            Outcome::VerificationRequired => {
                state.error = Some(MESSAGE_VERIFICATION_REQUIRED.to_string());
                Transition::stay()
            }
            Outcome::ValidationErrors(errors) => {
                state.apply_errors(errors);
                Transition::stay()
            }
            Outcome::Failure(message) => {
                state.error = Some(message);
                Transition::stay()
            }
            other => ignored("confirm", &other),
        },
        AppMessage::GoBack => Transition::goto(Screen::LoginForm(LoginState::new(session))),
        _ => Transition::stay(),
    }
}
