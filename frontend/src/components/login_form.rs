use std::cell::RefCell;
use std::ops::Deref;
use std::rc::Rc;

use chrono::Local;
use gloo_timers::callback::Timeout;
use shared::{FormAction, FormConfig};
use yew::prelude::*;

use crate::components::state_display::StateDisplay;
use crate::components::text_field::TextField;

const SUCCESS_MESSAGE: &str = "✅ Login successful! Check the console for details.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState(shared::LoginForm);

impl Deref for FormState {
    type Target = shared::LoginForm;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for FormState {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: FormAction) -> Rc<Self> {
        let mut form = self.0.clone();
        form.apply(action);
        Rc::new(Self(form))
    }
}

/// Schedules the one-shot reset. Not cancelable; `mounted` turns it into a
/// no-op once the form is gone.
fn schedule_reset(
    dispatcher: UseReducerDispatcher<FormState>,
    mounted: Rc<RefCell<bool>>,
    delay_ms: u32,
) {
    Timeout::new(delay_ms, move || {
        if *mounted.borrow() {
            dispatcher.dispatch(FormAction::ResetAfterSuccess);
        } else {
            log::debug!("Skipping form reset: component unmounted");
        }
    })
    .forget();
}

#[function_component(LoginForm)]
pub fn login_form() -> Html {
    let config = FormConfig::default();
    let form = use_reducer(FormState::default);
    let mounted = use_mut_ref(|| true);

    {
        let mounted = mounted.clone();
        use_effect_with((), move |_| {
            move || {
                *mounted.borrow_mut() = false;
            }
        });
    }

    let on_username_change = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.dispatch(FormAction::EditUsername(value));
        })
    };

    let on_password_change = {
        let form = form.clone();
        Callback::from(move |value: String| {
            form.dispatch(FormAction::EditPassword(value));
        })
    };

    let on_submit = {
        let form = form.clone();
        let mounted = mounted.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let at = Local::now();
            let outcome = form.attempt(at);
            form.dispatch(FormAction::Submit(at));

            match outcome {
                Ok(attempt) => {
                    for line in attempt.console_lines() {
                        log::info!("{}", line);
                    }
                    schedule_reset(
                        form.dispatcher(),
                        mounted.clone(),
                        config.reset_delay_millis(),
                    );
                }
                Err(err) => {
                    log::error!("{}", err.console_line());
                }
            }
        })
    };

    html! {
        <form class="login-form" onsubmit={on_submit}>
            <h2 class="form-title">{ "Login" }</h2>

            <TextField
                id="username"
                label="Username:"
                value={form.username.clone()}
                onchange={on_username_change}
                placeholder="Enter your username"
                aria_label="Username input"
            />

            <TextField
                id="password"
                label="Password:"
                password=true
                value={form.password.clone()}
                onchange={on_password_change}
                placeholder="Enter your password"
                aria_label="Password input"
            />

            if let Some(err) = form.error.clone() {
                <div class="error-message" role="alert">{ err }</div>
            }

            if form.is_submitted {
                <div class="success-message" role="status">{ SUCCESS_MESSAGE }</div>
            }

            <button type="submit" class="submit-button">{ "Login" }</button>

            <StateDisplay
                username={form.username.clone()}
                password={form.password.clone()}
            />
        </form>
    }
}
