use yew::prelude::*;

use crate::components::login_form::LoginForm;

const STEPS: &[&str] = &[
    "Enter a username in the input field",
    "Enter a password in the input field",
    "Click the \"Login\" button",
    "Check the browser console (F12) for output",
    "Open DevTools to see login attempts logged",
];

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <div class="app-container">
            <div class="app-wrapper">
                <h1 class="app-title">{ "Login Form Demo" }</h1>
                <p class="app-subtitle">{ "Learn Yew Hooks for Form State Management" }</p>
                <LoginForm />
                <div class="info-box">
                    <h2>{ "How to Use:" }</h2>
                    <ol>
                        { for STEPS.iter().map(|step| html! { <li>{ *step }</li> }) }
                    </ol>
                </div>
            </div>
        </div>
    }
}
