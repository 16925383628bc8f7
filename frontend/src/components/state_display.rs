use shared::{display_username, mask_password};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StateDisplayProps {
    pub username: AttrValue,
    pub password: AttrValue,
}

/// Live view of the form state. The password is only ever shown masked.
#[function_component(StateDisplay)]
pub fn state_display(props: &StateDisplayProps) -> Html {
    html! {
        <div class="state-display">
            <h3>{ "Current State:" }</h3>
            <p>
                <strong>{ "Username:" }</strong>
                { " " }{ display_username(&props.username) }
            </p>
            <p>
                <strong>{ "Password:" }</strong>
                { " " }{ mask_password(&props.password) }
            </p>
        </div>
    }
}
