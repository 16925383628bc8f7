use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextFieldProps {
    pub id: AttrValue,
    pub label: AttrValue,
    pub value: AttrValue,
    pub onchange: Callback<String>,
    /// Render as a masked password input.
    #[prop_or(false)]
    pub password: bool,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
}

#[function_component(TextField)]
pub fn text_field(props: &TextFieldProps) -> Html {
    let on_input = {
        let onchange = props.onchange.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            onchange.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()} class="form-label">{ &*props.label }</label>
            <input
                type={if props.password { "password" } else { "text" }}
                id={props.id.clone()}
                class="form-input"
                value={props.value.clone()}
                oninput={on_input}
                placeholder={props.placeholder.clone()}
                aria-label={props.aria_label.clone()}
            />
        </div>
    }
}
