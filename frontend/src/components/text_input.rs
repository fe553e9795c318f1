use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TextInputProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    pub value: AttrValue,
    /// Inline error; also marks the input invalid
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    pub on_input: Callback<String>,
}

/// Labelled text input with its inline error line
#[function_component(TextInput)]
pub fn text_input(props: &TextInputProps) -> Html {
    let oninput = {
        let on_input = props.on_input.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit(input.value());
        })
    };

    html! {
        <div class="form-group">
            <label for={props.id.clone()}>
                {props.label.clone()}
                if props.required { <span class="required">{" *"}</span> }
            </label>
            <input
                type={props.input_type.clone()}
                id={props.id.clone()}
                placeholder={props.placeholder.clone()}
                class={classes!(props.error.is_some().then_some("invalid"))}
                value={props.value.clone()}
                {oninput}
                disabled={props.disabled}
            />
            if let Some(message) = props.error.clone() {
                <p class="field-error">{message}</p>
            }
        </div>
    }
}
