use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::site::forms::FormField;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Tel,
    /// A dropdown whose first entry is an empty "Select ..." prompt.
    Select(&'static [&'static str]),
    TextArea { rows: u32 },
}

#[derive(Properties, PartialEq)]
pub struct FieldProps<F: FormField + PartialEq + 'static> {
    pub field: F,
    pub value: AttrValue,
    #[prop_or_default]
    pub error: Option<String>,
    #[prop_or_default]
    pub kind: InputKind,
    #[prop_or_default]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub style: AttrValue,
    pub onedit: Callback<(F, String)>,
}

/// Labelled input bound to one form field, showing its error underneath.
#[function_component(Field)]
pub fn field<F>(props: &FieldProps<F>) -> Html
where
    F: FormField + PartialEq + 'static,
{
    let field = props.field;
    let id = field.name();
    let class = classes!("input", props.error.is_some().then(|| "input-error"));

    let control = match props.kind {
        InputKind::Select(options) => {
            let onchange = {
                let onedit = props.onedit.clone();
                Callback::from(move |e: Event| {
                    let select: HtmlSelectElement = e.target_unchecked_into();
                    onedit.emit((field, select.value()));
                })
            };
            html! {
                <select {id} name={id} {class} {onchange}>
                    <option value="" selected={props.value.is_empty()}>{format!("Select {}", field.label().to_lowercase())}</option>
                    { for options.iter().map(|option| html! {
                        <option value={*option} selected={props.value.as_str() == *option}>{*option}</option>
                    }) }
                </select>
            }
        }
        InputKind::TextArea { rows } => {
            let oninput = {
                let onedit = props.onedit.clone();
                Callback::from(move |e: InputEvent| {
                    let area: HtmlTextAreaElement = e.target_unchecked_into();
                    onedit.emit((field, area.value()));
                })
            };
            html! {
                <textarea
                    {id}
                    name={id}
                    rows={rows.to_string()}
                    {class}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                />
            }
        }
        kind => {
            let input_type = match kind {
                InputKind::Email => "email",
                InputKind::Tel => "tel",
                _ => "text",
            };
            let oninput = {
                let onedit = props.onedit.clone();
                Callback::from(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    onedit.emit((field, input.value()));
                })
            };
            html! {
                <input
                    type={input_type}
                    {id}
                    name={id}
                    {class}
                    value={props.value.clone()}
                    placeholder={props.placeholder.clone()}
                    {oninput}
                />
            }
        }
    };

    html! {
        <div class="form-control" style={props.style.clone()}>
            <label for={id}>
                {field.label()}
                if field.is_required() {
                    <span class="required">{" *"}</span>
                }
            </label>
            {control}
            if let Some(error) = props.error.clone() {
                <p class="field-error">{error}</p>
            }
        </div>
    }
}

/// Styles shared by every form built from [`Field`].
pub const FORM_STYLES: &str = r#"
.form-control { margin-bottom: 1rem; }
.form-control label { display: block; color: #374151; font-weight: 500; margin-bottom: 0.25rem; }
.form-control .required { color: #ef4444; }
.input {
    width: 100%;
    padding: 0.75rem 1rem;
    border: 1px solid #d1d5db;
    border-radius: 0.375rem;
    font: inherit;
    background: #ffffff;
    transition: border-color 0.2s ease, box-shadow 0.2s ease;
}
.input:focus { outline: none; border-color: #1e3a8a; box-shadow: 0 0 0 3px rgba(30, 58, 138, 0.15); }
.input-error { border-color: #ef4444; }
.field-error { color: #ef4444; font-size: 0.875rem; margin: 0.25rem 0 0; }
.form-row { display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 0 1rem; }
"#;
