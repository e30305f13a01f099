use yew::prelude::*;

/// Where a form submission stands.
#[derive(Clone, PartialEq)]
pub enum FormStatus {
    Idle,
    Submitting,
    Success(String),
    Error(String),
}

impl FormStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }
}

#[derive(Properties, PartialEq)]
pub struct FormMessageProps {
    pub status: FormStatus,
}

#[function_component(FormMessage)]
pub fn form_message(props: &FormMessageProps) -> Html {
    match &props.status {
        FormStatus::Error(msg) => html! {
            <p style="color:#f87171; font-size:0.9em; margin:0 0 1em 0; text-align:center;">
                { format!("⚠️ {}", msg) }
            </p>
        },
        FormStatus::Success(msg) => html! {
            <p style="color:#86efac; font-size:0.9em; margin:0 0 1em 0; text-align:center;">
                { format!("✔ {}", msg) }
            </p>
        },
        FormStatus::Idle | FormStatus::Submitting => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub label: AttrValue,
    pub busy_label: AttrValue,
    pub busy: bool,
}

#[function_component(SubmitButton)]
pub fn submit_button(props: &SubmitButtonProps) -> Html {
    let style = format!(
        "width:100%; padding:0.7em 0; font-size:1em; border:none; border-radius:6px; color:white; {}",
        if props.busy {
            "background:#6b7280; cursor:not-allowed;"
        } else {
            "background:#2563eb; cursor:pointer;"
        }
    );
    html! {
        <button type="submit" disabled={props.busy} {style}>
            { if props.busy { &*props.busy_label } else { &*props.label } }
        </button>
    }
}

#[function_component(LoadingNotice)]
pub fn loading_notice() -> Html {
    html! {
        <p style="text-align:center; margin-top:2.5em; color:#4b5563; font-weight:500;">
            { "Loading..." }
        </p>
    }
}

#[derive(Properties, PartialEq)]
pub struct NoticeProps {
    pub message: AttrValue,
}

#[function_component(ErrorNotice)]
pub fn error_notice(props: &NoticeProps) -> Html {
    html! {
        <p style="text-align:center; margin-top:2.5em; color:#ef4444; font-weight:600;">
            { &*props.message }
        </p>
    }
}

#[function_component(EmptyNotice)]
pub fn empty_notice(props: &NoticeProps) -> Html {
    html! {
        <p style="text-align:center; margin:2.5em 0; color:#6b7280;">
            { &*props.message }
        </p>
    }
}

/// Renders an HTML fragment from the backend as markup.
pub fn rich_text(fragment: Option<&str>) -> Html {
    match fragment {
        Some(fragment) => Html::from_html_unchecked(AttrValue::from(fragment.to_string())),
        None => html! {},
    }
}
