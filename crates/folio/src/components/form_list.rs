//! Portfolio metadata form.
//!
//! Every keystroke goes through [`FormState::set_field`], which revalidates
//! that one field. A field that was edited and fails validation gets the red
//! border; Submit stays disabled until the whole form is valid.

use dioxus::logger::tracing::{error, info};
use dioxus::prelude::*;
use folio_core::form::FormState;
use folio_core::{Field, PortfolioSubmission, Range};

use crate::error::AppError;
use crate::services::services;
use crate::utils::SignalExt;

/// Where the verification code request stands.
#[derive(Debug, Clone, PartialEq, Eq)]
enum CodeRequest {
    Idle,
    Sending,
    Sent(String),
    Failed,
}

#[component]
pub fn FormList(
    file_key: String,
    busy: bool,
    on_submit: EventHandler<PortfolioSubmission>,
) -> Element {
    let mut form = use_signal(FormState::new);
    let mut code_request = use_signal(|| CodeRequest::Idle);

    let send_code = move |_| {
        let email = form.read().value(Field::Email).to_string();
        code_request.set(CodeRequest::Sending);

        spawn(async move {
            match request_code(&email).await {
                Ok(()) => {
                    info!("Verification code requested for {email}");
                    code_request.set(CodeRequest::Sent(email));
                }
                Err(e) => {
                    error!("Verification code request failed: {e}");
                    code_request.set(CodeRequest::Failed);
                }
            }
        });
    };

    let submit = move |_| {
        if let Some(submission) = form.read().submission(&file_key) {
            on_submit.call(submission);
        }
    };

    let state = form.read().clone();
    let selected_range = state.range();

    rsx! {
        div { class: "fo-form",
            div { class: "fo-form-row",
                span { class: "fo-form-label", "Range." }
                div { class: "fo-range",
                    for range in Range::ALL {
                        button {
                            key: "{range}",
                            r#type: "button",
                            class: if range == selected_range { "fo-range-option fo-range-option--active" } else { "fo-range-option" },
                            onclick: move |_| form.mutate(|f| f.select_range(range)),
                            "{range}"
                        }
                    }
                }
            }

            for field in [Field::Title, Field::Date, Field::About] {
                FieldInput {
                    key: "{field}",
                    field,
                    value: state.value(field).to_string(),
                    invalid: state.shows_error(field),
                    oninput: move |value: String| form.mutate(|f| { f.set_field(field, value); }),
                }
            }

            div { class: "fo-form-row fo-form-row--with-action",
                FieldInput {
                    field: Field::Email,
                    value: state.value(Field::Email).to_string(),
                    invalid: state.shows_error(Field::Email),
                    oninput: move |value: String| form.mutate(|f| { f.set_field(Field::Email, value); }),
                }
                button {
                    r#type: "button",
                    class: "fo-btn fo-btn--secondary",
                    disabled: !state.can_request_code() || code_request() == CodeRequest::Sending,
                    onclick: send_code,
                    "SEND CODE"
                }
            }
            {match code_request() {
                CodeRequest::Sent(email) => rsx! { p { class: "fo-form-note", "Code sent to {email}." } },
                CodeRequest::Failed => rsx! { p { class: "fo-form-note fo-form-note--error", "Could not send the code. Try again." } },
                CodeRequest::Idle | CodeRequest::Sending => rsx! {},
            }}

            FieldInput {
                field: Field::Code,
                value: state.value(Field::Code).to_string(),
                invalid: state.shows_error(Field::Code),
                oninput: move |value: String| form.mutate(|f| { f.set_field(Field::Code, value); }),
            }

            button {
                r#type: "button",
                class: "fo-btn fo-btn--primary",
                disabled: busy || !state.is_valid(),
                onclick: submit,
                if busy { "Submitting..." } else { "Submit" }
            }
        }
    }
}

/// One labelled text input.
#[component]
fn FieldInput(field: Field, value: String, invalid: bool, oninput: EventHandler<String>) -> Element {
    let id = format!("fo-field-{}", field.name());
    let class = if invalid {
        "fo-input fo-input--invalid"
    } else {
        "fo-input"
    };

    rsx! {
        div { class: "fo-form-row",
            label { class: "fo-form-label", r#for: "{id}", "{field.label()}" }
            input {
                id: "{id}",
                class,
                r#type: if field == Field::Email { "email" } else { "text" },
                inputmode: if matches!(field, Field::Date | Field::Code) { "numeric" } else { "text" },
                maxlength: field.max_length().map(|n| n.to_string()),
                placeholder: field.placeholder(),
                value: "{value}",
                oninput: move |evt: FormEvent| oninput.call(evt.value()),
            }
        }
    }
}

async fn request_code(email: &str) -> Result<(), AppError> {
    services()?.api.request_code(email).await?;
    Ok(())
}
