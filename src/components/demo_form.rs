use gloo_timers::callback::Timeout;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use super::banner::{GeneralErrorBanner, SuccessBanner};
use crate::config;
use crate::form::submission::LeadSubmission;
use crate::form::{DemoFormState, FieldStatus, FormAction};
use crate::utils::scroll::{reveal_and_focus, scroll_window_to};
use crate::validation::{transform_input, FieldName};

const STORE_OPTIONS: [(&str, &str); 4] = [
    ("1", "1 loja"),
    ("2-5", "2 a 5 lojas"),
    ("6-10", "6 a 10 lojas"),
    ("11+", "Mais de 10 lojas"),
];

fn error_message(status: FieldStatus) -> Html {
    match status.error() {
        Some(err) => html! {
            <div class="error-message">
                <i class="fas fa-exclamation-circle"></i>
                { err.to_string() }
            </div>
        },
        None => html! {},
    }
}

fn field_class(state: &DemoFormState, field: FieldName) -> Classes {
    classes!(
        "form-control",
        state.validator.status(field).class(),
        state.is_highlighted(field).then_some("highlight")
    )
}

#[function_component(DemoForm)]
pub fn demo_form() -> Html {
    let state = use_reducer(DemoFormState::default);

    // Scroll to and focus whichever field the last blocked submit pointed at.
    {
        let target = state.focus.map(|request| state.validator.element(request.field));
        use_effect_with_deps(
            move |_| {
                if let Some(node) = target {
                    reveal_and_focus(&node);
                }
                || ()
            },
            state.focus,
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |token: &Option<u32>| {
                if let Some(token) = *token {
                    Timeout::new(config::GENERAL_ERROR_DISMISS_MS, move || {
                        dispatcher.dispatch(FormAction::DismissGeneralError(token))
                    })
                    .forget();
                }
                || ()
            },
            state.general_error.token(),
        );
    }

    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |token: &Option<u32>| {
                if let Some(token) = *token {
                    Timeout::new(config::HIGHLIGHT_MS, move || {
                        dispatcher.dispatch(FormAction::ClearHighlight(token))
                    })
                    .forget();
                }
                || ()
            },
            state.highlight.token(),
        );
    }

    // Simulated network round trip. Nothing leaves the browser.
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |pending: &Option<LeadSubmission>| {
                if let Some(lead) = pending.clone() {
                    spawn_local(async move {
                        TimeoutFuture::new(config::SUBMIT_DELAY_MS).await;
                        match serde_json::to_string(&lead) {
                            Ok(json) => gloo_console::log!("Dados do formulário:", json),
                            Err(err) => log::warn!("could not serialize lead: {}", err),
                        }
                        dispatcher.dispatch(FormAction::SubmissionFinished);
                    });
                }
                || ()
            },
            state.pending_submission().cloned(),
        );
    }

    use_effect_with_deps(
        move |token: &Option<u32>| {
            if token.is_some() {
                scroll_window_to(0.0);
            }
            || ()
        },
        state.success.token(),
    );

    let on_text = |field: FieldName| {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let raw = input.value();
            let shaped = transform_input(field, &raw);
            if shaped != raw {
                input.set_value(&shaped);
            }
            dispatcher.dispatch(FormAction::Input(field, shaped));
        })
    };
    let on_blur = |field: FieldName| {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: FocusEvent| dispatcher.dispatch(FormAction::Blur(field)))
    };
    let on_stores = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Input(FieldName::Stores, select.value()));
        })
    };
    let on_challenge = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::Input(FieldName::Challenge, area.value()));
        })
    };
    let on_agree = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: Event| {
            let checkbox: HtmlInputElement = e.target_unchecked_into();
            dispatcher.dispatch(FormAction::SetAgree(checkbox.checked()));
        })
    };
    let onsubmit = {
        let dispatcher = state.dispatcher();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            dispatcher.dispatch(FormAction::Submit);
        })
    };
    let on_success_dismiss = {
        let dispatcher = state.dispatcher();
        Callback::from(move |token: u32| dispatcher.dispatch(FormAction::DismissSuccess(token)))
    };

    let form = &state.form;
    let status = |field: FieldName| state.validator.status(field);
    let node = |field: FieldName| state.validator.element(field);

    html! {
        <>
        if let Some(token) = state.success.token() {
            <SuccessBanner key={token} {token} on_dismiss={on_success_dismiss} />
        }
        <form id={config::FORM_ID} class="demo-form" novalidate={true} {onsubmit}>
            if let Some(token) = state.general_error.token() {
                <GeneralErrorBanner key={token} />
            }
            <div class="form-row">
                <div class="form-group">
                    <label for="name">{"Nome completo *"}</label>
                    <input
                        type="text"
                        id="name"
                        ref={node(FieldName::Name)}
                        class={field_class(&state, FieldName::Name)}
                        placeholder="Seu nome"
                        value={form.name.clone()}
                        oninput={on_text(FieldName::Name)}
                        onblur={on_blur(FieldName::Name)}
                    />
                    { error_message(status(FieldName::Name)) }
                </div>
                <div class="form-group">
                    <label for="email">{"Email corporativo *"}</label>
                    <input
                        type="email"
                        id="email"
                        ref={node(FieldName::Email)}
                        class={field_class(&state, FieldName::Email)}
                        placeholder="voce@empresa.com.br"
                        value={form.email.clone()}
                        oninput={on_text(FieldName::Email)}
                        onblur={on_blur(FieldName::Email)}
                    />
                    { error_message(status(FieldName::Email)) }
                </div>
            </div>
            <div class="form-row">
                <div class="form-group">
                    <label for="phone">{"WhatsApp *"}</label>
                    <input
                        type="tel"
                        id="phone"
                        ref={node(FieldName::Phone)}
                        class={field_class(&state, FieldName::Phone)}
                        placeholder="(11) 98765-4321"
                        value={form.phone.clone()}
                        oninput={on_text(FieldName::Phone)}
                        onblur={on_blur(FieldName::Phone)}
                    />
                    { error_message(status(FieldName::Phone)) }
                </div>
                <div class="form-group">
                    <label for="company">{"Empresa *"}</label>
                    <input
                        type="text"
                        id="company"
                        ref={node(FieldName::Company)}
                        class={field_class(&state, FieldName::Company)}
                        placeholder="Nome da sua loja"
                        value={form.company.clone()}
                        oninput={on_text(FieldName::Company)}
                        onblur={on_blur(FieldName::Company)}
                    />
                    { error_message(status(FieldName::Company)) }
                </div>
            </div>
            <div class="form-group">
                <label for="stores">{"Quantas lojas você tem? *"}</label>
                <select
                    id="stores"
                    ref={node(FieldName::Stores)}
                    class={field_class(&state, FieldName::Stores)}
                    onchange={on_stores}
                    onblur={on_blur(FieldName::Stores)}
                >
                    <option value="" selected={form.stores.is_empty()}>{"Selecione"}</option>
                    { for STORE_OPTIONS.iter().map(|(value, label)| html! {
                        <option value={*value} selected={form.stores == *value}>{ *label }</option>
                    }) }
                </select>
                { error_message(status(FieldName::Stores)) }
            </div>
            <div class="form-group">
                <label for="challenge">{"Qual seu maior desafio com vendas hoje? *"}</label>
                <textarea
                    id="challenge"
                    rows="4"
                    ref={node(FieldName::Challenge)}
                    class={field_class(&state, FieldName::Challenge)}
                    placeholder="Conte um pouco sobre como sua equipe atende os leads"
                    value={form.challenge.clone()}
                    oninput={on_challenge}
                    onblur={on_blur(FieldName::Challenge)}
                />
                { error_message(status(FieldName::Challenge)) }
            </div>
            <div class="form-group checkbox-group">
                <label for="agree">
                    <input
                        type="checkbox"
                        id="agree"
                        ref={node(FieldName::Agree)}
                        class={classes!(status(FieldName::Agree).class())}
                        checked={form.agree}
                        onchange={on_agree}
                        onblur={on_blur(FieldName::Agree)}
                    />
                    {" Concordo em receber contato da CloserFlow sobre a demonstração."}
                    { error_message(status(FieldName::Agree)) }
                </label>
            </div>
            <button type="submit" class="btn btn-primary btn-block" disabled={state.is_submitting()}>
                if state.is_submitting() {
                    <><i class="fas fa-spinner fa-spin"></i>{" Enviando..."}</>
                } else {
                    <><i class="fas fa-calendar-check"></i>{" Agendar demonstração gratuita"}</>
                }
            </button>
        </form>
        </>
    }
}
