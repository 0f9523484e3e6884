use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config;

#[derive(Properties, PartialEq)]
pub struct SuccessBannerProps {
    pub token: u32,
    pub on_dismiss: Callback<u32>,
}

/// Fixed confirmation toast shown after the demo request goes out.
/// Slides out on close, and closes itself after a while.
#[function_component(SuccessBanner)]
pub fn success_banner(props: &SuccessBannerProps) -> Html {
    let leaving = use_state(|| false);

    let slide_out = {
        let leaving = leaving.clone();
        let on_dismiss = props.on_dismiss.clone();
        let token = props.token;
        Callback::from(move |_: ()| {
            leaving.set(true);
            let on_dismiss = on_dismiss.clone();
            Timeout::new(config::SLIDE_OUT_MS, move || on_dismiss.emit(token)).forget();
        })
    };

    {
        let slide_out = slide_out.clone();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(config::SUCCESS_DISMISS_MS, move || slide_out.emit(()));
                move || drop(timeout)
            },
            props.token,
        );
    }

    let onclose = Callback::from(move |_: MouseEvent| slide_out.emit(()));

    html! {
        <div class={classes!("success-message", (*leaving).then_some("leaving"))} role="status">
            <div class="success-content">
                <i class="fas fa-check-circle"></i>
                <div>
                    <h4>{"Agendamento enviado com sucesso!"}</h4>
                    <p>{"Entraremos em contato em até 24 horas para confirmar sua demonstração."}</p>
                </div>
                <button class="close-message" aria-label="Fechar" onclick={onclose}>{"×"}</button>
            </div>
        </div>
    }
}

/// Banner prepended to the form when a submit is blocked.
#[function_component(GeneralErrorBanner)]
pub fn general_error_banner() -> Html {
    html! {
        <div class="general-error" role="alert">
            <i class="fas fa-exclamation-triangle"></i>
            <span>{"Por favor, corrija os erros no formulário antes de enviar."}</span>
        </div>
    }
}
