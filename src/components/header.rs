use yew::prelude::*;

use super::anchor_link::AnchorLink;

const NAV_LINKS: [(&str, &str); 5] = [
    ("#problema", "Problema"),
    ("#solucao", "Solução"),
    ("#resultados", "Resultados"),
    ("#faq", "Dúvidas"),
    ("#demo", "Agendar demo"),
];

#[function_component(MainHeader)]
pub fn main_header() -> Html {
    let menu_open = use_state(|| false);

    let toggle = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };
    let active = (*menu_open).then_some("active");

    html! {
        <header class="main-header">
            <div class="container header-inner">
                <AnchorLink href="#inicio" class={classes!("logo")}>
                    <i class="fas fa-bolt"></i>{" CloserFlow"}
                </AnchorLink>
                <button
                    id="mobileToggle"
                    class={classes!("mobile-toggle", active)}
                    aria-label="Abrir menu"
                    aria-expanded={menu_open.to_string()}
                    onclick={toggle}
                >
                    <span></span><span></span><span></span>
                </button>
                <nav id="navMenu" class={classes!("nav-menu", active)}>
                    { for NAV_LINKS.iter().map(|(href, label)| html! {
                        <AnchorLink href={*href} onclick={close.clone()}>{ *label }</AnchorLink>
                    }) }
                </nav>
            </div>
        </header>
    }
}
