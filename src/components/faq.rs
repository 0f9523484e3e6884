use web_sys::KeyboardEvent;
use yew::prelude::*;

/// Single-open accordion: opening one item closes the rest, clicking the
/// open item closes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn toggle(self, index: usize) -> Self {
        let open = if self.open == Some(index) {
            None
        } else {
            Some(index)
        };
        Self { open }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Clone, PartialEq)]
pub struct FaqEntry {
    pub question: AttrValue,
    pub answer: AttrValue,
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    entry: FaqEntry,
    open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |_: MouseEvent| on_toggle.emit(()))
    };
    let onkeydown = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" || e.key() == " " {
                e.prevent_default();
                on_toggle.emit(());
            }
        })
    };

    html! {
        <div class={classes!("faq-item", props.open.then_some("active"))}>
            <div
                class="faq-question"
                role="button"
                tabindex="0"
                aria-expanded={props.open.to_string()}
                {onclick}
                {onkeydown}
            >
                <span>{ &props.entry.question }</span>
                <i class="fas fa-chevron-down"></i>
            </div>
            <div class="faq-answer">
                <p>{ &props.entry.answer }</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub entries: Vec<FaqEntry>,
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let state = use_state(AccordionState::default);

    html! {
        <div class="faq-list">
            { for props.entries.iter().enumerate().map(|(index, entry)| {
                let on_toggle = {
                    let state = state.clone();
                    Callback::from(move |_: ()| state.set((*state).toggle(index)))
                };
                html! {
                    <FaqItem entry={entry.clone()} open={state.is_open(index)} {on_toggle} />
                }
            }) }
        </div>
    }
}
