use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;

/// A live observer. Dropping it stops observing.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(element: &Element, on_visible: impl Fn() + 'static) -> Option<Observation> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            let visible = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .any(|entry| entry.is_intersecting());
            if visible {
                on_visible();
                observer.disconnect();
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some(Observation {
                observer,
                _callback: callback,
            })
        }
        Err(err) => {
            log::warn!("IntersectionObserver unavailable, showing content: {:?}", err);
            None
        }
    }
}

/// True once the referenced element has scrolled into view. Never goes back
/// to false.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let revealed = use_state(|| false);
    {
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observation = node.cast::<Element>().and_then(|element| {
                    let on_visible = {
                        let revealed = revealed.clone();
                        move || revealed.set(true)
                    };
                    let observation = observe_once(&element, on_visible);
                    if observation.is_none() {
                        revealed.set(true);
                    }
                    observation
                });
                move || drop(observation)
            },
            node,
        );
    }
    *revealed
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Block that gains `animate-in` the first time it enters the viewport.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone());

    html! {
        <div ref={node} class={classes!(props.class.clone(), revealed.then_some("animate-in"))}>
            { for props.children.iter() }
        </div>
    }
}
