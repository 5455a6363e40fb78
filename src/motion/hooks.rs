use gloo_timers::callback::Interval;
use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Date};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use super::reveal::{count_at, Trigger};

const FRAME_MS: u32 = 16;

struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe_once(element: &Element, trigger: Trigger, on_enter: impl Fn() + 'static) -> Option<Observation> {
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entered = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .any(|entry| entry.is_intersecting());
        if entered {
            observer.disconnect();
            on_enter();
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&trigger.root_margin());
    options.set_threshold(&JsValue::from_f64(0.0));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            observer.observe(element);
            Some(Observation { observer, _callback: callback })
        }
        Err(e) => {
            warn!("IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Becomes `true` the first time `node` scrolls past `trigger` and stays
/// `true` afterwards. Without observer support the content is shown at once.
#[hook]
pub fn use_in_view(node: NodeRef, trigger: Trigger) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observation = match node.cast::<Element>() {
                    Some(element) => {
                        let shown = visible.clone();
                        let observation = observe_once(&element, trigger, move || shown.set(true));
                        if observation.is_none() {
                            visible.set(true);
                        }
                        observation
                    }
                    None => {
                        visible.set(true);
                        None
                    }
                };
                move || drop(observation)
            },
            node,
        );
    }

    *visible
}

/// Counts from 0 up to `target` over `duration` seconds once `active`.
#[hook]
pub fn use_count_up(target: u32, duration: f64, active: bool) -> u32 {
    let value = use_state(|| 0u32);
    let done = *value >= target;

    {
        let value = value.clone();
        use_effect_with_deps(
            move |&(target, active, done): &(u32, bool, bool)| {
                let interval = (active && !done).then(|| {
                    debug!("counting up to {}", target);
                    let started = Date::now();
                    Interval::new(FRAME_MS, move || {
                        let elapsed = (Date::now() - started) / 1000.0;
                        value.set(count_at(elapsed, duration, target));
                    })
                });
                move || drop(interval)
            },
            (target, active, done),
        );
    }

    *value
}

/// Sets `document.title` whenever `title` changes.
#[hook]
pub fn use_page_title(title: String) {
    use_effect_with_deps(
        |title: &String| {
            match web_sys::window().and_then(|w| w.document()) {
                Some(document) => document.set_title(title),
                None => warn!("no document to title"),
            }
            || ()
        },
        title,
    );
}
