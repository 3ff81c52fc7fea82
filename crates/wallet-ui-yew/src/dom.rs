//! DOM micro-interactions.
//!
//! Each helper registers listeners on real DOM nodes and returns a
//! [`Subscription`] that removes them again. Notifications are dispatched as
//! custom events on the watched element, so plain DOM code can listen for
//! them too; [`relay`] forwards them into Yew callbacks.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CustomEvent, CustomEventInit, Element, EventTarget, HtmlDialogElement, HtmlElement,
    KeyboardEvent, MutationObserver, MutationObserverInit, MutationRecord, Node, TouchEvent,
};
use yew::Callback;

use wallet_ui::Subscription;
use wallet_ui::errors::DomError;
use wallet_ui::events::{CLICK_OUTSIDE_EVENT, CLOSE_EVENT, OPEN_EVENT, is_escape, is_outside_click};
use wallet_ui::style::Style;
use wallet_ui::swipe::{
    DRAG_TRANSITION, FrameScheduler, RELEASE_TRANSITION, SwipeOutcome, SwipeToClose,
};

/// Maps a thrown JS value to a [`DomError`] for `operation`.
pub fn js_error(operation: &'static str) -> impl Fn(JsValue) -> DomError {
    move |value| DomError::Js {
        operation,
        message: value.as_string().unwrap_or_else(|| format!("{value:?}")),
    }
}

fn window() -> Result<web_sys::Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

/// Dispatches a custom event named `name` on `target`, with the target as
/// its detail.
pub fn dispatch(target: &Element, name: &str, bubbles: bool) -> Result<bool, DomError> {
    let init = CustomEventInit::new();
    init.set_detail(&JsValue::from(target.clone()));
    init.set_bubbles(bubbles);
    let event = CustomEvent::new_with_event_init_dict(name, &init)
        .map_err(js_error("CustomEvent::new"))?;
    target
        .dispatch_event(&event)
        .map_err(js_error("EventTarget::dispatchEvent"))
}

fn dispatch_or_log(target: &Element, name: &str, bubbles: bool) {
    if let Err(err) = dispatch(target, name, bubbles) {
        wallet_ui::error!(%err, event = name, "failed to dispatch notification");
    }
}

/// Forwards `name` events whose target is `element` itself to `callback`.
/// Events bubbling up from descendants are ignored.
pub fn relay(element: &Element, name: &'static str, callback: Callback<()>) -> Subscription {
    let own: EventTarget = element.clone().into();
    let listener = EventListener::new(element, name, move |event| {
        if event.target().as_ref() == Some(&own) {
            callback.emit(());
        }
    });
    Subscription::holding(listener)
}

/// Applies every declaration of `style` to the element's inline style.
pub fn apply_style(element: &HtmlElement, style: &Style) {
    let declaration = element.style();
    for (property, value) in style.iter() {
        if let Err(err) = declaration
            .set_property(property, value)
            .map_err(js_error("CSSStyleDeclaration::setProperty"))
        {
            wallet_ui::warn!(%err, property, "failed to apply style");
        }
    }
}

/// Dispatches `clickoutside` on `element` for every click that lands
/// outside of it and was not already handled.
///
/// The listener runs in the capture phase on the document, so it sees the
/// click before handlers inside the page can stop its propagation.
pub fn click_outside(element: &Element) -> Result<Subscription, DomError> {
    let document = window()?.document().ok_or(DomError::NoWindow)?;
    let watched = element.clone();

    let listener = EventListener::new_with_options(
        &document,
        "click",
        EventListenerOptions::run_in_capture_phase(),
        move |event| {
            let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
            let inside = watched.contains(target.as_ref());
            if is_outside_click(inside, event.default_prevented()) {
                dispatch_or_log(&watched, CLICK_OUTSIDE_EVENT, false);
            }
        },
    );

    Ok(Subscription::holding(listener))
}

/// Dispatches `open` on the dialog whenever its `open` attribute is set.
pub fn dialog_open(dialog: &HtmlDialogElement) -> Result<Subscription, DomError> {
    let watched = dialog.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, MutationObserver)>::new(
        move |records: js_sys::Array, _observer: MutationObserver| {
            let open_changed = records.iter().any(|record| {
                record.unchecked_into::<MutationRecord>().attribute_name().as_deref() == Some("open")
            });
            if open_changed && watched.open() {
                dispatch_or_log(&watched, OPEN_EVENT, false);
            }
        },
    );

    let observer = MutationObserver::new(callback.as_ref().unchecked_ref())
        .map_err(js_error("MutationObserver::new"))?;
    let init = MutationObserverInit::new();
    init.set_attributes(true);
    init.set_attribute_filter(&js_sys::Array::of1(&JsValue::from_str("open")));
    observer
        .observe_with_options(dialog, &init)
        .map_err(js_error("MutationObserver::observe"))?;

    Ok(Subscription::new(move || {
        observer.disconnect();
        drop(callback);
    }))
}

/// Dispatches a bubbling `close` on `dialog` when Escape is pressed anywhere
/// in the window.
pub fn dialog_escape(dialog: &Element) -> Result<Subscription, DomError> {
    let window = window()?;
    let watched = dialog.clone();

    let listener = EventListener::new(&window, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if is_escape(&event.key()) {
            dispatch_or_log(&watched, CLOSE_EVENT, true);
        }
    });

    Ok(Subscription::holding(listener))
}

/// `requestAnimationFrame` with a single outstanding request.
#[derive(Default)]
pub struct AnimationFrames {
    pending: RefCell<Option<(i32, Closure<dyn FnMut(f64)>)>>,
}

impl FrameScheduler for AnimationFrames {
    fn schedule(&self, frame: Box<dyn FnOnce()>) {
        self.cancel();
        let Some(window) = web_sys::window() else {
            return;
        };

        let closure: Closure<dyn FnMut(f64)> = Closure::once(move |_timestamp: f64| frame());
        match window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            Ok(id) => *self.pending.borrow_mut() = Some((id, closure)),
            Err(value) => {
                let err = js_error("Window::requestAnimationFrame")(value);
                wallet_ui::error!(%err, "failed to schedule frame");
            }
        }
    }

    fn cancel(&self) {
        let pending = self.pending.borrow_mut().take();
        if let (Some((id, _closure)), Some(window)) = (pending, web_sys::window()) {
            // Cancelling a frame that already ran is a no-op.
            let _ = window.cancel_animation_frame(id);
        }
    }
}

fn first_touch_y(event: &web_sys::Event, changed: bool) -> Option<f64> {
    let event = event.dyn_ref::<TouchEvent>()?;
    let touches = if changed {
        event.changed_touches()
    } else {
        event.touches()
    };
    touches.get(0).map(|touch| touch.client_y() as f64)
}

fn set_transition(element: &HtmlElement, transition: &str) {
    apply_style(element, &Style::new().with("transition", transition));
}

/// Lets the user drag `element` down to dismiss it.
///
/// Dragging follows the finger with a translate/scale/opacity transform.
/// Releasing past the close threshold dispatches a bubbling `close` on the
/// element; otherwise it animates back to rest.
pub fn swipe_to_close(element: &HtmlElement) -> Subscription {
    let target = element.clone();
    let tracker = Rc::new(RefCell::new(SwipeToClose::new(
        AnimationFrames::default(),
        move |frame| apply_style(&target, &frame.style()),
    )));

    let on_start = {
        let tracker = tracker.clone();
        let node = element.clone();
        EventListener::new(element, "touchstart", move |event| {
            let Some(y) = first_touch_y(event, false) else {
                return;
            };
            let height = node.get_bounding_client_rect().height();
            set_transition(&node, DRAG_TRANSITION);
            tracker.borrow_mut().touch_start(y, height);
        })
    };

    let on_move = {
        let tracker = tracker.clone();
        EventListener::new(element, "touchmove", move |event| {
            if let Some(y) = first_touch_y(event, false) {
                tracker.borrow_mut().touch_move(y);
            }
        })
    };

    let on_end = {
        let tracker = tracker.clone();
        let node = element.clone();
        EventListener::new(element, "touchend", move |event| {
            let Some(y) = first_touch_y(event, true) else {
                return;
            };
            set_transition(&node, RELEASE_TRANSITION);
            let outcome = tracker.borrow_mut().touch_end(y);
            if outcome == Some(SwipeOutcome::Close) {
                dispatch_or_log(&node, CLOSE_EVENT, true);
            }
        })
    };

    Subscription::holding((on_start, on_move, on_end))
        .and(Subscription::new(move || tracker.borrow_mut().cancel()))
}
