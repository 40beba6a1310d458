//! Browser runtime: one widget, its listeners and a single wake-up timer

use std::cell::RefCell;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Performance, Window};
use widget_core::{Config, Control, EventKind, Outcome, SceneEvent, Stats, Widget, WidgetError, WidgetResult};

use crate::dom::Dom;

/// Milliseconds since the widget was installed
struct Clock {
    performance: Option<Performance>,
    origin: f64,
}

impl Clock {
    fn new(window: &Window) -> Self {
        let performance = window.performance();
        let mut clock = Self {
            performance,
            origin: 0.0,
        };
        clock.origin = clock.read();
        clock
    }

    fn read(&self) -> f64 {
        match &self.performance {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }

    fn now_ms(&self) -> u64 {
        (self.read() - self.origin).max(0.0) as u64
    }
}

struct Runtime {
    widget: Widget,
    dom: Dom,
    clock: Clock,
    timer: Option<i32>, // pending setTimeout handle
}

struct App {
    runtime: RefCell<Runtime>,
    listeners: RefCell<Vec<EventListener>>,
    wake: Closure<dyn FnMut()>,
}

thread_local! {
    static APP: RefCell<Option<App>> = const { RefCell::new(None) };
}

fn with_app<R>(f: impl FnOnce(&App) -> R) -> Option<R> {
    APP.with(|slot| slot.borrow().as_ref().map(f))
}

/// Attach to the document and start listening
pub fn install(config: Config) -> WidgetResult<()> {
    if with_app(|_| ()).is_some() {
        return Err(WidgetError::AlreadyRunning);
    }

    let window =
        web_sys::window().ok_or_else(|| WidgetError::Host("no global window".to_string()))?;
    let dom = Dom::attach(window.clone(), &config.ids)?;
    let seed = config.seed;
    let widget = Widget::new(config)?;

    let wake = Closure::wrap(Box::new(|| {
        with_app(App::pump);
    }) as Box<dyn FnMut()>);

    let app = App {
        runtime: RefCell::new(Runtime {
            widget,
            dom,
            clock: Clock::new(&window),
            timer: None,
        }),
        listeners: RefCell::new(Vec::new()),
        wake,
    };
    APP.with(|slot| *slot.borrow_mut() = Some(app));

    console_log!("widget: installed (seed: {:?})", seed);

    let ready = with_app(App::bind).unwrap_or(false);
    if ready {
        // DOMContentLoaded already fired; start now
        with_app(|app| app.dispatch(Control::Document, EventKind::Ready));
    }
    Ok(())
}

/// Cancel timers, detach listeners and remove every decoration
pub fn uninstall() -> bool {
    let Some(app) = APP.with(|slot| slot.borrow_mut().take()) else {
        return false;
    };
    app.listeners.borrow_mut().clear();

    let mut guard = app.runtime.borrow_mut();
    let rt = &mut *guard;
    if let Some(handle) = rt.timer.take() {
        rt.dom.window().clear_timeout_with_handle(handle);
    }
    let report = rt.widget.teardown(rt.clock.now_ms());
    flush(rt);
    rt.dom.clear();

    console_log!(
        "widget: torn down ({} tasks cancelled, {} elements removed)",
        report.cancelled_tasks,
        report.removed_elements
    );
    true
}

pub fn stats() -> Option<Stats> {
    with_app(|app| app.runtime.borrow().widget.stats())
}

impl App {
    /// Attach a listener per dispatch binding. Returns true when the
    /// document is already parsed and the ready event will never fire.
    fn bind(&self) -> bool {
        let rt = self.runtime.borrow();
        let already_ready = rt.dom.document().ready_state() != "loading";

        let mut listeners = self.listeners.borrow_mut();
        for binding in rt.widget.dispatch_table().bindings() {
            if binding.kind == EventKind::Ready && already_ready {
                continue;
            }
            let (control, kind) = (binding.control, binding.kind);
            let options = if binding.prevent_default {
                EventListenerOptions::enable_prevent_default()
            } else {
                EventListenerOptions::default()
            };
            let listener = EventListener::new_with_options(
                &rt.dom.target(control),
                kind.dom_name(),
                options,
                move |event: &Event| on_event(control, kind, event),
            );
            listeners.push(listener);
        }
        already_ready
    }

    fn dispatch(&self, control: Control, kind: EventKind) -> Outcome {
        let mut guard = self.runtime.borrow_mut();
        let rt = &mut *guard;
        let now = rt.clock.now_ms();
        let outcome = rt.widget.dispatch(now, control, kind, &rt.dom);
        flush(rt);
        self.rearm(rt);
        outcome
    }

    fn pump(&self) {
        let mut guard = self.runtime.borrow_mut();
        let rt = &mut *guard;
        rt.timer = None;
        let now = rt.clock.now_ms();
        rt.widget.advance(now);
        flush(rt);
        self.rearm(rt);
    }

    /// Point the browser timeout at the scheduler's next deadline
    fn rearm(&self, rt: &mut Runtime) {
        let window = rt.dom.window().clone();
        if let Some(handle) = rt.timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        let Some(deadline) = rt.widget.next_deadline() else {
            return;
        };
        let delay = deadline.saturating_sub(rt.clock.now_ms()).min(i32::MAX as u64) as i32;
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            self.wake.as_ref().unchecked_ref(),
            delay,
        ) {
            Ok(handle) => rt.timer = Some(handle),
            Err(e) => console_log!("widget: failed to arm timer: {:?}", e),
        }
    }
}

fn on_event(control: Control, kind: EventKind, event: &Event) {
    let outcome = with_app(|app| app.dispatch(control, kind));
    if outcome.is_some_and(|o| o.prevent_default) {
        event.prevent_default();
    }
}

/// Apply pending scene events to the document
fn flush(rt: &mut Runtime) {
    for event in rt.widget.drain_events() {
        if event == SceneEvent::SuccessShown {
            console_log!("widget: accepted");
        }
        if let Err(e) = rt.dom.apply(&event) {
            console_log!("widget: failed to apply {:?}: {:?}", event, e);
        }
    }
}
