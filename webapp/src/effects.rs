use dioxus::prelude::*;
use futures::{StreamExt, channel::mpsc};
use gloo_console::error as console_error;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, closure::Closure};
use wasm_bindgen_futures::JsFuture;
use web_sys::{KeyboardEvent, ScrollBehavior, ScrollToOptions, Window};

use common::{App, Command, Effect, Key};

use crate::measure;

// dispatch a command and carry out whatever it asks of the browser
//
// commands that cannot change anything never take the write guard, so stray keys and
// scroll ticks inside the current section don't redraw the page.  the guard is released
// before any effect runs, since effects may dispatch again
pub fn run(mut app: Signal<App>, command: Command) {
    if !app.peek().affects(&command) {
        return;
    }

    let effects = app.write().dispatch(command);

    for effect in effects {
        perform(app, effect);
    }
}

fn perform(app: Signal<App>, effect: Effect) {
    let Some(window) = web_sys::window() else {
        console_error!("no global window, dropping effect");
        return;
    };

    match effect {
        Effect::ScrollTo { top, smooth } => {
            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(if smooth {
                ScrollBehavior::Smooth
            } else {
                ScrollBehavior::Instant
            });

            window.scroll_to_with_scroll_to_options(&options);
        }
        Effect::LockScroll(locked) => lock_scroll(&window, locked),
        Effect::OpenUrl(url) => {
            if let Err(err) = window.open_with_url_and_target(&url, "_blank") {
                console_error!(format!("failed to open {url}: {err:?}"));
            }
        }
        Effect::CopyToClipboard(text) => {
            let promise = window.navigator().clipboard().write_text(&text);

            spawn(async move {
                match JsFuture::from(promise).await {
                    Ok(_) => run(app, Command::ContactCopied),
                    Err(err) => console_error!(format!("failed to copy to clipboard: {err:?}")),
                }
            });
        }
        Effect::Schedule { after_ms, command } => {
            spawn(async move {
                TimeoutFuture::new(after_ms).await;
                run(app, *command);
            });
        }
    }
}

fn lock_scroll(window: &Window, locked: bool) {
    let overflow = if locked { "hidden" } else { "auto" };

    let Some(body) = window.document().and_then(|doc| doc.body()) else {
        return;
    };

    if let Err(err) = body.style().set_property("overflow", overflow) {
        console_error!(format!("failed to set body overflow: {err:?}"));
    }
}

// window-level listeners
//
// keydown and scroll are not tied to any one element, so they are hooked on the window
// directly.  the raw callbacks only push commands down a channel; a task on the dioxus
// runtime drains it, which keeps every signal write inside the runtime
pub fn listen(app: Signal<App>) {
    let (tx, mut rx) = mpsc::unbounded::<Command>();

    spawn(async move {
        while let Some(command) = rx.next().await {
            run(app, command);
        }
    });

    let Some(window) = web_sys::window() else {
        console_error!("no global window, page will not react to keys or scrolling");
        return;
    };

    let keys = tx.clone();
    let on_key = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
        let _ = keys.unbounded_send(Command::Key(Key::from_key_name(&event.key())));
    });

    let on_scroll = Closure::<dyn FnMut()>::new(move || {
        let _ = tx.unbounded_send(measure::scrolled());
    });

    for (name, callback) in [
        ("keydown", on_key.as_ref()),
        ("scroll", on_scroll.as_ref()),
    ] {
        if let Err(err) = window.add_event_listener_with_callback(name, callback.unchecked_ref())
        {
            console_error!(format!("failed to listen for {name}: {err:?}"));
        }
    }

    // the listeners live as long as the page does
    on_key.forget();
    on_scroll.forget();
}
