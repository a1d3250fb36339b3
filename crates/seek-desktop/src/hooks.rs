//! Component-scoped hooks

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use seek_core::{debounce, Debounced};
use tokio::sync::mpsc;

/// Debounced wrapper around `target`, built once per component instance.
///
/// The timer runs on tokio, so delivered values cross back to the UI through a
/// channel drained by a component future. Unmounting cancels whatever is still
/// pending, and a late send into the closed channel is dropped.
pub fn use_debounced<T>(delay: Duration, target: EventHandler<T>) -> Debounced<T>
where
    T: Send + 'static,
{
    let (debounced, receiver) = use_hook(|| {
        let (sender, receiver) = mpsc::unbounded_channel();
        let debounced = debounce(delay, move |value| {
            if sender.send(value).is_err() {
                tracing::debug!("Debounced value dropped after unmount");
            }
        });
        (debounced, Rc::new(RefCell::new(Some(receiver))))
    });

    use_future(move || {
        let receiver = receiver.borrow_mut().take();
        async move {
            let Some(mut receiver) = receiver else {
                return;
            };
            while let Some(value) = receiver.recv().await {
                target.call(value);
            }
        }
    });

    use_drop({
        let debounced = debounced.clone();
        move || {
            if debounced.cancel() {
                tracing::debug!("Cancelled pending search on unmount");
            }
        }
    });

    debounced
}
