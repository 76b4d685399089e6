use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

fn arm(delay_ms: u32, callback: &Closure<dyn FnMut()>) -> Option<i32> {
    web_sys::window()?
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            delay_ms as i32,
        )
        .map_err(|e| tracing::warn!("setTimeout failed: {:?}", e))
        .ok()
}

/// Run `f` once after `delay_ms`. Returns the timer handle.
pub fn set_timeout(delay_ms: u32, f: impl FnOnce() + 'static) -> Option<i32> {
    let callback = Closure::once(f);
    let handle = arm(delay_ms, &callback)?;
    callback.forget();
    Some(handle)
}

/// An armed timer and the closure it will call. The closure is kept
/// until the next `call`/`cancel` so it is freed instead of leaked.
struct Pending {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

/// Per-control debounce: every call clears the pending timer and re-arms
/// it, so `f` fires at most once per quiet interval.
#[derive(Clone, Copy)]
pub struct Debouncer {
    pending: StoredValue<Option<Pending>, LocalStorage>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            pending: StoredValue::new_local(None),
            delay_ms,
        }
    }

    pub fn call(&self, f: impl FnOnce() + 'static) {
        self.cancel();

        let callback = Closure::once(f);
        let pending = arm(self.delay_ms, &callback).map(|handle| Pending {
            handle,
            _callback: callback,
        });
        self.pending.set_value(pending);
    }

    /// Drop the pending call, if any, without running it.
    pub fn cancel(&self) {
        let mut taken = None;
        self.pending.update_value(|pending| taken = pending.take());
        if let Some(pending) = taken {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(pending.handle);
            }
        }
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen_test::*;

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: u32) {
        let (tx, rx) = oneshot::channel();
        set_timeout(ms, move || {
            let _ = tx.send(());
        });
        let _ = rx.await;
    }

    fn recorder() -> Rc<RefCell<Vec<&'static str>>> {
        Rc::new(RefCell::new(Vec::new()))
    }

    #[wasm_bindgen_test]
    async fn test_burst_fires_once_with_last_value() {
        let fired = recorder();
        let debouncer = Debouncer::new(30);
        for value in ["p", "pi", "pix"] {
            let fired = fired.clone();
            debouncer.call(move || fired.borrow_mut().push(value));
        }
        assert!(fired.borrow().is_empty());

        sleep(120).await;
        assert_eq!(*fired.borrow(), vec!["pix"]);
    }

    #[wasm_bindgen_test]
    async fn test_separate_quiet_intervals_each_fire() {
        let fired = recorder();
        let debouncer = Debouncer::new(20);

        let first = fired.clone();
        debouncer.call(move || first.borrow_mut().push("500"));
        sleep(80).await;
        let second = fired.clone();
        debouncer.call(move || second.borrow_mut().push("1500"));
        sleep(80).await;

        assert_eq!(*fired.borrow(), vec!["500", "1500"]);
    }

    #[wasm_bindgen_test]
    async fn test_cancel_drops_pending_call() {
        let fired = recorder();
        let debouncer = Debouncer::new(20);
        let pending = fired.clone();
        debouncer.call(move || pending.borrow_mut().push("typed"));
        debouncer.cancel();

        sleep(80).await;
        assert!(fired.borrow().is_empty());
    }
}
