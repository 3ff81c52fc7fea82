#[macro_export]
/// Builds a Yew callback that clones the listed handles and runs an async
/// block on the local executor. The block's output is discarded, which is
/// exactly the fire-and-forget contract of the wallet buttons.
///
/// The caller needs `Callback` and `wasm_bindgen_futures` in scope.
///
/// 1. Ignoring the event:
/// ```compile_fail
/// let on_click = async_callback!([button] {
///     button.click().await;
/// });
/// ```
///
/// 2. Using the event:
/// ```compile_fail
/// let on_click = async_callback!([button, open] |event| {
///     event.stop_propagation();
///     if !button.click().await {
///         open.emit(());
///     }
/// });
/// ```
///
/// Written out by hand, the first form is:
/// ```compile_fail
/// let button_clone = button.clone();
/// let on_click = Callback::from(move |_| {
///     let button = button_clone.clone();
///     wasm_bindgen_futures::spawn_local(async move {
///         button.click().await;
///     });
/// });
/// ```
macro_rules! async_callback {
    ([$($var:ident),* $(,)?] $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |_| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body;
                });
            })
        }
    };

    ([$($var:ident),* $(,)?] |$event:ident| $body:expr) => {
        {
            $(let $var = $var.clone();)*
            Callback::from(move |$event| {
                $(let $var = $var.clone();)*
                wasm_bindgen_futures::spawn_local(async move {
                    $body;
                });
            })
        }
    };
}
