use yew::prelude::*;

use wallet_ui::errors::ContextError;

use crate::components::WalletModal;

#[derive(Debug, Clone, PartialEq)]
pub struct WalletModalContext {
    pub visible: bool,
    pub set_visible: Callback<bool>,
}

impl WalletModalContext {
    pub fn open(&self) {
        self.set_visible.emit(true);
    }

    pub fn close(&self) {
        self.set_visible.emit(false);
    }
}

#[derive(Properties, PartialEq)]
pub struct WalletModalProviderProps {
    /// Extra classes for the modal dialog.
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Owns the modal visibility flag and renders the modal while it is set.
#[function_component(WalletModalProvider)]
pub fn wallet_modal_provider(props: &WalletModalProviderProps) -> Html {
    let visible = use_state_eq(|| false);

    let set_visible = {
        let visible = visible.clone();
        Callback::from(move |value: bool| visible.set(value))
    };

    let context = WalletModalContext {
        visible: *visible,
        set_visible,
    };

    html! {
        <ContextProvider<WalletModalContext> context={context}>
            {props.children.clone()}
            if *visible {
                <WalletModal class={props.class.clone()} />
            }
        </ContextProvider<WalletModalContext>>
    }
}

fn require_wallet_modal(
    context: Option<WalletModalContext>,
) -> Result<WalletModalContext, ContextError> {
    context.ok_or_else(|| ContextError::wallet_modal("use", "WalletModal"))
}

#[hook]
pub fn use_wallet_modal_result() -> Result<WalletModalContext, ContextError> {
    require_wallet_modal(use_context::<WalletModalContext>())
}

/// # Panics
/// Outside a [`WalletModalProvider`].
#[hook]
pub fn use_wallet_modal() -> WalletModalContext {
    match use_wallet_modal_result() {
        Ok(context) => context,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_missing_modal_provider() {
        let err = require_wallet_modal(None).unwrap_err();
        assert!(err.to_string().starts_with(
            "You have tried to use \"WalletModal\" on a WalletModalContext without providing one."
        ));
    }

    #[test]
    fn test_open_and_close_emit_visibility() {
        let visible = Rc::new(Cell::new(false));
        let sink = visible.clone();
        let context = require_wallet_modal(Some(WalletModalContext {
            visible: false,
            set_visible: Callback::from(move |value: bool| sink.set(value)),
        }))
        .unwrap();

        context.open();
        assert!(visible.get());
        context.close();
        assert!(!visible.get());
    }
}
