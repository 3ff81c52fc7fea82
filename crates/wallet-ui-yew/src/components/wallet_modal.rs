use web_sys::HtmlDialogElement;
use yew::prelude::*;

use wallet_ui::adapter::Wallet;
use wallet_ui::breakpoint::Breakpoint;
use wallet_ui::easing::SPRING;
use wallet_ui::modal::WalletListing;
use wallet_ui::style::Style;
use wallet_ui::theme::Theme;

use crate::components::{Button, WalletIcon};
use crate::hooks::{
    use_breakpoint, use_click_outside, use_dialog_escape, use_dialog_open, use_swipe_to_close,
};
use crate::providers::{use_theme_opt, use_wallet, use_wallet_modal};

const OPEN_DURATION_MS: u32 = 300;

pub fn overlay_style(theme: &Theme, opened: bool) -> Style {
    Style::new()
        .with("background-color", theme.backdrop.as_str())
        .with("opacity", if opened { "0.6" } else { "0" })
        .with("transition", format!("opacity {OPEN_DURATION_MS}ms linear"))
}

/// Mobile panels slide up from the bottom edge; larger screens scale in.
pub fn panel_style(theme: &Theme, opened: bool, breakpoint: Breakpoint) -> Style {
    let hidden = if breakpoint.is_mobile() {
        "translateY(100%)"
    } else {
        "scale(0.9)"
    };
    Style::new()
        .with("background-color", theme.base.as_str())
        .with("color", theme.backdrop.as_str())
        .with("transform", if opened { "none" } else { hidden })
        .with("opacity", if opened { "1" } else { "0" })
        .with(
            "transition",
            format!(
                "transform {OPEN_DURATION_MS}ms {spring}, opacity {OPEN_DURATION_MS}ms linear",
                spring = SPRING.to_css()
            ),
        )
}

pub fn panel_classes(breakpoint: Breakpoint) -> Classes {
    if breakpoint.is_mobile() {
        classes!("fixed", "inset-x-0", "bottom-0", "rounded-t-2xl", "max-h-[85vh]")
    } else {
        classes!("relative", "mx-auto", "mt-24", "w-full", "max-w-md", "rounded-2xl")
    }
}

fn wallet_item(wallet: &Wallet, on_select: &Callback<String>) -> Html {
    let onclick = {
        let name = wallet.name().to_string();
        let on_select = on_select.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_select.emit(name.clone());
        })
    };

    html! {
        <li key={wallet.name().to_string()}>
            <Button
                headless=true
                class="wallet-adapter-modal-list-item flex w-full items-center gap-3 px-5 py-3 text-left hover:opacity-80"
                tab_index={0}
                onclick={onclick}
                start_icon={html! { <WalletIcon wallet={Some(wallet.clone())} /> }}
            >
                <span class="flex-1">{ wallet.name() }</span>
                if wallet.ready_state().is_installed() {
                    <span class="text-sm opacity-70">{ "Detected" }</span>
                }
            </Button>
        </li>
    }
}

#[derive(Properties, PartialEq)]
pub struct WalletModalProps {
    #[prop_or_default]
    pub class: Classes,
}

/// The wallet picker dialog. Closes on Escape, on clicks outside the panel,
/// and on mobile by swiping the panel down.
#[function_component(WalletModal)]
pub fn wallet_modal(props: &WalletModalProps) -> Html {
    let wallet = use_wallet();
    let modal = use_wallet_modal();
    let theme = use_theme_opt().unwrap_or_default();
    let breakpoint = use_breakpoint();
    let expanded = use_state_eq(|| false);
    let opened = use_state_eq(|| false);
    let dialog_ref = use_node_ref();
    let panel_ref = use_node_ref();

    let hide = {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.close())
    };

    let on_open = {
        let opened = opened.clone();
        Callback::from(move |_: ()| opened.set(true))
    };
    use_dialog_open(dialog_ref.clone(), on_open);

    use_effect_with(dialog_ref.clone(), |dialog_ref| {
        if let Some(dialog) = dialog_ref.cast::<HtmlDialogElement>() {
            if let Err(err) = dialog.show_modal() {
                wallet_ui::error!(?err, "failed to open wallet modal");
            }
        }
    });

    use_dialog_escape(dialog_ref.clone(), hide.clone());
    use_click_outside(panel_ref.clone(), hide.clone());
    use_swipe_to_close(panel_ref.clone(), breakpoint.is_mobile(), hide.clone());

    let listing = WalletListing::from_wallets(&wallet.state.wallets);

    let on_select = {
        let select = wallet.select.clone();
        let modal = modal.clone();
        Callback::from(move |name: String| {
            select.emit(Some(name));
            modal.close();
        })
    };

    let toggle_expanded = {
        let expanded = expanded.clone();
        Callback::from(move |_: MouseEvent| expanded.set(!*expanded))
    };

    let close_clicked = {
        let hide = hide.clone();
        Callback::from(move |_: MouseEvent| hide.emit(()))
    };

    html! {
        <dialog
            ref={dialog_ref}
            class={classes!("wallet-adapter-modal", "fixed", "inset-0", "m-0", "h-full", "w-full", "max-h-none", "max-w-none", "bg-transparent", "p-0", props.class.clone())}
            aria-labelledby="wallet-adapter-modal-title"
        >
            <div class="wallet-adapter-modal-overlay fixed inset-0" style={overlay_style(&theme, *opened).to_string()} />
            <div
                ref={panel_ref}
                class={classes!("wallet-adapter-modal-wrapper", "overflow-y-auto", "shadow-xl", panel_classes(breakpoint))}
                style={panel_style(&theme, *opened, breakpoint).to_string()}
            >
                <Button
                    headless=true
                    class="wallet-adapter-modal-button-close absolute right-4 top-4 h-8 w-8 rounded-full opacity-70 hover:opacity-100"
                    onclick={close_clicked}
                >
                    { "\u{2715}" }
                </Button>
                <h1 id="wallet-adapter-modal-title" class="wallet-adapter-modal-title px-10 pt-10 pb-6 text-center text-xl font-semibold">
                    { listing.title() }
                </h1>
                <ul class="wallet-adapter-modal-list pb-2">
                    { for listing.listed.iter().map(|wallet| wallet_item(wallet, &on_select)) }
                    if *expanded {
                        { for listing.collapsed.iter().map(|wallet| wallet_item(wallet, &on_select)) }
                    }
                </ul>
                if !listing.collapsed.is_empty() {
                    <Button
                        headless=true
                        class="wallet-adapter-modal-list-more flex w-full items-center justify-end gap-2 px-5 py-4 text-sm"
                        tab_index={0}
                        onclick={toggle_expanded}
                    >
                        { if *expanded { "Less options" } else { "More options" } }
                    </Button>
                }
            </div>
        </dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_uses_backdrop_color() {
        let theme = Theme::default();
        let closed = overlay_style(&theme, false);
        let open = overlay_style(&theme, true);

        assert_eq!(closed.get("background-color"), Some("#100F0F"));
        assert_eq!(closed.get("opacity"), Some("0"));
        assert_eq!(open.get("opacity"), Some("0.6"));
    }

    #[test]
    fn test_panel_enters_from_bottom_on_mobile() {
        let theme = Theme::default();

        let mobile = panel_style(&theme, false, Breakpoint::Xs);
        assert_eq!(mobile.get("transform"), Some("translateY(100%)"));

        let desktop = panel_style(&theme, false, Breakpoint::Lg);
        assert_eq!(desktop.get("transform"), Some("scale(0.9)"));

        let open = panel_style(&theme, true, Breakpoint::Xs);
        assert_eq!(open.get("transform"), Some("none"));
        assert_eq!(open.get("background-color"), Some("#FFFCF0"));
    }

    #[test]
    fn test_panel_transition_uses_spring() {
        let style = panel_style(&Theme::default(), true, Breakpoint::Md);
        let transition = style.get("transition").unwrap();
        assert!(transition.contains("cubic-bezier(0.175, 0.885, 0.32, 1.275)"));
    }

    #[test]
    fn test_panel_classes_per_breakpoint() {
        assert!(panel_classes(Breakpoint::Xs).contains("bottom-0"));
        assert!(panel_classes(Breakpoint::Xl).contains("max-w-md"));
    }
}
