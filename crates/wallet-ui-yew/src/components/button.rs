use yew::prelude::*;

use wallet_ui::style::Style;
use wallet_ui::theme::Theme;

use crate::providers::use_theme_opt;

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    /// Renders without any built-in classes or colors.
    #[prop_or_default]
    pub headless: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub start_icon: Option<Html>,
    #[prop_or_default]
    pub end_icon: Option<Html>,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub style: Style,
    #[prop_or_default]
    pub tab_index: Option<i32>,
    /// Removes the border radius
    #[prop_or_default]
    pub square: bool,
    /// Removes the shadow
    #[prop_or_default]
    pub flat: bool,
    #[prop_or_default]
    pub children: Children,
}

pub fn button_classes(headless: bool, square: bool, flat: bool, disabled: bool, extra: &Classes) -> Classes {
    if headless {
        return extra.clone();
    }
    classes!(
        "wallet-adapter-button",
        "inline-flex",
        "items-center",
        "gap-2",
        "px-4",
        "py-2",
        "font-semibold",
        (!square).then_some("rounded-lg"),
        (!flat).then_some("shadow-md"),
        if disabled {
            "opacity-50 cursor-not-allowed"
        } else {
            "cursor-pointer hover:opacity-90"
        },
        extra.clone()
    )
}

pub fn button_style(theme: &Theme, headless: bool, custom: &Style) -> Style {
    if headless {
        return custom.clone();
    }
    Style::new()
        .with("background-color", theme.primary.as_str())
        .with("color", theme.base.as_str())
        .merge(custom)
}

/// Runs the caller's handler first; the built-in action only runs when the
/// caller did not prevent the event's default.
pub(crate) fn chain_click(
    custom: Option<Callback<MouseEvent>>,
    action: Option<Callback<MouseEvent>>,
) -> Callback<MouseEvent> {
    Callback::from(move |event: MouseEvent| {
        if let Some(custom) = &custom {
            custom.emit(event.clone());
        }
        if !event.default_prevented() {
            if let Some(action) = &action {
                action.emit(event);
            }
        }
    })
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let theme = use_theme_opt().unwrap_or_default();
    let class = button_classes(props.headless, props.square, props.flat, props.disabled, &props.class);
    let style = button_style(&theme, props.headless, &props.style);
    let tab_index = props.tab_index.map(|index| AttrValue::from(index.to_string()));

    html! {
        <button
            class={class}
            style={(!style.is_empty()).then(|| style.to_string())}
            disabled={props.disabled}
            tabindex={tab_index}
            onclick={props.onclick.clone()}
        >
            if let Some(icon) = props.start_icon.clone() {
                <i class="wallet-adapter-button-start-icon">{ icon }</i>
            }
            { props.children.clone() }
            if let Some(icon) = props.end_icon.clone() {
                <i class="wallet-adapter-button-end-icon">{ icon }</i>
            }
        </button>
    }
}
