use std::rc::Rc;

use yew::prelude::*;

use wallet_ui::style::Style;
use wallet_ui::theme::{Theme, ThemeConfig};

#[derive(Debug, Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Rc<Theme>,
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    #[prop_or_default]
    pub config: ThemeConfig,
    pub children: Children,
}

fn resolve(config: &ThemeConfig) -> Theme {
    Theme::from_config(config).unwrap_or_else(|err| {
        wallet_ui::error!(%err, "invalid theme config, falling back to the default palette");
        Theme::default()
    })
}

/// Exposes the theme colors as CSS custom properties for stylesheets.
pub fn theme_variables(theme: &Theme) -> Style {
    Style::new()
        .with("display", "contents")
        .with("--wallet-ui-base", theme.base.as_str())
        .with("--wallet-ui-primary", theme.primary.as_str())
        .with("--wallet-ui-secondary", theme.secondary.as_str())
        .with("--wallet-ui-accent", theme.accent.as_str())
        .with("--wallet-ui-backdrop", theme.backdrop.as_str())
}

/// Resolves `config` once per mount; later config changes are ignored.
#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let config = props.config.clone();
    let theme = use_memo((), move |_| resolve(&config));

    let context = ThemeContext {
        theme: theme.clone(),
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <div class="wallet-ui-theme" style={theme_variables(&theme).to_string()}>
                {props.children.clone()}
            </div>
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> Rc<Theme> {
    use_context::<ThemeContext>()
        .expect("Theme context has not been set")
        .theme
}

#[hook]
pub fn use_theme_opt() -> Option<Rc<Theme>> {
    use_context::<ThemeContext>().map(|context| context.theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_variables() {
        let style = theme_variables(&Theme::default());
        assert_eq!(style.get("--wallet-ui-primary"), Some("#5E409D"));
        assert_eq!(style.get("--wallet-ui-backdrop"), Some("#100F0F"));
    }

    #[test]
    fn test_invalid_config_falls_back() {
        let config = ThemeConfig::from_json(r#"{ "colors": { "accent": { "color": "nope" } } }"#).unwrap();
        assert_eq!(resolve(&config), Theme::default());
    }
}
