use crate::i18n::t;
use yew::prelude::*;

const NAV_LINKS: &[(&str, &str)] = &[
    ("#home", "nav.home"),
    ("#book", "nav.book"),
    ("#offers", "nav.offers"),
    ("#contact", "nav.contact"),
];

#[derive(Properties, PartialEq, Clone, Default)]
pub struct Props {
    /// Render with the mobile menu already expanded.
    #[prop_or_default]
    pub menu_open: bool,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let open = use_state(|| p.menu_open);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let close = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(false))
    };

    let links = NAV_LINKS.iter().map(|(href, key)| {
        html! {
            <li><a href={*href} onclick={close.clone()}>{ t(key) }</a></li>
        }
    });

    html! {
        <header role="banner" class="navbar">
            <a href="#main" class="sr-only">{ t("ui.skip_to_content") }</a>
            <div class="nav-container">
                <a href="#home" class="logo">{ t("ui.brand") }</a>
                <button
                    id="mobileMenuBtn"
                    type="button"
                    class={classes!("mobile-menu-btn", (*open).then_some("open"))}
                    aria-label={t("nav.menu")}
                    aria-controls="mobileMenu"
                    aria-expanded={(*open).to_string()}
                    onclick={toggle}
                >
                    <span></span><span></span><span></span>
                </button>
                <nav aria-label={t("nav.label")}>
                    <ul id="mobileMenu" class={classes!("nav-links", (*open).then_some("show"))}>
                        { for links }
                    </ul>
                </nav>
            </div>
            if *open {
                <div class="menu-backdrop" role="presentation" onclick={close}></div>
            }
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn header_starts_with_menu_collapsed() {
        let html = block_on(LocalServerRenderer::<Header>::new().render());
        assert!(html.contains("mobileMenuBtn"));
        assert!(html.contains("aria-expanded=\"false\""));
        assert!(!html.contains("menu-backdrop"));
        assert!(html.contains("Book Tickets"));
    }

    #[test]
    fn expanded_menu_shows_backdrop() {
        let html =
            block_on(LocalServerRenderer::<Header>::with_props(Props { menu_open: true }).render());
        assert!(html.contains("aria-expanded=\"true\""));
        assert!(html.contains("nav-links show"), "{html}");
        assert!(html.contains("menu-backdrop"));
    }
}
