use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::content::NavLink;

#[derive(Properties, PartialEq)]
pub struct SiteFooterProps {
    pub brand: String,
    pub nav: Vec<NavLink>,
    pub active: Option<String>,
}

#[function_component(SiteFooter)]
pub fn site_footer(props: &SiteFooterProps) -> Html {
    let year = Local::now().year();

    html! {
        <footer class="section site-footer">
            <div class="footer-row">
                <p>{format!("© {} {}", year, props.brand)}</p>
                <ul class="footer-links">
                    { for props.nav.iter().map(|link| {
                        let is_active = props.active.as_deref() == Some(link.target.as_str());
                        html! {
                            <li key={link.target.clone()}>
                                <a href={link.href()} class={classes!("footer-link", is_active.then(|| "active"))}>
                                    {&link.label}
                                    <span aria-hidden="true" class="nav-underline"></span>
                                </a>
                            </li>
                        }
                    }) }
                </ul>
            </div>
        </footer>
    }
}
