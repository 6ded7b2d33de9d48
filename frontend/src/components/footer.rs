use chrono::Datelike;
use yew::prelude::*;

use crate::i18n::{strings, Language};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub language: Language,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let copy = &strings(props.language).footer;
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="container footer-content">
                <div class="footer-brand">
                    <span class="logo">{"Pymetra"}</span>
                    <p>{copy.tagline}</p>
                    <a href={format!("mailto:{}", copy.contact_email)}>{copy.contact_email}</a>
                </div>
            </div>
            <div class="container footer-copyright">
                {format!("© {} {} {}", year, copy.copyright_holder, copy.rights)}
            </div>
        </footer>
    }
}
