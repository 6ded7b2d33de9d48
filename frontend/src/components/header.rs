use yew::prelude::*;

use crate::i18n::{strings, Language};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub language: Language,
    pub on_toggle: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let copy = &strings(props.language).header;
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <header class="site-header">
            <div class="container header-content">
                <span class="logo" aria-label={copy.logo_alt}>{"Pymetra"}</span>
                <button
                    class="language-toggle"
                    aria-label={copy.toggle_aria_label}
                    {onclick}
                >
                    {copy.toggle_label}
                </button>
            </div>
        </header>
    }
}
