use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::i18n::{strings, Card, CtaStrings, Language};
use crate::registration::{RegistrationSection, REGISTRATION_SECTION_ID};

/// Brings the registration form into view (smooth via CSS `scroll-behavior`).
fn scroll_to_registration() {
    let section = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(REGISTRATION_SECTION_ID));
    match section {
        Some(section) => section.scroll_into_view(),
        None => log::warn!("#{} not found, cannot scroll", REGISTRATION_SECTION_ID),
    }
}

fn set_document_language(language: Language) {
    if let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    {
        if let Err(e) = root.set_attribute("lang", language.code()) {
            log::warn!("Could not set <html lang=\"{}\">: {:?}", language, e);
        }
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let language = use_state(Language::default);
    let copy = strings(*language);

    use_title(copy.document_title.to_string());

    {
        use_effect_with_deps(
            move |language| {
                set_document_language(*language);
                || ()
            },
            *language,
        );
    }

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    let on_toggle = {
        let language = language.clone();
        Callback::from(move |_: ()| {
            let next = language.toggled();
            log::info!("Switching language to {}", next);
            language.set(next);
        })
    };

    html! {
        <div class="landing-page">
            <Header language={*language} on_toggle={on_toggle} />
            <Hero copy={copy.hero.clone()} />
            <Benefits language={*language} />
            <HowItWorks language={*language} />
            <RegistrationSection language={*language} />
            <FinalCta copy={copy.final_cta.clone()} />
            <Footer language={*language} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct CtaProps {
    pub copy: CtaStrings,
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub language: Language,
}

#[function_component(Hero)]
fn hero(props: &CtaProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_registration());
    html! {
        <section class="hero-section">
            <div class="container hero-content">
                <h1 class="display-lg">{props.copy.title}</h1>
                <p class="body-lg">{props.copy.subtitle}</p>
                <button class="btn-primary" {onclick}>{props.copy.cta}</button>
            </div>
        </section>
    }
}

fn card(index: usize, card: &Card, badge: Html) -> Html {
    html! {
        <div key={index} class="card hover-lift">
            {badge}
            <h3 class="h2">{card.title}</h3>
            <p class="body-md">{card.description}</p>
        </div>
    }
}

#[function_component(Benefits)]
fn benefits(props: &SectionProps) -> Html {
    let copy = &strings(props.language).benefits;
    let icons = ["✓", "€", "👥"];
    html! {
        <section class="benefits-section">
            <div class="container">
                <h2 class="display-md section-heading">{copy.title}</h2>
                <div class="card-grid">
                    { for copy.cards.iter().zip(icons).enumerate().map(|(i, (benefit, icon))| {
                        card(i, benefit, html! { <div class="card-icon">{icon}</div> })
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(HowItWorks)]
fn how_it_works(props: &SectionProps) -> Html {
    let copy = &strings(props.language).how_it_works;
    html! {
        <section class="how-it-works-section">
            <div class="container">
                <div class="section-heading">
                    <h2 class="display-md">{copy.title}</h2>
                    <p class="body-lg">{copy.subtitle}</p>
                </div>
                <div class="card-grid">
                    { for copy.steps.iter().enumerate().map(|(i, step)| {
                        card(i, step, html! { <div class="step-number">{(i + 1).to_string()}</div> })
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(FinalCta)]
fn final_cta(props: &CtaProps) -> Html {
    let onclick = Callback::from(|_: MouseEvent| scroll_to_registration());
    html! {
        <section class="final-cta-section">
            <div class="container">
                <h2 class="display-md">{props.copy.title}</h2>
                <p class="body-lg">{props.copy.subtitle}</p>
                <button class="btn-primary" {onclick}>{props.copy.cta}</button>
            </div>
        </section>
    }
}
