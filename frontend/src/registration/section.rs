use log::{error, info, warn};
use web_sys::{File, HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use super::api::{self, RegistrationReceipt};
use super::error::{SubmitBlocked, SubmitError};
use super::form::{FieldUpdate, RegistrationForm, Sector, CV_ACCEPT};
use crate::i18n::{strings, Language};

/// Anchor the hero and final call-to-action buttons scroll to.
pub const REGISTRATION_SECTION_ID: &str = "registration-section";

#[derive(Properties, PartialEq)]
pub struct RegistrationProps {
    pub language: Language,
}

pub enum RegistrationMsg {
    Update(FieldUpdate<File>),
    Submit,
    Resolved(Result<Option<RegistrationReceipt>, SubmitError>),
}

pub struct RegistrationSection {
    form: RegistrationForm<File>,
    form_ref: NodeRef,
}

impl Component for RegistrationSection {
    type Message = RegistrationMsg;
    type Properties = RegistrationProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: RegistrationForm::new(),
            form_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            RegistrationMsg::Update(update) => {
                self.form.update_field(update);
                true
            }
            RegistrationMsg::Submit => match self.form.begin_submit(ctx.props().language) {
                Ok(submission) => {
                    ctx.link().send_future(async move {
                        RegistrationMsg::Resolved(api::register_agent(submission).await)
                    });
                    true
                }
                Err(SubmitBlocked::InFlight) => {
                    info!("Ignoring submit while a registration is in flight");
                    false
                }
                Err(blocked) => {
                    // The form now carries a status message describing the problem.
                    warn!("Registration not sent: {}", blocked);
                    true
                }
            },
            RegistrationMsg::Resolved(outcome) => {
                match &outcome {
                    Ok(Some(receipt)) => info!(
                        "Registration {} accepted: {} (email sent: {}, cv saved: {})",
                        receipt.registration_id, receipt.message, receipt.email_sent, receipt.cv_saved
                    ),
                    Ok(None) => info!("Registration accepted"),
                    Err(e) => error!("Submission error: {}", e),
                }
                self.form.resolve(&outcome);
                if outcome.is_ok() {
                    // The file picker is not driven by component state.
                    if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                }
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let language = ctx.props().language;
        let copy = &strings(language).registration;
        let fields = self.form.fields();
        let in_flight = self.form.is_in_flight();
        let link = ctx.link();

        let on_full_name = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            RegistrationMsg::Update(FieldUpdate::FullName(input.value()))
        });
        let on_email = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            RegistrationMsg::Update(FieldUpdate::Email(input.value()))
        });
        let on_area = link.callback(|e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            RegistrationMsg::Update(FieldUpdate::GeographicArea(input.value()))
        });
        let on_sector = link.callback(|e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            RegistrationMsg::Update(FieldUpdate::MainSector(Sector::from_key(&select.value())))
        });
        let on_cv = link.callback(|e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let file = input.files().and_then(|files| files.get(0));
            RegistrationMsg::Update(FieldUpdate::Cv(file))
        });
        let on_submit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            RegistrationMsg::Submit
        });

        let file_label = fields
            .cv
            .as_ref()
            .map(|file| file.name())
            .unwrap_or_else(|| copy.select_file.to_string());

        html! {
            <section id={REGISTRATION_SECTION_ID} class="registration-section">
                <div class="container">
                    <div class="section-heading">
                        <h2 class="display-md">{copy.title}</h2>
                        <p class="body-lg">{copy.subtitle}</p>
                    </div>
                    <form ref={self.form_ref.clone()} class="card registration-form" onsubmit={on_submit}>
                        <div class="form-group">
                            <label class="form-label" for="fullName">{copy.full_name}</label>
                            <input
                                id="fullName"
                                type="text"
                                name="fullName"
                                class="form-input"
                                value={fields.full_name.clone()}
                                oninput={on_full_name}
                                required={true}
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label" for="email">{copy.email}</label>
                            <input
                                id="email"
                                type="email"
                                name="email"
                                class="form-input"
                                value={fields.email.clone()}
                                oninput={on_email}
                                required={true}
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label" for="geographicArea">{copy.geographic_area}</label>
                            <input
                                id="geographicArea"
                                type="text"
                                name="geographicArea"
                                class="form-input"
                                placeholder={copy.geographic_area_placeholder}
                                value={fields.geographic_area.clone()}
                                oninput={on_area}
                                required={true}
                            />
                        </div>
                        <div class="form-group">
                            <label class="form-label" for="mainSector">{copy.main_sector}</label>
                            <select
                                id="mainSector"
                                name="mainSector"
                                class="form-select"
                                onchange={on_sector}
                                required={true}
                            >
                                <option value="" selected={fields.main_sector.is_none()}>
                                    {copy.sector_placeholder}
                                </option>
                                { for Sector::ALL.iter().map(|sector| html! {
                                    <option
                                        value={sector.key()}
                                        selected={fields.main_sector == Some(*sector)}
                                    >
                                        {sector.label(language)}
                                    </option>
                                }) }
                            </select>
                        </div>
                        <div class="form-group">
                            <label class="form-label">{copy.cv}</label>
                            <input
                                id="cv-upload"
                                type="file"
                                name="cv"
                                accept={CV_ACCEPT}
                                class="visually-hidden"
                                onchange={on_cv}
                                required={true}
                            />
                            <label for="cv-upload" class="file-input">
                                <span class="file-input-icon">{"⇪"}</span>
                                <span>{file_label}</span>
                            </label>
                        </div>
                        <button type="submit" class="btn-primary btn-block" disabled={in_flight}>
                            { if in_flight { copy.sending } else { copy.cta } }
                        </button>
                        {
                            if let Some(status) = self.form.status() {
                                html! {
                                    <div
                                        class={classes!("form-status", if status.is_error() { "error" } else { "success" })}
                                        role="status"
                                    >
                                        {status.text(language).to_string()}
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </form>
                </div>
            </section>
        }
    }
}
