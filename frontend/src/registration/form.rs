//! State of the agent registration form, independent of the DOM.
//!
//! [`RegistrationForm`] owns the field values, the in-flight flag and the
//! status message. The component drives it with [`RegistrationForm::update_field`],
//! [`RegistrationForm::begin_submit`] and [`RegistrationForm::resolve`]; the
//! request itself lives in `api`.

use once_cell::sync::Lazy;
use regex::Regex;

use super::error::{Field, FieldError, SubmitBlocked, SubmitError};
use crate::i18n::{strings, Language};

// Same grammar browsers apply to <input type="email">.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

pub const ACCEPTED_CV_EXTENSIONS: [&str; 3] = ["pdf", "doc", "docx"];

/// Value of the file picker's `accept` attribute.
pub const CV_ACCEPT: &str = ".pdf,.doc,.docx";

/// A file picked by the user. Implemented for `web_sys::File` in the browser.
pub trait Attachment: Clone {
    fn file_name(&self) -> String;
}

impl Attachment for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    Technology,
    ProfessionalServices,
    Manufacturing,
    Retail,
    Construction,
    FoodAndBeverage,
    Textile,
    Automotive,
    Energy,
    Others,
}

impl Sector {
    pub const ALL: [Sector; 10] = [
        Sector::Technology,
        Sector::ProfessionalServices,
        Sector::Manufacturing,
        Sector::Retail,
        Sector::Construction,
        Sector::FoodAndBeverage,
        Sector::Textile,
        Sector::Automotive,
        Sector::Energy,
        Sector::Others,
    ];

    /// Stable option value; survives a language toggle.
    pub fn key(self) -> &'static str {
        match self {
            Sector::Technology => "technology",
            Sector::ProfessionalServices => "professional-services",
            Sector::Manufacturing => "manufacturing",
            Sector::Retail => "retail",
            Sector::Construction => "construction",
            Sector::FoodAndBeverage => "food-beverage",
            Sector::Textile => "textile",
            Sector::Automotive => "automotive",
            Sector::Energy => "energy",
            Sector::Others => "others",
        }
    }

    /// Parses an option value. The empty placeholder value yields `None`.
    pub fn from_key(key: &str) -> Option<Sector> {
        Sector::ALL.into_iter().find(|sector| sector.key() == key)
    }

    /// Display label, also the value submitted as `mainSector`.
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Sector::Technology, Language::Es) => "Tecnología",
            (Sector::Technology, Language::En) => "Technology",
            (Sector::ProfessionalServices, Language::Es) => "Servicios profesionales",
            (Sector::ProfessionalServices, Language::En) => "Professional services",
            (Sector::Manufacturing, Language::Es) => "Manufactura",
            (Sector::Manufacturing, Language::En) => "Manufacturing",
            (Sector::Retail, Language::Es) => "Comercio",
            (Sector::Retail, Language::En) => "Retail",
            (Sector::Construction, Language::Es) => "Construcción",
            (Sector::Construction, Language::En) => "Construction",
            (Sector::FoodAndBeverage, Language::Es) => "Alimentación",
            (Sector::FoodAndBeverage, Language::En) => "Food & Beverage",
            (Sector::Textile, Language::Es) => "Textil",
            (Sector::Textile, Language::En) => "Textile",
            (Sector::Automotive, Language::Es) => "Automoción",
            (Sector::Automotive, Language::En) => "Automotive",
            (Sector::Energy, Language::Es) => "Energía",
            (Sector::Energy, Language::En) => "Energy",
            (Sector::Others, Language::Es) => "Otros",
            (Sector::Others, Language::En) => "Others",
        }
    }
}

/// Checks the file name against [`ACCEPTED_CV_EXTENSIONS`], ignoring case.
pub fn is_accepted_cv(file_name: &str) -> bool {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ACCEPTED_CV_EXTENSIONS
            .iter()
            .any(|accepted| ext.eq_ignore_ascii_case(accepted)),
        _ => false,
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationFields<A> {
    pub full_name: String,
    pub email: String,
    pub geographic_area: String,
    pub main_sector: Option<Sector>,
    pub cv: Option<A>,
}

impl<A> Default for RegistrationFields<A> {
    fn default() -> Self {
        Self {
            full_name: String::new(),
            email: String::new(),
            geographic_area: String::new(),
            main_sector: None,
            cv: None,
        }
    }
}

impl<A: Attachment> RegistrationFields<A> {
    /// Collects every violated constraint, in form order.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.full_name.trim().is_empty() {
            errors.push(FieldError::Missing(Field::FullName));
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::Missing(Field::Email));
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::MalformedEmail);
        }
        if self.geographic_area.trim().is_empty() {
            errors.push(FieldError::Missing(Field::GeographicArea));
        }
        if self.main_sector.is_none() {
            errors.push(FieldError::Missing(Field::MainSector));
        }
        match &self.cv {
            None => errors.push(FieldError::Missing(Field::Cv)),
            Some(cv) if !is_accepted_cv(&cv.file_name()) => {
                errors.push(FieldError::UnsupportedCvType)
            }
            Some(_) => {}
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// One user edit.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldUpdate<A> {
    FullName(String),
    Email(String),
    GeographicArea(String),
    MainSector(Option<Sector>),
    Cv(Option<A>),
}

/// Snapshot handed to the transport when a submission starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission<A> {
    pub full_name: String,
    pub email: String,
    pub geographic_area: String,
    pub main_sector: Sector,
    pub language: Language,
    pub cv: A,
}

impl<A> Submission<A> {
    /// Text parts of the multipart body, in send order. `cv` follows them.
    pub fn text_fields(&self) -> [(&'static str, &str); 5] {
        [
            (Field::FullName.wire_name(), self.full_name.as_str()),
            (Field::Email.wire_name(), self.email.as_str()),
            (Field::GeographicArea.wire_name(), self.geographic_area.as_str()),
            (
                Field::MainSector.wire_name(),
                self.main_sector.label(self.language),
            ),
            ("language", self.language.code()),
        ]
    }
}

/// The single message shown under the form.
///
/// Stored as a key rather than text so it is rendered in whatever language
/// is active when the page draws it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success,
    GenericError,
    ServerDetail(String),
    /// The form was refused before any request; the first violation is shown.
    Invalid(FieldError),
}

impl StatusMessage {
    pub fn is_error(&self) -> bool {
        !matches!(self, StatusMessage::Success)
    }

    pub fn text(&self, language: Language) -> &str {
        let copy = &strings(language).registration;
        match self {
            StatusMessage::Success => copy.success_message,
            StatusMessage::GenericError => copy.generic_error,
            StatusMessage::ServerDetail(detail) => detail.as_str(),
            StatusMessage::Invalid(FieldError::Missing(_)) => copy.incomplete_form,
            StatusMessage::Invalid(FieldError::MalformedEmail) => copy.malformed_email,
            StatusMessage::Invalid(FieldError::UnsupportedCvType) => copy.unsupported_cv,
        }
    }
}

impl From<&SubmitError> for StatusMessage {
    fn from(error: &SubmitError) -> Self {
        match error.detail() {
            Some(detail) => StatusMessage::ServerDetail(detail.to_string()),
            None => StatusMessage::GenericError,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationForm<A> {
    fields: RegistrationFields<A>,
    in_flight: bool,
    status: Option<StatusMessage>,
}

impl<A> Default for RegistrationForm<A> {
    fn default() -> Self {
        Self {
            fields: RegistrationFields::default(),
            in_flight: false,
            status: None,
        }
    }
}

impl<A: Attachment> RegistrationForm<A> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &RegistrationFields<A> {
        &self.fields
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    /// Applies one edit. Constraints are not checked here.
    pub fn update_field(&mut self, update: FieldUpdate<A>) {
        match update {
            FieldUpdate::FullName(value) => self.fields.full_name = value,
            FieldUpdate::Email(value) => self.fields.email = value,
            FieldUpdate::GeographicArea(value) => self.fields.geographic_area = value,
            FieldUpdate::MainSector(value) => self.fields.main_sector = value,
            FieldUpdate::Cv(value) => self.fields.cv = value,
        }
    }

    /// Starts a submission and returns the snapshot to send.
    ///
    /// Refused while another submission is in flight, leaving the form
    /// untouched. Refused too while a constraint is violated; the fields are
    /// kept and the first violation becomes the status message, since the
    /// browser does not flag whitespace-only values or a CV of the wrong type.
    pub fn begin_submit(&mut self, language: Language) -> Result<Submission<A>, SubmitBlocked> {
        if self.in_flight {
            return Err(SubmitBlocked::InFlight);
        }
        if let Err(errors) = self.fields.validate() {
            self.status = errors.first().copied().map(StatusMessage::Invalid);
            return Err(SubmitBlocked::Invalid(errors));
        }

        let (Some(main_sector), Some(cv)) = (self.fields.main_sector, self.fields.cv.clone()) else {
            self.status = Some(StatusMessage::Invalid(FieldError::Missing(Field::MainSector)));
            return Err(SubmitBlocked::Invalid(Vec::new()));
        };

        self.in_flight = true;
        self.status = None;

        Ok(Submission {
            full_name: self.fields.full_name.trim().to_string(),
            email: self.fields.email.trim().to_string(),
            geographic_area: self.fields.geographic_area.trim().to_string(),
            main_sector,
            language,
            cv,
        })
    }

    /// Records the outcome of the request started by [`Self::begin_submit`].
    ///
    /// Success clears every field; failure keeps them for a retry.
    pub fn resolve<T>(&mut self, outcome: &Result<T, SubmitError>) {
        self.in_flight = false;
        match outcome {
            Ok(_) => {
                self.fields = RegistrationFields::default();
                self.status = Some(StatusMessage::Success);
            }
            Err(error) => {
                self.status = Some(StatusMessage::from(error));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeCv(&'static str);

    impl Attachment for FakeCv {
        fn file_name(&self) -> String {
            self.0.to_string()
        }
    }

    fn filled_form() -> RegistrationForm<FakeCv> {
        let mut form = RegistrationForm::new();
        form.update_field(FieldUpdate::FullName("Ana Gómez".into()));
        form.update_field(FieldUpdate::Email("ana@example.com".into()));
        form.update_field(FieldUpdate::GeographicArea("Madrid".into()));
        form.update_field(FieldUpdate::MainSector(Some(Sector::Technology)));
        form.update_field(FieldUpdate::Cv(Some(FakeCv("valid.pdf"))));
        form
    }

    fn is_empty(fields: &RegistrationFields<FakeCv>) -> bool {
        fields == &RegistrationFields::default()
    }

    fn rejected(status: u16, detail: Option<&str>) -> Result<(), SubmitError> {
        Err(SubmitError::Rejected {
            status,
            detail: detail.map(str::to_string),
        })
    }

    #[test]
    fn new_form_is_empty_and_idle() {
        let form = RegistrationForm::<FakeCv>::new();
        assert!(is_empty(form.fields()));
        assert!(!form.is_in_flight());
        assert_eq!(form.status(), None);
    }

    #[test]
    fn submission_carries_all_fields_and_language() {
        let mut form = filled_form();
        let submission = form.begin_submit(Language::Es).expect("form is complete");

        assert_eq!(
            submission.text_fields(),
            [
                ("fullName", "Ana Gómez"),
                ("email", "ana@example.com"),
                ("geographicArea", "Madrid"),
                ("mainSector", "Tecnología"),
                ("language", "es"),
            ]
        );
        assert_eq!(submission.cv, FakeCv("valid.pdf"));
        assert!(form.is_in_flight());
    }

    #[test]
    fn sector_label_follows_submission_language() {
        let mut form = filled_form();
        let submission = form.begin_submit(Language::En).expect("form is complete");
        assert_eq!(submission.text_fields()[3], ("mainSector", "Technology"));
        assert_eq!(submission.text_fields()[4], ("language", "en"));
    }

    #[test]
    fn second_submit_while_in_flight_is_refused() {
        let mut form = filled_form();
        assert!(form.begin_submit(Language::Es).is_ok());
        assert_eq!(form.begin_submit(Language::Es), Err(SubmitBlocked::InFlight));
        assert!(form.is_in_flight());
    }

    #[test]
    fn success_resets_fields_and_reports_success() {
        let mut form = filled_form();
        form.begin_submit(Language::Es).expect("form is complete");
        form.resolve(&Ok::<(), SubmitError>(()));

        assert!(is_empty(form.fields()));
        assert!(!form.is_in_flight());
        assert_eq!(form.status(), Some(&StatusMessage::Success));
        assert_eq!(
            form.status().map(|s| s.text(Language::Es)),
            Some("¡Registro completado! Te contactaremos pronto con nuevas oportunidades.")
        );
    }

    #[test]
    fn server_detail_is_shown_verbatim_and_fields_kept() {
        let mut form = filled_form();
        let before = form.fields().clone();
        form.begin_submit(Language::Es).expect("form is complete");
        form.resolve(&rejected(500, Some("Email already registered")));

        assert_eq!(form.fields(), &before);
        assert!(!form.is_in_flight());
        assert_eq!(
            form.status().map(|s| s.text(Language::Es)),
            Some("Email already registered")
        );
    }

    #[test]
    fn timeout_falls_back_to_generic_error() {
        let mut form = filled_form();
        let before = form.fields().clone();
        form.begin_submit(Language::Es).expect("form is complete");
        form.resolve(&Err::<(), _>(SubmitError::Timeout(30_000)));

        assert_eq!(form.fields(), &before);
        assert_eq!(form.status(), Some(&StatusMessage::GenericError));
        assert_eq!(
            form.status().map(|s| s.text(Language::Es)),
            Some("Error al enviar el formulario. Inténtalo de nuevo.")
        );
    }

    #[test]
    fn rejection_without_detail_uses_generic_error() {
        let mut form = filled_form();
        form.begin_submit(Language::En).expect("form is complete");
        form.resolve(&rejected(502, None));
        assert_eq!(
            form.status().map(|s| s.text(Language::En)),
            Some("Error submitting form. Please try again.")
        );
    }

    #[test]
    fn failed_form_can_be_resubmitted() {
        let mut form = filled_form();
        form.begin_submit(Language::Es).expect("form is complete");
        form.resolve(&Err::<(), _>(SubmitError::Network("offline".into())));
        assert!(form.begin_submit(Language::Es).is_ok());
    }

    #[test]
    fn starting_a_submission_clears_the_previous_status() {
        let mut form = filled_form();
        form.begin_submit(Language::Es).expect("form is complete");
        form.resolve(&rejected(500, None));
        assert!(form.status().is_some());

        form.begin_submit(Language::Es).expect("form is complete");
        assert_eq!(form.status(), None);
    }

    #[test]
    fn placeholder_sector_blocks_submission() {
        let mut form = filled_form();
        form.update_field(FieldUpdate::MainSector(None));

        assert_eq!(
            form.begin_submit(Language::Es),
            Err(SubmitBlocked::Invalid(vec![FieldError::Missing(Field::MainSector)]))
        );
        assert!(!form.is_in_flight());
        assert_eq!(
            form.status().map(|s| s.text(Language::Es)),
            Some("Revisa los campos obligatorios del formulario.")
        );
    }

    #[test]
    fn wrong_cv_type_is_reported_and_fields_kept() {
        let mut form = filled_form();
        form.update_field(FieldUpdate::Cv(Some(FakeCv("foto.png"))));
        let before = form.fields().clone();

        assert_eq!(
            form.begin_submit(Language::Es),
            Err(SubmitBlocked::Invalid(vec![FieldError::UnsupportedCvType]))
        );
        assert!(!form.is_in_flight());
        assert_eq!(form.fields(), &before);
        assert_eq!(
            form.status().map(|s| s.text(Language::Es)),
            Some("Tipo de archivo no válido. Solo se permiten PDF, DOC, DOCX")
        );
        assert!(form.status().map_or(false, StatusMessage::is_error));
    }

    #[test]
    fn whitespace_only_name_is_reported() {
        let mut form = filled_form();
        form.update_field(FieldUpdate::FullName("   ".into()));

        assert!(form.begin_submit(Language::En).is_err());
        assert_eq!(
            form.status().map(|s| s.text(Language::En)),
            Some("Please fill in all the required fields.")
        );
    }

    #[test]
    fn invalid_status_is_replaced_by_the_next_valid_submit() {
        let mut form = filled_form();
        form.update_field(FieldUpdate::Email("ana@".into()));
        assert!(form.begin_submit(Language::En).is_err());
        assert_eq!(
            form.status().map(|s| s.text(Language::En)),
            Some("Please enter a valid email address.")
        );

        form.update_field(FieldUpdate::Email("ana@example.com".into()));
        assert!(form.begin_submit(Language::En).is_ok());
        assert_eq!(form.status(), None);
    }

    #[test]
    fn empty_form_reports_every_missing_field() {
        let mut form = RegistrationForm::<FakeCv>::new();
        assert_eq!(
            form.begin_submit(Language::En),
            Err(SubmitBlocked::Invalid(vec![
                FieldError::Missing(Field::FullName),
                FieldError::Missing(Field::Email),
                FieldError::Missing(Field::GeographicArea),
                FieldError::Missing(Field::MainSector),
                FieldError::Missing(Field::Cv),
            ]))
        );
    }

    #[test]
    fn whitespace_only_name_is_missing() {
        let mut form = filled_form();
        form.update_field(FieldUpdate::FullName("   ".into()));
        assert_eq!(
            form.fields().validate(),
            Err(vec![FieldError::Missing(Field::FullName)])
        );
    }

    #[test]
    fn malformed_email_and_wrong_cv_type_are_rejected() {
        let mut form = filled_form();
        form.update_field(FieldUpdate::Email("ana@".into()));
        form.update_field(FieldUpdate::Cv(Some(FakeCv("photo.png"))));
        assert_eq!(
            form.fields().validate(),
            Err(vec![FieldError::MalformedEmail, FieldError::UnsupportedCvType])
        );
    }

    #[test]
    fn email_syntax() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("ana.gomez+agent@mail.example.es"));
        assert!(is_valid_email("ana@localhost"));
        assert!(!is_valid_email("ana.example.com"));
        assert!(!is_valid_email("ana@@example.com"));
        assert!(!is_valid_email("ana gomez@example.com"));
        assert!(!is_valid_email("ana@-example.com"));
    }

    #[test]
    fn cv_extensions() {
        assert!(is_accepted_cv("cv.pdf"));
        assert!(is_accepted_cv("CV.PDF"));
        assert!(is_accepted_cv("curriculum.final.docx"));
        assert!(is_accepted_cv("cv.doc"));
        assert!(!is_accepted_cv("cv.txt"));
        assert!(!is_accepted_cv("pdf"));
        assert!(!is_accepted_cv(".pdf"));
    }

    #[test]
    fn sector_keys_round_trip_and_placeholder_is_none() {
        for sector in Sector::ALL {
            assert_eq!(Sector::from_key(sector.key()), Some(sector));
        }
        assert_eq!(Sector::from_key(""), None);
    }

    #[test]
    fn status_text_follows_render_language() {
        let status = StatusMessage::Success;
        assert_eq!(
            status.text(Language::En),
            "Registration completed! We'll contact you soon with new opportunities."
        );
        assert!(!status.is_error());
        assert!(StatusMessage::ServerDetail("x".into()).is_error());
    }
}
