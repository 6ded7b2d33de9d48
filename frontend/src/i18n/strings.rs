use super::Language;

/// Everything the landing page displays for one language.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStrings {
    /// Document title, updated whenever the language changes
    pub document_title: &'static str,
    pub header: HeaderStrings,
    pub hero: CtaStrings,
    pub benefits: BenefitsStrings,
    pub how_it_works: HowItWorksStrings,
    pub registration: RegistrationStrings,
    pub final_cta: CtaStrings,
    pub footer: FooterStrings,
    pub not_found: &'static str,
    pub back_home: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderStrings {
    pub logo_alt: &'static str,
    /// Label of the toggle button: the code of the language it switches to
    pub toggle_label: &'static str,
    /// Accessible name of the toggle button
    pub toggle_aria_label: &'static str,
}

/// A title, a subtitle and a button that scrolls to the registration form.
#[derive(Debug, Clone, PartialEq)]
pub struct CtaStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub cta: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BenefitsStrings {
    pub title: &'static str,
    pub cards: [Card; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct HowItWorksStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub steps: [Card; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationStrings {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub full_name: &'static str,
    pub email: &'static str,
    pub geographic_area: &'static str,
    pub geographic_area_placeholder: &'static str,
    pub main_sector: &'static str,
    /// First, empty-valued option of the sector select
    pub sector_placeholder: &'static str,
    pub cv: &'static str,
    pub select_file: &'static str,
    pub cta: &'static str,
    pub sending: &'static str,
    pub success_message: &'static str,
    pub generic_error: &'static str,
    /// Shown when a submit is refused for a missing or blank field
    pub incomplete_form: &'static str,
    pub malformed_email: &'static str,
    pub unsupported_cv: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FooterStrings {
    pub tagline: &'static str,
    pub contact_email: &'static str,
    /// Followed by the current year and `rights`
    pub copyright_holder: &'static str,
    pub rights: &'static str,
}

pub const SPANISH_STRINGS: PageStrings = PageStrings {
    document_title: "Pymetra | Agentes comerciales para PYMEs europeas",
    header: HeaderStrings {
        logo_alt: "Pymetra",
        toggle_label: "EN",
        toggle_aria_label: "Cambiar a inglés",
    },
    hero: CtaStrings {
        title: "Más ventas, menos esfuerzo: conecta con PYMEs europeas.",
        subtitle: "Regístrate gratis y recibe antes que nadie nuevas oportunidades en tu zona y sector.",
        cta: "Pre-regístrate ahora",
    },
    benefits: BenefitsStrings {
        title: "¿Por qué elegir Pymetra?",
        cards: [
            Card {
                title: "Acceso prioritario",
                description: "Recibe antes que nadie las ofertas de tu zona.",
            },
            Card {
                title: "Sin coste para ti",
                description: "Registro 100% gratuito para agentes.",
            },
            Card {
                title: "Oportunidades reales",
                description: "Conecta con PYMEs serias que buscan agentes ya.",
            },
        ],
    },
    how_it_works: HowItWorksStrings {
        title: "¿Cómo funciona?",
        subtitle: "Tres pasos simples para empezar a recibir oportunidades",
        steps: [
            Card {
                title: "Te registras gratis",
                description: "Completa tu perfil y sube tu CV en menos de 5 minutos.",
            },
            Card {
                title: "Recibes ofertas relevantes",
                description: "Te enviamos solo las oportunidades que encajan contigo.",
            },
            Card {
                title: "Contactas con la empresa interesada",
                description: "Conecta directamente y cierra el acuerdo.",
            },
        ],
    },
    registration: RegistrationStrings {
        title: "Únete a Pymetra",
        subtitle: "Completa tu registro y empieza a recibir oportunidades hoy mismo",
        full_name: "Nombre completo",
        email: "Email",
        geographic_area: "Zona geográfica",
        geographic_area_placeholder: "Ej: Madrid, Barcelona, Valencia...",
        main_sector: "Sector principal",
        sector_placeholder: "Selecciona tu sector",
        cv: "Adjuntar CV (PDF o DOC)",
        select_file: "Seleccionar archivo",
        cta: "Unirme gratis",
        sending: "Enviando...",
        success_message: "¡Registro completado! Te contactaremos pronto con nuevas oportunidades.",
        generic_error: "Error al enviar el formulario. Inténtalo de nuevo.",
        incomplete_form: "Revisa los campos obligatorios del formulario.",
        malformed_email: "Introduce un email válido.",
        unsupported_cv: "Tipo de archivo no válido. Solo se permiten PDF, DOC, DOCX",
    },
    final_cta: CtaStrings {
        title: "Empieza hoy a recibir oportunidades",
        subtitle: "No pierdas más tiempo buscando clientes. Deja que ellos te encuentren.",
        cta: "Quiero registrarme gratis",
    },
    footer: FooterStrings {
        tagline: "Conectando PYMEs con agentes comerciales en toda Europa.",
        contact_email: "info@pymetra.com",
        copyright_holder: "Pymetra.",
        rights: "Todos los derechos reservados.",
    },
    not_found: "Página no encontrada",
    back_home: "Volver al inicio",
};

pub const ENGLISH_STRINGS: PageStrings = PageStrings {
    document_title: "Pymetra | Sales agents for European SMEs",
    header: HeaderStrings {
        logo_alt: "Pymetra",
        toggle_label: "ES",
        toggle_aria_label: "Switch to Spanish",
    },
    hero: CtaStrings {
        title: "More sales, less effort: connect with European SMEs.",
        subtitle: "Register for free and get new opportunities in your sector and region before anyone else.",
        cta: "Pre-register now",
    },
    benefits: BenefitsStrings {
        title: "Why choose Pymetra?",
        cards: [
            Card {
                title: "Priority access",
                description: "Get offers in your region before anyone else.",
            },
            Card {
                title: "No cost for you",
                description: "100% free registration for agents.",
            },
            Card {
                title: "Real opportunities",
                description: "Connect with serious SMEs actively looking for agents.",
            },
        ],
    },
    how_it_works: HowItWorksStrings {
        title: "How it works?",
        subtitle: "Three simple steps to start receiving opportunities",
        steps: [
            Card {
                title: "Register for free",
                description: "Complete your profile and upload your CV in less than 5 minutes.",
            },
            Card {
                title: "Receive relevant offers",
                description: "We send you only opportunities that match your profile.",
            },
            Card {
                title: "Connect directly with the company",
                description: "Connect directly with interested companies and close deals.",
            },
        ],
    },
    registration: RegistrationStrings {
        title: "Join Pymetra",
        subtitle: "Complete your registration and start receiving opportunities today",
        full_name: "Full name",
        email: "Email",
        geographic_area: "Geographic area",
        geographic_area_placeholder: "E.g: Madrid, Barcelona, Valencia...",
        main_sector: "Main sector",
        sector_placeholder: "Select your sector",
        cv: "Upload CV (PDF or DOC)",
        select_file: "Select file",
        cta: "Join for free",
        sending: "Sending...",
        success_message: "Registration completed! We'll contact you soon with new opportunities.",
        generic_error: "Error submitting form. Please try again.",
        incomplete_form: "Please fill in all the required fields.",
        malformed_email: "Please enter a valid email address.",
        unsupported_cv: "Invalid file type. Only PDF, DOC and DOCX are allowed",
    },
    final_cta: CtaStrings {
        title: "Start receiving opportunities today",
        subtitle: "Stop wasting time looking for clients. Let them find you.",
        cta: "Register for free",
    },
    footer: FooterStrings {
        tagline: "Connecting SMEs with sales agents across Europe.",
        contact_email: "info@pymetra.com",
        copyright_holder: "Pymetra.",
        rights: "All rights reserved.",
    },
    not_found: "Page not found",
    back_home: "Back to home",
};

pub fn strings(language: Language) -> &'static PageStrings {
    match language {
        Language::Es => &SPANISH_STRINGS,
        Language::En => &ENGLISH_STRINGS,
    }
}
