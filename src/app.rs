use dioxus::prelude::*;

use crate::{
    domain::AppState,
    ui::{
        components::toast::{Toast, ToastMessage},
        gate::PasswordGate,
        pages::{
            AboutPage, AuctionsPage, CalculatorPage, ContactPage, FaqPage, HomePage,
            HowItWorksPage, NotFoundPage, ServicesPage, TestimonialsPage,
        },
        shell::Shell,
    },
    util::{assets, version::APP_TAGLINE},
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/about")]
    About {},
    #[route("/how-it-works")]
    HowItWorks {},
    #[route("/services")]
    Services {},
    #[route("/auctions")]
    Auctions {},
    #[route("/calculator")]
    Calculator {},
    #[route("/faq")]
    Faq {},
    #[route("/testimonials")]
    Testimonials {},
    #[route("/contact")]
    Contact {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Entries shown in the navigation bar, in display order.
    pub fn nav_links() -> [(Route, &'static str); 8] {
        [
            (Route::About {}, "About Us"),
            (Route::HowItWorks {}, "How It Works"),
            (Route::Services {}, "Services"),
            (Route::Auctions {}, "Auctions"),
            (Route::Calculator {}, "Cost Calculator"),
            (Route::Faq {}, "FAQ"),
            (Route::Testimonials {}, "Testimonials"),
            (Route::Contact {}, "Contact"),
        ]
    }
}

#[component]
pub fn App() -> Element {
    let state = use_signal(AppState::default);
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Title { "JapWorld | {APP_TAGLINE}" }
        document::Link { rel: "icon", href: assets::favicon_data_uri() }
        document::Style { "{assets::main_css()}" }
        PasswordGate {
            Router::<Route> {}
        }
        Toast {}
    }
}

#[component]
pub fn Home() -> Element {
    rsx! { Shell { HomePage {} } }
}

#[component]
pub fn About() -> Element {
    rsx! { Shell { AboutPage {} } }
}

#[component]
pub fn HowItWorks() -> Element {
    rsx! { Shell { HowItWorksPage {} } }
}

#[component]
pub fn Services() -> Element {
    rsx! { Shell { ServicesPage {} } }
}

#[component]
pub fn Auctions() -> Element {
    rsx! { Shell { AuctionsPage {} } }
}

#[component]
pub fn Calculator() -> Element {
    rsx! { Shell { CalculatorPage {} } }
}

#[component]
pub fn Faq() -> Element {
    rsx! { Shell { FaqPage {} } }
}

#[component]
pub fn Testimonials() -> Element {
    rsx! { Shell { TestimonialsPage {} } }
}

#[component]
pub fn Contact() -> Element {
    rsx! { Shell { ContactPage {} } }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    rsx! { Shell { NotFoundPage { path } } }
}
