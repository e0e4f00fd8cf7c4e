use dioxus::prelude::*;

use crate::pages::{Intake, Landing, ThankYou};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Landing page with "Get Started" button
/// - `/form` - Intake form
/// - `/thank-you` - Confirmation with the stored submission
#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/form")]
    Intake {},
    #[route("/thank-you")]
    ThankYou {},
}

/// Root application component.
///
/// Provides global styles, the intake services, and routing.
#[component]
pub fn App() -> Element {
    use_context_provider(crate::get_services);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
