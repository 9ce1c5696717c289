use chrono::Utc;
use dioxus::launch;
use dioxus::prelude::*;
use dioxus_logger::tracing::Level;

use portal_ui::{ContactConfig, FloatingContactButton, InstitutionSummary, TrustedMarkup};
use shared_types::{Institution, WorkloadRules};

const WELCOME_HTML: &str = "<h1>Welcome</h1><p>Course schedules are published every <strong>Monday</strong>.</p>";
const NOTICE_HTML: &str = "<p>Enrollment for the next term closes on <em>Friday</em>.</p>";

fn main() {
    // Initialize logging for WASM
    wasm_logger::init(wasm_logger::Config::default());
    dioxus_logger::init(Level::INFO).ok();

    launch(App);
}

#[component]
fn App() -> Element {
    let mut show_notice = use_signal(|| false);
    let html = if show_notice() { NOTICE_HTML } else { WELCOME_HTML };
    let institution = use_signal(demo_institution);
    let contact = ContactConfig {
        message: Some("Hello! I have a question about enrollment.".to_string()),
        ..ContactConfig::default()
    };

    rsx! {
        div {
            style: "min-height: 100vh; background-color: #111827; color: white; padding: 1rem;",
            button {
                onclick: move |_| show_notice.toggle(),
                "Toggle announcement"
            }
            TrustedMarkup { html: html.to_string(), class: "announcement" }
            InstitutionSummary { institution: institution() }
            FloatingContactButton { config: contact }
        }
    }
}

fn demo_institution() -> Institution {
    let now = Utc::now();
    Institution {
        id: "demo".to_string(),
        name: "Central Technical School".to_string(),
        category: "technical".to_string(),
        workload_rules: WorkloadRules::from_fn(|tier| f64::from(tier.hours()) / 15.0),
        active: true,
        created_at: now,
        updated_at: now,
    }
}
