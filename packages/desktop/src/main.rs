use dioxus::prelude::*;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use views::Generator;

mod views;

const DEFAULT_LOG_FILTER: &str = "desktop=info,ui=info,card=info,store=info";

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Generator {},
}

fn main() {
    init_logging();
    dioxus::launch(App);
}

/// `RUST_LOG` overrides the default filter.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).with_file(false).with_line_number(false));

    // Ignore the error if a subscriber is already installed.
    let _ = subscriber.try_init();
}

#[component]
fn App() -> Element {
    use_context_provider(|| Signal::new(ui::ActivityLog::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        ui::ArchiveProvider {
            Router::<Route> {}
        }
    }
}
