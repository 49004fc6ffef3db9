use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::charts::ChartLibrary;
use ui::components::AppHeader;
use ui::core::config::DashboardConfig;
use ui::views::Dashboard;

fn main() {
    dioxus::logger::init(Level::INFO).expect("logger failed to init");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // The snapshot is fetched relative to the page, next to the bundle.
    use_context_provider(DashboardConfig::default);
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    rsx! {
        document::Title { "Playdeck" }
        document::Style { "{ui::THEME_CSS}" }
        ChartLibrary {}

        AppHeader {}
        Dashboard {}
    }
}
