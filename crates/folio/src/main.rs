use dioxus::prelude::*;
use folio::components::App as FolioApp;

const MAIN_CSS: Asset = asset!("/assets/folio.css");

fn main() {
    // DEBUG for development builds, INFO for release builds
    #[cfg(debug_assertions)]
    dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
    #[cfg(not(debug_assertions))]
    dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("Folio")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1100.0, 820.0))
                .with_min_inner_size(LogicalSize::new(640.0, 560.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(feature = "web")]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // CSS loading: asset! macro has issues on desktop, use include_str! as workaround
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/folio.css")} }
        }

        body { class: "fo-body",
            FolioApp {}
        }
    }
}
