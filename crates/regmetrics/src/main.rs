use dioxus::prelude::*;
use regmetrics::components::App as DashboardApp;

const MAIN_CSS: Asset = asset!("/assets/regmetrics.css");

/// Initialize Chrome tracing for performance profiling.
/// Returns a guard that must be held until program exit to flush the trace file.
///
/// Only spans from regmetrics and regmetrics_core are traced.
#[cfg(feature = "profile")]
fn init_profiling() -> tracing_chrome::FlushGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let trace_filter = EnvFilter::new("regmetrics=trace,regmetrics_core=trace");

    let (chrome_layer, guard) = tracing_chrome::ChromeLayerBuilder::new()
        .file("./trace.json")
        .include_args(true)
        .build();

    let console_layer = fmt::layer()
        .with_target(true)
        .with_level(true)
        .with_filter(EnvFilter::new("regmetrics=info,regmetrics_core=info"));

    tracing_subscriber::registry()
        .with(chrome_layer.with_filter(trace_filter))
        .with(console_layer)
        .init();

    dioxus::logger::tracing::info!("Profiling enabled - trace will be written to ./trace.json");
    guard
}

fn main() {
    #[cfg(feature = "profile")]
    let _profiling_guard = init_profiling();

    #[cfg(not(feature = "profile"))]
    {
        // DEBUG for development builds, INFO for release builds
        #[cfg(debug_assertions)]
        dioxus::logger::init(dioxus::logger::tracing::Level::DEBUG).expect("logger failed to init");
        #[cfg(not(debug_assertions))]
        dioxus::logger::init(dioxus::logger::tracing::Level::INFO).expect("logger failed to init");
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        let config = Config::default().with_window(
            WindowBuilder::new()
                .with_title("eCFR Agency Metrics")
                .with_resizable(true)
                .with_inner_size(LogicalSize::new(1100.0, 800.0))
                .with_min_inner_size(LogicalSize::new(640.0, 480.0)),
        );

        dioxus::LaunchBuilder::desktop()
            .with_cfg(config)
            .launch(App);
    }

    #[cfg(all(feature = "web", not(feature = "desktop")))]
    {
        dioxus::launch(App);
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // asset! is unreliable on desktop, so the stylesheet is inlined there
        if cfg!(target_arch = "wasm32") {
            document::Stylesheet { href: MAIN_CSS }
        } else {
            style { {include_str!("../assets/regmetrics.css")} }
        }

        body { class: "rm-body",
            DashboardApp {}
        }
    }
}
