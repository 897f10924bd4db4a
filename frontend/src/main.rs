use krat_frontend::App;

fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Starting {} landing page", krat_frontend::config::BRAND);
    yew::Renderer::<App>::new().render();
}
