mod api;
mod app;
mod components;
mod pages;
mod router;
mod user_session;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    yew::Renderer::<app::App>::new().render();
}
