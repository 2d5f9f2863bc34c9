use crate::app::App;

mod app;
mod browser;
mod components;

fn main() {
    yew::Renderer::<App>::new().render();
}
