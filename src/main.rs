mod animation;
mod bridge;
mod certificates;
mod config;
mod contact;
mod countdown;
mod date;
mod dialog;
mod hooks;
mod landing;
mod portfolio;
mod projects;
mod reveal;
mod routes;
mod theme;
mod typewriter;

fn main() {
    dioxus::launch(routes::App);
}
