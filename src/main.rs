//! BookMeHere web frontend
//!
//! Serves the Dioxus app with SSR on the server build and hydrates it in the browser.

fn main() {
    dioxus::launch(bookmehere_web::app::App);
}
