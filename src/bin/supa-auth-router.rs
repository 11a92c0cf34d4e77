fn main() {
    #[cfg(feature = "web")]
    dioxus::launch(supa_auth_router::view::app::App);

    #[cfg(not(feature = "web"))]
    eprintln!("supa-auth-router runs in the browser; build it with `--features web`");
}
