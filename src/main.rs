// Client-side entry point, served by Trunk.
// to run: `trunk serve --open`
fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        use servicehub::app::App;
        use servicehub::utils::panic_hook;

        console_error_panic_hook::set_once();
        panic_hook::init();
        leptos::mount_to_body(App);
    }
}
