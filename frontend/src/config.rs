use web_sys::window;

pub fn get_api_base_url() -> String {
    // Same-origin when deployed behind the reverse proxy; the dev API runs
    // on its own port.
    if let Some(window) = window() {
        if let Ok(host) = window.location().host() {
            if !host.contains("localhost") && !host.contains("127.0.0.1") {
                return String::new();
            }
        }
    }

    "http://127.0.0.1:8000".to_string()
}
