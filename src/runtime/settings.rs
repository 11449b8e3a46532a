use crate::config;

pub fn load_settings() -> config::Settings {
    // Runs before the logger exists, so problems go straight to stderr.
    match config::Settings::load() {
        Ok(s) => {
            if let Err(msg) = s.validate() {
                eprintln!("trackbridge: invalid config, using defaults: {msg}");
                config::Settings::default()
            } else {
                s
            }
        }
        Err(e) => {
            // Config is optional; failures should not prevent the listing.
            eprintln!("trackbridge: failed to load config, using defaults: {e}");
            config::Settings::default()
        }
    }
}
