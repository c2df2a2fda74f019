use log::LevelFilter;

/// Route `log` output to the browser console and panics to `console.error`.
///
/// Safe to call more than once: only the first call installs the logger,
/// later calls just adjust the level.
pub fn init_logging(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    if let Some(max) = level.to_level() {
        if console_log::init_with_level(max).is_err() {
            log::trace!(target: "keyboard.dom", "logger already installed");
        }
    }
    log::set_max_level(level);
}
