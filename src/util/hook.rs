/// Logs panics through `tracing` so they end up in the log file, then hands
/// over to the previously installed hook.
pub fn set_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        tracing::error!("{}", panic_info);
        hook(panic_info);
    }));
}
