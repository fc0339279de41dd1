#[cfg(any(target_os = "linux", target_os = "windows", target_os = "macos"))]
pub fn init_logging() {
    // Status lines go to stdout; the logger only carries diagnostics, which
    // simple_logger sends to stderr.
    let init_result = simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Warn)
        .init();
    match init_result {
        Ok(_) => prepatch_debug!("Logging initialized"),
        Err(e) => prepatch_debug!("Logging already initialized: {}", e),
    }
}

#[cfg(not(any(target_os = "linux", target_os = "windows", target_os = "macos")))]
pub fn init_logging() {
    // Nothing to do on platforms without a console logger.
}
