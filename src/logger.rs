pub fn log_dimensions(operation: &str, from: (usize, usize), to: (usize, usize)) {
    log::info!(
        "{} {}x{} -> {}x{}",
        operation,
        from.0,
        from.1,
        to.0,
        to.1
    );
}
