//! Tests for tracing subscriber setup

#[cfg(test)]
mod tests {
    use slotgrid::io::logging::{filter_directive, init_logger};

    // Tests each verbosity maps to its filter directive
    // Verified by mapping zero to debug
    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive(i8::MIN), "error");
        assert_eq!(filter_directive(-1), "error");
        assert_eq!(filter_directive(0), "slotgrid=warn");
        assert_eq!(filter_directive(1), "slotgrid=debug,warn");
        assert_eq!(filter_directive(2), "trace");
        assert_eq!(filter_directive(i8::MAX), "trace");
    }

    // Tests repeated initialization does not panic
    // Verified by calling init instead of try_init
    #[test]
    fn test_init_logger_twice() {
        init_logger(0);
        init_logger(2);
        tracing::info!("logger initialized");
    }
}
