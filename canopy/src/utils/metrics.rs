/// Runs `f`, logging how long it took.
///
/// Durations are only measured with the `metrics` feature enabled.
pub fn measure<T>(label: &str, f: impl FnOnce() -> T) -> T {
    #[cfg(feature = "metrics")]
    {
        let tt = std::time::Instant::now();
        let result = f();

        log::debug!(
            "{label}: {}",
            humantime::format_duration(tt.elapsed())
        );

        result
    }

    #[cfg(not(feature = "metrics"))]
    {
        let _ = label;

        f()
    }
}
