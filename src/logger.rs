#[cfg(target_os = "android")]
#[cfg_attr(test, allow(dead_code))]
pub fn init() {
    use crate::consts::LOG_TAG;

    android_logger::init_once(
        android_logger::Config::default()
            .with_tag(LOG_TAG)
            .with_max_level(log::LevelFilter::Trace),
    );
}

// Without a sink the log records are dropped.
#[cfg(not(target_os = "android"))]
#[cfg_attr(test, allow(dead_code))]
pub fn init() {}
