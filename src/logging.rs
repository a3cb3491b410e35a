// ==========================================
// Inisialisasi Sistem Log
// ==========================================
// Memakai tracing dan tracing-subscriber
// Level log bisa diatur lewat variabel lingkungan
// ==========================================

use tracing_subscriber::{fmt, EnvFilter};

/// Inisialisasi sistem log
///
/// # Variabel lingkungan
/// - RUST_LOG: filter level log (bawaan: info)
///   contoh: RUST_LOG=debug atau RUST_LOG=pst_monitoring=trace
///
/// # Contoh
/// ```no_run
/// use pst_monitoring::logging;
/// logging::init();
/// ```
pub fn init() {
    // Baca level log dari variabel lingkungan, bawaan info
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_line_number(true)
        .init();
}

/// Inisialisasi log untuk lingkungan pengujian
///
/// Level lebih rinci agar mudah menelusuri kegagalan
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
