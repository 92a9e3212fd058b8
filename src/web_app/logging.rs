// web_app/logging.rs - tracing setup
//
// Server: fmt subscriber on stdout, filtered by RUST_LOG (default "info").
// Browser: the same fmt subscriber, written line by line to the devtools
// console.

#[cfg(feature = "ssr")]
pub fn init_server_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(filter)
        .init();
}

#[cfg(feature = "hydrate")]
pub fn init_browser_tracing() {
    // There is no clock in wasm32-unknown-unknown; timestamps must be off.
    let result = tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .with_writer(ConsoleWriter::default)
        .try_init();

    if let Err(e) = result {
        web_sys::console::warn_1(&format!("tracing already initialized: {}", e).into());
    }
}

/// Buffers one formatted event and hands it to `console.log` on flush.
#[cfg(feature = "hydrate")]
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

#[cfg(feature = "hydrate")]
impl std::io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        if !self.buffer.is_empty() {
            let line = String::from_utf8_lossy(&self.buffer);
            web_sys::console::log_1(&line.trim_end().into());
            self.buffer.clear();
        }
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        use std::io::Write;
        let _ = self.flush();
    }
}
