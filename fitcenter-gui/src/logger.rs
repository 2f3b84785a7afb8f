use tracing_subscriber::{filter, prelude::*};

pub fn setup_logger(log_level: filter::LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let stdout_log = tracing_subscriber::fmt::layer().pretty().with_file(false);

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(log_level)
                // Add a filter that rejects spans and events whose targets
                // start with specific prefixes.
                .with_filter(filter::filter_fn(|metadata| {
                    !metadata.target().starts_with("iced_wgpu")
                        && !metadata.target().starts_with("iced_winit")
                        && !metadata.target().starts_with("wgpu_core")
                        && !metadata.target().starts_with("wgpu_hal")
                        && !metadata.target().starts_with("naga")
                        && !metadata.target().starts_with("winit")
                        && !metadata.target().starts_with("mio")
                        && !metadata.target().starts_with("cosmic_text")
                        && !metadata.target().starts_with("rustls")
                        && !metadata.target().starts_with("hyper")
                        && !metadata.target().starts_with("reqwest")
                        && !metadata.target().starts_with("tokio")
                        && !metadata.target().starts_with("iced_graphics")
                        && !metadata.target().starts_with("iced_runtime")
                        && !metadata.target().starts_with("iced_core")
                })),
        )
        .init();

    Ok(())
}
