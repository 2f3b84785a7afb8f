#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, path::PathBuf, process, str::FromStr};

use iced::{Settings, Size};
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

use fitcenter_ui::{component::text, font, theme};

use fitcenter_gui::{
    config::{self, Config, ConfigError},
    gui::GUI,
    logger::setup_logger,
    VERSION,
};

#[derive(Debug, PartialEq)]
enum Arg {
    ConfigPath(PathBuf),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: fitcenter-gui [OPTIONS]

Options:
    --conf <PATH>       Path of the configuration file
    -v, --version       Display fitcenter-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    for (i, arg) in args.iter().enumerate() {
        if arg == "--conf" {
            if let Some(a) = args.get(i + 1) {
                res.push(Arg::ConfigPath(PathBuf::from(a)));
            } else {
                return Err("missing arg to --conf".into());
            }
        } else if arg.contains("--") {
            return Err(format!("unknown arg: {}", arg).into());
        }
    }

    Ok(res)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect())?;
    let config = match args.as_slice() {
        [] => {
            let path = config::default_config_path()?;
            match Config::from_file(&path) {
                Ok(config) => config,
                Err(ConfigError::NotFound) => Config::default(),
                Err(e) => return Err(e.into()),
            }
        }
        [Arg::ConfigPath(path)] => Config::from_file(path)?,
        _ => {
            return Err("Unknown args combination".into());
        }
    };

    let log_level = if let Ok(l) = std::env::var("LOG_LEVEL") {
        LevelFilter::from_str(&l)?
    } else {
        config.log_level()?
    };

    setup_panic_hook();
    setup_logger(log_level)?;

    let settings = Settings {
        id: Some("FitCenter".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    let window_settings = iced::window::Settings {
        min_size: Some(Size {
            width: 600.0,
            height: 520.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(GUI::title, GUI::update, GUI::view)
        .theme(|_| theme::Theme::default())
        .settings(settings)
        .window(window_settings)
        .run_with(move || GUI::new(config))
    {
        log::error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        std::io::stdout().flush().expect("Flushing stdout");
        std::process::exit(1);
    }));
}
