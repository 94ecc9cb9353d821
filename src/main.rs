#![warn(clippy::all, rust_2018_idioms)]
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use tracing_subscriber::prelude::*;

fn init_logging() {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "promptarch") {
        let log_dir = proj_dirs.data_dir().join("logs");
        let _ = std::fs::create_dir_all(&log_dir);

        let log_path = log_dir.join("promptarch.log");

        let file = match std::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&log_path)
        {
            Ok(file) => file,
            Err(e) => {
                eprintln!("Failed to open log file {:?}: {}", log_path, e);
                return;
            }
        };

        // GUI framework (eframe, egui, wgpu) logs are captured via the
        // tracing-log bridge
        let filter = tracing_subscriber::EnvFilter::builder()
            .parse("promptarch=info,eframe=info,egui=warn,wgpu=warn,winit=warn,ehttp=warn")
            .expect("Failed to parse env filter");

        let subscriber = tracing_subscriber::registry().with(filter).with(
            tracing_subscriber::fmt::layer()
                .with_writer(move || file.try_clone().expect("Failed to clone file handle"))
                .with_ansi(false), // No ANSI colors in file
        );

        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");

        // Bridge log crate events to tracing (for eframe, egui, wgpu, etc.)
        // This must be done AFTER setting the tracing subscriber
        tracing_log::LogTracer::init().expect("Failed to initialize log-to-tracing bridge");

        tracing::info!("Logging initialized to: {:?}", log_path);
    }
}

fn setup_panic_handler() {
    // Install a panic handler that writes to a crash log file
    // This catches panics even if normal logging hasn't been initialized yet
    std::panic::set_hook(Box::new(|panic_info| {
        let crash_msg = format!(
            "Prompt Architect crashed!\n\
             Panic occurred at: {}\n\
             Details: {}\n\
             Backtrace:\n{:?}\n",
            panic_info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown location".to_string()),
            panic_info
                .payload()
                .downcast_ref::<&str>()
                .copied()
                .or_else(|| panic_info.payload().downcast_ref::<String>().map(|s| s.as_str()))
                .unwrap_or("unknown panic"),
            std::backtrace::Backtrace::force_capture()
        );

        if let Some(proj_dirs) = directories::ProjectDirs::from("com", "", "promptarch") {
            let log_dir = proj_dirs.data_dir().join("logs");
            let _ = std::fs::create_dir_all(&log_dir);
            let crash_log_path = log_dir.join("crash.log");

            if let Ok(mut file) = std::fs::OpenOptions::new()
                .append(true)
                .create(true)
                .open(&crash_log_path)
            {
                use std::io::Write;
                let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
                let _ = writeln!(file, "\n=== CRASH at {} ===\n{}", timestamp, crash_msg);
            }

            eprintln!("\n{}", crash_msg);
            eprintln!("Crash log written to: {:?}", crash_log_path);
        } else {
            eprintln!("\n{}", crash_msg);
        }
    }));
}

fn main() -> Result<(), eframe::Error> {
    // Set up panic handler BEFORE anything else to catch early crashes
    setup_panic_handler();

    init_logging();

    tracing::info!(
        "promptarch starting (admin build: {})",
        promptarch::app::ADMIN_BUILD
    );

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0])
            .with_title("Prompt Architect"),
        ..Default::default()
    };

    eframe::run_native(
        "Prompt Architect",
        native_options,
        Box::new(|cc| {
            // Install image loaders so preview images (remote URLs and
            // in-memory data payloads) render
            egui_extras::install_image_loaders(&cc.egui_ctx);

            Ok(Box::new(promptarch::ArchitectApp::new(cc)))
        }),
    )?;

    Ok(())
}
