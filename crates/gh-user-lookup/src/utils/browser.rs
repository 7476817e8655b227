//! Browser utilities
//!
//! Functions for opening URLs in the system's default browser.

/// Program and arguments that open `url` on this platform
///
/// - macOS: `open`
/// - Windows: `cmd /C start`
/// - everything else: `xdg-open`
pub fn browser_command(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        // The empty argument is the window title `start` expects before the target
        (
            "cmd",
            vec![
                "/C".to_string(),
                "start".to_string(),
                String::new(),
                url.to_string(),
            ],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Open a URL in the system's default browser
pub async fn open_url(url: String) {
    let (program, args) = browser_command(&url);
    log::info!("Opening {} with {}", url, program);

    let result = tokio::process::Command::new(program)
        .args(&args)
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .spawn();

    match result {
        Ok(mut child) => {
            if let Err(e) = child.wait().await {
                log::error!("Browser process failed: {}", e);
            }
        }
        Err(e) => log::error!("Failed to open URL in browser: {}", e),
    }
}
