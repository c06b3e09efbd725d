use arboard::Clipboard;
use colored::Colorize;

use crate::api_client::ApiClient;
use crate::config::Config;
use crate::error::{ClientError, Result};
use crate::input::{AnalyzerForm, GeneratorForm};
use crate::orchestrator::Controller;
use crate::render::TerminalView;
use crate::view::View;

/// Flags of `pk generate`. `None`/`false` keep the configured default.
#[derive(Debug, Default, Clone)]
pub struct GenerateOptions {
    pub length: Option<i64>,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_numbers: bool,
    pub no_symbols: bool,
    pub copy: bool,
}

impl GenerateOptions {
    /// Apply the flags on top of the configured generator controls.
    pub fn to_form(&self, config: &Config) -> GeneratorForm {
        let mut form = GeneratorForm::from(&config.generator);
        if let Some(length) = self.length {
            form.length = length;
        }
        form.include_upper &= !self.no_upper;
        form.include_lower &= !self.no_lower;
        form.include_numbers &= !self.no_numbers;
        form.include_symbols &= !self.no_symbols;
        form
    }
}

fn resolve_server(config: &Config, server: Option<&str>) -> String {
    server
        .map(|s| s.to_string())
        .unwrap_or_else(|| config.server_url.clone())
}

/// Generate a password and print it with its analysis.
pub async fn generate(server: Option<&str>, options: &GenerateOptions) -> Result<()> {
    let config = Config::load_or_default();
    let form = options.to_form(&config);
    let controller = Controller::new(
        ApiClient::new(&resolve_server(&config, server)),
        TerminalView::new(false),
    );

    let result = controller.generate(&form).await?;

    if options.copy {
        match copy_to_clipboard(&result.password) {
            Ok(()) => println!("  {}", "Copied to clipboard".green()),
            Err(e) => controller.view().notify(&e.to_string()),
        }
    }

    Ok(())
}

/// Analyze a password given on the command line or typed at a hidden prompt.
pub async fn analyze(server: Option<&str>, password: Option<String>, show: bool) -> Result<()> {
    let config = Config::load_or_default();
    let password = match password {
        Some(password) => password,
        None => rpassword::prompt_password("Password to analyze: ")?,
    };

    let controller = Controller::new(
        ApiClient::new(&resolve_server(&config, server)),
        TerminalView::new(show),
    );
    controller.analyze(&AnalyzerForm::new(password)).await?;
    Ok(())
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().map_err(|e| ClientError::Clipboard(e.to_string()))?;
    clipboard
        .set_text(text.to_string())
        .map_err(|e| ClientError::Clipboard(e.to_string()))?;
    Ok(())
}
