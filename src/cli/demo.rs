use crate::cli::build_cipher;
use crate::cli::grid::{render_grid, GridSource};
use crate::error::Result;

/// Message enciphered by the demo command
pub const DEMO_MESSAGE: &str = "This is the message to encode";

/// Options for the demo command
#[derive(Debug, Clone)]
pub struct DemoOptions {
    pub key: String,
    pub grid: GridSource,
    pub message: String,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            key: "JOHN".into(),
            grid: GridSource::Random,
            message: DEMO_MESSAGE.into(),
        }
    }
}

/// Print the grid, then the message encoded and decoded again
pub fn run_demo(options: &DemoOptions) -> Result<String> {
    let cipher = build_cipher(&options.key, &options.grid)?;
    let coded = cipher.try_encode(&options.message)?;
    let decoded = cipher.try_decode(&coded)?;

    let mut output = render_grid(cipher.grid());
    output.push('\n');
    output.push_str(&format!("  Key is: {}\n", options.key));
    output.push_str(&format!("Original: {}\n", options.message));
    output.push_str(&format!("   Coded: {}\n", coded));
    output.push_str(&format!(" Decoded: {}\n", decoded));
    Ok(output)
}
