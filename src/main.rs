use adfgvx::cli::{
    decode_message, encode_message, run_demo, show_grid, DecodeOptions, DemoOptions,
    EncodeOptions, GridOptions, GridSource, DEMO_MESSAGE,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("ADFGVX_VERSION");
const BUILD: &str = env!("ADFGVX_BUILD");
const PROFILE: &str = env!("ADFGVX_PROFILE");
const GIT_HASH: &str = env!("ADFGVX_GIT_HASH");

fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "adfgvx")]
#[command(author, about = "ADFGVX field cipher: 6x6 grid substitution + keyed transposition", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Grid selection shared by every command; at most one may be given
#[derive(Args)]
#[group(multiple = false)]
struct GridArgs {
    /// JSON grid file written by `adfgvx grid --output`
    #[arg(long)]
    grid: Option<PathBuf>,

    /// Numeric seed for a reproducible grid
    #[arg(long)]
    seed: Option<u64>,

    /// Passphrase both parties use to derive the same grid
    #[arg(long)]
    passphrase: Option<String>,
}

impl GridArgs {
    fn into_source(self) -> GridSource {
        if let Some(path) = self.grid {
            GridSource::File(path)
        } else if let Some(seed) = self.seed {
            GridSource::Seed(seed)
        } else if let Some(phrase) = self.passphrase {
            GridSource::Passphrase(phrase)
        } else {
            GridSource::Random
        }
    }

    fn is_given(&self) -> bool {
        self.grid.is_some() || self.seed.is_some() || self.passphrase.is_some()
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Build a substitution grid and print it
    #[command(alias = "g")]
    Grid {
        #[command(flatten)]
        source: GridArgs,

        /// Write the grid as JSON to this file
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Encode a message
    #[command(alias = "e")]
    Encode {
        /// Transposition key (no repeated characters)
        #[arg(long, required = true)]
        key: String,

        #[command(flatten)]
        source: GridArgs,

        /// Message to encode; multiple words are joined with spaces
        #[arg(required = true)]
        message: Vec<String>,
    },

    /// Decode a ciphertext
    #[command(alias = "d")]
    Decode {
        /// Transposition key (no repeated characters)
        #[arg(long, required = true)]
        key: String,

        #[command(flatten)]
        source: GridArgs,

        /// Ciphertext to decode; separators between pairs are ignored
        #[arg(required = true)]
        ciphertext: Vec<String>,
    },

    /// Encode and decode a sample message with a fresh grid
    Demo {
        /// Transposition key (no repeated characters)
        #[arg(long, default_value = "JOHN")]
        key: String,

        #[command(flatten)]
        source: GridArgs,

        /// Message to run through the cipher
        #[arg(long, default_value = DEMO_MESSAGE)]
        message: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.version {
        println!("adfgvx {}", get_version());
        return ExitCode::SUCCESS;
    }

    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            use clap::CommandFactory;
            let _ = Cli::command().print_help();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Grid { source, output } => {
            let options = GridOptions {
                source: source.into_source(),
                output,
            };
            show_grid(&options).map(|table| {
                print!("{}", table);
                if let Some(path) = &options.output {
                    println!("\nGrid written to {}", path.display());
                }
            })
        }

        Commands::Encode {
            key,
            source,
            message,
        } => {
            if !source.is_given() {
                eprintln!("Warning: no grid given, encoding with a random grid that cannot be recovered");
            }
            let options = EncodeOptions {
                key,
                grid: source.into_source(),
            };
            encode_message(&message.join(" "), &options).map(|coded| println!("{}", coded))
        }

        Commands::Decode {
            key,
            source,
            ciphertext,
        } => {
            if !source.is_given() {
                eprintln!("Warning: no grid given, decoding with a random grid");
            }
            let options = DecodeOptions {
                key,
                grid: source.into_source(),
            };
            decode_message(&ciphertext.join(" "), &options).map(|plain| println!("{}", plain))
        }

        Commands::Demo {
            key,
            source,
            message,
        } => {
            let options = DemoOptions {
                key,
                grid: source.into_source(),
                message,
            };
            run_demo(&options).map(|report| print!("{}", report))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
