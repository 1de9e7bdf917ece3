use clap::{Parser, Subcommand};
use listclone::cli::{create_archive, extract_archive, hash_file};
use std::path::PathBuf;
use std::process::ExitCode;

/// Version info from build.rs
const VERSION: &str = env!("LISTCLONE_VERSION");
const BUILD: &str = env!("LISTCLONE_BUILD");
const PROFILE: &str = env!("LISTCLONE_PROFILE");
const GIT_HASH: &str = env!("LISTCLONE_GIT_HASH");

/// Combined version string (compile-time concatenation not possible, so we build at runtime)
fn get_version() -> &'static str {
    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();
    VERSION_STRING.get_or_init(|| {
        format!("{} {} build {} ({})", PROFILE, VERSION, BUILD, GIT_HASH)
    })
}

#[derive(Parser)]
#[command(name = "listclone")]
#[command(author, about = "File hashing and directory archiving", long_about = None)]
struct Cli {
    /// Print version
    #[arg(short = 'V', long)]
    version: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the SHA-256 digest of a file
    #[command(alias = "h")]
    Hash {
        /// File to hash
        file: PathBuf,
    },

    /// Pack a directory into a gzip-compressed archive
    #[command(alias = "a")]
    Archive {
        /// Directory to pack
        folder: PathBuf,

        /// Output archive file (conventionally .lcone)
        output: PathBuf,
    },

    /// Unpack an archive into a directory
    #[command(alias = "x")]
    Extract {
        /// Archive file to unpack
        archive: PathBuf,

        /// Destination directory (created if absent)
        dest: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle --version flag
    if cli.version {
        println!("listclone {}", get_version());
        return ExitCode::SUCCESS;
    }

    // Require a command if not showing version
    let command = match cli.command {
        Some(cmd) => cmd,
        None => {
            // Show help when no command provided
            use clap::CommandFactory;
            Cli::command().print_help().unwrap();
            println!();
            return ExitCode::SUCCESS;
        }
    };

    let result = match command {
        Commands::Hash { file } => match hash_file(&file) {
            Ok(digest) => {
                println!("Hash for {}: {}", file.display(), digest);
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Archive { folder, output } => match create_archive(&folder, &output) {
            Ok(()) => {
                println!("Created {} from {}", output.display(), folder.display());
                Ok(())
            }
            Err(e) => Err(e),
        },

        Commands::Extract { archive, dest } => match extract_archive(&archive, &dest) {
            Ok(()) => {
                println!("Extracted {} to {}", archive.display(), dest.display());
                Ok(())
            }
            Err(e) => Err(e),
        },
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
