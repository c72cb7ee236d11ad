use clap::Parser;
use userstore::api::Arguments;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Flag names that may be written with a single dash, e.g. `-fileName`.
const SINGLE_DASH_FLAGS: [&str; 5] = ["operation", "fileName", "id", "item", "verbose"];

#[derive(Parser, Debug)]
#[command(name = "userstore")]
#[command(about = "Keep user records in a JSON file", long_about = None)]
#[command(version, long_version = LONG_VERSION)]
pub struct Cli {
    /// Operation to run: add, list, findById or remove
    #[arg(long, allow_hyphen_values = true)]
    pub operation: Option<String>,

    /// Path of the JSON file holding the users
    #[arg(long = "fileName", allow_hyphen_values = true)]
    pub file_name: Option<String>,

    /// Id to look up or remove (findById, remove)
    #[arg(long, allow_hyphen_values = true)]
    pub id: Option<String>,

    /// User to add, as JSON: {"id":"1","email":"a@b.com","age":30}
    #[arg(long, allow_hyphen_values = true)]
    pub item: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_flags(std::env::args()))
    }

    pub fn arguments(&self) -> Arguments {
        Arguments {
            operation: self.operation.clone().unwrap_or_default(),
            file_name: self.file_name.clone().unwrap_or_default(),
            id: self.id.clone().unwrap_or_default(),
            item: self.item.clone().unwrap_or_default(),
        }
    }
}

/// Rewrite `-flag` and `-flag=value` to their `--` form for known flags.
/// Everything after a bare `--` is left untouched.
pub fn normalize_flags<I>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough || arg.starts_with("--") || !arg.starts_with('-') {
                passthrough |= arg == "--";
                return arg;
            }
            let name = arg[1..].split('=').next().unwrap_or_default();
            if SINGLE_DASH_FLAGS.contains(&name) {
                format!("-{}", arg)
            } else {
                arg
            }
        })
        .collect()
}
