use clap::Parser;

#[derive(Parser, Debug, Default)]
#[command(name = "context7-api")]
#[command(about = "Command-line client for the Context7 documentation API", long_about = None)]
pub struct Args {
    #[arg(short = 'v', long = "verbose", help = "Print diagnostic logs to stderr")]
    pub verbose: bool,

    #[arg(
        long = "strict",
        help = "Exit with status 1 when the API request fails"
    )]
    pub strict: bool,

    #[arg(
        long = "api-url",
        help = "Custom API base URL (e.g., http://localhost:8080/api/v2)"
    )]
    pub api_url: Option<String>,

    #[arg(
        long = "env-file",
        help = "File containing a CONTEXT7_API_KEY = \"...\" line"
    )]
    pub env_file: Option<String>,

    #[arg(long = "timeout", help = "Request timeout in seconds (default: none)")]
    pub timeout: Option<u64>,

    #[arg(
        help = "Subcommand and its arguments: search <libraryName> <query> | context <libraryId> <query>",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}
