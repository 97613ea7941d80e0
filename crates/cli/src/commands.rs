use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum Commands {
    /// Compile an expression tree and print the filter tree as JSON
    Compile {
        #[command(flatten)]
        input: InputArgs,

        #[arg(
            long,
            help = "If specified, writes the filter tree to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Check whether an expression tree compiles, without building a filter
    Validate {
        #[command(flatten)]
        input: InputArgs,

        #[arg(
            long,
            help = "If specified, writes the JSON report to this file instead of stdout"
        )]
        output: Option<String>,
    },
    /// Print the default compiler options as JSON
    Options,
}

#[derive(Args)]
pub struct InputArgs {
    #[arg(long, help = "JSON expression tree file path, or '-' for stdin")]
    pub expr: String,

    #[arg(
        long = "bind",
        default_value = "d",
        help = "Variable an attribute path may be rooted at; the first one is the document"
    )]
    pub bindings: Vec<String>,

    #[arg(long, help = "JSON compiler options file path")]
    pub options: Option<String>,
}
