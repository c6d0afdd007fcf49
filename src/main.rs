use std::process::ExitCode;

fn main() -> ExitCode {
    text_graph::cli::main()
}
