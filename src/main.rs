use std::process::ExitCode;

fn main() -> ExitCode {
    elm_build_graph::cli::run()
}
