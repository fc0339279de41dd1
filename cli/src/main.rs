use clap::Parser;
use prepatch::PatchTable;

/// Prepends platform-compatibility shims to third-party C sources.
///
/// Each file in the built-in patch table (paths relative to the current
/// directory) is made to start with its shim block. Files that already
/// start with it are left alone, so running this twice is safe.
#[derive(Parser, Debug)]
#[command(name = "prepatch", version)]
struct Args {}

fn main() {
    let _args = Args::parse();
    prepatch::init_logging();

    let result = prepatch::run(PatchTable::builtin());
    std::process::exit(result.exit_code());
}
