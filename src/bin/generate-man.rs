// Generates the tosh man page to stdout:
//   cargo run --bin generate-man > tosh.1

use clap::CommandFactory;
use clap_mangen::Man;
use tosh::host::Cli;

fn main() -> std::io::Result<()> {
    let cmd = Cli::command();
    let man = Man::new(cmd);
    man.render(&mut std::io::stdout())
}
