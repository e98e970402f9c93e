use std::process;

fn main() {
    process::exit(hcltemplate::cli::run());
}
