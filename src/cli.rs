// File: ./src/cli.rs
//! Shared command-line interface logic, like printing help.

pub fn print_help(binary_name: &str) {
    println!(
        "todo-parser v{} - Markdown TODO-list parser for AI-generated study plans",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!("    {} [<file>] [--json] [--config <path>]", binary_name);
    println!("    {} --help", binary_name);
    println!();
    println!("Reads markdown from <file> (or stdin) and prints the parsed study");
    println!("plan, grouped by section. With --json, prints one creation record");
    println!("per line instead, ready for submission to the record store.");
    println!();
    println!("OPTIONS:");
    println!("    --json                Output creation records as JSON lines.");
    println!("    -c, --config <path>   Use a specific config file (TOML).");
    println!("    -h, --help            Show this help message.");
    println!();
    println!("MARKER SYNTAX (recognized inside task lines):");
    println!("    30分 / 1.5時間 / 2h    Study time (minutes are converted to hours)");
    println!("    優先度: 高|中|低|1-3   Priority (高/1 = highest)");
    println!("    目標: <text>           Goal, captured up to the next 、 or 。");
    println!();
    println!("LINE SYNTAX:");
    println!("    ## heading             Starts a new section");
    println!("    - item / 1. item       Task lines (bare prose lines also count)");
}
