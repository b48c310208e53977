//! Warning banner stamped onto generated files.

const GENERATED_FILE_WARNING: &str = r"// d8888b.  .d88b.       d8b   db  .d88b.  d888888b      d88888b d8888b. d888888b d888888b
// 88  `8D .8P  Y8.      888o  88 .8P  Y8. `~~88~~'      88'     88  `8D   `88'   `~~88~~'
// 88   88 88    88      88V8o 88 88    88    88         88ooooo 88   88    88       88
// 88   88 88    88      88 V8o88 88    88    88         88~~~~~ 88   88    88       88
// 88  .8D `8b  d8'      88  V888 `8b  d8'    88         88.     88  .8D   .88.      88
// Y8888D'  `Y88P'       VP   V8P  `Y88P'     YP         Y88888P Y8888D' Y888888P    YP";

/// Returns the fixed warning banner followed by a blank line and a notice
/// naming the template `filename` the output was generated from.
pub fn generated_file_notice(filename: &str) -> String {
    format!("{GENERATED_FILE_WARNING}\n\n// This file was GENERATED from {filename}")
}
