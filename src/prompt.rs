// Console input helpers for the menu loop.
use std::collections::BTreeSet;
use std::io::{self, Write};

/// Print `label` and read one trimmed line from stdin. A closed stdin reads
/// as `None`.
pub fn read_line(label: &str) -> Option<String> {
    print!("{}", label);
    let _ = io::stdout().flush();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(buf.trim().to_string()),
    }
}

pub fn read_choice() -> Option<String> {
    read_line("Enter choice: ")
}

/// Ask whether to keep going after a dashboard render; `true` for `Y`.
pub fn prompt_back_to_menu() -> bool {
    loop {
        let Some(resp) = read_line("Back to Filter Options (Y/N): ") else {
            return false;
        };
        match resp.to_uppercase().as_str() {
            "Y" => return true,
            "N" => return false,
            _ => println!("Invalid choice. Please enter Y or N."),
        }
    }
}

/// Turn `"1, 3"` (1-based positions into `options`) into the chosen values.
/// Blank input clears the selection.
pub fn parse_selection(input: &str, options: &[String]) -> Result<BTreeSet<String>, String> {
    let mut chosen = BTreeSet::new();
    for token in input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty())
    {
        let idx: usize = token
            .parse()
            .map_err(|_| format!("'{}' is not a number", token))?;
        if idx == 0 || idx > options.len() {
            return Err(format!(
                "{} is out of range; pick between 1 and {}",
                idx,
                options.len()
            ));
        }
        chosen.insert(options[idx - 1].clone());
    }
    Ok(chosen)
}

/// List `options` with their numbers, marking those already in `current`,
/// then read a new selection. Invalid input leaves `current` untouched.
pub fn multiselect(title: &str, options: &[String], current: &BTreeSet<String>) -> BTreeSet<String> {
    println!("\n{}", title);
    for (i, opt) in options.iter().enumerate() {
        let mark = if current.contains(opt) { "x" } else { " " };
        println!("  [{}] {}. {}", mark, i + 1, opt);
    }
    let Some(input) = read_line("Numbers separated by commas (blank for all): ") else {
        return current.clone();
    };
    match parse_selection(&input, options) {
        Ok(chosen) => chosen,
        Err(msg) => {
            println!("Invalid selection: {}. Keeping previous choice.", msg);
            current.clone()
        }
    }
}
