use pest::Parser;
use turtle_svg::{Rule, TranslationParser};

fn main() {
    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "F:draw 10, +:angle 25.7, C:color 255 128 0, [:push, ]:pop".to_string());

    println!("Parsing: {}", input);
    println!();

    match TranslationParser::parse(Rule::table, &input) {
        Ok(pairs) => {
            println!("{}", pest_ascii_tree::into_ascii_tree(pairs).unwrap());
        }
        Err(e) => {
            eprintln!("Parse error: {}", e);
        }
    }
}
