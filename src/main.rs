use std::io::{self, BufRead};

use clap::Parser;
use shunter::{
    error::Error,
    evaluate_expression,
    interpreter::{evaluator::evaluate, lexer::tokenize, postfix::to_postfix},
};

/// shunter evaluates a single-line infix arithmetic expression with the
/// operators + - * / ^, the functions sin cos tg ln sqrt, and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Prints the postfix (reverse Polish) form of the expression before the
    /// result.
    #[arg(short, long)]
    postfix: bool,

    /// The expression to evaluate. Reads one line from standard input when
    /// omitted.
    expression: Option<String>,
}

/// Runs the pipeline, optionally printing the intermediate postfix form.
fn run(expression: &str, show_postfix: bool) -> Result<f64, Error> {
    if show_postfix {
        let postfix = to_postfix(tokenize(expression)?)?;
        let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
        println!("{}", rendered.join(" "));
        Ok(evaluate(&postfix)?)
    } else {
        evaluate_expression(expression)
    }
}

fn main() {
    let args = Args::parse();

    let expression = args.expression.unwrap_or_else(|| {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            eprintln!("Failed to read an expression from standard input.");
            std::process::exit(1);
        }
        line.trim_end_matches(['\r', '\n']).to_string()
    });

    match run(&expression, args.postfix) {
        Ok(result) => println!("{result}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}
