use crate::environment::Environment;
use crate::evaluator;
use crate::lexer::Lexer;
use crate::parser::Parser;
use std::io::{self, Write};

static PROMPT: &str = ">> ";

pub fn start() {
    let env = Environment::new();

    loop {
        print!("{}", PROMPT);
        let _ = io::stdout().flush();
        let mut line = String::new();
        match io::stdin().read_line(&mut line) {
            Err(_) | Ok(0) => return,
            Ok(_) => {}
        }

        match Parser::new(Lexer::new(line)).parse_program() {
            Err(errors) => {
                for err in errors.iter() {
                    println!("\t{}", err);
                }
            }
            Ok(program) => match evaluator::eval(program.into(), &env) {
                Ok(obj) => println!("{}", obj),
                Err(err) => println!("ERROR: {}", err),
            },
        }
    }
}
