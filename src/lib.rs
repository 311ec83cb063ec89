pub mod ast;
mod builtins;
mod environment;
pub mod evaluator;
mod lexer;
pub mod object;
mod parser;
pub mod repl;
mod token;

pub use environment::{Env, Environment};
pub use lexer::Lexer;
pub use parser::Parser;
pub use token::{Token, TokenType};

use ast::Program;
use object::Object;

pub fn tokenize(input: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(input.to_owned());
    let mut tokens = vec![];

    loop {
        let token = lexer.next_token();
        let done = token.is(TokenType::Eof);
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

pub fn parse(input: &str) -> Result<Program, Vec<String>> {
    Parser::new(Lexer::new(input.to_owned())).parse_program()
}

pub fn evaluate(program: Program, env: &Env) -> object::Result<Object> {
    evaluator::eval(program.into(), env)
}
