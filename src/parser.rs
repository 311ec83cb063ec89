use crate::ast::{Expression, Operator, Statement};
use crate::token::{Token, TokenType};
use crate::{ast, lexer};
use std::collections::HashMap;

type PrefixParseFn = fn(&mut Parser) -> Option<ast::Expression>;
type InfixParseFn = fn(&mut Parser, ast::Expression) -> Option<ast::Expression>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
    Index,
}

impl From<&Token> for Precedence {
    fn from(token: &Token) -> Self {
        match token {
            Token::Eq | Token::NotEq => Self::Equals,
            Token::LT | Token::GT => Self::LessGreater,
            Token::Plus | Token::Minus => Self::Sum,
            Token::Slash | Token::Asterisk => Self::Product,
            Token::LParen => Self::Call,
            Token::LBracket => Self::Index,
            _ => Self::Lowest,
        }
    }
}

pub struct Parser {
    lexer: lexer::Lexer,
    errors: Vec<String>,

    cur_token: Token,
    peek_token: Token,

    prefix_parse_fns: HashMap<TokenType, PrefixParseFn>,
    infix_parse_fns: HashMap<TokenType, InfixParseFn>,
}

impl Parser {
    pub fn new(mut lexer: lexer::Lexer) -> Self {
        let cur_token = lexer.next_token();
        let peek_token = lexer.next_token();

        let mut parser = Self {
            lexer,
            cur_token,
            peek_token,
            errors: Default::default(),
            prefix_parse_fns: Default::default(),
            infix_parse_fns: Default::default(),
        };

        parser.register_prefix(TokenType::Ident, Self::parse_identifier);
        parser.register_prefix(TokenType::Int, Self::parse_integer_literal);
        parser.register_prefix(TokenType::String, Self::parse_string_literal);
        parser.register_prefix(TokenType::Bang, Self::parse_prefix_expression);
        parser.register_prefix(TokenType::Minus, Self::parse_prefix_expression);
        parser.register_prefix(TokenType::True, Self::parse_boolean);
        parser.register_prefix(TokenType::False, Self::parse_boolean);
        parser.register_prefix(TokenType::LParen, Self::parse_grouped_expression);
        parser.register_prefix(TokenType::If, Self::parse_if_expression);
        parser.register_prefix(TokenType::Function, Self::parse_function_literal);
        parser.register_prefix(TokenType::LBracket, Self::parse_array_literal);
        parser.register_prefix(TokenType::LBrace, Self::parse_hash_literal);

        for token_type in [
            TokenType::Plus,
            TokenType::Minus,
            TokenType::Slash,
            TokenType::Asterisk,
            TokenType::Eq,
            TokenType::NotEq,
            TokenType::LT,
            TokenType::GT,
        ] {
            parser.register_infix(token_type, Self::parse_infix_expression);
        }
        parser.register_infix(TokenType::LParen, Self::parse_call_expression);
        parser.register_infix(TokenType::LBracket, Self::parse_index_expression);

        parser
    }

    fn register_prefix(&mut self, token_type: TokenType, func: PrefixParseFn) {
        self.prefix_parse_fns.insert(token_type, func);
    }

    fn register_infix(&mut self, token_type: TokenType, func: InfixParseFn) {
        self.infix_parse_fns.insert(token_type, func);
    }

    fn next_token(&mut self) {
        self.cur_token = self.peek_token.clone();
        self.peek_token = self.lexer.next_token();
    }

    pub fn parse_program(mut self) -> Result<ast::Program, Vec<String>> {
        let mut program = ast::Program::default();

        while !self.cur_token.is(TokenType::Eof) {
            if let Some(stmt) = self.parse_statement() {
                program.statements.push(stmt)
            }
            self.next_token();
        }

        if self.errors.is_empty() {
            Ok(program)
        } else {
            Err(self.errors)
        }
    }

    fn parse_statement(&mut self) -> Option<Statement> {
        match self.cur_token {
            Token::Let => self.parse_let_statement().map(Statement::Let),
            Token::Return => self.parse_return_statement().map(Statement::Return),
            _ => self.parse_expression_statement().map(Statement::Expr),
        }
    }

    fn parse_let_statement(&mut self) -> Option<ast::LetStatement> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenType::Ident) {
            return None;
        }

        let name: ast::Identifier = self.cur_token.clone().into();

        if !self.expect_peek(TokenType::Assign) {
            return None;
        }

        self.next_token();

        let value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::LetStatement { token, name, value })
    }

    fn parse_return_statement(&mut self) -> Option<ast::ReturnStatement> {
        let token = self.cur_token.clone();

        self.next_token();

        let return_value = self.parse_expression(Precedence::Lowest)?;

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::ReturnStatement {
            token,
            return_value,
        })
    }

    fn parse_expression_statement(&mut self) -> Option<ast::ExpressionStatement> {
        let token = self.cur_token.clone();

        let expression = self.parse_expression(Precedence::Lowest);

        if self.peek_token.is(TokenType::Semicolon) {
            self.next_token();
        }

        Some(ast::ExpressionStatement {
            token,
            expression: expression?,
        })
    }

    fn parse_expression(&mut self, precedence: Precedence) -> Option<ast::Expression> {
        let prefix = match self.prefix_parse_fns.get(&TokenType::from(&self.cur_token)) {
            Some(prefix) => *prefix,
            None => {
                self.no_prefix_parse_fn_error();
                return None;
            }
        };

        let mut left = prefix(self)?;

        while !self.peek_token.is(TokenType::Semicolon) && precedence < self.peek_precedence() {
            let infix = match self.infix_parse_fns.get(&TokenType::from(&self.peek_token)) {
                Some(infix) => *infix,
                None => return Some(left),
            };

            self.next_token();

            left = infix(self, left)?;
        }

        Some(left)
    }

    fn parse_identifier(&mut self) -> Option<ast::Expression> {
        Some(Expression::Identifier(self.cur_token.clone().into()))
    }

    fn parse_integer_literal(&mut self) -> Option<ast::Expression> {
        let token = self.cur_token.clone();

        match token.literal().parse() {
            Ok(value) => Some(Expression::IntegerLiteral(ast::IntegerLiteral {
                token,
                value,
            })),
            Err(_) => {
                self.errors.push(format!(
                    "could not parse {:?} as integer",
                    token.literal()
                ));
                None
            }
        }
    }

    fn parse_string_literal(&mut self) -> Option<ast::Expression> {
        let token = self.cur_token.clone();
        let value = token.literal();

        Some(Expression::String(ast::StringLiteral { token, value }))
    }

    fn parse_boolean(&mut self) -> Option<ast::Expression> {
        let token = self.cur_token.clone();
        let value = token.is(TokenType::True);

        Some(Expression::Boolean(ast::Boolean { token, value }))
    }

    fn parse_prefix_expression(&mut self) -> Option<ast::Expression> {
        let token = self.cur_token.clone();
        let operator = Operator::from(&token);

        self.next_token();

        let right = self.parse_expression(Precedence::Prefix)?;

        Some(Expression::Prefix(ast::PrefixExpression {
            token,
            operator,
            right: Box::new(right),
        }))
    }

    fn parse_infix_expression(&mut self, left: ast::Expression) -> Option<ast::Expression> {
        let token = self.cur_token.clone();
        let operator = Operator::from(&token);
        let precedence = self.cur_precedence();

        self.next_token();

        let right = self.parse_expression(precedence)?;

        Some(Expression::Infix(ast::InfixExpression {
            token,
            operator,
            left: Box::new(left),
            right: Box::new(right),
        }))
    }

    fn parse_grouped_expression(&mut self) -> Option<ast::Expression> {
        self.next_token();

        let expression = self.parse_expression(Precedence::Lowest);

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        expression
    }

    fn parse_if_expression(&mut self) -> Option<ast::Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        self.next_token();
        let condition = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }
        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let consequence = self.parse_block_statement();

        let alternative = if self.peek_token.is(TokenType::Else) {
            self.next_token();

            if !self.expect_peek(TokenType::LBrace) {
                return None;
            }

            Some(self.parse_block_statement())
        } else {
            None
        };

        Some(Expression::If(ast::IfExpression {
            token,
            condition: Box::new(condition),
            consequence,
            alternative,
        }))
    }

    fn parse_block_statement(&mut self) -> ast::BlockStatement {
        let token = self.cur_token.clone();
        let mut statements = vec![];

        self.next_token();

        while !self.cur_token.is(TokenType::RBrace) && !self.cur_token.is(TokenType::Eof) {
            if let Some(stmt) = self.parse_statement() {
                statements.push(stmt);
            }
            self.next_token();
        }

        ast::BlockStatement { token, statements }
    }

    fn parse_function_literal(&mut self) -> Option<ast::Expression> {
        let token = self.cur_token.clone();

        if !self.expect_peek(TokenType::LParen) {
            return None;
        }

        let parameters = self.parse_function_parameters()?;

        if !self.expect_peek(TokenType::LBrace) {
            return None;
        }

        let body = self.parse_block_statement();

        Some(Expression::Function(ast::FunctionLiteral {
            token,
            parameters,
            body,
        }))
    }

    fn parse_function_parameters(&mut self) -> Option<Vec<ast::Identifier>> {
        let mut identifiers = vec![];

        if self.peek_token.is(TokenType::RParen) {
            self.next_token();
            return Some(identifiers);
        }

        self.next_token();
        identifiers.push(self.cur_token.clone().into());

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            identifiers.push(self.cur_token.clone().into());
        }

        if !self.expect_peek(TokenType::RParen) {
            return None;
        }

        Some(identifiers)
    }

    fn parse_call_expression(&mut self, function: ast::Expression) -> Option<ast::Expression> {
        let token = self.cur_token.clone();
        let arguments = self.parse_expression_list(TokenType::RParen)?;

        Some(Expression::Call(ast::CallExpression {
            token,
            function: Box::new(function),
            arguments,
        }))
    }

    fn parse_array_literal(&mut self) -> Option<ast::Expression> {
        let token = self.cur_token.clone();
        let elements = self.parse_expression_list(TokenType::RBracket)?;

        Some(Expression::Array(ast::ArrayLiteral { token, elements }))
    }

    fn parse_expression_list(&mut self, end: TokenType) -> Option<Vec<ast::Expression>> {
        let mut list = vec![];

        if self.peek_token.is(end) {
            self.next_token();
            return Some(list);
        }

        self.next_token();
        list.push(self.parse_expression(Precedence::Lowest)?);

        while self.peek_token.is(TokenType::Comma) {
            self.next_token();
            self.next_token();
            list.push(self.parse_expression(Precedence::Lowest)?);
        }

        if !self.expect_peek(end) {
            return None;
        }

        Some(list)
    }

    fn parse_index_expression(&mut self, left: ast::Expression) -> Option<ast::Expression> {
        let token = self.cur_token.clone();

        self.next_token();
        let index = self.parse_expression(Precedence::Lowest)?;

        if !self.expect_peek(TokenType::RBracket) {
            return None;
        }

        Some(Expression::Index(ast::IndexExpression {
            token,
            left: Box::new(left),
            index: Box::new(index),
        }))
    }

    fn parse_hash_literal(&mut self) -> Option<ast::Expression> {
        let token = self.cur_token.clone();
        let mut pairs = vec![];

        while !self.peek_token.is(TokenType::RBrace) {
            self.next_token();
            let key = self.parse_expression(Precedence::Lowest)?;

            if !self.expect_peek(TokenType::Colon) {
                return None;
            }

            self.next_token();
            let value = self.parse_expression(Precedence::Lowest)?;

            pairs.push((key, value));

            if !self.peek_token.is(TokenType::RBrace) && !self.expect_peek(TokenType::Comma) {
                return None;
            }
        }

        if !self.expect_peek(TokenType::RBrace) {
            return None;
        }

        Some(Expression::Hash(ast::HashLiteral { token, pairs }))
    }

    fn cur_precedence(&self) -> Precedence {
        Precedence::from(&self.cur_token)
    }

    fn peek_precedence(&self) -> Precedence {
        Precedence::from(&self.peek_token)
    }

    fn expect_peek(&mut self, expected: TokenType) -> bool {
        if self.peek_token.is(expected) {
            self.next_token();
            true
        } else {
            self.peek_error(expected);
            false
        }
    }

    fn peek_error(&mut self, expected: TokenType) {
        self.errors.push(format!(
            "expected next token to be {}, got {} instead",
            expected,
            TokenType::from(&self.peek_token)
        ));
    }

    fn no_prefix_parse_fn_error(&mut self) {
        self.errors.push(format!(
            "no prefix parse function for {} found",
            TokenType::from(&self.cur_token)
        ));
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::lexer::Lexer;

    fn parse(input: &str) -> ast::Program {
        Parser::new(Lexer::new(input.to_owned()))
            .parse_program()
            .expect("Parse errors found")
    }

    fn parse_single_expression(input: &str) -> ast::Expression {
        let program = parse(input);

        assert_eq!(program.statements.len(), 1);
        match program.statements.into_iter().next().unwrap() {
            Statement::Expr(stmt) => stmt.expression,
            stmt => panic!("not an expression statement: {}", stmt),
        }
    }

    #[test]
    fn test_let_statements() {
        let cases = vec![
            ("let x = 5;", "x", "5"),
            ("let y = true;", "y", "true"),
            ("let foobar = y;", "foobar", "y"),
        ];

        for (input, name, value) in cases.into_iter() {
            let program = parse(input);

            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Let(let_stmt) => {
                    assert_eq!(let_stmt.token.literal(), "let");
                    assert_eq!(let_stmt.name.value, name);
                    assert_eq!(let_stmt.name.token_literal(), name);
                    assert_eq!(let_stmt.value.to_string(), value);
                }
                stmt => panic!("not a let statement: {}", stmt),
            }
        }
    }

    #[test]
    fn test_return_statements() {
        let cases = vec![
            ("return 5;", "5"),
            ("return true;", "true"),
            ("return foobar;", "foobar"),
        ];

        for (input, value) in cases.into_iter() {
            let program = parse(input);

            assert_eq!(program.statements.len(), 1);

            match &program.statements[0] {
                Statement::Return(ret_stmt) => {
                    assert_eq!(ret_stmt.token.literal(), "return");
                    assert_eq!(ret_stmt.return_value.to_string(), value);
                }
                stmt => panic!("not a return statement: {}", stmt),
            }
        }
    }

    #[test]
    fn test_identifier_expression() {
        match parse_single_expression("foobar;") {
            Expression::Identifier(ident) => {
                assert_eq!(ident.value, "foobar");
                assert_eq!(ident.token_literal(), "foobar");
            }
            expr => panic!("not an identifier: {}", expr),
        }
    }

    #[test]
    fn test_integer_literal_expression() {
        match parse_single_expression("5;") {
            Expression::IntegerLiteral(int) => {
                assert_eq!(int.value, 5);
                assert_eq!(int.token.literal(), "5");
            }
            expr => panic!("not an integer literal: {}", expr),
        }
    }

    #[test]
    fn test_string_literal_expression() {
        match parse_single_expression("\"hello world\";") {
            Expression::String(s) => assert_eq!(s.value, "hello world"),
            expr => panic!("not a string literal: {}", expr),
        }
    }

    #[test]
    fn test_boolean_expression() {
        let cases = vec![("true;", true), ("false;", false)];

        for (input, value) in cases.into_iter() {
            match parse_single_expression(input) {
                Expression::Boolean(b) => assert_eq!(b.value, value),
                expr => panic!("not a boolean: {}", expr),
            }
        }
    }

    #[test]
    fn test_parsing_prefix_expressions() {
        let cases = vec![
            ("!5;", Operator::Bang, "5"),
            ("-15;", Operator::Minus, "15"),
            ("!true;", Operator::Bang, "true"),
            ("!false;", Operator::Bang, "false"),
        ];

        for (input, operator, right) in cases.into_iter() {
            match parse_single_expression(input) {
                Expression::Prefix(prefix) => {
                    assert_eq!(prefix.operator, operator);
                    assert_eq!(prefix.right.to_string(), right);
                }
                expr => panic!("not a prefix expression: {}", expr),
            }
        }
    }

    #[test]
    fn test_parsing_infix_expressions() {
        let cases = vec![
            ("5 + 5;", "5", Operator::Plus, "5"),
            ("5 - 5;", "5", Operator::Minus, "5"),
            ("5 * 5;", "5", Operator::Asterisk, "5"),
            ("5 / 5;", "5", Operator::Slash, "5"),
            ("5 > 5;", "5", Operator::GT, "5"),
            ("5 < 5;", "5", Operator::LT, "5"),
            ("5 == 5;", "5", Operator::Eq, "5"),
            ("5 != 5;", "5", Operator::NotEq, "5"),
            ("true == true", "true", Operator::Eq, "true"),
            ("true != false", "true", Operator::NotEq, "false"),
            ("false == false", "false", Operator::Eq, "false"),
        ];

        for (input, left, operator, right) in cases.into_iter() {
            match parse_single_expression(input) {
                Expression::Infix(infix) => {
                    assert_eq!(infix.left.to_string(), left);
                    assert_eq!(infix.operator, operator);
                    assert_eq!(infix.right.to_string(), right);
                }
                expr => panic!("not an infix expression: {}", expr),
            }
        }
    }

    #[test]
    fn test_operator_precedence_parsing() {
        let cases = vec![
            ("-a * b", "((-a) * b)"),
            ("!-a", "(!(-a))"),
            ("a + b + c", "((a + b) + c)"),
            ("a + b - c", "((a + b) - c)"),
            ("a * b * c", "((a * b) * c)"),
            ("a * b / c", "((a * b) / c)"),
            ("a + b / c", "(a + (b / c))"),
            ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
            ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
            ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
            ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
            (
                "3 + 4 * 5 == 3 * 1 + 4 * 5",
                "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))",
            ),
            ("true", "true"),
            ("false", "false"),
            ("3 > 5 == false", "((3 > 5) == false)"),
            ("3 < 5 == true", "((3 < 5) == true)"),
            ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
            ("(5 + 5) * 2", "((5 + 5) * 2)"),
            ("2 / (5 + 5)", "(2 / (5 + 5))"),
            ("-(5 + 5)", "(-(5 + 5))"),
            ("!(true == true)", "(!(true == true))"),
            ("a + add(b * c) + d", "((a + add((b * c))) + d)"),
            (
                "add(a, b, 1, 2 * 3, 4 + 5, add(6, 7 * 8))",
                "add(a, b, 1, (2 * 3), (4 + 5), add(6, (7 * 8)))",
            ),
            (
                "add(a + b + c * d / f + g)",
                "add((((a + b) + ((c * d) / f)) + g))",
            ),
            (
                "a * [1, 2, 3, 4][b * c] * d",
                "((a * ([1, 2, 3, 4][(b * c)])) * d)",
            ),
            (
                "add(a * b[2], b[1], 2 * [1, 2][1])",
                "add((a * (b[2])), (b[1]), (2 * ([1, 2][1])))",
            ),
        ];

        for (input, expected) in cases.into_iter() {
            assert_eq!(parse(input).to_string(), expected);
        }
    }

    #[test]
    fn test_if_expression() {
        match parse_single_expression("if (x < y) { x }") {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.condition.to_string(), "(x < y)");
                assert_eq!(if_expr.consequence.to_string(), "x");
                assert!(if_expr.alternative.is_none());
            }
            expr => panic!("not an if expression: {}", expr),
        }
    }

    #[test]
    fn test_if_else_expression() {
        match parse_single_expression("if (x < y) { x } else { y }") {
            Expression::If(if_expr) => {
                assert_eq!(if_expr.condition.to_string(), "(x < y)");
                assert_eq!(if_expr.consequence.to_string(), "x");
                assert_eq!(if_expr.alternative.unwrap().to_string(), "y");
            }
            expr => panic!("not an if expression: {}", expr),
        }
    }

    #[test]
    fn test_function_literal_parsing() {
        match parse_single_expression("fn(x, y) { x + y; }") {
            Expression::Function(func) => {
                assert_eq!(func.parameters.len(), 2);
                assert_eq!(func.parameters[0].value, "x");
                assert_eq!(func.parameters[1].value, "y");
                assert_eq!(func.body.statements.len(), 1);
                assert_eq!(func.body.to_string(), "(x + y)");
            }
            expr => panic!("not a function literal: {}", expr),
        }
    }

    #[test]
    fn test_function_parameter_parsing() {
        let cases = vec![
            ("fn() {};", vec![]),
            ("fn(x) {};", vec!["x"]),
            ("fn(x, y, z) {};", vec!["x", "y", "z"]),
        ];

        for (input, expected) in cases.into_iter() {
            match parse_single_expression(input) {
                Expression::Function(func) => {
                    let parameters: Vec<String> =
                        func.parameters.iter().map(|p| p.value.clone()).collect();
                    assert_eq!(parameters, expected);
                }
                expr => panic!("not a function literal: {}", expr),
            }
        }
    }

    #[test]
    fn test_call_expression_parsing() {
        match parse_single_expression("add(1, 2 * 3, 4 + 5);") {
            Expression::Call(call) => {
                assert_eq!(call.function.to_string(), "add");
                assert_eq!(call.arguments.len(), 3);
                assert_eq!(call.arguments[0].to_string(), "1");
                assert_eq!(call.arguments[1].to_string(), "(2 * 3)");
                assert_eq!(call.arguments[2].to_string(), "(4 + 5)");
            }
            expr => panic!("not a call expression: {}", expr),
        }
    }

    #[test]
    fn test_parsing_array_literals() {
        match parse_single_expression("[1, 2 * 2, 3 + 3]") {
            Expression::Array(array) => {
                assert_eq!(array.elements.len(), 3);
                assert_eq!(array.elements[0].to_string(), "1");
                assert_eq!(array.elements[1].to_string(), "(2 * 2)");
                assert_eq!(array.elements[2].to_string(), "(3 + 3)");
            }
            expr => panic!("not an array literal: {}", expr),
        }
    }

    #[test]
    fn test_parsing_empty_array_literal() {
        match parse_single_expression("[]") {
            Expression::Array(array) => assert!(array.elements.is_empty()),
            expr => panic!("not an array literal: {}", expr),
        }
    }

    #[test]
    fn test_parsing_index_expressions() {
        match parse_single_expression("myArray[1 + 1]") {
            Expression::Index(index) => {
                assert_eq!(index.left.to_string(), "myArray");
                assert_eq!(index.index.to_string(), "(1 + 1)");
            }
            expr => panic!("not an index expression: {}", expr),
        }
    }

    #[test]
    fn test_parsing_hash_literals_string_keys() {
        match parse_single_expression("{\"one\": 1, \"two\": 2, \"three\": 3}") {
            Expression::Hash(hash) => {
                let expected = vec![("one", "1"), ("two", "2"), ("three", "3")];

                assert_eq!(hash.pairs.len(), expected.len());
                for ((key, value), (expected_key, expected_value)) in
                    hash.pairs.iter().zip(expected.into_iter())
                {
                    assert_eq!(key.to_string(), expected_key);
                    assert_eq!(value.to_string(), expected_value);
                }
            }
            expr => panic!("not a hash literal: {}", expr),
        }
    }

    #[test]
    fn test_parsing_empty_hash_literal() {
        match parse_single_expression("{}") {
            Expression::Hash(hash) => assert!(hash.pairs.is_empty()),
            expr => panic!("not a hash literal: {}", expr),
        }
    }

    #[test]
    fn test_parsing_hash_literals_with_expressions() {
        match parse_single_expression("{\"one\": 0 + 1, \"two\": 10 - 8, \"three\": 15 / 5}") {
            Expression::Hash(hash) => {
                let expected = vec![
                    ("one", "(0 + 1)"),
                    ("two", "(10 - 8)"),
                    ("three", "(15 / 5)"),
                ];

                assert_eq!(hash.pairs.len(), expected.len());
                for ((key, value), (expected_key, expected_value)) in
                    hash.pairs.iter().zip(expected.into_iter())
                {
                    assert_eq!(key.to_string(), expected_key);
                    assert_eq!(value.to_string(), expected_value);
                }
            }
            expr => panic!("not a hash literal: {}", expr),
        }
    }

    #[test]
    fn test_parsing_hash_literals_mixed_keys() {
        match parse_single_expression("{1: \"one\", true: 2, \"three\": 3}") {
            Expression::Hash(hash) => {
                assert_eq!(hash.pairs.len(), 3);
                assert_eq!(hash.pairs[0].0.to_string(), "1");
                assert_eq!(hash.pairs[1].0.to_string(), "true");
                assert_eq!(hash.pairs[2].0.to_string(), "three");
            }
            expr => panic!("not a hash literal: {}", expr),
        }
    }

    #[test]
    fn test_parse_errors() {
        let cases = vec![
            (
                "let x 5;",
                "expected next token to be Assign, got Int instead",
            ),
            (
                "let = 10;",
                "expected next token to be Ident, got Assign instead",
            ),
            ("5 + ;", "no prefix parse function for Semicolon found"),
            (
                "9999999999999999999999",
                "could not parse \"9999999999999999999999\" as integer",
            ),
        ];

        for (input, expected) in cases.into_iter() {
            let errors = Parser::new(Lexer::new(input.to_owned()))
                .parse_program()
                .expect_err("expected parse errors");

            assert!(
                errors.iter().any(|err| err == expected),
                "errors {:?} do not contain {:?}",
                errors,
                expected
            );
        }
    }

    #[test]
    fn test_parsing_continues_after_error() {
        let input = "let x 5; let y = 10;";

        let errors = Parser::new(Lexer::new(input.to_owned()))
            .parse_program()
            .expect_err("expected parse errors");

        assert_eq!(errors.len(), 1);
    }
}
