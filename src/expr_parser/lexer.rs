use anyhow::{bail, Result};

#[derive(Debug, PartialEq, Clone)]
pub enum Token {
    SetLiteral(String),
    Plus,
    Minus,
    Ampersand,
    LeftParen,
    RightParen,
    EOF,
}

pub fn lexer(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    while let Some(&ch) = chars.peek() {
        match ch {
            // Skip whitespace
            c if c.is_whitespace() => {
                chars.next();
            }
            '+' => {
                tokens.push(Token::Plus);
                chars.next();
            }
            '-' => {
                tokens.push(Token::Minus);
                chars.next();
            }
            '&' => {
                tokens.push(Token::Ampersand);
                chars.next();
            }
            '(' => {
                tokens.push(Token::LeftParen);
                chars.next();
            }
            ')' => {
                tokens.push(Token::RightParen);
                chars.next();
            }
            '{' => {
                let mut literal = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    literal.push(c);
                    if c == '}' {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    bail!("Unterminated set literal: {}", literal);
                }
                tokens.push(Token::SetLiteral(literal));
            }
            _ => bail!("Unexpected character: {}", ch),
        }
    }
    tokens.push(Token::EOF);
    Ok(tokens)
}
