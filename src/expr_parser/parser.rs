use anyhow::{bail, Result};

use crate::set_algebra::{
    ops::{difference, intersection, union},
    set::Set,
};

use super::lexer::Token;

#[derive(Debug, PartialEq)]
pub enum Expr {
    Literal(Set),
    Union(Box<Expr>, Box<Expr>),
    Intersection(Box<Expr>, Box<Expr>),
    Difference(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn evaluate(&self) -> Set {
        match self {
            Expr::Literal(set) => set.clone(),
            Expr::Union(l, r) => union(&l.evaluate(), &r.evaluate()),
            Expr::Intersection(l, r) => intersection(&l.evaluate(), &r.evaluate()),
            Expr::Difference(l, r) => difference(&l.evaluate(), &r.evaluate()),
        }
    }
}

/// Recursive descent over `+`/`-` (loosest), then `&`, then literals and
/// parentheses. All binary operators are left associative.
pub struct Parser {
    tokens: Vec<Token>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn parse(&mut self) -> Result<Expr> {
        let expr = self.parse_expr()?;
        self.consume(Token::EOF)?;
        Ok(expr)
    }

    fn parse_expr(&mut self) -> Result<Expr> {
        let mut left = self.parse_term()?;
        loop {
            if self.matches(Token::Plus) {
                self.consume(Token::Plus)?;
                let right = self.parse_term()?;
                left = Expr::Union(Box::new(left), Box::new(right));
            } else if self.matches(Token::Minus) {
                self.consume(Token::Minus)?;
                let right = self.parse_term()?;
                left = Expr::Difference(Box::new(left), Box::new(right));
            } else {
                break;
            }
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expr> {
        let mut left = self.parse_primary()?;
        while self.matches(Token::Ampersand) {
            self.consume(Token::Ampersand)?;
            let right = self.parse_primary()?;
            left = Expr::Intersection(Box::new(left), Box::new(right));
        }
        Ok(left)
    }

    fn parse_primary(&mut self) -> Result<Expr> {
        match self.advance()? {
            Token::SetLiteral(text) => Ok(Expr::Literal(text.parse()?)),
            Token::LeftParen => {
                let expr = self.parse_expr()?;
                self.consume(Token::RightParen)?;
                Ok(expr)
            }
            token => bail!("Expected set literal or '(' received {:?}", token),
        }
    }

    fn matches(&self, token: Token) -> bool {
        self.tokens.get(self.position) == Some(&token)
    }

    fn consume(&mut self, token: Token) -> Result<()> {
        if self.matches(token.clone()) {
            self.position += 1;
            Ok(())
        } else {
            bail!(
                "Expected token: {:?} received {:?}",
                token,
                self.tokens.get(self.position)
            )
        }
    }

    fn advance(&mut self) -> Result<Token> {
        let Some(token) = self.tokens.get(self.position).cloned() else {
            bail!("Unexpected end of expression");
        };
        self.position += 1;
        Ok(token)
    }
}
