use crate::{Token, TokenSequence};
use std::collections::BTreeSet;
use std::fmt::{Display, Error, Formatter};
use std::ops::Index;
use std::slice::Iter;

impl TokenSequence {
    /// Create a new sequence from a vector of tokens.
    pub fn new(tokens: Vec<Token>) -> TokenSequence {
        TokenSequence(tokens)
    }

    /// Number of tokens in this sequence.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View the tokens of this sequence as a slice.
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    pub fn iter(&self) -> Iter<'_, Token> {
        self.0.iter()
    }

    /// Convert the sequence into its underlying vector.
    pub fn into_vec(self) -> Vec<Token> {
        self.0
    }

    /// Names of all distinct variables in this sequence, in ascending lexicographic order.
    pub fn variables(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .0
            .iter()
            .filter(|t| t.is_variable())
            .map(|t| t.value())
            .collect();
        names.into_iter().map(|name| name.to_string()).collect()
    }
}

impl From<Vec<Token>> for TokenSequence {
    fn from(tokens: Vec<Token>) -> Self {
        TokenSequence(tokens)
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Allow indexing of `TokenSequence` by token position.
impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

/// Tokens are printed separated by a single space.
impl Display for TokenSequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut tokens = self.0.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{}", first)?;
            for token in tokens {
                write!(f, " {}", token)?;
            }
        }
        Ok(())
    }
}
