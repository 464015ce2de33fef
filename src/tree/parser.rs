//! Newick parser
//!
//! Builds a binary [`TreeNode`] from Newick text. Nodes with more than two children are
//! binarized by left-folding, unary nodes are collapsed into their child, and missing
//! branch lengths default to `0.0`. Structural anomalies are rejected here so that
//! naming never sees a malformed tree.

use crate::error::TreeError;
use crate::tree::node::TreeNode;

/// Parse a Newick string into a binary tree.
pub fn parse_newick(input: &str) -> Result<TreeNode, TreeError> {
    let mut parser = Parser { input, pos: 0 };
    parser.skip_ws();
    if parser.peek().is_none() {
        return Err(TreeError::Empty);
    }
    let root = parser.parse_subtree()?;
    parser.skip_ws();
    if parser.peek() == Some(';') {
        parser.bump();
        parser.skip_ws();
    }
    if parser.peek().is_some() {
        return Err(TreeError::TrailingInput { offset: parser.pos });
    }
    Ok(root)
}

fn is_delimiter(c: char) -> bool {
    matches!(c, '(' | ')' | ',' | ':' | ';') || c.is_whitespace()
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    fn parse_subtree(&mut self) -> Result<TreeNode, TreeError> {
        self.skip_ws();
        let start = self.pos;
        if self.peek() != Some('(') {
            let id = self.parse_label()?;
            let distance = self.parse_distance()?;
            return match id {
                Some(id) => Ok(TreeNode::Leaf { id, distance }),
                None => Err(TreeError::UnnamedLeaf { offset: start }),
            };
        }

        self.bump();
        let mut children = Vec::new();
        loop {
            self.skip_ws();
            match self.peek() {
                Some(')') if children.is_empty() => {
                    return Err(TreeError::EmptyChildren { offset: start });
                }
                None => {
                    return Err(TreeError::UnexpectedEnd {
                        expected: "subtree",
                    })
                }
                _ => {}
            }
            children.push(self.parse_subtree()?);
            self.skip_ws();
            match self.bump() {
                Some(',') => continue,
                Some(')') => break,
                Some(found) => {
                    return Err(TreeError::UnexpectedChar {
                        found,
                        offset: self.pos - found.len_utf8(),
                    })
                }
                None => {
                    return Err(TreeError::UnexpectedEnd {
                        expected: "',' or ')'",
                    })
                }
            }
        }

        let label = self.parse_label()?;
        let distance = self.parse_distance()?;

        let mut children = children.into_iter();
        // `children` holds at least one element here.
        let mut node = match children.next() {
            Some(first) => first,
            None => return Err(TreeError::EmptyChildren { offset: start }),
        };
        let mut folded = false;
        for next in children {
            node = TreeNode::internal(node, next, 0.0);
            folded = true;
        }
        if folded {
            if let TreeNode::Internal { label: slot, .. } = &mut node {
                *slot = label;
            }
        }
        *node.distance_mut() += distance;
        Ok(node)
    }

    fn parse_label(&mut self) -> Result<Option<String>, TreeError> {
        self.skip_ws();
        match self.peek() {
            Some(q @ ('\'' | '"')) => {
                let start = self.pos;
                self.bump();
                let mut label = String::new();
                loop {
                    match self.bump() {
                        Some(c) if c == q => {
                            // A doubled quote inside a quoted label is a literal quote.
                            if self.peek() == Some(q) {
                                self.bump();
                                label.push(q);
                            } else {
                                break;
                            }
                        }
                        Some(c) => label.push(c),
                        None => return Err(TreeError::UnterminatedQuote { offset: start }),
                    }
                }
                Ok(Some(label))
            }
            Some(c) if !is_delimiter(c) => {
                let start = self.pos;
                while let Some(c) = self.peek() {
                    if is_delimiter(c) {
                        break;
                    }
                    self.bump();
                }
                Ok(Some(self.input[start..self.pos].to_string()))
            }
            _ => Ok(None),
        }
    }

    fn parse_distance(&mut self) -> Result<f64, TreeError> {
        self.skip_ws();
        if self.peek() != Some(':') {
            return Ok(0.0);
        }
        self.bump();
        self.skip_ws();
        let start = self.pos;
        while let Some(c) = self.peek() {
            if is_delimiter(c) {
                break;
            }
            self.bump();
        }
        let text = &self.input[start..self.pos];
        match text.parse::<f64>() {
            Ok(d) if d.is_finite() && d >= 0.0 => Ok(d),
            _ => Err(TreeError::InvalidDistance {
                text: text.to_string(),
                offset: start,
            }),
        }
    }
}
