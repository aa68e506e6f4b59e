//! Text notation parsing and printing for [`GameTree`].

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::error::TreeError;
use crate::position::Score;
use crate::tree::{GameTree, Node, NodeId, TreeMove};

impl FromStr for GameTree {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<GameTree, TreeError> {
        let mut parser = Parser {
            input: s.as_bytes(),
            source: s,
            offset: 0,
            nodes: Vec::new(),
        };

        parser.skip_whitespace();
        if parser.peek().is_none() {
            return Err(TreeError::Empty);
        }

        parser.node()?;

        parser.skip_whitespace();
        if parser.peek().is_some() {
            return Err(TreeError::TrailingInput {
                offset: parser.offset,
            });
        }

        let tree = GameTree {
            nodes: parser.nodes,
        };
        debug!(nodes = tree.node_count(), "parsed game tree");
        Ok(tree)
    }
}

/// Recursive-descent parser; node ids are assigned in pre-order.
struct Parser<'a> {
    input: &'a [u8],
    source: &'a str,
    offset: usize,
    nodes: Vec<Node>,
}

impl Parser<'_> {
    fn peek(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    fn bump(&mut self) {
        self.offset += 1;
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(|b| b.is_ascii_whitespace()) {
            self.bump();
        }
    }

    fn unexpected(&self, expected: &'static str) -> TreeError {
        match self.source[self.offset..].chars().next() {
            Some(found) => TreeError::UnexpectedChar {
                found,
                offset: self.offset,
            },
            None => TreeError::UnexpectedEnd { expected },
        }
    }

    fn node(&mut self) -> Result<NodeId, TreeError> {
        let score = self.score()?;

        let in_check = self.peek() == Some(b'+');
        if in_check {
            self.bump();
        }

        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Node::new(score, in_check));

        if self.peek() == Some(b'(') {
            let open = self.offset;
            self.bump();
            loop {
                self.skip_whitespace();
                match self.peek() {
                    Some(b')') => {
                        self.bump();
                        break;
                    }
                    None => return Err(TreeError::UnexpectedEnd { expected: "')'" }),
                    Some(_) => {
                        let capture = self.peek() == Some(b'x');
                        if capture {
                            self.bump();
                        }
                        let child = self.node()?;
                        self.nodes[id.index()].edges.push(TreeMove::new(child, capture));
                        // Children must be separated by whitespace or closed.
                        if !matches!(self.peek(), Some(b')') | None)
                            && !self.peek().is_some_and(|b| b.is_ascii_whitespace())
                        {
                            return Err(self.unexpected("')'"));
                        }
                    }
                }
            }
            if self.nodes[id.index()].edges.is_empty() {
                return Err(TreeError::EmptyChildren { offset: open });
            }
        }

        Ok(id)
    }

    fn score(&mut self) -> Result<Score, TreeError> {
        let start = self.offset;
        if self.peek() == Some(b'-') {
            self.bump();
        }
        let digits_start = self.offset;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.bump();
        }
        if self.offset == digits_start {
            return Err(self.unexpected("a score"));
        }

        let literal = &self.source[start..self.offset];
        literal.parse::<Score>().map_err(|_| TreeError::InvalidScore {
            found: literal.to_string(),
            offset: start,
        })
    }
}

impl fmt::Display for GameTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_node(self, NodeId::ROOT, f)
    }
}

fn write_node(tree: &GameTree, id: NodeId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", tree.score(id))?;
    if tree.is_in_check(id) {
        f.write_str("+")?;
    }

    let edges = tree.edges(id);
    if edges.is_empty() {
        return Ok(());
    }

    f.write_str("(")?;
    for (i, edge) in edges.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        if edge.capture {
            f.write_str("x")?;
        }
        write_node(tree, edge.target, f)?;
    }
    f.write_str(")")
}
