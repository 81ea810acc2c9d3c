//! Step-by-step trie navigation, for inspecting a built artifact

use crate::model::Token;
use crate::trie::{LetterTrie, TrieNode};
use crate::Result;
use std::io::{BufRead, Write};

/// Walks a trie one letter at a time
pub struct Explorer<'a> {
    trie: &'a LetterTrie,
    /// Nodes entered so far, with the letter used to reach each
    stack: Vec<(char, &'a TrieNode)>,
}

impl<'a> Explorer<'a> {
    pub fn new(trie: &'a LetterTrie) -> Self {
        Explorer {
            trie,
            stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &'a TrieNode {
        self.stack
            .last()
            .map(|(_, node)| *node)
            .unwrap_or_else(|| self.trie.root())
    }

    /// Letters from the root to the current node
    pub fn path(&self) -> String {
        self.stack.iter().map(|(letter, _)| *letter).collect()
    }

    /// Move to the child keyed by `letter`; false if there is none
    pub fn descend(&mut self, letter: char) -> bool {
        match self.current().child(letter) {
            Some(child) => {
                self.stack.push((letter, child));
                true
            }
            None => false,
        }
    }

    /// Move to the parent; false at the root
    pub fn ascend(&mut self) -> bool {
        self.stack.pop().is_some()
    }

    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Words and outgoing letters of the current node
    pub fn describe(&self) -> String {
        let node = self.current();
        let path = self.path();
        let location = if path.is_empty() { "(root)" } else { &path };

        let words = if node.is_terminal() {
            node.words().join(", ")
        } else {
            "(none)".to_string()
        };
        let children: Vec<String> = node.child_letters().iter().map(char::to_string).collect();

        format!(
            "path: {}\nwords: {}\nchildren: {}",
            location,
            words,
            children.join(" ")
        )
    }

    /// Interactive loop: a letter descends, `..` goes up, `/` returns to
    /// the root, `quit` leaves
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let mut line = String::new();
        loop {
            writeln!(output, "{}", self.describe())?;
            write!(output, "> ")?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                break;
            }

            match line.trim() {
                "quit" | "exit" => break,
                "" => {}
                ".." => {
                    if !self.ascend() {
                        writeln!(output, "already at the root")?;
                    }
                }
                "/" => self.reset(),
                other => match Token::parse(other).map(|t| t.letter()) {
                    Ok(Some(letter)) => {
                        if !self.descend(letter) {
                            writeln!(output, "no child '{}' here", letter)?;
                        }
                    }
                    _ => writeln!(output, "enter one letter, `..`, `/` or `quit`")?,
                },
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::build;
    use std::io::Cursor;

    #[test]
    fn test_navigation() {
        let (trie, _) = build(["dog", "god", "do"]);
        let mut explorer = Explorer::new(&trie);

        assert!(explorer.descend('d'));
        assert!(explorer.descend('o'));
        assert_eq!(explorer.current().words(), ["do"]);
        assert!(!explorer.descend('x'));

        assert!(explorer.ascend());
        assert!(explorer.descend('g'));
        assert!(explorer.descend('o'));
        assert_eq!(explorer.path(), "dgo");
        assert_eq!(explorer.current().words().len(), 2);

        explorer.reset();
        assert_eq!(explorer.current(), trie.root());
        assert!(!explorer.ascend());
    }

    #[test]
    fn test_describe() {
        let (trie, _) = build(["at", "a"]);
        let mut explorer = Explorer::new(&trie);

        assert!(explorer.describe().contains("path: (root)"));
        explorer.descend('a');
        let text = explorer.describe();
        assert!(text.contains("words: a"));
        assert!(text.contains("children: t"));
    }

    #[test]
    fn test_run_script() {
        let (trie, _) = build(["dog", "god"]);
        let mut explorer = Explorer::new(&trie);
        let mut out = Vec::new();

        explorer
            .run(Cursor::new("d\nq\nG\no\n..\n..\n..\n..\n??\nquit\n"), &mut out)
            .unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("no child 'q' here"));
        assert!(out.contains("words: dog, god"));
        assert!(out.contains("already at the root"));
        assert!(out.contains("enter one letter"));
    }
}
