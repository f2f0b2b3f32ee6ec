/// Prefix tree that renders a set of literal strings as one regex.
///
/// Children keep insertion order, so feeding the sequences longest-first puts
/// the longest continuation first in every alternation. Terminal nodes that
/// still have children become a greedy optional group, which makes the regex
/// engine try the longer sequence before settling on the prefix.
#[derive(Debug, Default)]
pub struct Trie {
    root: Node,
    len: usize,
}

#[derive(Debug, Default)]
struct Node {
    terminal: bool,
    children: Vec<(char, Node)>,
}

impl Node {
    fn child_mut(&mut self, ch: char) -> &mut Node {
        let index = match self.children.iter().position(|(c, _)| *c == ch) {
            Some(index) => index,
            None => {
                self.children.push((ch, Node::default()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }

    fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sequence: &str) {
        if sequence.is_empty() {
            return;
        }

        let mut node = &mut self.root;
        for ch in sequence.chars() {
            node = node.child_mut(ch);
        }
        if !node.terminal {
            node.terminal = true;
            self.len += 1;
        }
    }

    pub fn add_all<I, S>(&mut self, sequences: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for sequence in sequences {
            self.add(sequence.as_ref());
        }
    }

    /// Number of distinct sequences stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Regex source matching any stored sequence. Empty for an empty trie.
    pub fn to_pattern(&self) -> String {
        alternatives(&self.root).join("|")
    }
}

fn alternatives(node: &Node) -> Vec<String> {
    let mut branches = Vec::new();
    let mut leaves = Vec::new();

    for (ch, child) in &node.children {
        if child.is_leaf() {
            leaves.push(*ch);
        } else {
            let mut branch = literal(*ch);
            branch.push_str(&continuation(child));
            branches.push(branch);
        }
    }

    match leaves.as_slice() {
        [] => {}
        [single] => branches.push(literal(*single)),
        many => {
            let class: String = many.iter().map(|ch| literal(*ch)).collect();
            branches.push(format!("[{class}]"));
        }
    }

    branches
}

fn continuation(node: &Node) -> String {
    let alts = alternatives(node);
    let body = alts.join("|");

    if node.terminal {
        if alts.len() == 1 && single_atom(&body) {
            format!("{body}?")
        } else {
            format!("(?:{body})?")
        }
    } else if alts.len() > 1 {
        format!("(?:{body})")
    } else {
        body
    }
}

/// True when `?` can be applied to `pattern` without grouping.
fn single_atom(pattern: &str) -> bool {
    if pattern.starts_with('[') && pattern.ends_with(']') && !pattern[1..].contains('[') {
        return true;
    }
    let mut chars = pattern.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some('\\'), Some(_), None) => true,
        (Some(c), None, None) => c != '\\',
        _ => false,
    }
}

fn literal(ch: char) -> String {
    let mut buf = [0u8; 4];
    regex::escape(ch.encode_utf8(&mut buf))
}
