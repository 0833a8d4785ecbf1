use std::fmt;

/// Label identifying a node.
///
/// Labels are upper-cased on construction, so `a` and `A`
/// name the same node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(String);

impl NodeId {
    pub fn new<S: AsRef<str>>(name: S) -> Self {
        NodeId(name.as_ref().to_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        NodeId::new(name)
    }
}

impl From<String> for NodeId {
    fn from(name: String) -> Self {
        NodeId::new(name)
    }
}

impl From<&NodeId> for NodeId {
    fn from(node: &NodeId) -> Self {
        node.clone()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn labels_are_normalized() {
        assert_eq!(NodeId::new("a"), NodeId::from("A"));
        assert_eq!(NodeId::from(String::from("ab")).as_str(), "AB");
        assert_eq!(format!("{}", NodeId::new("x1")), "X1");
    }
}
