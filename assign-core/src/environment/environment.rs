use std::collections::HashMap;
use std::rc::Rc;

/// Variable store of one run. Bindings keep the position of their first
/// assignment, so iteration follows insertion order.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: HashMap<Rc<str>, usize>,
    bindings: Vec<(Rc<str>, i64)>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: HashMap::new(),
            bindings: vec![],
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.store.get(name)
            .map(|idx| self.bindings[*idx].1)
    }

    pub fn set(&mut self, name: Rc<str>, value: i64) {
        match self.store.get(&name) {
            Some(idx) => self.bindings[*idx].1 = value,
            None => {
                self.store.insert(name.clone(), self.bindings.len());
                self.bindings.push((name, value));
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.bindings.iter()
            .map(|(name, value)| (name.as_ref(), *value))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Environment;

    #[test]
    fn test_insertion_order() {
        let mut env = Environment::new();

        env.set("b".into(), 1);
        env.set("a".into(), 2);
        env.set("b".into(), 3);

        assert_eq!(env.iter().collect::<Vec<_>>(), vec![("b", 3), ("a", 2)]);
        assert_eq!(env.get("b"), Some(3));
        assert_eq!(env.get("c"), None);
        assert_eq!(env.len(), 2);
    }
}
