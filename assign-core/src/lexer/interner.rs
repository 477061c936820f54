use std::{collections::HashMap, rc::Rc};

/// Identifier table of a single lexer. Every spelling is stored once and
/// handed out as a shared `Rc<str>`.
#[derive(Debug, Default, Clone)]
pub struct Interner {
    ident_map: HashMap<Rc<str>, u32>,
    table: Vec<Rc<str>>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, ident: &str) -> Rc<str> {
        if let Some(idx) = self.ident_map.get(ident) {
            return self.table[*idx as usize].clone();
        }

        let name: Rc<str> = Rc::from(ident);
        let new_idx = self.table.len() as u32;

        self.ident_map.insert(name.clone(), new_idx);
        self.table.push(name.clone());

        name
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Interned names in order of first appearance.
    pub fn listing(&self) -> impl Iterator<Item = (u32, &str)> {
        self.table.iter()
            .enumerate()
            .map(|(idx, name)| (idx as u32, name.as_ref()))
    }
}
