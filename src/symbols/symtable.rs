use std::{
    collections::VecDeque,
    fmt::{self, Display},
    io::{self, Write},
};

use tracing::{debug, trace};

use crate::{
    ast::{ast::NodeId, types::DecafType},
    errors::errors::{Error, ErrorImpl},
    Position, MK_HANDLE,
};

MK_HANDLE!(
    /// Index of an entry in the [`SymbolTable`] store.
    ///
    /// Stays valid after the entry's scope is closed.
    SymbolId
);

const TEMP_PREFIX: &str = "_T";

/// What kind of thing a name denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubType {
    Scalar,
    ExternMethod,
    Method,
    Array,
    Package,
}

impl SubType {
    pub fn label(&self) -> &'static str {
        match self {
            SubType::Scalar => "Scalar",
            SubType::ExternMethod => "Extern Method",
            SubType::Method => "Method",
            SubType::Array => "Array",
            SubType::Package => "Package",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            SubType::Scalar => "a scalar",
            SubType::ExternMethod => "an extern method",
            SubType::Method => "a method",
            SubType::Array => "an array",
            SubType::Package => "a package",
        }
    }

    /// Methods and extern methods can be called.
    pub fn is_callable(&self) -> bool {
        matches!(self, SubType::Method | SubType::ExternMethod)
    }
}

/// One declared name at one level.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    /// Slot in the activation record
    pub offset: usize,
    /// Words of storage, at least 1
    pub size: usize,
    /// 0 is global
    pub level: usize,
    pub ty: DecafType,
    pub subtype: SubType,
    /// Head of the formal parameter chain, for methods and externs only
    pub params: Option<NodeId>,
}

impl Symbol {
    pub fn new(
        name: &str,
        ty: DecafType,
        subtype: SubType,
        level: usize,
        size: usize,
        offset: usize,
    ) -> Self {
        Symbol {
            name: String::from(name),
            offset,
            size,
            level,
            ty,
            subtype,
            params: None,
        }
    }

    pub fn with_params(mut self, params: Option<NodeId>) -> Self {
        self.params = params;
        self
    }
}

/// Level-scoped registry of declared names.
///
/// Entries are kept in a store that only grows, so handles held by tree
/// nodes remain readable. `live` lists the entries currently in scope,
/// most recent first.
///
/// A table belongs to one compilation and is not meant to be shared across
/// threads without external locking.
#[derive(Debug, Default)]
pub struct SymbolTable {
    store: Vec<Symbol>,
    live: VecDeque<SymbolId>,
    temp_counter: usize,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            store: vec![],
            live: VecDeque::new(),
            temp_counter: 0,
        }
    }

    /// Declares `symbol` unless its name is already live at the same level.
    ///
    /// Outer-level entries with the same name are shadowed, not rejected.
    pub fn insert(&mut self, symbol: Symbol, position: Position) -> Result<SymbolId, Error> {
        if self.search(&symbol.name, symbol.level, false).is_some() {
            debug!(name = %symbol.name, level = symbol.level, "duplicate declaration rejected");
            return Err(Error::new(
                ErrorImpl::DuplicateDeclaration {
                    name: symbol.name,
                    level: symbol.level,
                },
                position,
            ));
        }

        let id = SymbolId::from_raw(self.store.len() as u32);
        trace!(
            name = %symbol.name,
            level = symbol.level,
            offset = symbol.offset,
            size = symbol.size,
            subtype = symbol.subtype.label(),
            "inserting symbol"
        );
        self.store.push(symbol);
        self.live.push_front(id);
        Ok(id)
    }

    /// Finds `name` at `level`, or when `recursive` at the nearest level
    /// from `level` down to 0.
    pub fn search(&self, name: &str, level: usize, recursive: bool) -> Option<SymbolId> {
        for current in (0..=level).rev() {
            let found = self.live.iter().copied().find(|id| {
                let symbol = &self.store[id.index()];
                symbol.level == current && symbol.name == name
            });

            if found.is_some() || !recursive {
                return found;
            }
        }

        None
    }

    /// Removes every live entry at `level` or deeper and returns the sum of
    /// their sizes.
    pub fn delete(&mut self, level: usize) -> usize {
        let store = &self.store;
        let mut reclaimed = 0;
        self.live.retain(|id| {
            let symbol = &store[id.index()];
            if symbol.level >= level {
                reclaimed += symbol.size;
                false
            } else {
                true
            }
        });

        debug!(level, reclaimed, "closed scope");
        reclaimed
    }

    pub fn symbol(&self, id: SymbolId) -> &Symbol {
        &self.store[id.index()]
    }

    pub fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.store[id.index()]
    }

    /// Live entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = (SymbolId, &Symbol)> + '_ {
        self.live.iter().map(|id| (*id, &self.store[id.index()]))
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Returns a fresh temporary name: `_T0`, `_T1`, ...
    pub fn create_temp(&mut self) -> String {
        let name = format!("{}{}", TEMP_PREFIX, self.temp_counter);
        self.temp_counter += 1;
        name
    }

    /// Writes the live entries, one per line, under a header.
    pub fn display<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\tLABEL\t\tOffset\tSIZE\tLEVEL\ttype\tsubtype")?;
        for (_, symbol) in self.iter() {
            writeln!(
                f,
                "\t{}\t\t{}\t{}\t{}\t{}\t{}",
                symbol.name,
                symbol.offset,
                symbol.size,
                symbol.level,
                symbol.ty,
                symbol.subtype.label()
            )?;
        }
        Ok(())
    }
}
