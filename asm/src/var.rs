use color_print::cprintln;
use indexmap::IndexMap;

/// Base address of user memory; `init` slots are handed out from here.
pub const USER_MEMORY: u16 = 384;

/// Variables declared with `init`, in allocation order.
///
/// Re-initializing a name burns a fresh slot and the new binding shadows the
/// old one, so the slot count includes shadowed bindings.
#[derive(Debug, Default)]
pub struct Vars {
    table: IndexMap<String, u16>,
    count: u16,
}

impl Vars {
    pub fn new() -> Self {
        Vars {
            table: IndexMap::new(),
            count: 0,
        }
    }

    /// Hand out the next free slot for `name`.
    pub fn alloc(&mut self, name: &str) -> u16 {
        let addr = USER_MEMORY + self.count;
        self.count += 1;
        if self.table.insert(name.to_string(), addr).is_some() {
            cprintln!(
                "<yellow,bold>warn</>: re-initialized variable `{}`, the new slot shadows the old one",
                name
            );
        }
        addr
    }

    pub fn get(&self, name: &str) -> Option<u16> {
        self.table.get(name).copied()
    }

    /// Total slots handed out, shadowed bindings included.
    pub fn count(&self) -> u16 {
        self.count
    }
}
