use dioxus::prelude::*;

/// Text typed into the top bar search box. List pages narrow their rows
/// with it; navigating clears it.
#[derive(Clone, Copy, PartialEq)]
pub struct SearchQuery(pub Signal<String>);

impl SearchQuery {
    pub fn new() -> Self {
        Self(Signal::new(String::new()))
    }

    pub fn get(&self) -> String {
        self.0.read().clone()
    }

    pub fn set(&mut self, value: String) {
        self.0.set(value);
    }

    pub fn clear(&mut self) {
        if !self.0.peek().is_empty() {
            self.0.set(String::new());
        }
    }
}

pub fn use_search_query() -> SearchQuery {
    use_context::<SearchQuery>()
}
