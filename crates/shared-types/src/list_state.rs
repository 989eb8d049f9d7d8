/// Loading lifecycle of a list page.
///
/// A page holds one of these in a signal: the fetch sets `Loaded` or
/// `Failed`, and successful mutations are mirrored with `remove_where`,
/// `patch_where` and `prepend` so the table reflects the change without a
/// refetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ListState<T> {
    #[default]
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> ListState<T> {
    pub fn from_result<E: ToString>(result: Result<Vec<T>, E>) -> Self {
        match result {
            Ok(items) => ListState::Loaded(items),
            Err(e) => ListState::Failed(e.to_string()),
        }
    }

    /// Rows to display. Empty while loading or after a failure.
    pub fn items(&self) -> &[T] {
        match self {
            ListState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ListState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ListState::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Remove every row matching `pred`, returning how many were removed.
    pub fn remove_where(&mut self, pred: impl Fn(&T) -> bool) -> usize {
        match self {
            ListState::Loaded(items) => {
                let before = items.len();
                items.retain(|item| !pred(item));
                before - items.len()
            }
            _ => 0,
        }
    }

    /// Apply `patch` to every row matching `pred`. Returns true if any matched.
    pub fn patch_where(&mut self, pred: impl Fn(&T) -> bool, mut patch: impl FnMut(&mut T)) -> bool {
        let mut touched = false;
        if let ListState::Loaded(items) = self {
            for item in items.iter_mut().filter(|item| pred(item)) {
                patch(item);
                touched = true;
            }
        }
        touched
    }

    /// Insert a freshly created row at the top. Starts a list if none is loaded.
    pub fn prepend(&mut self, item: T) {
        match self {
            ListState::Loaded(items) => items.insert(0, item),
            _ => *self = ListState::Loaded(vec![item]),
        }
    }
}

/// Rows that can be matched by the top bar search box.
pub trait Searchable {
    /// Text the search query is matched against.
    fn search_text(&self) -> String;

    fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        query.is_empty() || self.search_text().to_lowercase().contains(&query)
    }
}

impl<T: Searchable + Clone> ListState<T> {
    /// Displayed rows narrowed by a case-insensitive search query.
    pub fn filtered(&self, query: &str) -> Vec<T> {
        self.items()
            .iter()
            .filter(|item| item.matches_query(query))
            .cloned()
            .collect()
    }
}
