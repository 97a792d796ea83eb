use engine::catalog::{CatalogFeed, CategoryFilter, Product, SortKey, ViewMode, filter_sort};

/// Longest accepted search term, in characters
pub const MAX_SEARCH_LEN: usize = 64;

/// Focusable controls of the home page, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HomeFocus {
    #[default]
    Search,
    Category,
    Sort,
    View,
    Products,
}

impl HomeFocus {
    pub const ALL: [HomeFocus; 5] = [
        HomeFocus::Search,
        HomeFocus::Category,
        HomeFocus::Sort,
        HomeFocus::View,
        HomeFocus::Products,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Home page state: the product feed plus the user's filter, sort and view
/// choices. Selection indexes into [`CatalogState::visible`].
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    feed: CatalogFeed,
    search: String,
    category: CategoryFilter,
    sort: SortKey,
    view: ViewMode,
    focus: HomeFocus,
    selected: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(ViewMode::default(), SortKey::default())
    }
}

impl CatalogState {
    pub fn new(view: ViewMode, sort: SortKey) -> Self {
        Self {
            feed: CatalogFeed::loading(),
            search: String::new(),
            category: CategoryFilter::All,
            sort,
            view,
            focus: HomeFocus::default(),
            selected: 0,
        }
    }

    pub fn feed(&self) -> &CatalogFeed {
        &self.feed
    }

    /// Show the loading state while keeping the user's filter choices.
    pub fn begin_loading(&mut self) {
        self.feed = CatalogFeed::loading();
        self.selected = 0;
    }

    /// Replace the feed. A selected category that no longer exists resets to all.
    pub fn set_feed(&mut self, feed: CatalogFeed) {
        self.feed = feed;
        if let CategoryFilter::Named(name) = &self.category {
            if !self.feed.items.iter().any(|p| &p.category == name) {
                log::debug!("Category '{name}' no longer present, resetting filter");
                self.category = CategoryFilter::All;
            }
        }
        self.clamp_selection();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn push_search(&mut self, c: char) {
        if c.is_control() || self.search.chars().count() >= MAX_SEARCH_LEN {
            return;
        }
        self.search.push(c);
        self.selected = 0;
    }

    pub fn pop_search(&mut self) {
        if self.search.pop().is_some() {
            self.selected = 0;
        }
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.selected = 0;
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.category
    }

    /// Category options offered by the selector: `all` then each category.
    pub fn category_options(&self) -> Vec<String> {
        self.feed.categories()
    }

    fn category_index(&self, options: &[String]) -> usize {
        options
            .iter()
            .position(|option| CategoryFilter::from(option.as_str()) == self.category)
            .unwrap_or(0)
    }

    pub fn next_category(&mut self) {
        let options = self.category_options();
        let index = (self.category_index(&options) + 1) % options.len();
        self.category = CategoryFilter::from(options[index].as_str());
        self.selected = 0;
    }

    pub fn previous_category(&mut self) {
        let options = self.category_options();
        let index = (self.category_index(&options) + options.len() - 1) % options.len();
        self.category = CategoryFilter::from(options[index].as_str());
        self.selected = 0;
    }

    pub fn sort(&self) -> SortKey {
        self.sort
    }

    pub fn next_sort(&mut self) {
        self.sort = cycle(&SortKey::ALL, self.sort, 1);
        self.selected = 0;
    }

    pub fn previous_sort(&mut self) {
        self.sort = cycle(&SortKey::ALL, self.sort, SortKey::ALL.len() - 1);
        self.selected = 0;
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn toggle_view(&mut self) {
        self.view = self.view.toggled();
    }

    pub fn focus(&self) -> HomeFocus {
        self.focus
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Products after filter and sort, in display order.
    pub fn visible(&self) -> Vec<Product> {
        filter_sort(&self.feed.items, &self.search, &self.category, self.sort)
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self, step: usize) {
        self.selected = self.selected.saturating_add(step);
        self.clamp_selection();
    }

    pub fn select_previous(&mut self, step: usize) {
        self.selected = self.selected.saturating_sub(step);
    }

    fn clamp_selection(&mut self) {
        let len = self.visible().len();
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

fn cycle(options: &[SortKey], current: SortKey, step: usize) -> SortKey {
    let index = options.iter().position(|o| *o == current).unwrap_or(0);
    options[(index + step) % options.len()]
}
