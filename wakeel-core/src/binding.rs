//! Binding of a remote-sourced dataset to a rendered list surface.
//!
//! A binding starts pending, holding its seed as a fallback dataset and an
//! empty surface. The host performs one retrieval and feeds the
//! [`LoadOutcome`] to [`ListBinding::resolve`]; from then on the surface
//! shows the active dataset, narrowed by the filter query when the page
//! carries a filter field.

use crate::listing::{filter_items, FilterQuery, ListDataset, ListRecord, Provenance};

/// Result of a single retrieval attempt. Both variants render the same way.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Remote(Vec<T>),
    Fallback(Vec<T>),
}

impl<T> LoadOutcome<T> {
    /// Successful retrievals become `Remote`; any error substitutes `seed`.
    pub fn from_result<E>(result: Result<Vec<T>, E>, seed: Vec<T>) -> Self {
        match result {
            Ok(items) => LoadOutcome::Remote(items),
            Err(_) => LoadOutcome::Fallback(seed),
        }
    }

    pub fn provenance(&self) -> Provenance {
        match self {
            LoadOutcome::Remote(_) => Provenance::Remote,
            LoadOutcome::Fallback(_) => Provenance::Fallback,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            LoadOutcome::Remote(items) | LoadOutcome::Fallback(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_dataset(self) -> ListDataset<T> {
        match self {
            LoadOutcome::Remote(items) => ListDataset::remote(items),
            LoadOutcome::Fallback(items) => ListDataset::fallback(items),
        }
    }
}

/// The rendered contents of a list host, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct ListSurface<R> {
    items: Vec<R>,
}

impl<R> Default for ListSurface<R> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<R> ListSurface<R> {
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn append(&mut self, item: R) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[R] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Projects one record into its rendered form.
pub type RenderTemplate<T, R> = fn(&T) -> R;

pub struct ListBinding<T, R> {
    dataset: ListDataset<T>,
    resolved: bool,
    template: RenderTemplate<T, R>,
    surface: ListSurface<R>,
    filterable: bool,
    query: FilterQuery,
}

impl<T: ListRecord, R> ListBinding<T, R> {
    /// Attach to a host surface. `filterable` is true when the page carries a
    /// filter field for this list.
    pub fn attach(seed: Vec<T>, template: RenderTemplate<T, R>, filterable: bool) -> Self {
        Self {
            dataset: ListDataset::fallback(seed),
            resolved: false,
            template,
            surface: ListSurface::default(),
            filterable,
            query: FilterQuery::default(),
        }
    }

    /// Install the retrieval outcome and render it in full.
    pub fn resolve(&mut self, outcome: LoadOutcome<T>) {
        self.dataset = outcome.into_dataset();
        self.resolved = true;
        self.query = FilterQuery::default();
        self.render_all();
    }

    /// Re-render the active dataset narrowed to items matching `raw`.
    /// Ignored when the page has no filter field.
    pub fn apply_filter(&mut self, raw: &str) {
        if !self.filterable {
            return;
        }
        self.query = FilterQuery::new(raw);
        let template = self.template;
        let matching = filter_items(self.dataset.items(), &self.query);
        self.surface.clear();
        for item in matching {
            self.surface.append(template(item));
        }
    }

    fn render_all(&mut self) {
        let template = self.template;
        self.surface.clear();
        for item in self.dataset.items() {
            self.surface.append(template(item));
        }
    }

    pub fn dataset(&self) -> &ListDataset<T> {
        &self.dataset
    }

    pub fn provenance(&self) -> Provenance {
        self.dataset.provenance()
    }

    pub fn is_resolved(&self) -> bool {
        self.resolved
    }

    pub fn is_filterable(&self) -> bool {
        self.filterable
    }

    pub fn query(&self) -> &FilterQuery {
        &self.query
    }

    pub fn surface(&self) -> &ListSurface<R> {
        &self.surface
    }
}
