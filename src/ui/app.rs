use std::collections::HashMap;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::dispatch::{Action, ActionQueue};
use crate::router::{RouteMode, Router};
use crate::source::{SourceCommand, SourceHandle};
use crate::store::{CollectionsState, ElementId, Record, StoreIntent, StoreReducer};
use crate::ui::collection::{sorted_rows, CollectionView, CollectionViewProps, TableUiState};
use crate::ui::mvi::Reducer;
use crate::ui::upsert::{assemble_record, form_fields, FormIntent, FormReducer, FormState};

/// Which region receives plain keystrokes on the list route.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    Table,
    Search,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// The parent state container: owns the store, the router and the overlay
/// buffers, hands the view an [`ActionQueue`] and applies what it records.
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Active collection, fixed at startup.
    collection: String,
    table_properties: Vec<String>,
    store: CollectionsState,
    /// Filter text per collection, set through the view's callback.
    filters: HashMap<String, String>,
    router: Router,
    /// Field buffers for the upsert overlay (MVI pattern). Visibility is
    /// decided by the route mode at render time, never by this state.
    form: FormState,
    table_ui: TableUiState,
    source: Option<SourceHandle>,
    last_source_error: Option<String>,
    tick: u64,
}

impl App {
    pub fn new(
        collection: String,
        table_properties: Vec<String>,
        source: Option<SourceHandle>,
    ) -> Self {
        Self {
            should_quit: false,
            focus: Focus::Table,
            collection,
            table_properties,
            store: CollectionsState::default(),
            filters: HashMap::new(),
            router: Router::new(),
            form: FormState::default(),
            table_ui: TableUiState::default(),
            source,
            last_source_error: None,
            tick: 0,
        }
    }

    /// Mount-time effect: fetch the configured collection once. Nothing
    /// calls this again, so a collection change after mount would not
    /// refetch — the collection is fixed at startup precisely so that
    /// cannot happen.
    pub fn mount(&mut self) {
        let mut queue = ActionQueue::new();
        self.view().on_mount(&mut queue);
        self.apply_queue(queue);
    }

    /// The component, constructed per use from borrowed props.
    pub fn view(&self) -> CollectionView<'_> {
        let props = CollectionViewProps::new(&self.store, &self.router)
            .with_collection_name(&self.collection)
            .with_filter(self.filter())
            .with_table_properties(&self.table_properties);
        CollectionView::new(props)
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn store(&self) -> &CollectionsState {
        &self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn mode(&self) -> RouteMode {
        self.router.mode()
    }

    pub fn filter(&self) -> &str {
        self.filters
            .get(&self.collection)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn table_ui(&self) -> &TableUiState {
        &self.table_ui
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn is_search_focused(&self) -> bool {
        self.focus == Focus::Search && self.mode() == RouteMode::List
    }

    pub fn last_source_error(&self) -> Option<&str> {
        self.last_source_error.as_deref()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn on_source_loaded(
        &mut self,
        collection: String,
        elements: HashMap<ElementId, Record>,
    ) {
        dispatch_mvi!(
            self,
            store,
            StoreReducer,
            StoreIntent::FetchLoaded {
                collection,
                elements,
            }
        );
        let row_count = self.view().elements().len();
        self.table_ui.clamp(row_count);
    }

    pub fn on_source_failed(&mut self, collection: String, error: String) {
        dispatch_mvi!(
            self,
            store,
            StoreReducer,
            StoreIntent::FetchFailed { collection }
        );
        self.last_source_error = Some(error);
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('q') | KeyCode::Char('c'))
        {
            self.request_quit();
            return;
        }
        match self.mode() {
            RouteMode::List => self.on_list_key(key),
            RouteMode::Insert | RouteMode::Update => self.on_form_key(key),
            RouteMode::Remove => self.on_remove_key(key),
        }
    }

    fn on_list_key(&mut self, key: KeyEvent) {
        match self.focus {
            Focus::Search => match key.code {
                KeyCode::Esc | KeyCode::Enter => self.focus = Focus::Table,
                KeyCode::Backspace => {
                    let mut filter = self.filter().to_string();
                    filter.pop();
                    self.set_filter_text(filter);
                }
                KeyCode::Char(ch) => {
                    let mut filter = self.filter().to_string();
                    filter.push(ch);
                    self.set_filter_text(filter);
                }
                _ => {}
            },
            Focus::Table => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.request_quit(),
                KeyCode::Char('/') => self.focus = Focus::Search,
                KeyCode::Up | KeyCode::Char('k') => self.table_ui.move_up(),
                KeyCode::Down | KeyCode::Char('j') => {
                    let row_count = self.view().elements().len();
                    self.table_ui.move_down(row_count);
                }
                KeyCode::Char('a') => {
                    let mut queue = ActionQueue::new();
                    self.view().open_insert(&mut queue);
                    self.apply_queue(queue);
                }
                KeyCode::Char('e') | KeyCode::Enter => {
                    if let Some(id) = self.selected_element_id() {
                        let mut queue = ActionQueue::new();
                        self.view().edit_element(&mut queue, &id);
                        self.apply_queue(queue);
                    }
                }
                KeyCode::Char('d') | KeyCode::Delete => {
                    if let Some(id) = self.selected_element_id() {
                        let mut queue = ActionQueue::new();
                        self.view().remove_element(&mut queue, &id);
                        self.apply_queue(queue);
                    }
                }
                KeyCode::Char('s') => {
                    let column_count = self.view().columns().len();
                    self.table_ui.cycle_sort(column_count);
                }
                KeyCode::Char('S') => self.table_ui.toggle_direction(),
                _ => {}
            },
        }
    }

    fn on_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.close_overlay(),
            KeyCode::Enter => self.submit_form(),
            KeyCode::Tab | KeyCode::Down => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::FocusNext);
            }
            KeyCode::BackTab | KeyCode::Up => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::FocusPrev);
            }
            KeyCode::Backspace => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::Backspace);
            }
            KeyCode::Char(ch) => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::Input(ch));
            }
            _ => {}
        }
    }

    fn on_remove_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => self.confirm_remove(),
            KeyCode::Esc | KeyCode::Char('n') => self.close_overlay(),
            _ => {}
        }
    }

    fn set_filter_text(&mut self, filter: String) {
        let mut queue = ActionQueue::new();
        self.view().handle_filter_change(&mut queue, &filter);
        self.apply_queue(queue);
    }

    /// Id of the row under the cursor, in the current sort order.
    fn selected_element_id(&self) -> Option<ElementId> {
        let view = self.view();
        let columns = view.columns();
        let rows = sorted_rows(view.elements(), &columns, self.table_ui.sort.as_ref());
        rows.get(self.table_ui.selected)
            .and_then(|record| record.id())
            .map(str::to_string)
    }

    fn submit_form(&mut self) {
        let Some(fields) = self.form.fields() else {
            return;
        };
        let record = assemble_record(fields);
        let mut queue = ActionQueue::new();
        {
            let view = self.view();
            view.handle_upsert(&mut queue, record);
            view.close(&mut queue);
        }
        self.apply_queue(queue);
    }

    fn confirm_remove(&mut self) {
        let mut queue = ActionQueue::new();
        {
            let view = self.view();
            view.handle_remove(&mut queue);
            view.close(&mut queue);
        }
        self.apply_queue(queue);
    }

    fn close_overlay(&mut self) {
        let mut queue = ActionQueue::new();
        self.view().close(&mut queue);
        self.apply_queue(queue);
    }

    fn apply_queue(&mut self, mut queue: ActionQueue) {
        for action in queue.drain() {
            self.apply_action(action);
        }
    }

    fn apply_action(&mut self, action: Action) {
        match action {
            Action::Fetch { collection } => {
                dispatch_mvi!(
                    self,
                    store,
                    StoreReducer,
                    StoreIntent::FetchStarted {
                        collection: collection.clone(),
                    }
                );
                if let Some(source) = &self.source {
                    source.send(SourceCommand::Load { collection });
                }
            }
            Action::Upsert {
                collection,
                id,
                record,
            } => {
                dispatch_mvi!(
                    self,
                    store,
                    StoreReducer,
                    StoreIntent::Upserted {
                        collection: collection.clone(),
                        id,
                        record,
                    }
                );
                self.persist(&collection);
            }
            Action::Remove { collection, id } => {
                dispatch_mvi!(
                    self,
                    store,
                    StoreReducer,
                    StoreIntent::Removed {
                        collection: collection.clone(),
                        id,
                    }
                );
                self.persist(&collection);
            }
            Action::SetFilter { collection, filter } => {
                self.filters.insert(collection, filter);
                self.table_ui.selected = 0;
            }
            Action::Navigate {
                collection: _,
                mode,
                id,
            } => {
                self.router.navigate(mode, id);
                self.sync_form();
            }
        }
    }

    /// Persist the current slice snapshot. Fire-and-forget; failures come
    /// back as source events.
    fn persist(&self, collection: &str) {
        let (Some(source), Some(slice)) = (self.source.as_ref(), self.store.slice(collection))
        else {
            return;
        };
        source.send(SourceCommand::Save {
            collection: collection.to_string(),
            elements: slice.elements.clone(),
        });
    }

    /// Load or drop the form buffers to match the route we just entered.
    fn sync_form(&mut self) {
        match self.router.mode() {
            RouteMode::Insert => {
                let fields = form_fields(&self.table_properties, None);
                dispatch_mvi!(
                    self,
                    form,
                    FormReducer,
                    FormIntent::Load {
                        fields,
                        inserting: true,
                    }
                );
            }
            RouteMode::Update => {
                let initial = self
                    .router
                    .params
                    .id
                    .as_ref()
                    .and_then(|id| self.store.element(&self.collection, id))
                    .cloned();
                let fields = form_fields(&self.table_properties, initial.as_ref());
                dispatch_mvi!(
                    self,
                    form,
                    FormReducer,
                    FormIntent::Load {
                        fields,
                        inserting: false,
                    }
                );
            }
            RouteMode::List | RouteMode::Remove => {
                dispatch_mvi!(self, form, FormReducer, FormIntent::Close);
            }
        }
    }
}
