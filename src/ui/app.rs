use std::sync::mpsc::Sender;
use tokio::runtime::Handle;

use crate::config::Config;
use crate::github::UsersClient;
use crate::ui::counter::{CounterIntent, CounterReducer, CounterState, EffectTracker};
use crate::ui::events::AppEvent;
use crate::ui::fetch::{FetchIntent, FetchReducer, FetchState, FetchTask};
use crate::ui::form::{FormField, FormIntent, FormReducer, FormState};
use crate::ui::greeting::Role;
use crate::ui::mvi::Reducer;
use crate::ui::people::{PeopleIntent, PeopleReducer, PeopleState};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Demo {
    People,
    Fetch,
    Form,
    Counter,
    Greeting,
}

impl Demo {
    pub const ALL: [Demo; 5] = [
        Demo::People,
        Demo::Fetch,
        Demo::Form,
        Demo::Counter,
        Demo::Greeting,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|demo| demo.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Name used in config and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Demo::People => "people",
            Demo::Fetch => "fetch",
            Demo::Form => "form",
            Demo::Counter => "counter",
            Demo::Greeting => "greeting",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Demo::People => "People",
            Demo::Fetch => "Fetch",
            Demo::Form => "Form",
            Demo::Counter => "Counter",
            Demo::Greeting => "Greeting",
        }
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|demo| demo == self).unwrap_or(0)
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }
}

/// Runtime and client used to spawn users fetches.
#[derive(Clone)]
pub struct Fetcher {
    runtime: Handle,
    client: UsersClient,
}

impl Fetcher {
    pub fn new(runtime: Handle, client: UsersClient) -> Self {
        Self { runtime, client }
    }
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    demo: Demo,
    mounted: bool,
    events: Sender<AppEvent>,
    people: PeopleState,
    people_selection: usize,
    fetch: FetchState,
    fetch_task: Option<FetchTask>,
    fetch_generation: u64,
    fetcher: Option<Fetcher>,
    form: FormState,
    alert: Option<String>,
    counter: CounterState,
    counter_effects: EffectTracker,
    role: Role,
    initial_role: Role,
}

impl App {
    pub fn new(config: &Config, events: Sender<AppEvent>) -> Self {
        let demo = Demo::from_name(&config.ui.initial_demo).unwrap_or(Demo::People);
        let role = Role::parse(&config.greeting.role);
        Self {
            should_quit: false,
            demo,
            mounted: false,
            events,
            people: PeopleState::default(),
            people_selection: 0,
            fetch: FetchState::default(),
            fetch_task: None,
            fetch_generation: 0,
            fetcher: None,
            form: FormState::default(),
            alert: None,
            counter: CounterState::default(),
            counter_effects: EffectTracker::new(),
            role,
            initial_role: role,
        }
    }

    /// Attach the runtime used for fetches. Must happen before `start`
    /// for the fetch demo to load anything.
    pub fn attach_fetcher(&mut self, fetcher: Fetcher) {
        self.fetcher = Some(fetcher);
    }

    /// Mount the initial demo. Calling it again is a no-op.
    pub fn start(&mut self) {
        if !self.mounted {
            self.mounted = true;
            self.mount(self.demo);
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request exit. Unmounts the active demo so in-flight work is cancelled.
    pub fn request_quit(&mut self) {
        if self.mounted {
            self.unmount(self.demo);
            self.mounted = false;
        }
        self.should_quit = true;
    }

    pub fn demo(&self) -> Demo {
        self.demo
    }

    pub fn on_tick(&mut self) {
        if self.fetch_task.as_ref().is_some_and(FetchTask::is_finished) {
            self.fetch_task = None;
        }
    }

    pub fn switch_demo(&mut self, demo: Demo) {
        if demo == self.demo {
            return;
        }
        if self.mounted {
            self.unmount(self.demo);
        }
        tracing::debug!(from = self.demo.name(), to = demo.name(), "Switching demo");
        self.demo = demo;
        self.mounted = true;
        self.mount(demo);
    }

    pub fn next_demo(&mut self) {
        self.switch_demo(self.demo.next());
    }

    pub fn prev_demo(&mut self) {
        self.switch_demo(self.demo.prev());
    }

    fn mount(&mut self, demo: Demo) {
        tracing::debug!(demo = demo.name(), "Mount");
        match demo {
            Demo::People => {
                self.people = PeopleState::default();
                self.people_selection = 0;
            }
            Demo::Fetch => {
                self.fetch = FetchState::default();
                self.start_fetch();
            }
            Demo::Form => {
                self.form = FormState::default();
                self.alert = None;
            }
            Demo::Counter => {
                self.counter = CounterState::default();
                self.counter_effects = EffectTracker::new();
                self.run_counter_effects();
            }
            Demo::Greeting => {
                self.role = self.initial_role;
            }
        }
    }

    fn unmount(&mut self, demo: Demo) {
        tracing::debug!(demo = demo.name(), "Unmount");
        match demo {
            Demo::Fetch => {
                // Dropping the task aborts it
                self.fetch_task = None;
                self.fetch = FetchState::default();
            }
            Demo::Form => {
                self.alert = None;
            }
            Demo::People | Demo::Counter | Demo::Greeting => {}
        }
    }

    // -- People ---------------------------------------------------------------

    pub fn people(&self) -> &PeopleState {
        &self.people
    }

    pub fn people_selection(&self) -> usize {
        self.people_selection
    }

    pub fn dispatch_people(&mut self, intent: PeopleIntent) {
        if let PeopleIntent::RemoveItem { id } = intent {
            if !self.people.contains(id) {
                tracing::debug!(id, "REMOVE_ITEM matched no person");
            }
        }
        tracing::debug!(action = %intent, "People dispatch");
        dispatch_mvi!(self, people, PeopleReducer, intent);
        self.clamp_people_selection();
    }

    pub fn move_people_selection(&mut self, delta: isize) {
        let len = self.people.people.len();
        if len == 0 {
            self.people_selection = 0;
            return;
        }
        let current = self.people_selection.min(len - 1) as isize;
        self.people_selection = (current + delta).rem_euclid(len as isize) as usize;
    }

    /// "Remove User" on the selected row.
    pub fn remove_selected_person(&mut self) {
        let selected = self
            .people
            .people
            .get(self.people_selection)
            .map(|person| person.id);
        if let Some(id) = selected {
            self.dispatch_people(PeopleIntent::RemoveItem { id });
        }
    }

    fn clamp_people_selection(&mut self) {
        let len = self.people.people.len();
        self.people_selection = self.people_selection.min(len.saturating_sub(1));
    }

    // -- Fetch ----------------------------------------------------------------

    pub fn fetch(&self) -> &FetchState {
        &self.fetch
    }

    pub fn fetch_in_flight(&self) -> bool {
        self.fetch_task
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Remount the fetch demo: cancel any running fetch and start a new one.
    pub fn refetch(&mut self) {
        if self.demo == Demo::Fetch {
            self.unmount(Demo::Fetch);
            self.mount(Demo::Fetch);
        }
    }

    fn start_fetch(&mut self) {
        self.fetch_generation += 1;
        let generation = self.fetch_generation;
        dispatch_mvi!(self, fetch, FetchReducer, FetchIntent::Started { generation });

        match &self.fetcher {
            Some(fetcher) => {
                tracing::info!(generation, url = fetcher.client.url(), "Starting users fetch");
                self.fetch_task = Some(FetchTask::spawn(
                    &fetcher.runtime,
                    fetcher.client.clone(),
                    generation,
                    self.events.clone(),
                ));
            }
            None => {
                tracing::warn!(generation, "No fetcher attached; users fetch skipped");
                dispatch_mvi!(self, fetch, FetchReducer, FetchIntent::Failed { generation });
            }
        }
    }

    /// Apply a fetch completion delivered through the event channel.
    pub fn on_fetch_event(&mut self, intent: FetchIntent) {
        if self.demo != Demo::Fetch || !self.mounted {
            tracing::trace!(generation = intent.generation(), "Fetch result for unmounted demo dropped");
            return;
        }
        if self
            .fetch_task
            .as_ref()
            .is_some_and(|task| task.generation() == intent.generation())
        {
            self.fetch_task = None;
        }
        dispatch_mvi!(self, fetch, FetchReducer, intent);
    }

    // -- Form -----------------------------------------------------------------

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn dispatch_form(&mut self, intent: FormIntent) {
        let submitting = matches!(intent, FormIntent::Submit);
        dispatch_mvi!(self, form, FormReducer, intent);
        if submitting {
            if let Some(value) = &self.form.last_submitted {
                tracing::info!(title = %value.title, address = %value.address, "Form submitted");
            }
            tracing::info!("Hello Submit");
        }
    }

    /// Enter on the focused control: Hello opens the alert, anything else submits.
    pub fn activate_form_focus(&mut self) {
        match self.form.focus {
            FormField::Hello => self.alert = Some("Hello".to_string()),
            FormField::Title | FormField::Address | FormField::Submit => {
                self.dispatch_form(FormIntent::Submit)
            }
        }
    }

    // -- Counter --------------------------------------------------------------

    pub fn counter(&self) -> &CounterState {
        &self.counter
    }

    pub fn dispatch_counter(&mut self, intent: CounterIntent) {
        dispatch_mvi!(self, counter, CounterReducer, intent);
        self.run_counter_effects();
    }

    fn run_counter_effects(&mut self) {
        for effect in self.counter_effects.commit(&self.counter) {
            tracing::info!(value = self.counter.value, "{}", effect.message());
        }
    }

    // -- Greeting -------------------------------------------------------------

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn cycle_role(&mut self) {
        self.role = self.role.cycle();
    }
}
